use std::fs;
use std::path::{Path, PathBuf};

use dupsweep::folder_scanner::{
    find_duplicates, find_duplicates_with, hash_file, DEFAULT_BLOCK_SIZE, MAX_BLOCK_SIZE,
};
use dupsweep::Error;
use tempfile::tempdir;

fn write(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn identical_content_gives_identical_fingerprints() {
    let dir = tempdir().unwrap();
    let a = write(dir.path(), "a.bin", b"same bytes");
    let b = write(dir.path(), "nested/b.bin", b"same bytes");
    let c = write(dir.path(), "c.bin", b"other bytes");

    let fa = hash_file(&a, DEFAULT_BLOCK_SIZE).unwrap();
    assert_eq!(fa.len(), 64);
    assert_eq!(fa, hash_file(&b, DEFAULT_BLOCK_SIZE).unwrap());
    assert_ne!(fa, hash_file(&c, DEFAULT_BLOCK_SIZE).unwrap());
    assert_eq!(fa, hash_file(&a, DEFAULT_BLOCK_SIZE).unwrap());
}

#[test]
fn groups_a_b_and_excludes_unique_and_empty() {
    let dir = tempdir().unwrap();
    let a = write(dir.path(), "A", b"x");
    let b = write(dir.path(), "B", b"x");
    write(dir.path(), "C", b"y");
    write(dir.path(), "D", b"");

    let duplicates = find_duplicates(dir.path(), DEFAULT_BLOCK_SIZE).unwrap();

    assert_eq!(duplicates.groups().len(), 1);
    let group = &duplicates.groups()[0];
    assert_eq!(group.original().path(), a);
    let pending: Vec<&Path> = duplicates.pending_paths().collect();
    assert_eq!(pending, vec![b.as_path()]);
    assert_eq!(duplicates.pending_bytes(), 1);
}

#[test]
fn empty_files_never_grouped() {
    let dir = tempdir().unwrap();
    for name in ["e1", "e2", "sub/e3"] {
        write(dir.path(), name, b"");
    }
    write(dir.path(), "full1", b"content");
    write(dir.path(), "full2", b"content");

    let duplicates = find_duplicates(dir.path(), DEFAULT_BLOCK_SIZE).unwrap();

    assert_eq!(duplicates.groups().len(), 1);
    assert!(duplicates
        .groups()
        .iter()
        .flat_map(|g| g.files())
        .all(|f| f.size() > 0));
}

#[test]
fn no_repeated_content_is_empty_set() {
    let dir = tempdir().unwrap();
    write(dir.path(), "one", b"1");
    write(dir.path(), "two", b"2");
    write(dir.path(), "deep/three", b"3");

    let duplicates = find_duplicates(dir.path(), DEFAULT_BLOCK_SIZE).unwrap();
    assert!(duplicates.is_empty());
    assert_eq!(duplicates.pending_count(), 0);
}

#[test]
fn empty_folder_is_empty_set() {
    let dir = tempdir().unwrap();
    assert!(find_duplicates(dir.path(), DEFAULT_BLOCK_SIZE).unwrap().is_empty());
}

#[test]
fn file_root_is_invalid_input() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "file.txt", b"x");

    match find_duplicates(&file, DEFAULT_BLOCK_SIZE) {
        Err(Error::InvalidInput(path)) => assert_eq!(path, file),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn unreadable_file_is_excluded_and_scan_continues() {
    let dir = tempdir().unwrap();
    let a = write(dir.path(), "a", b"dup");
    let b = write(dir.path(), "b", b"dup");
    let c = write(dir.path(), "c", b"dup");
    let d = write(dir.path(), "d", b"other");
    let e = write(dir.path(), "e", b"other");

    let unreadable = [b.clone(), d.clone()];
    let mut hashed = Vec::new();
    let duplicates = find_duplicates_with(dir.path(), |path| {
        hashed.push(path.to_path_buf());
        if unreadable.iter().any(|p| p == path) {
            None
        } else {
            hash_file(path, DEFAULT_BLOCK_SIZE)
        }
    })
    .unwrap();

    assert_eq!(hashed.len(), 5);
    assert_eq!(duplicates.groups().len(), 1);
    let group = &duplicates.groups()[0];
    let paths: Vec<&Path> = group.files().iter().map(|f| f.path()).collect();
    assert_eq!(paths, vec![a.as_path(), c.as_path()]);
    assert!(duplicates.pending_paths().all(|p| p != b && p != d && p != e));
}

#[test]
fn many_copies_form_one_group() {
    let dir = tempdir().unwrap();
    let content = vec![7u8; 200_000];
    for name in ["a", "b", "c", "x/d", "x/y/e"] {
        write(dir.path(), name, &content);
    }

    let duplicates = find_duplicates(dir.path(), 4096).unwrap();

    assert_eq!(duplicates.groups().len(), 1);
    assert_eq!(duplicates.groups()[0].original().path(), dir.path().join("a"));
    assert_eq!(duplicates.pending_count(), 4);
    assert_eq!(duplicates.pending_bytes(), 4 * 200_000);
}

#[test]
fn same_size_different_content_not_grouped() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a", b"aaaa");
    write(dir.path(), "b", b"aaab");

    assert!(find_duplicates(dir.path(), 1).unwrap().is_empty());
}

#[test]
fn oversized_block_size_fails_before_walking() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a", b"x");
    write(dir.path(), "b", b"x");

    assert!(matches!(
        find_duplicates(dir.path(), usize::MAX),
        Err(Error::BlockSizeTooLarge { .. })
    ));
    assert!(matches!(
        find_duplicates(dir.path(), MAX_BLOCK_SIZE + 1),
        Err(Error::BlockSizeTooLarge { .. })
    ));
    assert!(matches!(find_duplicates(dir.path(), 0), Err(Error::ZeroBlockSize)));
    assert_eq!(find_duplicates(dir.path(), MAX_BLOCK_SIZE).unwrap().pending_count(), 1);
}
