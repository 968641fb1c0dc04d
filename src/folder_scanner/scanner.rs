use std::fs::{self, DirEntry};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::Error;
use crate::folder_scanner::file_info::FileRecord;

/// Counters for one walk over a folder tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Regular files encountered.
    pub visited: usize,
    /// Files fingerprinted and kept for grouping.
    pub hashed: usize,
    pub empty: usize,
    /// Entries that could not be listed, or files whose size or content
    /// could not be read.
    pub unreadable: usize,
    /// Symlinks, sockets, fifos and other non-regular entries.
    pub not_regular: usize,
    /// Folders that could not be listed.
    pub unlisted_folders: usize,
}

pub struct ScanResult {
    pub records: Vec<FileRecord>,
    pub summary: ScanSummary,
}

/// Failures met by the walk itself, before any entry reaches the callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct WalkFailures {
    folders: usize,
    entries: usize,
}

// Entries are visited in file name order. Symlinks are reported to the
// callback like any other non-directory entry and never descended into.
fn visit_dirs(dir: &Path, cb: &mut dyn FnMut(&DirEntry), failures: &mut WalkFailures) {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(error) => {
            warn!("Skipping folder {}: {}", dir.display(), error);
            failures.folders += 1;
            return;
        }
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(error) => {
                warn!("Failed listing an entry of {}: {}", dir.display(), error);
                failures.entries += 1;
            }
        }
    }
    entries.sort_by_key(DirEntry::file_name);

    for entry in entries {
        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => visit_dirs(&entry.path(), cb, failures),
            _ => cb(&entry),
        }
    }
}

/// Walks `folder` recursively and fingerprints every non-empty regular file.
///
/// Fails only when `folder` is not a directory. Anything that goes wrong
/// with a single entry is logged, counted and skipped.
pub fn scan(
    folder: &Path,
    hasher: &mut dyn FnMut(&Path) -> Option<String>,
) -> Result<ScanResult, Error> {
    match fs::metadata(folder) {
        Ok(metadata) if metadata.is_dir() => (),
        _ => return Err(Error::InvalidInput(folder.to_path_buf())),
    }

    info!("Starting scanning folder: {}", folder.display());

    let mut records = Vec::new();
    let mut summary = ScanSummary::default();

    let mut cb = |entry: &DirEntry| {
        let path = entry.path();
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(error) => {
                warn!("Reading metadata of {} failed: {}", path.display(), error);
                summary.unreadable += 1;
                return;
            }
        };

        if !metadata.file_type().is_file() {
            debug!("Skipping {}: not a regular file", path.display());
            summary.not_regular += 1;
            return;
        }

        summary.visited += 1;
        if metadata.len() == 0 {
            debug!("Skipping empty file {}", path.display());
            summary.empty += 1;
            return;
        }

        match hasher(&path) {
            Some(fingerprint) => {
                debug!("{} {}", fingerprint, path.display());
                summary.hashed += 1;
                records.push(FileRecord::new(path, fingerprint, metadata.len()));
            }
            None => {
                warn!("Skipping unreadable file {}", path.display());
                summary.unreadable += 1;
            }
        }
    };

    let mut failures = WalkFailures::default();
    visit_dirs(folder, &mut cb, &mut failures);
    summary.unlisted_folders = failures.folders;
    summary.unreadable += failures.entries;

    info!(
        "Scanning finished: {} files, {} hashed, {} empty, {} unreadable, {} not regular, {} folders skipped",
        summary.visited,
        summary.hashed,
        summary.empty,
        summary.unreadable,
        summary.not_regular,
        summary.unlisted_folders
    );

    Ok(ScanResult { records, summary })
}
