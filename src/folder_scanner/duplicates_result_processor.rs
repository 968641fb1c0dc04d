use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::error::DeletionFailure;
use crate::folder_scanner::duplicates_group::DuplicateSet;

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovedFile {
    pub path: PathBuf,
    /// Size read right before the file was removed.
    pub size: u64,
}

/// What a deletion pass did, file by file.
#[derive(Debug, Default)]
pub struct RemovalReport {
    pub removed: Vec<RemovedFile>,
    pub failures: Vec<DeletionFailure>,
    pub files_deleted: usize,
    pub bytes_reclaimed: u64,
}

impl RemovalReport {
    pub fn megabytes_reclaimed(&self) -> f64 {
        self.bytes_reclaimed as f64 / BYTES_PER_MEGABYTE
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Deletes every file of every group except the group's original.
///
/// A file that cannot be deleted is logged and recorded as a failure; the
/// remaining deletions still run.
pub fn remove_duplicates(duplicates: &DuplicateSet) -> RemovalReport {
    remove_duplicates_with(duplicates, &mut |_: &RemovedFile| ())
}

/// Like [`remove_duplicates`], calling `on_removed` right after each file
/// is gone.
pub fn remove_duplicates_with(
    duplicates: &DuplicateSet,
    on_removed: &mut dyn FnMut(&RemovedFile),
) -> RemovalReport {
    info!(
        "Deleting {} duplicate files from {} groups",
        duplicates.pending_count(),
        duplicates.groups().len()
    );

    let mut report = RemovalReport::default();
    for path in duplicates.pending_paths() {
        match remove_file(path) {
            Ok(size) => {
                debug!("Deleted: {}", path.display());
                let removed = RemovedFile {
                    path: path.to_path_buf(),
                    size,
                };
                on_removed(&removed);
                report.files_deleted += 1;
                report.bytes_reclaimed += size;
                report.removed.push(removed);
            }
            Err(failure) => {
                error!("{}", failure);
                report.failures.push(failure);
            }
        }
    }
    report
}

fn remove_file(path: &Path) -> Result<u64, DeletionFailure> {
    let size = fs::symlink_metadata(path)
        .map_err(|source| DeletionFailure::new(path, source))?
        .len();
    fs::remove_file(path).map_err(|source| DeletionFailure::new(path, source))?;
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn megabytes_use_binary_units() {
        let report = RemovalReport {
            bytes_reclaimed: 3 * 1024 * 1024 + 512 * 1024,
            ..RemovalReport::default()
        };
        assert_eq!(format!("{:.2}", report.megabytes_reclaimed()), "3.50");
    }

    #[test]
    fn removing_missing_file_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let failure = remove_file(&missing).unwrap_err();
        assert_eq!(failure.path, missing);
        assert_eq!(failure.source.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn removing_folder_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(remove_file(dir.path()).is_err());
        assert!(dir.path().exists());
    }
}
