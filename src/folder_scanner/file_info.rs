use std::path::{Path, PathBuf};

/// A non-empty regular file found during the walk, with its content fingerprint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    path: PathBuf,
    fingerprint: String,
    size: u64,
}

impl FileRecord {
    pub fn new(path: PathBuf, fingerprint: String, size: u64) -> Self {
        FileRecord {
            path,
            fingerprint,
            size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Size in bytes as seen during the scan.
    pub fn size(&self) -> u64 {
        self.size
    }
}
