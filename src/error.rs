use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures that stop a run.
#[derive(Debug, Error)]
pub enum Error {
    /// The scan root is missing or is not a folder.
    #[error("{} is not a folder", .0.display())]
    InvalidInput(PathBuf),

    #[error("block size must be at least 1 byte")]
    ZeroBlockSize,

    #[error("block size {size} exceeds the maximum of {max} bytes")]
    BlockSizeTooLarge { size: usize, max: usize },

    /// Prompting the user or printing the outcome failed.
    #[error("user interaction failed: {0}")]
    Interaction(#[from] io::Error),
}

/// A single file that could not be deleted.
#[derive(Debug, Error)]
#[error("Failed to delete {}: {}", .path.display(), .source)]
pub struct DeletionFailure {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl DeletionFailure {
    pub fn new(path: &Path, source: io::Error) -> Self {
        DeletionFailure {
            path: path.to_path_buf(),
            source,
        }
    }
}
