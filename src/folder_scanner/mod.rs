pub mod collector;
pub mod deduplicator;
pub mod duplicates_group;
pub mod duplicates_result_processor;
pub mod file_info;
pub mod hasher;
pub mod scanner;

pub use deduplicator::{find_duplicates, find_duplicates_with};
pub use duplicates_group::{DuplicateSet, DuplicatesGroup, FingerprintIndex};
pub use duplicates_result_processor::{
    remove_duplicates, remove_duplicates_with, RemovalReport, RemovedFile,
};
pub use file_info::FileRecord;
pub use hasher::{hash_file, BlockHasher, DEFAULT_BLOCK_SIZE, MAX_BLOCK_SIZE};
