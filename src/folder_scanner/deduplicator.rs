use std::path::Path;

use log::info;

use crate::error::Error;
use crate::folder_scanner::collector;
use crate::folder_scanner::duplicates_group::DuplicateSet;
use crate::folder_scanner::hasher::BlockHasher;
use crate::folder_scanner::scanner;

/// Scans `root` and returns every group of files with identical content.
///
/// Which file of a group is the original depends on the walk order and
/// must not be relied upon beyond "it is the one that is kept".
/// `block_size` is checked before the walk starts.
pub fn find_duplicates(root: &Path, block_size: usize) -> Result<DuplicateSet, Error> {
    let mut hasher = BlockHasher::new(block_size)?;
    find_duplicates_with(root, |path| hasher.hash_file(path))
}

/// Like [`find_duplicates`], fingerprinting files with `hasher`.
///
/// A `None` from the hasher excludes that file from grouping.
pub fn find_duplicates_with<F>(root: &Path, mut hasher: F) -> Result<DuplicateSet, Error>
where
    F: FnMut(&Path) -> Option<String>,
{
    let scanned = scanner::scan(root, &mut hasher)?;
    let index = collector::collect(scanned.records);
    let duplicates = collector::filter_duplicates(index);

    if duplicates.is_empty() {
        info!("No duplicates found");
    } else {
        info!(
            "Found {} duplicate groups, {} redundant files",
            duplicates.groups().len(),
            duplicates.pending_count()
        );
    }
    Ok(duplicates)
}
