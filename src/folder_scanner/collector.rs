use grouping_by::GroupingBy;
use log::info;

use crate::folder_scanner::duplicates_group::{DuplicateSet, DuplicatesGroup, FingerprintIndex};
use crate::folder_scanner::file_info::FileRecord;

/// Buckets records by fingerprint, keeping discovery order inside each bucket.
pub fn collect(records: Vec<FileRecord>) -> FingerprintIndex {
    let counter = records.len();
    let buckets = records
        .into_iter()
        .grouping_by(|record| record.fingerprint().to_owned());
    info!("Consumed {} files into {} fingerprints", counter, buckets.len());
    FingerprintIndex::new(buckets)
}

/// Keeps only the buckets holding more than one file.
pub fn filter_duplicates(index: FingerprintIndex) -> DuplicateSet {
    index
        .into_buckets()
        .into_iter()
        .filter_map(|(fingerprint, files)| DuplicatesGroup::new(fingerprint, files))
        .collect()
}
