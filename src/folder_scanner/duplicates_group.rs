use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use super::file_info::FileRecord;

/// Fingerprint to records sharing it, each sequence in discovery order.
///
/// The first record of every sequence is the original for that content.
#[derive(Debug, Default)]
pub struct FingerprintIndex {
    buckets: HashMap<String, Vec<FileRecord>>,
}

impl FingerprintIndex {
    pub(crate) fn new(buckets: HashMap<String, Vec<FileRecord>>) -> Self {
        FingerprintIndex { buckets }
    }

    /// Number of distinct fingerprints seen.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn get(&self, fingerprint: &str) -> Option<&[FileRecord]> {
        self.buckets.get(fingerprint).map(Vec::as_slice)
    }

    pub fn original(&self, fingerprint: &str) -> Option<&FileRecord> {
        self.get(fingerprint).and_then(|files| files.first())
    }

    pub(crate) fn into_buckets(self) -> HashMap<String, Vec<FileRecord>> {
        self.buckets
    }
}

/// Two or more files with the same content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicatesGroup {
    fingerprint: String,
    files: Vec<FileRecord>,
}

impl DuplicatesGroup {
    /// Returns `None` unless `files` holds at least two records.
    pub fn new(fingerprint: String, files: Vec<FileRecord>) -> Option<Self> {
        if files.len() < 2 {
            return None;
        }
        Some(DuplicatesGroup { fingerprint, files })
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// The copy that is kept.
    pub fn original(&self) -> &FileRecord {
        &self.files[0]
    }

    /// Every copy after the original; these are the ones slated for deletion.
    pub fn duplicates(&self) -> &[FileRecord] {
        &self.files[1..]
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }
}

/// The groups of an index that actually contain duplicates.
///
/// Groups are ordered by the path of their original.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DuplicateSet {
    groups: Vec<DuplicatesGroup>,
}

impl DuplicateSet {
    pub fn new(mut groups: Vec<DuplicatesGroup>) -> Self {
        groups.sort_by(|a, b| a.original().path().cmp(b.original().path()));
        DuplicateSet { groups }
    }

    pub fn groups(&self) -> &[DuplicatesGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of files that would be deleted.
    pub fn pending_count(&self) -> usize {
        self.groups.iter().map(|g| g.duplicates().len()).sum()
    }

    /// Bytes those files occupied at scan time.
    pub fn pending_bytes(&self) -> u64 {
        self.groups
            .iter()
            .flat_map(|g| g.duplicates())
            .map(FileRecord::size)
            .sum()
    }

    pub fn pending_paths(&self) -> impl Iterator<Item = &Path> {
        self.groups
            .iter()
            .flat_map(|g| g.duplicates())
            .map(FileRecord::path)
    }
}

impl FromIterator<DuplicatesGroup> for DuplicateSet {
    fn from_iter<I: IntoIterator<Item = DuplicatesGroup>>(iter: I) -> Self {
        DuplicateSet::new(iter.into_iter().collect())
    }
}

impl fmt::Display for DuplicateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Found {} duplicate files in {} groups:",
            self.pending_count(),
            self.groups.len()
        )?;
        for group in &self.groups {
            writeln!(f)?;
            writeln!(f, "{}", group.fingerprint())?;
            writeln!(f, "  keep    {}", group.original().path().display())?;
            for duplicate in group.duplicates() {
                writeln!(f, "  delete  {}", duplicate.path().display())?;
            }
        }
        Ok(())
    }
}
