use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use data_encoding::HEXLOWER;
use log::{trace, warn};
use ring::digest::{Context, SHA256};

use crate::error::Error;

pub const DEFAULT_BLOCK_SIZE: usize = 64 * 1024;
pub const MAX_BLOCK_SIZE: usize = 64 * 1024 * 1024;

/// Accepts block sizes in `1..=MAX_BLOCK_SIZE`.
pub fn check_block_size(block_size: usize) -> Result<usize, Error> {
    if block_size == 0 {
        return Err(Error::ZeroBlockSize);
    }
    if block_size > MAX_BLOCK_SIZE {
        return Err(Error::BlockSizeTooLarge {
            size: block_size,
            max: MAX_BLOCK_SIZE,
        });
    }
    Ok(block_size)
}

/// Streams files through SHA-256, reusing one read buffer for every file.
pub struct BlockHasher {
    buffer: Vec<u8>,
}

impl BlockHasher {
    pub fn new(block_size: usize) -> Result<Self, Error> {
        let block_size = check_block_size(block_size)?;
        Ok(BlockHasher {
            buffer: vec![0u8; block_size],
        })
    }

    pub fn block_size(&self) -> usize {
        self.buffer.len()
    }

    /// Computes the SHA-256 fingerprint of `path`, lowercase hex encoded.
    ///
    /// The file is read in sequential blocks, so memory use does not depend
    /// on the file size. Returns `None` when the file cannot be opened or
    /// read; callers treat that as "skip this file".
    pub fn hash_file(&mut self, path: &Path) -> Option<String> {
        let mut handle = match File::open(path) {
            Ok(handle) => handle,
            Err(error) => {
                warn!("Opening {} failed: {}", path.display(), error);
                return None;
            }
        };

        let mut context = Context::new(&SHA256);
        let mut total_read: u64 = 0;

        loop {
            match handle.read(&mut self.buffer) {
                Ok(0) => break,
                Ok(read) => {
                    context.update(&self.buffer[..read]);
                    total_read += read as u64;
                }
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => {
                    warn!("Failed reading from {}: {}", path.display(), error);
                    return None;
                }
            }
        }

        let digest = context.finish();
        trace!("Hashed {} bytes from {}", total_read, path.display());
        Some(HEXLOWER.encode(digest.as_ref()))
    }
}

/// One-off fingerprint of `path`; see [`BlockHasher::hash_file`].
///
/// `block_size` must lie in `1..=MAX_BLOCK_SIZE`. Out of range sizes make
/// the file unavailable instead of hashing it.
pub fn hash_file(path: &Path, block_size: usize) -> Option<String> {
    match BlockHasher::new(block_size) {
        Ok(mut hasher) => hasher.hash_file(path),
        Err(error) => {
            warn!("Not hashing {}: {}", path.display(), error);
            None
        }
    }
}
