use clap::ValueEnum;

use crate::error::Error;
use crate::folder_scanner::hasher::check_block_size;
use crate::folder_scanner::DEFAULT_BLOCK_SIZE;

/// What to do with the duplicates once they are found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Ask for confirmation, then delete every copy but the original.
    #[default]
    Delete,
    /// List the duplicate groups and leave the files alone.
    Report,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    block_size: usize,
    pub action: Action,
}

impl Config {
    pub fn new(block_size: usize, action: Action) -> Result<Self, Error> {
        let block_size = check_block_size(block_size)?;
        Ok(Config { block_size, action })
    }

    /// Bytes read per step while hashing a file.
    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            block_size: DEFAULT_BLOCK_SIZE,
            action: Action::default(),
        }
    }
}
