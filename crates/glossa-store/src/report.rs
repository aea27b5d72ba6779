use glossa_core::BalancedIndex;

use crate::error::ShardFailure;

/// An index rebuilt from disk together with what went wrong on the way
#[derive(Debug)]
pub struct Loaded {
    pub index: BalancedIndex,
    pub report: LoadReport,
}

#[derive(Debug, Default)]
pub struct LoadReport {
    /// Shard files found and read
    pub shards_read: usize,
    /// Word/translation pairs read, duplicates included
    pub entries_read: usize,
    /// Pairs skipped because the word was already loaded
    pub duplicates: usize,
    /// Shards that could not be read, loaded as empty
    pub failed: Vec<ShardFailure>,
    /// Shards with invalid UTF-8, loaded with bad bytes replaced
    pub lossy: Vec<char>,
    /// Shards ending in a word without a translation line
    pub unpaired: Vec<char>,
    /// Words found in a shard other than their own
    pub misfiled: Vec<String>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
            && self.lossy.is_empty()
            && self.unpaired.is_empty()
            && self.misfiled.is_empty()
            && self.duplicates == 0
    }
}
