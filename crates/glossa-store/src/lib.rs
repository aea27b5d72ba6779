mod error;
mod report;
mod shard;

pub use error::{SaveError, ShardError, ShardFailure};
pub use report::{LoadReport, Loaded};
pub use shard::{SHARD_COUNT, ShardStore, shard_letter, shard_letters};

use std::path::Path;

use glossa_core::BalancedIndex;

/// Rebuild an index from the shard files in `directory`
pub fn load(directory: impl AsRef<Path>) -> Loaded {
    ShardStore::new(directory.as_ref()).load()
}

/// Write a full snapshot of `index` into `directory`
pub fn save(index: &BalancedIndex, directory: impl AsRef<Path>) -> Result<(), SaveError> {
    ShardStore::new(directory.as_ref()).save(index)
}
