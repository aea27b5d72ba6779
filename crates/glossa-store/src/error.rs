use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ShardError {
    #[error("No shard for '{0}', shards are a-z")]
    UnknownShard(char),

    #[error("Failed to create data directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to replace {}: {source}", .path.display())]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A shard that could not be read or written
#[derive(Debug, thiserror::Error)]
#[error("Shard '{letter}': {error}")]
pub struct ShardFailure {
    pub letter: char,
    #[source]
    pub error: ShardError,
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// Some shards were written, others were not. The on-disk snapshot may
    /// mix old and new state.
    #[error("{} of 26 shards could not be saved", .failed.len())]
    Partial { failed: Vec<ShardFailure> },
}

impl SaveError {
    pub fn failures(&self) -> &[ShardFailure] {
        match self {
            SaveError::Partial { failed } => failed,
        }
    }

    pub fn failed_letters(&self) -> Vec<char> {
        self.failures().iter().map(|f| f.letter).collect()
    }
}
