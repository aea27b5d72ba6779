use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> PathBuf {
    PathBuf::from("word_source")
}

fn default_atomic_writes() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the a.txt .. z.txt shards
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Replace shards through a temp file + rename
    #[serde(default = "default_atomic_writes")]
    pub atomic_writes: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            atomic_writes: default_atomic_writes(),
        }
    }
}
