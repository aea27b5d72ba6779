use std::borrow::Cow;
use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use glossa_core::BalancedIndex;
use glossa_types::Entry;

use crate::error::{SaveError, ShardError, ShardFailure};
use crate::report::{LoadReport, Loaded};

pub const SHARD_COUNT: usize = 26;

/// Letters naming the shard files, in load order
pub fn shard_letters() -> RangeInclusive<char> {
    'a'..='z'
}

/// Shard a word is persisted in. Words not starting with a lowercase ASCII
/// letter have none and are never written to disk.
pub fn shard_letter(word: &str) -> Option<char> {
    word.chars().next().filter(char::is_ascii_lowercase)
}

fn slot(letter: char) -> usize {
    (letter as u8 - b'a') as usize
}

/// Snapshot store over a directory of `a.txt` .. `z.txt`.
///
/// Each shard holds `word\ntranslation\n` pairs in ascending word order.
pub struct ShardStore {
    directory: PathBuf,
    atomic_writes: bool,
}

impl ShardStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            atomic_writes: true,
        }
    }

    /// Write each shard to a temp file and rename it into place
    pub fn with_atomic_writes(mut self, enabled: bool) -> Self {
        self.atomic_writes = enabled;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn shard_path(&self, letter: char) -> PathBuf {
        self.directory.join(format!("{letter}.txt"))
    }

    /// Rewrite all 26 shards from one in-order pass over `index`.
    ///
    /// A failing shard does not stop the others; every failure is logged and
    /// returned in [`SaveError::Partial`].
    pub fn save(&self, index: &BalancedIndex) -> Result<(), SaveError> {
        if let Err(source) = fs::create_dir_all(&self.directory) {
            tracing::error!(
                "Cannot create data directory {}: {}",
                self.directory.display(),
                source
            );
            let failed = shard_letters()
                .map(|letter| ShardFailure {
                    letter,
                    error: ShardError::CreateDir {
                        path: self.directory.clone(),
                        source: io::Error::new(source.kind(), source.to_string()),
                    },
                })
                .collect();
            return Err(SaveError::Partial { failed });
        }

        let mut shards = vec![String::new(); SHARD_COUNT];
        let mut persisted = 0;
        for entry in index {
            if let Some(letter) = shard_letter(&entry.word) {
                push_pair(&mut shards[slot(letter)], entry);
                persisted += 1;
            }
        }

        let mut failed = Vec::new();
        for (letter, contents) in shard_letters().zip(&shards) {
            if let Err(error) = self.write_shard(letter, contents) {
                tracing::error!("Failed to save shard '{}': {}", letter, error);
                failed.push(ShardFailure { letter, error });
            }
        }

        let skipped = index.len() - persisted;
        if skipped > 0 {
            tracing::debug!("{} entries have no shard and were not saved", skipped);
        }

        if failed.is_empty() {
            tracing::info!(
                "Saved {} entries to {}",
                persisted,
                self.directory.display()
            );
            Ok(())
        } else {
            Err(SaveError::Partial { failed })
        }
    }

    /// Rewrite the single shard for `letter`
    pub fn save_shard(&self, index: &BalancedIndex, letter: char) -> Result<(), ShardError> {
        if !letter.is_ascii_lowercase() {
            return Err(ShardError::UnknownShard(letter));
        }

        fs::create_dir_all(&self.directory).map_err(|source| ShardError::CreateDir {
            path: self.directory.clone(),
            source,
        })?;

        let mut contents = String::new();
        for entry in index
            .iter()
            .filter(|entry| shard_letter(&entry.word) == Some(letter))
        {
            push_pair(&mut contents, entry);
        }
        self.write_shard(letter, &contents)
    }

    fn write_shard(&self, letter: char, contents: &str) -> Result<(), ShardError> {
        let path = self.shard_path(letter);

        if !self.atomic_writes {
            return fs::write(&path, contents).map_err(|source| ShardError::Write { path, source });
        }

        let tmp = path.with_extension("txt.tmp");
        fs::write(&tmp, contents).map_err(|source| ShardError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            ShardError::Replace { path, source }
        })
    }

    /// Rebuild an index from whatever shards exist.
    ///
    /// Missing shards count as empty. Shards that cannot be read are logged,
    /// reported and skipped. Invalid UTF-8 is replaced with U+FFFD so the
    /// valid pairs around it are kept. A word on the last line without a
    /// translation gets an empty one, and a trailing blank line is ignored.
    pub fn load(&self) -> Loaded {
        let mut index = BalancedIndex::new();
        let mut report = LoadReport::default();

        for letter in shard_letters() {
            let path = self.shard_path(letter);
            let bytes = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(source) => {
                    let error = ShardError::Read { path, source };
                    tracing::error!("Skipping shard '{}': {}", letter, error);
                    report.failed.push(ShardFailure { letter, error });
                    continue;
                }
            };
            report.shards_read += 1;

            let contents = String::from_utf8_lossy(&bytes);
            if let Cow::Owned(_) = contents {
                tracing::warn!("Shard '{}' contains invalid UTF-8, bad bytes replaced", letter);
                report.lossy.push(letter);
            }

            let mut lines = contents.lines();
            while let Some(word) = lines.next() {
                let translation = match lines.next() {
                    Some(translation) => translation,
                    None if word.is_empty() => {
                        tracing::warn!("Shard '{}' ends with a blank line, ignored", letter);
                        break;
                    }
                    None => {
                        tracing::warn!("Shard '{}' ends with unpaired word '{}'", letter, word);
                        report.unpaired.push(letter);
                        ""
                    }
                };

                if shard_letter(word) != Some(letter) {
                    tracing::warn!("Word '{}' found in shard '{}'", word, letter);
                    report.misfiled.push(word.to_string());
                }

                report.entries_read += 1;
                if !index.insert(word, translation).is_inserted() {
                    tracing::debug!("Duplicate word '{}' in shard '{}' ignored", word, letter);
                    report.duplicates += 1;
                }
            }
        }

        tracing::info!(
            "Loaded {} entries from {} shards in {}",
            index.len(),
            report.shards_read,
            self.directory.display()
        );

        Loaded { index, report }
    }
}

fn push_pair(out: &mut String, entry: &Entry) {
    out.push_str(&entry.word);
    out.push('\n');
    out.push_str(&entry.translation);
    out.push('\n');
}
