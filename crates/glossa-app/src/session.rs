use glossa_core::BalancedIndex;
use glossa_store::{LoadReport, SaveError, ShardStore};
use glossa_types::{DeleteOutcome, Entry, InsertOutcome};

/// Input rejected before it reaches the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a word.")]
    EmptyWord,

    #[error("Please enter both word and translation.")]
    EmptyTranslation,

    #[error("Words and translations must fit on one line.")]
    LineBreak,
}

/// Outcome of a mutation plus the result of persisting it
#[derive(Debug)]
pub struct Mutation<T> {
    pub outcome: T,
    /// Set when the snapshot written after the mutation was incomplete
    pub unsaved: Option<SaveError>,
}

/// Single owner of the dictionary: the in-memory index and the shard store
/// it is snapshotted to after every change.
pub struct Session {
    index: BalancedIndex,
    store: ShardStore,
    load_report: LoadReport,
}

impl Session {
    /// Load the index from the store's shards
    pub fn open(store: ShardStore) -> Self {
        let loaded = store.load();

        if !loaded.report.failed.is_empty() {
            tracing::warn!(
                "{} shards could not be read and were loaded as empty",
                loaded.report.failed.len()
            );
        }
        if !loaded.report.lossy.is_empty() {
            tracing::warn!(
                "Shards {:?} contain invalid UTF-8 and will be rewritten on the next save",
                loaded.report.lossy
            );
        }
        if !loaded.report.unpaired.is_empty() {
            tracing::warn!(
                "Shards {:?} end with a word missing its translation",
                loaded.report.unpaired
            );
        }

        Self {
            index: loaded.index,
            store,
            load_report: loaded.report,
        }
    }

    pub fn index(&self) -> &BalancedIndex {
        &self.index
    }

    pub fn store(&self) -> &ShardStore {
        &self.store
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn search(&self, word: &str) -> Option<&Entry> {
        self.index.search(word.trim())
    }

    pub fn insert(
        &mut self,
        word: &str,
        translation: &str,
    ) -> Result<Mutation<InsertOutcome>, ValidationError> {
        let word = validate(word, ValidationError::EmptyWord)?;
        let translation = validate(translation, ValidationError::EmptyTranslation)?;

        let outcome = self.index.insert(word, translation);
        tracing::debug!("insert '{}': {:?}", word, outcome);

        let unsaved = match outcome {
            InsertOutcome::Inserted => self.persist(),
            InsertOutcome::AlreadyPresent => None,
        };
        Ok(Mutation { outcome, unsaved })
    }

    pub fn delete(&mut self, word: &str) -> Result<Mutation<DeleteOutcome>, ValidationError> {
        let word = validate(word, ValidationError::EmptyWord)?;

        let outcome = self.index.delete(word);
        tracing::debug!("delete '{}': {:?}", word, outcome);

        let unsaved = match outcome {
            DeleteOutcome::Deleted => self.persist(),
            DeleteOutcome::NotFound => None,
        };
        Ok(Mutation { outcome, unsaved })
    }

    fn persist(&self) -> Option<SaveError> {
        match self.store.save(&self.index) {
            Ok(()) => None,
            Err(e) => {
                tracing::error!("Snapshot incomplete: {}", e);
                Some(e)
            }
        }
    }
}

fn validate(raw: &str, empty: ValidationError) -> Result<&str, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(empty);
    }
    if value.contains(['\n', '\r']) {
        return Err(ValidationError::LineBreak);
    }
    Ok(value)
}
