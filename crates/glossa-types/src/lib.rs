pub mod types;

pub use types::{DeleteOutcome, Entry, InsertOutcome};
