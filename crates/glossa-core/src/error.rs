/// Broken tree invariant. Only reachable through a bug in the index itself.
#[derive(Debug, thiserror::Error)]
pub enum InvariantViolation {
    #[error("Key out of order: {word}")]
    Order { word: String },

    #[error("Unbalanced node {word}: balance factor {balance}")]
    Unbalanced { word: String, balance: i32 },

    #[error("Stale height at {word}: cached {cached}, actual {actual}")]
    StaleHeight {
        word: String,
        cached: u32,
        actual: u32,
    },

    #[error("Length mismatch: stored {stored}, counted {counted}")]
    LengthMismatch { stored: usize, counted: usize },
}
