pub mod error;
pub mod index;
pub mod iter;

pub use error::InvariantViolation;
pub use index::BalancedIndex;
pub use iter::Iter;
