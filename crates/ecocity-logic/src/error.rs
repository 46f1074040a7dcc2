//! Error kinds for city operations.
//!
//! None of these is fatal: the menu reports the error and returns to the
//! prompt. Every operation is attempted exactly once.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CityError {
    /// A registry or the activity log is full; nothing was changed.
    #[error("{collection} limit reached ({capacity} max)")]
    CapacityExceeded {
        collection: &'static str,
        capacity: usize,
    },
    /// Upgrade budget below the minimum.
    #[error("Budget exceeded! You're trying to build Disneyland with a lemonade stand budget!")]
    BudgetExceeded { budget: i64 },
    /// Log file missing or could not be opened.
    #[error("log file {path} unavailable: {reason}")]
    FileUnavailable { path: String, reason: String },
    /// No entity at the requested position.
    #[error("no {collection} at index {index} (count {count})")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        count: usize,
    },
}

pub type Result<T> = std::result::Result<T, CityError>;
