//! Error types for the itemdeck engine.
//!
//! Every store and service operation is total over its input, so the only
//! fallible surface is turning caller-supplied names into typed query options.

use thiserror::Error;

/// All possible errors from the itemdeck engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
