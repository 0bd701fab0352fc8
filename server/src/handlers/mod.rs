//! Request handlers for item operations.

mod listing;
mod selection;

pub use listing::*;
pub use selection::*;
