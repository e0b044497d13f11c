//! emojifind: as-you-type fuzzy emoji lookup
//!
//! Ranks a dataset of `(symbol, name, descriptions)` entries against a short
//! query using a completion-weighted optimal string alignment distance.

pub mod dataset;
pub mod error;
pub mod format;
pub mod search;

pub use dataset::{Dataset, DatasetError, Entry};
pub use error::AppError;
pub use search::{search, CostModel, SearchEngine, SearchResult};
