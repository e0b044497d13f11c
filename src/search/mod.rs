//! Fuzzy emoji search
//!
//! Weighted OSA distance, per-entry best word matching, ranking and display
//! scaling. Everything here is synchronous and free of I/O.

pub mod cost;
pub mod distance;
pub mod engine;
pub mod fuzzy;
pub mod parser;
pub mod ranking;
pub mod tokenize;


pub use cost::{CompletionCosts, CostModel, CostModelError, CostPreset, GenericCosts, WeightedCosts};
pub use distance::osa_distance;
pub use engine::{search, SearchEngine, SearchOptions, SearchResult, DEFAULT_THRESHOLD};
pub use fuzzy::{best_match, MatchCandidate, ThresholdPolicy};
pub use parser::{normalize_query, prepare_query, PreparedQuery, QueryState};
pub use ranking::{scale, ScaleError, ScalePolicy, ScaledResult};
pub use tokenize::Tokenizer;
