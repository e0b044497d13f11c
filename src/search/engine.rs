//! Search Engine Integration
//!
//! Ties together tokenization, best-word matching and ordering to rank
//! dataset entries against a query.

use super::cost::CostModel;
use super::fuzzy::{best_match, MatchCandidate, ThresholdPolicy};
use super::tokenize::Tokenizer;
use crate::dataset::Entry;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

/// Distance threshold used when none is configured
pub const DEFAULT_THRESHOLD: f64 = 2.5;

/// Queries shorter than this many chars are not searched
pub const MIN_QUERY_CHARS: usize = 2;

/// Search result with the entry and its best matching word
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    /// The matched entry
    pub entry: &'a Entry,
    /// Distance of the best word; always within the threshold
    pub distance: f64,
    /// Word from the entry's name or descriptions that matched
    pub word: String,
}

/// Parameters that decide which words count as a match
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    pub threshold: f64,
    pub threshold_policy: ThresholdPolicy,
    pub tokenizer: Tokenizer,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            threshold_policy: ThresholdPolicy::Inclusive,
            tokenizer: Tokenizer::default(),
        }
    }
}

impl SearchOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

/// Search engine over a borrowed dataset.
///
/// Holds no dataset state: every call receives the entries to rank, so one
/// engine can be shared across threads and datasets.
#[derive(Debug, Clone)]
pub struct SearchEngine<M> {
    model: M,
    options: SearchOptions,
}

impl<M: CostModel> SearchEngine<M> {
    /// Create a search engine with default options
    pub fn new(model: M) -> Self {
        Self::with_options(model, SearchOptions::default())
    }

    /// Create a search engine with custom options
    pub fn with_options(model: M, options: SearchOptions) -> Self {
        Self { model, options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Rank entries against an already trimmed and lower-cased query.
    ///
    /// Returns an empty list for queries under [`MIN_QUERY_CHARS`]. Results
    /// are ordered by distance, then matched word, then entry name.
    pub fn search<'a>(&self, query: &str, entries: &'a [Entry]) -> Vec<SearchResult<'a>> {
        if query.chars().count() < MIN_QUERY_CHARS {
            debug!("Query {:?} too short, not searching", query);
            return Vec::new();
        }

        let started = Instant::now();
        let mut results: Vec<SearchResult<'a>> = entries
            .iter()
            .filter_map(|entry| self.match_entry(query, entry))
            .collect();

        results.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.word.cmp(&b.word))
                .then_with(|| a.entry.name.cmp(&b.entry.name))
        });

        debug!(
            "Searching for {:?}: {} of {} entries matched in {:?}",
            query,
            results.len(),
            entries.len(),
            started.elapsed()
        );

        results
    }

    /// Match a single entry, preferring its name on equal distances
    pub fn match_entry<'a>(&self, query: &str, entry: &'a Entry) -> Option<SearchResult<'a>> {
        let tokenizer = &self.options.tokenizer;

        let name_match = self.best_in(query, &tokenizer.name_words(&entry.name));
        let desc_match = self.best_in(query, &tokenizer.filter_stopwords(&entry.descriptions));

        let best = match (name_match, desc_match) {
            (Some(name), Some(desc)) if desc.distance < name.distance => desc,
            (Some(name), _) => name,
            (None, Some(desc)) => desc,
            (None, None) => return None,
        };

        Some(SearchResult {
            entry,
            distance: best.distance,
            word: best.word,
        })
    }

    fn best_in(&self, query: &str, words: &[String]) -> Option<MatchCandidate> {
        best_match(
            query,
            words,
            &self.model,
            self.options.threshold,
            self.options.threshold_policy,
        )
    }
}

/// Rank `entries` against `query` with the default policies
pub fn search<'a, M>(
    query: &str,
    entries: &'a [Entry],
    model: &M,
    threshold: f64,
) -> Vec<SearchResult<'a>>
where
    M: CostModel + ?Sized,
{
    SearchEngine::with_options(model, SearchOptions::with_threshold(threshold)).search(query, entries)
}
