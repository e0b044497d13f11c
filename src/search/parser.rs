//! Query Preparation
//!
//! Normalizes raw input before it reaches the engine, resolves pasted emoji
//! to a searchable word, and classifies what a finished search should show.

use super::engine::MIN_QUERY_CHARS;
use crate::dataset::Dataset;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

/// Query text ready for [`SearchEngine::search`](super::engine::SearchEngine::search)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    /// Effective query
    pub text: String,
    /// Symbol the query was substituted from, if the input was an emoji
    pub substituted_from: Option<String>,
}

/// What the caller should display after a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    /// Nothing typed yet (query too short to search)
    Intro,
    /// A real query that matched nothing
    NoResults,
    /// Number of matches found
    Results(usize),
}

impl QueryState {
    pub fn classify(query: &str, result_count: usize) -> Self {
        if result_count > 0 {
            QueryState::Results(result_count)
        } else if query.chars().count() < MIN_QUERY_CHARS {
            QueryState::Intro
        } else {
            QueryState::NoResults
        }
    }
}

/// NFKC-normalize, trim and lower-case raw input
pub fn normalize_query(raw: &str) -> String {
    raw.nfkc().collect::<String>().trim().to_lowercase()
}

/// Normalize input and swap a pasted symbol for its first description.
///
/// Symbols are looked up on the trimmed input before any folding: NFKC and
/// lower-casing rewrite emoji such as ™️ or Ⓜ️ into plain letters.
pub fn prepare_query(raw: &str, dataset: &Dataset) -> PreparedQuery {
    let symbol = raw.trim();

    let substitute = dataset
        .find_symbol(symbol)
        .and_then(|entry| entry.descriptions.first());

    match substitute {
        Some(word) => {
            debug!("Query {:?} is a known symbol, searching for {:?}", symbol, word);
            PreparedQuery {
                text: normalize_query(word),
                substituted_from: Some(symbol.to_string()),
            }
        }
        None => PreparedQuery {
            text: normalize_query(raw),
            substituted_from: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Entry;

    fn dataset() -> Dataset {
        vec![
            Entry::new("🎉", "party_popper", ["celebration", "confetti"]),
            Entry::new("🫥", "dotted_line_face", Vec::<String>::new()),
            Entry::new("™️", "trade_mark", ["trademark"]),
            Entry::new("Ⓜ️", "circled_m", ["m"]),
            Entry::new("🈁", "japanese_here_button", ["here"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Party "), "party");
        assert_eq!(normalize_query("ＰＡＲＴＹ"), "party");
        assert_eq!(normalize_query("\t\n"), "");
    }

    #[test]
    fn test_prepare_plain_query() {
        let prepared = prepare_query(" Confetti", &dataset());
        assert_eq!(prepared.text, "confetti");
        assert_eq!(prepared.substituted_from, None);
    }

    #[test]
    fn test_prepare_symbol_query() {
        let prepared = prepare_query(" 🎉 ", &dataset());
        assert_eq!(prepared.text, "celebration");
        assert_eq!(prepared.substituted_from.as_deref(), Some("🎉"));
    }

    #[test]
    fn test_prepare_symbol_with_compatibility_decomposition() {
        let dataset = dataset();

        let prepared = prepare_query("™️", &dataset);
        assert_eq!(prepared.text, "trademark");
        assert_eq!(prepared.substituted_from.as_deref(), Some("™️"));

        let prepared = prepare_query(" Ⓜ️ ", &dataset);
        assert_eq!(prepared.text, "m");
        assert_eq!(prepared.substituted_from.as_deref(), Some("Ⓜ️"));

        let prepared = prepare_query("🈁", &dataset);
        assert_eq!(prepared.text, "here");
    }

    #[test]
    fn test_symbol_without_descriptions_is_kept() {
        let prepared = prepare_query("🫥", &dataset());
        assert_eq!(prepared.text, "🫥");
        assert_eq!(prepared.substituted_from, None);
    }

    #[test]
    fn test_query_state() {
        assert_eq!(QueryState::classify("", 0), QueryState::Intro);
        assert_eq!(QueryState::classify("p", 0), QueryState::Intro);
        assert_eq!(QueryState::classify("pa", 0), QueryState::NoResults);
        assert_eq!(QueryState::classify("party", 3), QueryState::Results(3));
    }
}
