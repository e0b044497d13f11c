//! Best Word Matcher
//!
//! Finds the closest word to a query within one word list.

use super::cost::CostModel;
use super::distance::osa_distance;
use serde::Serialize;

/// How a distance is compared against the threshold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThresholdPolicy {
    /// `distance <= threshold`
    #[default]
    Inclusive,
    /// `distance < threshold`
    Exclusive,
}

impl ThresholdPolicy {
    /// Whether a distance clears the threshold under this policy
    pub fn accepts(self, distance: f64, threshold: f64) -> bool {
        match self {
            ThresholdPolicy::Inclusive => distance <= threshold,
            ThresholdPolicy::Exclusive => distance < threshold,
        }
    }
}

/// Closest word found for a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCandidate {
    /// Weighted OSA distance from the query to `word`
    pub distance: f64,
    /// The matched word
    pub word: String,
}

/// Return the lowest-distance word that clears the threshold.
///
/// On equal distances the word seen first wins. `None` means no word in the
/// list is close enough.
pub fn best_match<M, S>(
    query: &str,
    words: &[S],
    model: &M,
    threshold: f64,
    policy: ThresholdPolicy,
) -> Option<MatchCandidate>
where
    M: CostModel + ?Sized,
    S: AsRef<str>,
{
    let mut best: Option<MatchCandidate> = None;

    for word in words {
        let word = word.as_ref();
        let distance = osa_distance(query, word, model);

        if !policy.accepts(distance, threshold) {
            continue;
        }

        let improves = best
            .as_ref()
            .map_or(true, |current| distance < current.distance);

        if improves {
            best = Some(MatchCandidate {
                distance,
                word: word.to_string(),
            });
        }
    }

    best
}
