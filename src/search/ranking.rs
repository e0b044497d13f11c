//! Result Scaling
//!
//! Converts raw distances into a display ratio (0-100, higher is closer) and
//! a coarse bucket used for visual weighting. Ratios never increase as the
//! distance grows.

use super::engine::SearchResult;
use serde::Serialize;
use thiserror::Error;

/// How distances are normalized for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalePolicy {
    /// Relative to the spread of distances in the result list.
    ///
    /// Results whose ratio falls below `ratio_floor` are cut off, and buckets
    /// run 0 (best) to 5 across the remaining ratio range.
    MinMax { ratio_floor: f64 },
    /// Relative to the search threshold; buckets are multiples of 20
    FixedThreshold { threshold: f64 },
}

impl Default for ScalePolicy {
    fn default() -> Self {
        ScalePolicy::MinMax { ratio_floor: 0.0 }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    #[error("Ratio floor must be in [0, 100), got {0}")]
    InvalidRatioFloor(f64),
    #[error("Scaling threshold must be finite and positive, got {0}")]
    InvalidThreshold(f64),
}

impl ScalePolicy {
    pub fn validate(&self) -> Result<(), ScaleError> {
        match *self {
            ScalePolicy::MinMax { ratio_floor } => {
                if !(0.0..100.0).contains(&ratio_floor) {
                    return Err(ScaleError::InvalidRatioFloor(ratio_floor));
                }
            }
            ScalePolicy::FixedThreshold { threshold } => {
                if !threshold.is_finite() || threshold <= 0.0 {
                    return Err(ScaleError::InvalidThreshold(threshold));
                }
            }
        }
        Ok(())
    }
}

/// A search result with its display weighting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledResult<'a> {
    #[serde(flatten)]
    pub result: SearchResult<'a>,
    pub ratio: f64,
    pub bucket: u32,
}

/// Attach ratio and bucket to each result.
///
/// Expects results ordered by ascending distance (as returned by search);
/// with a min-max ratio floor, scaling stops at the first result below it.
pub fn scale<'a>(
    results: Vec<SearchResult<'a>>,
    policy: ScalePolicy,
) -> Result<Vec<ScaledResult<'a>>, ScaleError> {
    policy.validate()?;

    match policy {
        ScalePolicy::MinMax { ratio_floor } => Ok(scale_min_max(results, ratio_floor)),
        ScalePolicy::FixedThreshold { threshold } => Ok(results
            .into_iter()
            .map(|result| {
                let ratio = (100.0 - result.distance / threshold * 100.0).clamp(0.0, 100.0);
                let bucket = ((ratio / 20.0).round() * 20.0) as u32;
                ScaledResult {
                    result,
                    ratio,
                    bucket,
                }
            })
            .collect()),
    }
}

fn scale_min_max(results: Vec<SearchResult<'_>>, ratio_floor: f64) -> Vec<ScaledResult<'_>> {
    let min_distance = results
        .iter()
        .map(|r| r.distance)
        .fold(f64::INFINITY, f64::min);
    let max_distance = results.iter().map(|r| r.distance).fold(0.0, f64::max);

    let mut scaled = Vec::with_capacity(results.len());
    for result in results {
        let ratio = if max_distance > min_distance {
            100.0 - ((result.distance - min_distance) / max_distance * 100.0)
        } else {
            100.0
        };

        if ratio < ratio_floor {
            break;
        }

        let bucket = (((100.0 - ratio) / (100.0 - ratio_floor)) * 5.0).round() as u32;
        scaled.push(ScaledResult {
            result,
            ratio,
            bucket,
        });
    }

    scaled
}
