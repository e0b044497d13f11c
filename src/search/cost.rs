//! Edit Cost Models
//!
//! Per-operation weights consumed by the OSA distance. A model is pure
//! configuration: swapping one never requires touching the distance or
//! matcher code.

use thiserror::Error;

/// Per-operation costs for the weighted edit distance.
///
/// Positions passed to [`CostModel::insertion`] are 1-based indexes into the
/// source (query) and target (candidate word) respectively, matching the DP
/// matrix coordinates. All costs must be non-negative, and
/// `substitution(a, b)` must be zero exactly when `a == b`.
pub trait CostModel {
    /// Cost of inserting the target character at `target_pos` while at `source_pos`
    fn insertion(&self, source_pos: usize, target_pos: usize) -> f64;
    /// Cost of deleting a source character
    fn deletion(&self) -> f64;
    /// Cost of replacing `a` with `b`
    fn substitution(&self, a: char, b: char) -> f64;
    /// Cost of swapping two adjacent characters
    fn transposition(&self) -> f64;
}

impl<M: CostModel + ?Sized> CostModel for &M {
    fn insertion(&self, source_pos: usize, target_pos: usize) -> f64 {
        (**self).insertion(source_pos, target_pos)
    }

    fn deletion(&self) -> f64 {
        (**self).deletion()
    }

    fn substitution(&self, a: char, b: char) -> f64 {
        (**self).substitution(a, b)
    }

    fn transposition(&self) -> f64 {
        (**self).transposition()
    }
}

/// Costs tuned for word completion.
///
/// Appending characters past the end of what has been typed is cheap and gets
/// cheaper the longer the candidate, while inserting in front of the typed
/// prefix costs 3.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompletionCosts;

impl CostModel for CompletionCosts {
    fn insertion(&self, source_pos: usize, target_pos: usize) -> f64 {
        if target_pos > source_pos {
            1.0 / target_pos as f64
        } else {
            3.0
        }
    }

    fn deletion(&self) -> f64 {
        1.0
    }

    fn substitution(&self, a: char, b: char) -> f64 {
        if a == b {
            0.0
        } else {
            1.0
        }
    }

    fn transposition(&self) -> f64 {
        1.0
    }
}

/// General purpose costs: insertions decay with query position, edits of the
/// typed text are expensive, and swapped letters are forgiven cheaply.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenericCosts;

impl CostModel for GenericCosts {
    fn insertion(&self, source_pos: usize, _target_pos: usize) -> f64 {
        1.75 / source_pos.max(1) as f64
    }

    fn deletion(&self) -> f64 {
        2.0
    }

    fn substitution(&self, a: char, b: char) -> f64 {
        if a == b {
            0.0
        } else {
            2.0
        }
    }

    fn transposition(&self) -> f64 {
        0.75
    }
}

/// Error raised when building a cost model from invalid weights
#[derive(Debug, Error, PartialEq)]
pub enum CostModelError {
    #[error("{operation} cost must be finite and non-negative, got {value}")]
    InvalidWeight { operation: &'static str, value: f64 },
}

/// Position-independent costs with validated weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedCosts {
    insertion: f64,
    deletion: f64,
    substitution: f64,
    transposition: f64,
}

impl WeightedCosts {
    /// Build a model from explicit weights, rejecting negative or non-finite values
    pub fn new(
        insertion: f64,
        deletion: f64,
        substitution: f64,
        transposition: f64,
    ) -> Result<Self, CostModelError> {
        for (operation, value) in [
            ("insertion", insertion),
            ("deletion", deletion),
            ("substitution", substitution),
            ("transposition", transposition),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CostModelError::InvalidWeight { operation, value });
            }
        }

        Ok(Self {
            insertion,
            deletion,
            substitution,
            transposition,
        })
    }

    /// Classic OSA distance: every operation costs 1
    pub fn unit() -> Self {
        Self {
            insertion: 1.0,
            deletion: 1.0,
            substitution: 1.0,
            transposition: 1.0,
        }
    }
}

impl Default for WeightedCosts {
    fn default() -> Self {
        Self::unit()
    }
}

impl CostModel for WeightedCosts {
    fn insertion(&self, _source_pos: usize, _target_pos: usize) -> f64 {
        self.insertion
    }

    fn deletion(&self) -> f64 {
        self.deletion
    }

    fn substitution(&self, a: char, b: char) -> f64 {
        if a == b {
            0.0
        } else {
            self.substitution
        }
    }

    fn transposition(&self) -> f64 {
        self.transposition
    }
}

/// Named presets, selectable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CostPreset {
    /// Completion-weighted costs
    #[default]
    Completion,
    /// Generic costs with cheap transpositions
    Generic,
    /// Unit costs (plain OSA)
    Unit,
}

impl CostModel for CostPreset {
    fn insertion(&self, source_pos: usize, target_pos: usize) -> f64 {
        match self {
            CostPreset::Completion => CompletionCosts.insertion(source_pos, target_pos),
            CostPreset::Generic => GenericCosts.insertion(source_pos, target_pos),
            CostPreset::Unit => WeightedCosts::unit().insertion(source_pos, target_pos),
        }
    }

    fn deletion(&self) -> f64 {
        match self {
            CostPreset::Completion => CompletionCosts.deletion(),
            CostPreset::Generic => GenericCosts.deletion(),
            CostPreset::Unit => WeightedCosts::unit().deletion(),
        }
    }

    fn substitution(&self, a: char, b: char) -> f64 {
        match self {
            CostPreset::Completion => CompletionCosts.substitution(a, b),
            CostPreset::Generic => GenericCosts.substitution(a, b),
            CostPreset::Unit => WeightedCosts::unit().substitution(a, b),
        }
    }

    fn transposition(&self) -> f64 {
        match self {
            CostPreset::Completion => CompletionCosts.transposition(),
            CostPreset::Generic => GenericCosts.transposition(),
            CostPreset::Unit => WeightedCosts::unit().transposition(),
        }
    }
}
