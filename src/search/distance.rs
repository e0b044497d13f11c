//! Optimal String Alignment Distance
//!
//! Weighted Damerau-Levenshtein restricted to non-overlapping adjacent
//! transpositions. The result depends on which string is the query: with a
//! position-dependent insertion cost `osa_distance(a, b)` and
//! `osa_distance(b, a)` generally differ.

use super::cost::CostModel;

/// Compute the weighted OSA distance from `source` to `target`.
///
/// Operates on `char`s, so multi-byte characters count as a single position.
/// The first row and column hold the plain edit counts (`D[0][j] = j`,
/// `D[i][0] = i`) independent of the model. Total over all inputs.
pub fn osa_distance<M>(source: &str, target: &str, model: &M) -> f64
where
    M: CostModel + ?Sized,
{
    let a: Vec<char> = source.chars().collect();
    let b: Vec<char> = target.chars().collect();
    let rows = a.len() + 1;
    let cols = b.len() + 1;

    // Row-major (|a|+1) x (|b|+1) matrix
    let mut d = vec![0.0f64; rows * cols];
    let idx = |i: usize, j: usize| i * cols + j;

    for i in 0..rows {
        d[idx(i, 0)] = i as f64;
    }
    for j in 0..cols {
        d[idx(0, j)] = j as f64;
    }

    for i in 1..rows {
        for j in 1..cols {
            let deletion = d[idx(i - 1, j)] + model.deletion();
            let insertion = d[idx(i, j - 1)] + model.insertion(i, j);
            let substitution = d[idx(i - 1, j - 1)] + model.substitution(a[i - 1], b[j - 1]);

            let mut best = deletion.min(insertion).min(substitution);

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(d[idx(i - 2, j - 2)] + model.transposition());
            }

            d[idx(i, j)] = best;
        }
    }

    d[idx(rows - 1, cols - 1)]
}
