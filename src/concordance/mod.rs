//! The triplet concordance metric.
//!
//! For every triplet `k < l < m` the metric asks each matrix the same
//! question: is `M[k][l] >= M[l][m]`? A triplet is concordant when both
//! matrices give the same answer. The score is the concordant fraction of
//! all `C(n, 3)` triplets.
//!
//! Ties are inclusive on the `>=` side and exclusive on the `<` side, with no
//! epsilon. A reference tie therefore matches only when the predicted pair is
//! also `>=`. NaN compares false both ways, so a triplet reading a NaN never
//! matches.
//!
//! Available implementations:
//! - `naive`: walks [`Triplets`] through [`is_concordant`]. Correctness baseline.
//! - `sequential`: flat-slice triple loop, hoists the `(k, l)` pair out of the inner loop.
//! - [`crate::threaded`]: the sequential kernel split across threads by outer index.

pub mod naive;
pub mod sequential;
pub mod triplet;

pub use triplet::{Triplet, Triplets, triplet_count};

use tracing::debug;

use crate::error::{ConcordanceError, Result};
use crate::matrix::Matrix;

/// Outcome of one scoring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Concordance {
    concordant: u64,
    triplets: u64,
}

impl Concordance {
    /// `triplets` is never zero: every entry point rejects `n < 3` first.
    pub(crate) fn new(concordant: u64, triplets: u64) -> Self {
        debug_assert!(triplets > 0);
        debug_assert!(concordant <= triplets);
        Self {
            concordant,
            triplets,
        }
    }

    /// Triplets on which both matrices agreed.
    pub fn concordant(&self) -> u64 {
        self.concordant
    }

    /// Total triplets visited, `C(n, 3)`.
    pub fn triplets(&self) -> u64 {
        self.triplets
    }

    /// Concordant fraction, in `[0, 1]`.
    pub fn score(&self) -> f64 {
        self.concordant as f64 / self.triplets as f64
    }
}

/// Check that both matrices are square, equally sized and have `n >= 3`.
///
/// Returns `n`. Runs before any triplet is visited.
pub fn validate_pair(reference: &Matrix, predicted: &Matrix) -> Result<usize> {
    if !reference.is_square() || !predicted.is_square() || reference.shape() != predicted.shape()
    {
        return Err(ConcordanceError::ShapeMismatch {
            reference: reference.shape(),
            predicted: predicted.shape(),
        });
    }

    let n = reference.rows();
    if n < 3 {
        return Err(ConcordanceError::DegenerateInput { n });
    }

    debug!(n, triplets = triplet_count(n), "validated matrix pair");
    Ok(n)
}

/// Whether the two matrices agree on triplet `t`.
///
/// Panics if `t` indexes outside either matrix.
#[inline]
pub fn is_concordant(reference: &Matrix, predicted: &Matrix, t: Triplet) -> bool {
    agrees(
        reference[(t.k, t.l)],
        reference[(t.l, t.m)],
        predicted[(t.k, t.l)],
        predicted[(t.l, t.m)],
    )
}

#[inline(always)]
pub(crate) fn agrees(r_kl: f64, r_lm: f64, p_kl: f64, p_lm: f64) -> bool {
    (r_kl >= r_lm && p_kl >= p_lm) || (r_kl < r_lm && p_kl < p_lm)
}
