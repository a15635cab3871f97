//! Triplet rank concordance between two square matrices.
//!
//! Given a reference distance matrix and a predicted one (say, pairwise
//! distances before and after a dimensionality reduction), this crate asks,
//! for every index triplet `k < l < m`, whether both matrices agree that
//! `M[k][l] >= M[l][m]`. The score is the fraction of triplets where they
//! agree: Kendall's tau, stretched from pairs to triplets.
//!
//! ## Usage
//!
//! ```
//! use triplet_concordance::{Matrix, score};
//!
//! let reference = Matrix::from_rows(vec![
//!     vec![0.0, 1.0, 2.0],
//!     vec![1.0, 0.0, 3.0],
//!     vec![2.0, 3.0, 0.0],
//! ]).unwrap();
//!
//! assert_eq!(score(&reference, &reference).unwrap(), 1.0);
//! ```
//!
//! For large matrices, use the multi-threaded version:
//!
//! ```
//! use triplet_concordance::{Matrix, score_parallel};
//!
//! let a = Matrix::from_fn(64, 64, |i, j| (i as f64 - j as f64).abs());
//! let b = Matrix::from_fn(64, 64, |i, j| (i as f64 - j as f64).powi(2));
//!
//! assert_eq!(score_parallel(&a, &b, 4).unwrap(), 1.0);
//! ```
//!
//! Matrices come from comma-separated text with [`matrix::text::read_csv`].
//!
//! ## What's inside
//!
//! - Dense row-major [`Matrix`] with CSV read/write
//! - Naive and slice-based sequential kernels
//! - Adaptive multi-threading (scales down for small matrices)
//! - Typed errors for shape mismatch, `n < 3` and malformed input

pub mod concordance;
pub mod error;
pub mod matrix;
pub mod threaded;

pub use concordance::naive::concordance_naive;
pub use concordance::sequential::concordance_sequential;
pub use concordance::{Concordance, Triplet, Triplets, is_concordant, triplet_count, validate_pair};
pub use error::{ConcordanceError, Result};
pub use matrix::Matrix;

/// Count concordant triplets on the calling thread.
///
/// # Errors
///
/// [`ConcordanceError::ShapeMismatch`] unless both matrices are square and
/// equally sized; [`ConcordanceError::DegenerateInput`] if `n < 3`.
pub fn concordance(reference: &Matrix, predicted: &Matrix) -> Result<Concordance> {
    concordance_sequential(reference, predicted)
}

/// Same as [`concordance`] but uses multiple threads.
///
/// Thread count adapts to matrix size - small matrices use fewer threads
/// because the overhead isn't worth it. The count is identical to the
/// single-threaded one.
pub fn concordance_parallel(
    reference: &Matrix,
    predicted: &Matrix,
    num_threads: usize,
) -> Result<Concordance> {
    threaded::concordance_mt::concordance_mt(reference, predicted, num_threads)
}

/// Fraction of triplets on which `reference` and `predicted` agree.
///
/// Errors as for [`concordance`].
pub fn score(reference: &Matrix, predicted: &Matrix) -> Result<f64> {
    concordance(reference, predicted).map(|c| c.score())
}

/// Same as [`score`] but uses multiple threads.
pub fn score_parallel(reference: &Matrix, predicted: &Matrix, num_threads: usize) -> Result<f64> {
    concordance_parallel(reference, predicted, num_threads).map(|c| c.score())
}
