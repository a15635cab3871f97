use super::{Concordance, Triplets, is_concordant, triplet_count, validate_pair};
use crate::error::Result;
use crate::matrix::Matrix;

/// Textbook concordance: enumerate every triplet and test it.
///
/// Goes through bounds-checked indexing and the [`Triplets`] iterator for
/// every comparison. Use this as a correctness baseline, not for performance.
pub fn concordance_naive(reference: &Matrix, predicted: &Matrix) -> Result<Concordance> {
    let n = validate_pair(reference, predicted)?;

    let concordant = Triplets::new(n)
        .filter(|&t| is_concordant(reference, predicted, t))
        .count() as u64;

    Ok(Concordance::new(concordant, triplet_count(n)))
}
