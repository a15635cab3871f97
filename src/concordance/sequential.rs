use std::ops::Range;

use super::{Concordance, agrees, triplet_count, validate_pair};
use crate::error::Result;
use crate::matrix::Matrix;

/// Single-threaded concordance over the whole triplet space.
///
/// Works on the flat row-major buffers. For a fixed `(k, l)` the pair
/// `[k][l]` is loaded once, and the inner loop over `m` then reads row `l`
/// of both matrices sequentially.
///
/// # Example
///
/// ```
/// use triplet_concordance::Matrix;
/// use triplet_concordance::concordance::sequential::concordance_sequential;
///
/// let m = Matrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ]).unwrap();
///
/// let c = concordance_sequential(&m, &m).unwrap();
/// assert_eq!(c.triplets(), 1);
/// assert_eq!(c.score(), 1.0);
/// ```
pub fn concordance_sequential(reference: &Matrix, predicted: &Matrix) -> Result<Concordance> {
    let n = validate_pair(reference, predicted)?;
    let concordant = count_outer_range(reference.as_slice(), predicted.as_slice(), n, 0..n - 2);
    Ok(Concordance::new(concordant, triplet_count(n)))
}

/// Concordant triplets whose first index `k` lies in `outer`.
///
/// `reference` and `predicted` are `n × n` row-major buffers.
pub(crate) fn count_outer_range(
    reference: &[f64],
    predicted: &[f64],
    n: usize,
    outer: Range<usize>,
) -> u64 {
    outer.map(|k| count_outer(reference, predicted, n, k)).sum()
}

/// Concordant triplets with first index exactly `k`.
#[inline]
pub(crate) fn count_outer(reference: &[f64], predicted: &[f64], n: usize, k: usize) -> u64 {
    debug_assert_eq!(reference.len(), n * n);
    debug_assert_eq!(predicted.len(), n * n);

    let mut count = 0u64;
    for l in k + 1..n.saturating_sub(1) {
        let r_kl = reference[k * n + l];
        let p_kl = predicted[k * n + l];

        let r_row = &reference[l * n + l + 1..(l + 1) * n];
        let p_row = &predicted[l * n + l + 1..(l + 1) * n];

        for (&r_lm, &p_lm) in r_row.iter().zip(p_row) {
            if agrees(r_kl, r_lm, p_kl, p_lm) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_counts_sum_to_total() {
        let n = 9;
        let r = Matrix::from_fn(n, n, |i, j| ((i * 7 + j * 3) % 5) as f64);
        let p = Matrix::from_fn(n, n, |i, j| ((i * 2 + j * 5) % 4) as f64);

        let whole = concordance_sequential(&r, &p).unwrap();
        let split = count_outer_range(r.as_slice(), p.as_slice(), n, 0..4)
            + count_outer_range(r.as_slice(), p.as_slice(), n, 4..n - 2);
        assert_eq!(whole.concordant(), split);
    }

    #[test]
    fn identical_matrices_agree_on_every_outer_index() {
        let n = 6;
        let m = Matrix::from_fn(n, n, |i, j| ((i + j) % 3) as f64);
        for k in 0..n - 2 {
            let expected = ((k + 1)..n - 1).map(|l| (n - 1 - l) as u64).sum::<u64>();
            assert_eq!(count_outer(m.as_slice(), m.as_slice(), n, k), expected, "k={}", k);
        }
    }
}
