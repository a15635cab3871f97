//! Multi-threaded triplet concordance.

use std::thread;

use tracing::debug;

use crate::concordance::sequential::{count_outer, count_outer_range};
use crate::concordance::{Concordance, triplet_count, validate_pair};
use crate::error::{ConcordanceError, Result};
use crate::matrix::Matrix;

/// Multi-threaded concordance with an adaptive thread count.
///
/// Thread count adapts based on the number of triplets:
/// - < 1M triplets: 1 thread
/// - < 10M triplets: 2 threads
/// - Otherwise: up to `num_threads`
///
/// The result is identical to the sequential one for any thread count,
/// since workers only add up whole-triplet counts.
///
/// # Arguments
///
/// * `num_threads` - Maximum threads (actual may be fewer for small matrices)
pub fn concordance_mt(
    reference: &Matrix,
    predicted: &Matrix,
    num_threads: usize,
) -> Result<Concordance> {
    let n = validate_pair(reference, predicted)?;
    let effective_threads = choose_thread_count(n, num_threads);
    debug!(n, requested = num_threads, effective_threads, "parallel concordance");

    let concordant = count_concordant_mt(
        reference.as_slice(),
        predicted.as_slice(),
        n,
        effective_threads,
    )?;
    Ok(Concordance::new(concordant, triplet_count(n)))
}

/// Count concordant triplets of two `n × n` buffers on exactly `threads` workers.
///
/// Outer indices are dealt out round-robin: worker `t` takes
/// `k = t, t + threads, t + 2 * threads, ...`. Work per `k` shrinks
/// quadratically, so contiguous blocks would leave the first worker with
/// most of the triplets.
///
/// `threads` is clamped to `1..=n - 2`. One thread runs inline on the caller.
///
/// # Panics
///
/// Panics if either buffer is shorter than `n * n`.
pub fn count_concordant_mt(
    reference: &[f64],
    predicted: &[f64],
    n: usize,
    threads: usize,
) -> Result<u64> {
    let outer = n.saturating_sub(2);
    let threads = threads.clamp(1, outer.max(1));

    if threads == 1 {
        return Ok(count_outer_range(reference, predicted, n, 0..outer));
    }

    let partials: Vec<thread::Result<u64>> = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|tid| {
                s.spawn(move || {
                    (tid..outer)
                        .step_by(threads)
                        .map(|k| count_outer(reference, predicted, n, k))
                        .sum::<u64>()
                })
            })
            .collect();

        handles.into_iter().map(|handle| handle.join()).collect()
    });

    partials
        .into_iter()
        .map(|partial| partial.map_err(|_| ConcordanceError::WorkerPanicked))
        .sum()
}

/// Pick how many threads are worth starting for dimension `n`.
pub fn choose_thread_count(n: usize, max_threads: usize) -> usize {
    let triplets = triplet_count(n);

    const SINGLE_THREAD_THRESHOLD: u64 = 1_000_000;
    const TWO_THREAD_THRESHOLD: u64 = 10_000_000;

    let optimal_threads = if triplets < SINGLE_THREAD_THRESHOLD {
        1
    } else if triplets < TWO_THREAD_THRESHOLD {
        2
    } else {
        max_threads
    };

    let threads_by_outer = n.saturating_sub(2).max(1);

    optimal_threads
        .min(threads_by_outer)
        .min(max_threads)
        .max(1)
}
