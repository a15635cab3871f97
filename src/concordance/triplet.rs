/// Three strictly increasing indices `k < l < m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triplet {
    pub k: usize,
    pub l: usize,
    pub m: usize,
}

/// Number of triplets drawn from `n` indices: `C(n, 3)`.
///
/// ```
/// use triplet_concordance::triplet_count;
///
/// assert_eq!(triplet_count(2), 0);
/// assert_eq!(triplet_count(3), 1);
/// assert_eq!(triplet_count(10), 120);
/// ```
pub fn triplet_count(n: usize) -> u64 {
    if n < 3 {
        return 0;
    }
    let n = n as u64;
    // n(n-1)/2 is exact, and the product with (n-2) still carries the factor 3.
    n * (n - 1) / 2 * (n - 2) / 3
}

/// Every triplet over `[0, n)` in lexicographic order.
///
/// ```
/// use triplet_concordance::{Triplet, Triplets};
///
/// let all: Vec<Triplet> = Triplets::new(4).collect();
/// assert_eq!(all.len(), 4);
/// assert_eq!(all[0], Triplet { k: 0, l: 1, m: 2 });
/// assert_eq!(all[3], Triplet { k: 1, l: 2, m: 3 });
/// ```
#[derive(Debug, Clone)]
pub struct Triplets {
    n: usize,
    next: Option<Triplet>,
    remaining: u64,
}

impl Triplets {
    pub fn new(n: usize) -> Self {
        let next = (n >= 3).then_some(Triplet { k: 0, l: 1, m: 2 });
        Self {
            n,
            next,
            remaining: triplet_count(n),
        }
    }

    fn successor(&self, t: Triplet) -> Option<Triplet> {
        let n = self.n;
        if t.m + 1 < n {
            Some(Triplet { m: t.m + 1, ..t })
        } else if t.l + 2 < n {
            Some(Triplet {
                k: t.k,
                l: t.l + 1,
                m: t.l + 2,
            })
        } else if t.k + 3 < n {
            Some(Triplet {
                k: t.k + 1,
                l: t.k + 2,
                m: t.k + 3,
            })
        } else {
            None
        }
    }
}

impl Iterator for Triplets {
    type Item = Triplet;

    fn next(&mut self) -> Option<Triplet> {
        let current = self.next?;
        self.next = self.successor(current);
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(r) => (r, Some(r)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Triplets {}
