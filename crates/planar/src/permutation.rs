//! Lexicographic permutation walk over via-point indices.
//!
//! `next_permutation` is the classic successor step (rightmost ascent, swap,
//! reverse suffix) and visits all `n!` orderings starting from the identity.
//! `nth_permutation` unranks a lexicographic index so parallel workers can start
//! mid-sequence.

/// Identity permutation `[0, 1, .., n-1]`.
#[inline]
pub fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Advance `perm` to its lexicographic successor.
///
/// Returns `false` when `perm` was the last ordering; it is then reset to the
/// first (sorted) ordering.
pub fn next_permutation(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }
    let mut i = n - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        perm.reverse();
        return false;
    }
    let pivot = i - 1;
    let mut j = n - 1;
    while perm[j] <= perm[pivot] {
        j -= 1;
    }
    perm.swap(pivot, j);
    perm[i..].reverse();
    true
}

/// `n!`, or `None` when it does not fit in `u64` (n > 20).
pub fn factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// The `k`-th (0-based) lexicographic permutation of `0..n`.
///
/// Returns `None` when `k >= n!`.
pub fn nth_permutation(n: usize, mut k: u64) -> Option<Vec<usize>> {
    if let Some(total) = factorial(n) {
        if k >= total {
            return None;
        }
    }
    let mut pool = identity(n);
    let mut out = Vec::with_capacity(n);
    for pos in 0..n {
        // (m)! larger than u64::MAX means the digit is necessarily 0.
        let digit = match factorial(n - 1 - pos) {
            Some(block) => {
                let d = k / block;
                k %= block;
                d as usize
            }
            None => 0,
        };
        out.push(pool.remove(digit));
    }
    Some(out)
}

/// Every value of `0..perm.len()` appears exactly once.
pub fn is_permutation(perm: &[usize]) -> bool {
    let mut seen = vec![false; perm.len()];
    perm.iter()
        .all(|&v| v < seen.len() && !std::mem::replace(&mut seen[v], true))
}
