//! Search result and its single-release handle.
//!
//! `Solution` owns the winning permutation as a boxed slice; dropping it frees
//! everything. `SolutionSlot` is for foreign callers that manage lifetime
//! explicitly: `release` hands the result back once, and every later access
//! reports `ReleaseError::AlreadyReleased` instead of touching freed memory.

use std::fmt;

use serde::Serialize;

/// How the search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A crossing-free assignment was found.
    Found,
    /// All `n_above!` permutations were tried.
    Exhausted,
    /// The attempt cap was hit first.
    Capped,
}

/// Result of one search invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Solution {
    outcome: Outcome,
    /// Above-source position → via index. Present iff `outcome == Found`.
    permutation: Option<Box<[usize]>>,
    attempts: u64,
}

impl Solution {
    pub fn found(permutation: Box<[usize]>, attempts: u64) -> Self {
        Self {
            outcome: Outcome::Found,
            permutation: Some(permutation),
            attempts,
        }
    }

    pub fn exhausted(attempts: u64) -> Self {
        Self {
            outcome: Outcome::Exhausted,
            permutation: None,
            attempts,
        }
    }

    pub fn capped(attempts: u64) -> Self {
        Self {
            outcome: Outcome::Capped,
            permutation: None,
            attempts,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.outcome == Outcome::Found
    }
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    #[inline]
    pub fn attempts(&self) -> u64 {
        self.attempts
    }
    #[inline]
    pub fn permutation(&self) -> Option<&[usize]> {
        self.permutation.as_deref()
    }
    /// Take ownership of the permutation buffer.
    pub fn into_permutation(self) -> Option<Box<[usize]>> {
        self.permutation
    }
}

/// Misuse of a released `SolutionSlot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseError {
    AlreadyReleased,
}

impl fmt::Display for ReleaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseError::AlreadyReleased => write!(f, "solution was already released"),
        }
    }
}

impl std::error::Error for ReleaseError {}

/// Single-owner, single-release wrapper used at the foreign-call boundary.
#[derive(Debug)]
pub struct SolutionSlot {
    inner: Option<Solution>,
}

impl SolutionSlot {
    pub fn new(solution: Solution) -> Self {
        Self {
            inner: Some(solution),
        }
    }

    pub fn get(&self) -> Result<&Solution, ReleaseError> {
        self.inner.as_ref().ok_or(ReleaseError::AlreadyReleased)
    }

    /// Release the result; a second call is an error, never a double free.
    pub fn release(&mut self) -> Result<Solution, ReleaseError> {
        self.inner.take().ok_or(ReleaseError::AlreadyReleased)
    }

    #[inline]
    pub fn is_released(&self) -> bool {
        self.inner.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_carries_permutation() {
        let s = Solution::found(vec![1, 0].into_boxed_slice(), 2);
        assert!(s.is_found());
        assert_eq!(s.permutation(), Some(&[1, 0][..]));
        assert_eq!(s.attempts(), 2);
        assert_eq!(s.into_permutation().as_deref(), Some(&[1usize, 0][..]));
    }

    #[test]
    fn failures_have_no_permutation() {
        assert_eq!(Solution::exhausted(6).permutation(), None);
        let c = Solution::capped(4);
        assert_eq!(c.outcome(), Outcome::Capped);
        assert!(!c.is_found());
        assert_eq!(c.attempts(), 4);
    }

    #[test]
    fn slot_releases_exactly_once() {
        let mut slot = SolutionSlot::new(Solution::exhausted(1));
        assert!(slot.get().is_ok());
        assert_eq!(slot.release().map(|s| s.attempts()), Ok(1));
        assert!(slot.is_released());
        assert_eq!(slot.release(), Err(ReleaseError::AlreadyReleased));
        assert_eq!(slot.get().err(), Some(ReleaseError::AlreadyReleased));
    }
}
