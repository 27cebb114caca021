//! Shifted Fibonacci sequence: F(0) = F(1) = 1, F(k) = F(k-1) + F(k-2)
//!
//! [`fib`] is deliberately the naive doubly-recursive form. It is the
//! thing being measured when this crate is used as a benchmark fixture,
//! so it must stay exponential. [`fib_iterative`] is the linear-time
//! alternative with the same contract.

use clap::ValueEnum;

use crate::common::{Error, Result};

/// Largest index whose term fits in an `i64`.
///
/// F(91) = 7540113804746346429; F(92) exceeds `i64::MAX`.
pub const MAX_INDEX: u32 = 91;

/// Which implementation the driver calls for each term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Algorithm {
    /// Unmemoized double recursion (exponential time)
    #[default]
    Recursive,
    /// Single loop carrying the last two terms (linear time)
    Iterative,
}

impl Algorithm {
    /// Compute the n-th term with this algorithm
    pub fn compute(self, n: u32) -> Result<i64> {
        match self {
            Algorithm::Recursive => fib(n),
            Algorithm::Iterative => fib_iterative(n),
        }
    }
}

/// n-th shifted Fibonacci term by plain recursion.
///
/// No memoization; every call below 2 recurses twice. Recursion depth is
/// at most `n + 1` frames. Returns [`Error::Overflow`] instead of wrapping
/// once a partial sum leaves the `i64` range.
pub fn fib(n: u32) -> Result<i64> {
    if n == 0 || n == 1 {
        return Ok(1);
    }
    let sum = fib(n - 1)?.checked_add(fib(n - 2)?);
    sum.ok_or_else(|| Error::overflow(n))
}

/// n-th shifted Fibonacci term in O(n), same contract as [`fib`].
pub fn fib_iterative(n: u32) -> Result<i64> {
    let (mut prev, mut curr) = (1i64, 1i64);
    for k in 2..=n {
        let next = prev.checked_add(curr).ok_or_else(|| Error::overflow(k))?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(fib(0).unwrap(), 1);
        assert_eq!(fib(1).unwrap(), 1);
        assert_eq!(fib_iterative(0).unwrap(), 1);
        assert_eq!(fib_iterative(1).unwrap(), 1);
    }

    #[test]
    fn test_known_terms() {
        let expected = [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(fib(n as u32).unwrap(), *want, "fib({n})");
        }
    }

    #[test]
    fn test_recurrence_against_iterative_reference() {
        for n in 2..=30 {
            let got = fib(n).unwrap();
            assert_eq!(got, fib(n - 1).unwrap() + fib(n - 2).unwrap());
            assert_eq!(got, fib_iterative(n).unwrap(), "n = {n}");
        }
    }

    #[test]
    fn test_iterative_range_limit() {
        assert_eq!(fib_iterative(MAX_INDEX).unwrap(), 7_540_113_804_746_346_429);

        match fib_iterative(MAX_INDEX + 1) {
            Err(Error::Overflow { index, max }) => {
                assert_eq!(index, (MAX_INDEX + 1).to_string());
                assert_eq!(max, MAX_INDEX);
            }
            other => panic!("Expected Overflow, got {other:?}"),
        }
    }

    #[test]
    fn test_algorithm_dispatch() {
        assert_eq!(Algorithm::default(), Algorithm::Recursive);
        assert_eq!(Algorithm::Recursive.compute(20).unwrap(), 10_946);
        assert_eq!(Algorithm::Iterative.compute(20).unwrap(), 10_946);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(fib(25).unwrap(), fib(25).unwrap());
    }
}
