//! recfib - naive recursive Fibonacci sequence printer
//!
//! Prints the shifted Fibonacci sequence (F(0) = F(1) = 1) for indices
//! `0..=N` using unmemoized recursion. Intended as a smoke test and a
//! benchmark fixture for recursive call overhead.

pub mod cli;
pub mod common;
pub mod fib;

pub use common::{Config, Error, Result};
pub use fib::{fib, fib_iterative, Algorithm, MAX_INDEX};
