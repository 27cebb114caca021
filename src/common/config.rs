//! Run configuration
//!
//! The program reads no config files; its whole configuration is the
//! positional `N` plus the algorithm flag, validated here before any
//! term is computed.

use std::num::{IntErrorKind, ParseIntError};

use crate::fib::{Algorithm, MAX_INDEX};

use super::{Error, Result};

/// Validated settings for one run of the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Last index to print (inclusive)
    pub limit: u32,

    /// Implementation used for each term
    pub algorithm: Algorithm,
}

impl Config {
    /// Build a config from the raw positional argument
    pub fn from_args(raw: Option<&str>, algorithm: Algorithm) -> Result<Self> {
        let raw = raw.ok_or(Error::MissingArgument)?;
        Ok(Self {
            limit: parse_limit(raw)?,
            algorithm,
        })
    }
}

/// Parse `N` as a base-10 integer in `0..=MAX_INDEX`
///
/// Integers outside the `i64` range are still integers: they are reported
/// as negative or out of range, never as unparseable.
pub fn parse_limit(raw: &str) -> Result<u32> {
    let text = raw.trim();
    let value: i64 = text.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::NegOverflow => Error::negative_argument(text),
        IntErrorKind::PosOverflow => Error::overflow(text.trim_start_matches('+')),
        _ => Error::invalid_argument(raw),
    })?;

    if value < 0 {
        return Err(Error::negative_argument(value));
    }
    match u32::try_from(value) {
        Ok(limit) if limit <= MAX_INDEX => Ok(limit),
        _ => Err(Error::overflow(value)),
    }
}
