//! Sequence driver
//!
//! Computes terms `0..=limit` and writes one `"<i> <value>"` line per term.

use std::io::{self, BufWriter, Write};
use std::time::Instant;

use crate::common::{Config, Result};

/// Run the driver against stdout
pub fn run(config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_sequence(config, &mut out)
}

/// Write every term up to `config.limit` to `out`, then flush
///
/// The limit has already been range-checked by [`Config`], so the only
/// failure left here is a write error.
pub fn write_sequence<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    tracing::debug!(
        limit = config.limit,
        algorithm = ?config.algorithm,
        "Printing sequence"
    );

    for i in 0..=config.limit {
        let started = Instant::now();
        let value = config.algorithm.compute(i)?;
        tracing::trace!(index = i, value, elapsed = ?started.elapsed(), "Computed term");

        writeln!(out, "{} {}", i, value)?;
    }

    out.flush()?;
    Ok(())
}
