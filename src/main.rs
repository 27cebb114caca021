//! fib - print the shifted Fibonacci sequence up to N
//!
//! Writes `"<i> <F(i)>"` for every `i` in `0..=N`, computed by naive
//! recursion unless `--algorithm iterative` is given.

use clap::Parser;
use recfib::common::logging;
use recfib::{cli, Algorithm, Config};

#[derive(Parser)]
#[command(name = "fib", about = "Print Fibonacci terms 0..=N using naive recursion")]
#[command(version, long_about = None)]
struct Cli {
    /// Last index to print (0 to 91)
    #[arg(value_name = "N", allow_negative_numbers = true)]
    limit: Option<String>,

    /// Implementation used for each term
    #[arg(long, short, value_enum, default_value_t = Algorithm::Recursive)]
    algorithm: Algorithm,
}

fn main() {
    logging::init_cli();

    let args = Cli::parse();

    let result = Config::from_args(args.limit.as_deref(), args.algorithm)
        .and_then(|config| cli::run(&config));

    if let Err(e) = result {
        tracing::debug!(error = ?e, "Run failed");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
