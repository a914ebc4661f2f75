//! `letterbox` binary.
//!
//! Parses the command line and hands off to `cli::run`, which letterboxes one
//! file (`--input`) or a whole directory (`--input-dir`). An error from any
//! image ends the process with a non-zero status.

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
