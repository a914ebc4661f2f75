//! Command line front end: `args` declares the flags, `errors` the failures
//! specific to the binary, and `runner` sets up logging and drives the library
//! in single-file or batch mode.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
