//! Command Line Interface (CLI) layer for numwords.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for one-shot and interactive
//! conversion. Validation of user text happens here and in
//! `numwords::parse_integer`; the converter itself only ever sees integers.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
