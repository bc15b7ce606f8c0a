//! Command Line Interface (CLI) layer for mipgen.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that merges flags with an optional
//! JSON config and drives the library pipeline exposed via `mipgen::api`.
//!
//! If you are embedding mipgen into another tool, prefer the high-level
//! `mipgen::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
