//! Command-line interface for the diagnostic.
//!
//! - [`args`] - Argument definitions using clap derive macros

pub mod args;

pub use args::Cli;
