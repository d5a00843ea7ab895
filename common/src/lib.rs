//! # Guide Common
//!
//! Pieces shared by every crate of the workspace:
//!
//! * **[`config`]**: runtime settings collected from the command line.
//! * **[`output`]**: the [`output::Console`] port the demonstrations write to,
//!   plus an in-memory [`output::Transcript`] implementation.

pub mod config;
pub mod output;
