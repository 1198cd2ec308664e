//! Library half of the `arbor` binary.
//!
//! Exposes argument parsing, command execution and logging set-up so tests
//! and doctests can drive commands without spawning a process.

pub mod cli;
pub mod logging;
