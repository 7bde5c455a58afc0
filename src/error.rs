//! Recoverable errors at the CLI/command-file boundary.
//!
//! The core dictionary (`leaf`, `tree`) never returns an error: its
//! preconditions are programmer errors, caught by `debug_assert!` in debug
//! builds and left undefined in release. Everything in this enum instead
//! belongs to the ambient layer wrapped around it — malformed command-file
//! lines and I/O failure.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("line {line}: unknown command {verb:?}")]
    UnknownCommand { line: usize, verb: String },

    #[error("line {line}: command {verb:?} expects {expected} argument(s), got {got}")]
    WrongArgCount {
        line: usize,
        verb: String,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: argument {arg:?} is not a valid unsigned integer")]
    NotANumber { line: usize, arg: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
