//! Command-line interface definitions and helpers.

mod args;

pub use args::{parse, ArgumentError, Args, EXPECTED_ARGS};
