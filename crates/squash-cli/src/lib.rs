//! Command-line driver for the squash minifier.
//!
//! Reads syntax trees serialized as JSON, runs the optimizer over them and
//! prints the result. The engine itself lives in `squash-optimizer`.

pub mod args;
pub mod driver;
pub mod tracing_config;
