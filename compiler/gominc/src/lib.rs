//! `gomin` driver library.
//!
//! Glue between the command line, the filesystem and the rewrite engine:
//! argument parsing, output path derivation, reading and writing files,
//! the rename report and tracing setup. The binary in `main.rs` maps the
//! results to messages and exit codes.

mod args;
mod config;
mod minify;
mod output_path;
mod report;
mod tracing_setup;

pub use args::{parse_args, ArgError, Command};
pub use config::{MinifyConfig, DEFAULT_EXTENSION, DEFAULT_SUFFIX};
pub use minify::{minify_file, MinifyError, MinifyOutcome};
pub use output_path::output_path;
pub use report::write_report;
pub use tracing_setup::init_tracing;
