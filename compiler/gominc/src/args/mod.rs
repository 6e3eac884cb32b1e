//! Command-line parsing.
//!
//! Hand-rolled: one positional path plus a few `--name=value` flags.

use thiserror::Error;

use crate::MinifyConfig;

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Rewrite `input` into its derived output path.
    Minify { input: String, config: MinifyConfig },
    /// No input path was given.
    NoInput,
    Help,
    Version,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unexpected argument '{0}', only one input file is accepted")]
    UnexpectedArgument(String),

    #[error("invalid window size '{0}', expected a positive integer")]
    InvalidWindow(String),

    #[error("option '{0}' needs a non-empty value")]
    EmptyValue(&'static str),
}

/// Parse the arguments that follow the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, ArgError> {
    let mut config = MinifyConfig::default();
    let mut input: Option<String> = None;

    if let Some(first) = args.first() {
        match first.as_ref() {
            "help" | "--help" | "-h" => return Ok(Command::Help),
            "version" | "--version" | "-V" => return Ok(Command::Version),
            _ => {}
        }
    }

    for arg in args.iter().map(AsRef::as_ref) {
        if let Some(ext) = arg.strip_prefix("--ext=") {
            if ext.is_empty() {
                return Err(ArgError::EmptyValue("--ext"));
            }
            config.extension = ext.to_owned();
        } else if let Some(suffix) = arg.strip_prefix("--suffix=") {
            if suffix.is_empty() {
                return Err(ArgError::EmptyValue("--suffix"));
            }
            config.suffix = suffix.to_owned();
        } else if let Some(window) = arg.strip_prefix("--window=") {
            config.rewrite.window = window
                .parse()
                .map_err(|_| ArgError::InvalidWindow(window.to_owned()))?;
        } else if arg == "--quiet" || arg == "-q" {
            config.quiet = true;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(ArgError::UnknownOption(arg.to_owned()));
        } else if input.is_none() {
            input = Some(arg.to_owned());
        } else {
            return Err(ArgError::UnexpectedArgument(arg.to_owned()));
        }
    }

    Ok(match input {
        Some(input) => Command::Minify { input, config },
        None => Command::NoInput,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;
