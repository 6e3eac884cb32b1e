//! File-level driver: read, rewrite, write.

use std::fs::File;
use std::io::{self, BufWriter};

use gomin_lexer::{SourceBuffer, Tokenizer};
use gomin_rewrite::{RenameTable, RewriteError, RewriteStats, Rewriter};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{output_path, MinifyConfig};

/// A failed `gomin` run. Each variant renders as a one-line message.
#[derive(Error, Debug)]
pub enum MinifyError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot create '{path}': {source}")]
    Create {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("error writing '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Rewrite(RewriteError),
}

/// Result of a successful run.
#[derive(Debug)]
pub struct MinifyOutcome {
    /// Where the rewritten source was written.
    pub output: String,
    /// Every rename applied.
    pub table: RenameTable,
    pub stats: RewriteStats,
}

/// Rewrite the file at `input` into its derived output path.
#[tracing::instrument(level = "debug", skip(config))]
pub fn minify_file(input: &str, config: &MinifyConfig) -> Result<MinifyOutcome, MinifyError> {
    // Validate options before touching the filesystem.
    let mut rewriter = Rewriter::new(config.rewrite).map_err(MinifyError::Rewrite)?;

    let source = read_source(input)?;
    let output = output_path(input, &config.extension, &config.suffix);
    if output == input {
        warn!(path = input, extension = %config.extension, "output path equals input path, overwriting input");
    }
    debug!(output = %output, bytes = source.len(), "rewriting");

    let file = File::create(&output).map_err(|source| MinifyError::Create {
        path: output.clone(),
        source,
    })?;
    let mut sink = BufWriter::new(file);

    let buf = SourceBuffer::new(&source);
    let stats = rewriter
        .rewrite(Tokenizer::new(&buf), &mut sink)
        .map_err(|err| match err {
            RewriteError::Io(source) => MinifyError::Write {
                path: output.clone(),
                source,
            },
            other => MinifyError::Rewrite(other),
        })?;

    let (table, _) = rewriter.into_parts();
    Ok(MinifyOutcome {
        output,
        table,
        stats,
    })
}

/// Read the whole input file, mapping common failures to short messages.
fn read_source(path: &str) -> Result<String, MinifyError> {
    std::fs::read_to_string(path).map_err(|e| {
        let path = path.to_owned();
        match e.kind() {
            io::ErrorKind::NotFound => MinifyError::NotFound { path },
            io::ErrorKind::PermissionDenied => MinifyError::PermissionDenied { path },
            io::ErrorKind::InvalidData => MinifyError::InvalidUtf8 { path },
            _ => MinifyError::Read { path, source: e },
        }
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
