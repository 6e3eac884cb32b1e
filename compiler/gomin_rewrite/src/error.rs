use thiserror::Error;

/// Failures of a rewrite run.
///
/// Allocator exhaustion is not here: an exhausted allocator leaves the
/// declared name as written and the run carries on.
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("window of {requested} tokens is too small, need at least {minimum}")]
    WindowTooSmall { requested: usize, minimum: usize },

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}
