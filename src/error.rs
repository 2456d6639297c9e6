//! Filter run errors.

use std::io;
use std::path::PathBuf;

/// Errors that end a filter run.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("Error reading file: {}: {}", .path.display(), .source)]
    Open { path: PathBuf, source: io::Error },

    #[error("Error reading file: {0}")]
    Read(#[source] io::Error),

    #[error("Error writing output: {0}")]
    Write(#[source] io::Error),
}

impl FilterError {
    /// The downstream reader went away (`progtrim log | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
