use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Report-level error
// ---------------------------------------------------------------------------

/// Failure modes of a report run.
///
/// A missing source file is reported distinctly; every other failure during
/// load, render, or save is collapsed into [`ReportError::Failure`] with the
/// underlying message preserved.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input path does not resolve to a readable file.
    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Any other failure, message surfaced verbatim.
    #[error(transparent)]
    Failure(#[from] anyhow::Error),
}
