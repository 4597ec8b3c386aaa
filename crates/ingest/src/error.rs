//! Extraction errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for source operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Failure to read a page-text source or one of its pages.
///
/// Per-page failures never reach the matcher: [`extract_pages`](crate::extract_pages)
/// turns them into empty page text. Only failures to open a whole source
/// are returned to callers.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Page index past the end of the source
    #[error("page {index} out of range (source has {page_count} pages)")]
    PageOutOfRange {
        /// Requested page
        index: usize,
        /// Pages in the source
        page_count: usize,
    },
    /// The page exists but its text could not be recovered
    #[error("page {page} unreadable: {reason}")]
    Unreadable {
        /// Page index
        page: usize,
        /// Why
        reason: String,
    },
}
