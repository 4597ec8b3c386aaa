//! Page-text sources.
//!
//! A source yields one plain-text string per physical page. PDF byte
//! decoding lives upstream; the sources here read text that has already
//! been pulled out of the PDF.

use crate::error::{ExtractError, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Page separator written by common PDF-to-text tools.
pub const FORM_FEED: u8 = 0x0c;

/// A source of per-page plain text.
pub trait PageTextSource: Send + Sync {
    /// Number of physical pages.
    fn page_count(&self) -> usize;

    /// Text of page `index` (zero-based).
    fn page_text(&self, index: usize) -> Result<String>;
}

/// Extract every page of `source`, in order.
///
/// A page that fails to extract becomes an empty string, so the result
/// always has exactly `page_count()` entries.
pub fn extract_pages(name: &str, source: &dyn PageTextSource) -> Vec<String> {
    (0..source.page_count())
        .map(|page| match source.page_text(page) {
            Ok(text) => text,
            Err(e) => {
                warn!(target: "caseproof::ingest", document = name, page, error = %e, "page extraction failed, using empty text");
                String::new()
            }
        })
        .collect()
}

/// Document name for a file: its file name, or the whole path if it has none.
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Plain text with pages separated by form feeds.
///
/// A single trailing form feed ends the last page rather than starting an
/// empty one. Pages are decoded as UTF-8 independently, so one bad page
/// does not spoil the rest.
///
/// ```
/// use caseproof_ingest::{FormFeedTextSource, PageTextSource};
///
/// let src = FormFeedTextSource::from_bytes(b"Page one.\x0cPage two.\x0c".to_vec());
/// assert_eq!(src.page_count(), 2);
/// assert_eq!(src.page_text(1).unwrap(), "Page two.");
/// ```
#[derive(Debug, Clone)]
pub struct FormFeedTextSource {
    path: Option<PathBuf>,
    pages: Vec<Vec<u8>>,
}

impl FormFeedTextSource {
    /// Source over raw bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let mut pages: Vec<Vec<u8>> = bytes
            .split(|b| *b == FORM_FEED)
            .map(<[u8]>::to_vec)
            .collect();
        if pages.len() > 1 && pages.last().map_or(false, Vec::is_empty) {
            pages.pop();
        }
        if pages.len() == 1 && pages[0].is_empty() {
            pages.clear();
        }
        Self { path: None, pages }
    }

    /// Read a text file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut src = Self::from_bytes(bytes);
        src.path = Some(path.to_path_buf());
        Ok(src)
    }

    /// File this source was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl PageTextSource for FormFeedTextSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        let bytes = self.pages.get(index).ok_or(ExtractError::PageOutOfRange {
            index,
            page_count: self.pages.len(),
        })?;
        String::from_utf8(bytes.clone()).map_err(|e| ExtractError::Unreadable {
            page: index,
            reason: e.to_string(),
        })
    }
}

/// In-memory pages. `None` marks a page whose extraction fails.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pages: Vec<Option<String>>,
}

impl InMemorySource {
    /// Source where every page extracts successfully.
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(|p| Some(p.into())).collect(),
        }
    }

    /// Source with explicit failing pages.
    pub fn with_failures(pages: Vec<Option<String>>) -> Self {
        Self { pages }
    }
}

impl PageTextSource for InMemorySource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        match self.pages.get(index) {
            Some(Some(text)) => Ok(text.clone()),
            Some(None) => Err(ExtractError::Unreadable {
                page: index,
                reason: "no text layer".to_string(),
            }),
            None => Err(ExtractError::PageOutOfRange {
                index,
                page_count: self.pages.len(),
            }),
        }
    }
}
