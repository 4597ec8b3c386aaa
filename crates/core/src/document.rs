//! Documents and their extraction state.

use serde::{Deserialize, Serialize};

/// Page texts of a document, or a marker that extraction has not run yet.
///
/// Page order is insertion order and page indices are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "value")]
pub enum PageTexts {
    /// The source has not been extracted. Holds the known page count.
    Pending {
        /// Number of physical pages in the source.
        page_count: usize,
    },
    /// One plain-text string per page. A failed page is an empty string.
    Extracted(Vec<String>),
}

impl PageTexts {
    /// Whether extraction has produced page texts.
    pub fn is_extracted(&self) -> bool {
        matches!(self, PageTexts::Extracted(_))
    }

    /// Number of pages, known in both states.
    pub fn page_count(&self) -> usize {
        match self {
            PageTexts::Pending { page_count } => *page_count,
            PageTexts::Extracted(pages) => pages.len(),
        }
    }

    /// Extracted page texts, or `None` while pending.
    pub fn as_extracted(&self) -> Option<&[String]> {
        match self {
            PageTexts::Extracted(pages) => Some(pages),
            PageTexts::Pending { .. } => None,
        }
    }
}

impl Default for PageTexts {
    fn default() -> Self {
        PageTexts::Extracted(Vec::new())
    }
}

/// A named document.
///
/// The name is the document's unique key within a document set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document name (typically the uploaded file name).
    pub name: String,
    /// Page texts, possibly not yet extracted.
    pub pages: PageTexts,
}

impl Document {
    /// Create a document whose page texts are already extracted.
    pub fn extracted<N, I, S>(name: N, pages: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            pages: PageTexts::Extracted(pages.into_iter().map(Into::into).collect()),
        }
    }

    /// Create a document that still needs extraction.
    pub fn pending(name: impl Into<String>, page_count: usize) -> Self {
        Self {
            name: name.into(),
            pages: PageTexts::Pending { page_count },
        }
    }

    /// Page texts if extracted.
    pub fn page_texts(&self) -> Option<&[String]> {
        self.pages.as_extracted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracted_document() {
        let doc = Document::extracted("referral.pdf", ["page one", "", "page three"]);
        assert_eq!(doc.name, "referral.pdf");
        assert!(doc.pages.is_extracted());
        assert_eq!(doc.pages.page_count(), 3);
        assert_eq!(doc.page_texts().unwrap()[1], "");
    }

    #[test]
    fn test_pending_document_has_no_texts() {
        let doc = Document::pending("oasis.pdf", 12);
        assert!(!doc.pages.is_extracted());
        assert_eq!(doc.pages.page_count(), 12);
        assert!(doc.page_texts().is_none());
    }

    #[test]
    fn test_zero_page_document_is_valid() {
        let doc = Document::extracted("empty.pdf", Vec::<String>::new());
        assert_eq!(doc.pages.page_count(), 0);
        assert_eq!(doc.page_texts(), Some(&[][..]));
    }

    #[test]
    fn test_page_texts_serde_tagged() {
        let json = serde_json::to_string(&PageTexts::Pending { page_count: 2 }).unwrap();
        assert_eq!(json, r#"{"state":"pending","value":{"page_count":2}}"#);
        let back: PageTexts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PageTexts::Pending { page_count: 2 });
    }
}
