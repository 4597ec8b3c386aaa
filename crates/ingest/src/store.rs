//! Document store with extraction on demand.
//!
//! The store owns the uploaded documents of one workspace session. A
//! document added from a source stays [`PageTexts::Pending`] until it is
//! first searched (or [`DocumentStore::ensure_extracted`] is called), and
//! its page texts are cached from then on.
//!
//! # Thread Safety
//!
//! Entries sit behind a `parking_lot::RwLock`. Mutations take the write
//! lock; a search holds the read lock for its whole scan, so it never sees
//! a half-applied insert or remove.
//!
//! Each entry owns a [`Slot`] whose page texts live in a `OnceCell`.
//! Extraction runs without the map lock held and fills only the slot it was
//! started for: a document removed and re-inserted under the same name gets
//! a fresh slot, so it never receives the old document's pages. Concurrent
//! first searches of one document extract it once; the others wait on the
//! cell.

use crate::source::{extract_pages, PageTextSource};
use caseproof_core::{AppConfig, Document, DocumentError, InputLimits, PageTexts};
use caseproof_search::{EvidenceMatcher, SearchOutcome};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// One inserted document. Replaced, never reused, on re-insert.
struct Slot {
    source: Option<Arc<dyn PageTextSource>>,
    page_count: usize,
    pages: OnceCell<Vec<String>>,
}

impl Slot {
    fn from_source(source: Arc<dyn PageTextSource>) -> Self {
        Self {
            page_count: source.page_count(),
            source: Some(source),
            pages: OnceCell::new(),
        }
    }

    fn from_pages(pages: Vec<String>) -> Self {
        Self {
            source: None,
            page_count: pages.len(),
            pages: OnceCell::with_value(pages),
        }
    }

    fn page_texts(&self) -> PageTexts {
        match self.pages.get() {
            Some(pages) => PageTexts::Extracted(pages.clone()),
            None => PageTexts::Pending {
                page_count: self.page_count,
            },
        }
    }

    fn needs_extraction(&self) -> bool {
        self.pages.get().is_none() && self.source.is_some()
    }
}

/// Named documents plus the matcher and input bounds used to search them.
pub struct DocumentStore {
    entries: RwLock<BTreeMap<String, Arc<Slot>>>,
    matcher: EvidenceMatcher,
    limits: InputLimits,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore")
            .field("documents", &self.names())
            .field("matcher", &self.matcher)
            .field("limits", &self.limits)
            .finish()
    }
}

impl DocumentStore {
    /// Empty store with the default matcher and no input bounds.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            matcher: EvidenceMatcher::new(),
            limits: InputLimits::unbounded(),
        }
    }

    /// Empty store bounded by the config's input limits.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new().with_limits(config.limits)
    }

    /// Use a different matcher.
    pub fn with_matcher(mut self, matcher: EvidenceMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Bound the text each search scans.
    pub fn with_limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Add a document that is extracted on first use.
    pub fn insert_source(
        &self,
        name: impl Into<String>,
        source: Arc<dyn PageTextSource>,
    ) -> Result<(), DocumentError> {
        self.insert(name.into(), Slot::from_source(source))
    }

    /// Add a document whose page texts are already known.
    pub fn insert_extracted<I, S>(&self, name: impl Into<String>, pages: I) -> Result<(), DocumentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(
            name.into(),
            Slot::from_pages(pages.into_iter().map(Into::into).collect()),
        )
    }

    fn insert(&self, name: String, slot: Slot) -> Result<(), DocumentError> {
        let mut entries = self.entries.write();
        if entries.contains_key(&name) {
            return Err(DocumentError::DuplicateName(name));
        }
        debug!(target: "caseproof::ingest", document = %name, pages = slot.page_count, "document added");
        entries.insert(name, Arc::new(slot));
        Ok(())
    }

    /// Remove a document, returning its last known state.
    pub fn remove(&self, name: &str) -> Result<Document, DocumentError> {
        let slot = self
            .entries
            .write()
            .remove(name)
            .ok_or_else(|| DocumentError::NotFound(name.to_string()))?;
        Ok(Document {
            name: name.to_string(),
            pages: slot.page_texts(),
        })
    }

    /// Snapshot of one document.
    pub fn get(&self, name: &str) -> Option<Document> {
        self.entries.read().get(name).map(|slot| Document {
            name: name.to_string(),
            pages: slot.page_texts(),
        })
    }

    /// Whether a document with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Document names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True if the store has no documents.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn slot(&self, name: &str) -> Result<Arc<Slot>, DocumentError> {
        self.entries
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| DocumentError::NotFound(name.to_string()))
    }

    /// Extract a pending document. Returns its page count.
    ///
    /// Idempotent: an already extracted document is left as is. If the
    /// document is replaced while extraction runs, the replacement is
    /// extracted instead.
    pub fn ensure_extracted(&self, name: &str) -> Result<usize, DocumentError> {
        let slot = self.slot(name)?;
        let source = match &slot.source {
            Some(source) => source,
            None => return Ok(slot.page_count),
        };

        let pages = slot.pages.get_or_init(|| {
            let pages = extract_pages(name, source.as_ref());
            info!(target: "caseproof::ingest", document = name, pages = pages.len(), "page texts extracted");
            pages
        });

        match self.slot(name) {
            Ok(current) if Arc::ptr_eq(&current, &slot) => Ok(pages.len()),
            Ok(_) => {
                debug!(target: "caseproof::ingest", document = name, "document replaced during extraction");
                self.ensure_extracted(name)
            }
            Err(e) => Err(e),
        }
    }

    /// Extract every pending document. Returns how many were extracted.
    pub fn extract_all(&self) -> usize {
        let pending: Vec<String> = self
            .entries
            .read()
            .iter()
            .filter(|(_, slot)| slot.needs_extraction())
            .map(|(name, _)| name.clone())
            .collect();

        pending
            .iter()
            // A document removed meanwhile is simply skipped.
            .filter(|name| self.ensure_extracted(name).is_ok())
            .count()
    }

    /// Search all documents, extracting pending ones first.
    pub fn search(&self, query: &str, top_k: usize) -> SearchOutcome {
        self.extract_all();

        let entries = self.entries.read();
        let bounded: Vec<(&str, Cow<'_, [String]>)> = entries
            .iter()
            .map(|(name, slot)| {
                let pages = slot.pages.get().map_or(&[][..], Vec::as_slice);
                (name.as_str(), self.bound(pages))
            })
            .collect();

        self.matcher
            .search(bounded.iter().map(|(name, pages)| (*name, &**pages)), query, top_k)
    }

    fn bound<'a>(&self, pages: &'a [String]) -> Cow<'a, [String]> {
        let pages = &pages[..self.limits.page_bound(pages.len())];
        if self.limits.max_chars_per_page.is_none() {
            return Cow::Borrowed(pages);
        }
        Cow::Owned(
            pages
                .iter()
                .map(|p| self.limits.clip_page(p).to_string())
                .collect(),
        )
    }
}
