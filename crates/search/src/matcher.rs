//! Evidence matcher: ranked candidate sentences for a free-text query.
//!
//! For every page of every document the matcher segments the page into
//! units, counts the distinct query keywords each lowercased unit contains,
//! scores units with at least one hit and keeps the best `top_k`.
//!
//! # Ordering
//!
//! Results are sorted by score descending. Equal scores are ordered by
//! document name, then page index, then position of the unit on its page,
//! all ascending, so repeated calls over the same input return the same
//! sequence.
//!
//! # Concurrency
//!
//! Matching is a pure synchronous computation over borrowed input. The
//! matcher is `Send + Sync` and holds no mutable state; one instance can
//! serve concurrent queries.

use crate::scorer::{DensityScorer, Scorer, UnitStats};
use crate::segmenter::{is_separator, PunctuationSegmenter, Segmenter};
use crate::tokenizer::KeywordSet;
use caseproof_core::{Document, Match, DEFAULT_TOP_K};
use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, trace};

static DEFAULT_MATCHER: Lazy<EvidenceMatcher> = Lazy::new(EvidenceMatcher::new);

/// Why a search returned what it returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No documents were supplied; nothing was scanned.
    NoDocuments,
    /// The query had no keywords; nothing was scanned.
    NoKeywords,
    /// Documents were scanned. `matches` may still be empty.
    Searched,
}

/// Result of [`EvidenceMatcher::search`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Reason code.
    pub status: SearchStatus,
    /// At most `top_k` matches, best first.
    pub matches: Vec<Match>,
    /// Number of scored units before truncation.
    pub candidates: usize,
}

impl SearchOutcome {
    fn skipped(status: SearchStatus) -> Self {
        Self {
            status,
            matches: Vec::new(),
            candidates: 0,
        }
    }
}

struct Candidate {
    found: Match,
    ordinal: usize,
}

fn rank(a: &Candidate, b: &Candidate) -> Ordering {
    b.found
        .score
        .total_cmp(&a.found.score)
        .then_with(|| a.found.document.cmp(&b.found.document))
        .then_with(|| a.found.page.cmp(&b.found.page))
        .then_with(|| a.ordinal.cmp(&b.ordinal))
}

/// Keyword evidence matcher with a pluggable segmenter and scorer.
#[derive(Clone)]
pub struct EvidenceMatcher {
    segmenter: Arc<dyn Segmenter>,
    scorer: Arc<dyn Scorer>,
}

impl Default for EvidenceMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EvidenceMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvidenceMatcher")
            .field("scorer", &self.scorer.name())
            .finish_non_exhaustive()
    }
}

impl EvidenceMatcher {
    /// Matcher with sentence segmentation and density scoring.
    pub fn new() -> Self {
        Self {
            segmenter: Arc::new(PunctuationSegmenter),
            scorer: Arc::new(DensityScorer),
        }
    }

    /// Replace the segmentation policy.
    pub fn with_segmenter(mut self, segmenter: Arc<dyn Segmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Replace the scoring policy.
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Search `(name, pages)` pairs for `query`.
    ///
    /// Returns [`SearchStatus::NoDocuments`] without scanning when the
    /// iterator is empty, and [`SearchStatus::NoKeywords`] when the query
    /// has no word characters.
    pub fn search<'a, I>(&self, documents: I, query: &str, top_k: usize) -> SearchOutcome
    where
        I: IntoIterator<Item = (&'a str, &'a [String])>,
    {
        let mut documents = documents.into_iter().peekable();
        if documents.peek().is_none() {
            debug!(target: "caseproof::search", "no documents, skipping scan");
            return SearchOutcome::skipped(SearchStatus::NoDocuments);
        }

        let keywords = KeywordSet::from_query(query);
        if keywords.is_empty() {
            debug!(target: "caseproof::search", "query has no keywords, skipping scan");
            return SearchOutcome::skipped(SearchStatus::NoKeywords);
        }

        debug!(
            target: "caseproof::search",
            keywords = keywords.len(),
            scorer = self.scorer.name(),
            top_k,
            "scanning documents"
        );

        let mut candidates = Vec::new();
        for (name, pages) in documents {
            for (page, text) in pages.iter().enumerate() {
                if text.is_empty() {
                    trace!(target: "caseproof::search", document = name, page, "empty page skipped");
                    continue;
                }
                self.scan_page(name, page, text, &keywords, &mut candidates);
            }
        }

        let scored = candidates.len();
        candidates.sort_by(rank);
        candidates.truncate(top_k);

        debug!(
            target: "caseproof::search",
            candidates = scored,
            returned = candidates.len(),
            "scan complete"
        );

        SearchOutcome {
            status: SearchStatus::Searched,
            matches: candidates.into_iter().map(|c| c.found).collect(),
            candidates: scored,
        }
    }

    /// Search a slice of documents. Pending documents contribute no pages.
    pub fn search_documents(&self, documents: &[Document], query: &str, top_k: usize) -> SearchOutcome {
        self.search(
            documents
                .iter()
                .map(|doc| (doc.name.as_str(), doc.page_texts().unwrap_or(&[]))),
            query,
            top_k,
        )
    }

    /// Search a name → page-texts mapping, returning only the matches.
    pub fn find_matches(
        &self,
        documents: &BTreeMap<String, Vec<String>>,
        query: &str,
        top_k: usize,
    ) -> Vec<Match> {
        self.search(
            documents.iter().map(|(name, pages)| (name.as_str(), pages.as_slice())),
            query,
            top_k,
        )
        .matches
    }

    fn scan_page(
        &self,
        name: &str,
        page: usize,
        text: &str,
        keywords: &KeywordSet,
        out: &mut Vec<Candidate>,
    ) {
        for (ordinal, unit) in self.segmenter.segment(text).into_iter().enumerate() {
            let hits = keywords.count_in(&unit.to_lowercase());
            if hits == 0 {
                continue;
            }
            let score = self.scorer.score(&UnitStats::new(hits, unit));
            // Also rejects NaN.
            if !(score > 0.0) {
                continue;
            }
            out.push(Candidate {
                found: Match {
                    document: name.to_string(),
                    page,
                    score,
                    text: unit.trim_matches(is_separator).to_string(),
                },
                ordinal,
            });
        }
    }
}

/// Find the best `top_k` matches for `query` using the default matcher.
///
/// # Example
///
/// ```
/// use caseproof_search::find_matches;
/// use std::collections::BTreeMap;
///
/// let mut docs = BTreeMap::new();
/// docs.insert(
///     "doc1".to_string(),
///     vec!["The patient is homebound. The patient needs skilled nursing care.".to_string()],
/// );
/// let matches = find_matches(&docs, "homebound skilled", 5);
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches[0].text, "The patient is homebound.");
/// ```
pub fn find_matches(
    documents: &BTreeMap<String, Vec<String>>,
    query: &str,
    top_k: usize,
) -> Vec<Match> {
    DEFAULT_MATCHER.find_matches(documents, query, top_k)
}

/// [`find_matches`] with the default bound of five results.
pub fn find_matches_default(documents: &BTreeMap<String, Vec<String>>, query: &str) -> Vec<Match> {
    find_matches(documents, query, DEFAULT_TOP_K)
}
