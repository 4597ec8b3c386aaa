//! Caseproof: keyword evidence retrieval for home-health assessment review.
//!
//! Given a free-text query and a set of documents (each an ordered list of
//! extracted page texts), Caseproof returns the best matching sentences
//! with their document, page and score, ready to cite or to ground a
//! model prompt.
//!
//! ```
//! use caseproof::{format_evidence, DocumentStore};
//!
//! let store = DocumentStore::new();
//! store
//!     .insert_extracted("oasis.pdf", ["The patient is homebound. The patient needs skilled nursing care."])
//!     .unwrap();
//!
//! let outcome = store.search("homebound", 5);
//! assert_eq!(
//!     format_evidence(&outcome.matches),
//!     "[1] oasis.pdf p.1: The patient is homebound.\n"
//! );
//! ```

pub mod types;

pub use types::*;

pub use caseproof_core::{format_evidence, DEFAULT_TOP_K};
pub use caseproof_ingest::{
    document_name, extract_pages, DocumentStore, FormFeedTextSource, InMemorySource,
    PageTextSource,
};
pub use caseproof_search::{
    find_matches, find_matches_default, DensityScorer, EvidenceMatcher, KeywordSet,
    PunctuationSegmenter, Scorer, Segmenter, UnitStats,
};
