//! Keyword evidence matching for Caseproof.
//!
//! This crate contains:
//! - `tokenizer`: query keyword extraction
//! - `segmenter`: pluggable splitting of page text into units
//! - `scorer`: pluggable unit scoring (keyword density by default)
//! - `matcher`: the scan, rank and truncate loop

pub mod matcher;
pub mod scorer;
pub mod segmenter;
pub mod tokenizer;

pub use matcher::{find_matches, find_matches_default, EvidenceMatcher, SearchOutcome, SearchStatus};
pub use scorer::{DensityScorer, Scorer, UnitStats};
pub use segmenter::{PunctuationSegmenter, Segmenter};
pub use tokenizer::{tokenize, KeywordSet};
