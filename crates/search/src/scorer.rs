//! Unit scoring.

use crate::segmenter::is_separator;

/// Per-unit counts a scorer works from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitStats {
    /// Distinct query keywords found in the unit.
    pub keyword_hits: usize,
    /// Whitespace-delimited tokens in the original unit.
    pub word_count: usize,
}

impl UnitStats {
    /// Compute stats for `unit` against a precomputed hit count.
    ///
    /// Words are separated by the same characters the sentence splitter
    /// treats as whitespace.
    pub fn new(keyword_hits: usize, unit: &str) -> Self {
        Self {
            keyword_hits,
            word_count: unit.split(is_separator).filter(|w| !w.is_empty()).count(),
        }
    }
}

/// Scores a unit that has at least one keyword hit.
///
/// Units scoring `<= 0.0` (or NaN) are dropped by the matcher.
pub trait Scorer: Send + Sync {
    /// Score a unit.
    fn score(&self, stats: &UnitStats) -> f64;

    /// Scorer name for logging.
    fn name(&self) -> &str;
}

/// Keyword-hit density: `hits / (words + 1)`.
///
/// The `+ 1` keeps empty units defined and damps very short units, so a
/// dense short sentence competes with a long one holding more hits.
///
/// ```
/// use caseproof_search::scorer::{DensityScorer, Scorer, UnitStats};
///
/// let stats = UnitStats::new(1, "The patient is homebound.");
/// assert_eq!(DensityScorer.score(&stats), 1.0 / 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DensityScorer;

impl Scorer for DensityScorer {
    fn score(&self, stats: &UnitStats) -> f64 {
        stats.keyword_hits as f64 / (stats.word_count as f64 + 1.0)
    }

    fn name(&self) -> &str {
        "density"
    }
}
