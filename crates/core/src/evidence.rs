//! Match records returned by the evidence matcher.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// One scored, cited candidate sentence.
///
/// Matches live for the duration of one query and are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Name of the source document.
    pub document: String,
    /// Zero-based page index within the document.
    pub page: usize,
    /// Keyword-hit density, always > 0.
    pub score: f64,
    /// The matched sentence, trimmed, in original case.
    pub text: String,
}

impl Match {
    /// Human citation, with the page shown 1-based: `"referral.pdf p.3"`.
    pub fn citation(&self) -> String {
        format!("{} p.{}", self.document, self.page + 1)
    }
}

/// Render matches as a numbered evidence block, one match per line.
///
/// ```
/// use caseproof_core::{format_evidence, Match};
///
/// let m = Match {
///     document: "oasis.pdf".into(),
///     page: 0,
///     score: 0.2,
///     text: "The patient is homebound.".into(),
/// };
/// assert_eq!(format_evidence(&[m]), "[1] oasis.pdf p.1: The patient is homebound.\n");
/// ```
pub fn format_evidence(matches: &[Match]) -> String {
    let mut out = String::new();
    for (i, m) in matches.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "[{}] {}: {}", i + 1, m.citation(), m.text);
    }
    out
}
