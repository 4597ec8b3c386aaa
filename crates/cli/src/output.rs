//! Output formatting for CLI results.

use anyhow::Result;
use caseproof_core::Match;
use caseproof_search::{KeywordSet, SearchOutcome, SearchStatus};
use std::fmt::Write as _;

/// One line per match: score, document, 1-based page, text.
pub fn matches_text(outcome: &SearchOutcome) -> String {
    if outcome.matches.is_empty() {
        let reason = match outcome.status {
            SearchStatus::NoDocuments => "no documents",
            SearchStatus::NoKeywords => "query has no keywords",
            SearchStatus::Searched => "no sentence contains a query keyword",
        };
        return format!("(no matches: {})\n", reason);
    }

    let mut out = String::new();
    for m in &outcome.matches {
        let _ = writeln!(out, "{:.4}  {}  p.{}  {}", m.score, m.document, m.page + 1, m.text);
    }
    out
}

/// Matches as a pretty JSON array with zero-based pages.
pub fn matches_json(matches: &[Match]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(matches)?;
    json.push('\n');
    Ok(json)
}

/// Sorted keywords, one per line.
pub fn keywords_text(keywords: &KeywordSet) -> String {
    keywords.iter().map(|k| format!("{}\n", k)).collect()
}
