//! Query keyword extraction
//!
//! Pipeline: lowercase → split on non-word characters → deduplicate
//!
//! Unlike an indexing tokenizer there is no stopword removal, no minimum
//! length and no stemming: a keyword is matched as a substring of each
//! lowercased sentence, so "home" also hits "homebound".

use std::collections::BTreeSet;

/// Word characters are Unicode alphanumerics plus `_`.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into lowercase word tokens, in order, keeping duplicates.
///
/// # Example
///
/// ```
/// use caseproof_search::tokenizer::tokenize;
///
/// let tokens = tokenize("Skilled-nursing, skilled!");
/// assert_eq!(tokens, vec!["skilled", "nursing", "skilled"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The distinct lowercase keywords of a query.
///
/// Kept sorted so that iteration order, and anything logged from it, does
/// not depend on hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: BTreeSet<String>,
}

impl KeywordSet {
    /// Extract the keyword set of `query`.
    ///
    /// # Example
    ///
    /// ```
    /// use caseproof_search::tokenizer::KeywordSet;
    ///
    /// let set = KeywordSet::from_query("Homebound? HOMEBOUND status");
    /// assert_eq!(set.iter().collect::<Vec<_>>(), vec!["homebound", "status"]);
    /// ```
    pub fn from_query(query: &str) -> Self {
        Self {
            keywords: tokenize(query).into_iter().collect(),
        }
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// True when the query had no word characters.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Keywords in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Count distinct keywords occurring as substrings of `lowered`.
    ///
    /// `lowered` must already be lowercase.
    pub fn count_in(&self, lowered: &str) -> usize {
        self.keywords
            .iter()
            .filter(|kw| lowered.contains(kw.as_str()))
            .count()
    }
}
