//! Splitting page text into searchable units.
//!
//! The matcher scores units independently, so the segmentation policy is a
//! trait and can be swapped without touching scoring or ranking.

/// Segments text into searchable units.
pub trait Segmenter: Send + Sync {
    /// Split `text` into units, in order. Units borrow from `text` and are
    /// not trimmed; empty units are allowed.
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Heuristic sentence splitter.
///
/// A boundary is a run of whitespace that directly follows `.`, `!` or `?`.
/// The whitespace run is dropped. Abbreviations and decimals followed by a
/// space are split too, and text without terminal punctuation stays one unit.
///
/// ```
/// use caseproof_search::segmenter::{PunctuationSegmenter, Segmenter};
///
/// let units = PunctuationSegmenter.segment("Homebound? Yes.  Needs PT!");
/// assert_eq!(units, vec!["Homebound?", "Yes.", "Needs PT!"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSegmenter;

#[inline]
fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Unicode whitespace plus the information separators U+001C..=U+001F,
/// which PDF text layers sometimes emit between lines.
#[inline]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

impl Segmenter for PunctuationSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut units = Vec::new();
        let mut start = 0;
        let mut prev: Option<char> = None;
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if is_separator(c) && prev.map_or(false, is_terminal) {
                units.push(&text[start..i]);
                let mut end = i + c.len_utf8();
                while let Some(&(j, ws)) = chars.peek() {
                    if !is_separator(ws) {
                        break;
                    }
                    end = j + ws.len_utf8();
                    chars.next();
                }
                start = end;
                prev = None;
                continue;
            }
            prev = Some(c);
        }

        units.push(&text[start..]);
        units
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str) -> Vec<&str> {
        PunctuationSegmenter.segment(text)
    }

    #[test]
    fn test_two_sentences() {
        assert_eq!(
            seg("The patient is homebound. The patient needs skilled nursing care."),
            vec!["The patient is homebound.", "The patient needs skilled nursing care."]
        );
    }

    #[test]
    fn test_no_terminal_punctuation_is_one_unit() {
        assert_eq!(seg("M1830 bathing score 3"), vec!["M1830 bathing score 3"]);
    }

    #[test]
    fn test_punctuation_without_whitespace_does_not_split() {
        assert_eq!(seg("Dose 2.5mg daily.Next"), vec!["Dose 2.5mg daily.Next"]);
    }

    #[test]
    fn test_abbreviation_over_splits() {
        assert_eq!(seg("Seen by Dr. Smith today."), vec!["Seen by Dr.", "Smith today."]);
    }

    #[test]
    fn test_whitespace_run_and_newlines_consumed() {
        assert_eq!(seg("One.\n\n  Two!\tThree?"), vec!["One.", "Two!", "Three?"]);
    }

    #[test]
    fn test_trailing_whitespace_yields_empty_unit() {
        assert_eq!(seg("Done. "), vec!["Done.", ""]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(seg(""), vec![""]);
    }

    #[test]
    fn test_leading_whitespace_kept_in_first_unit() {
        assert_eq!(seg("  Intro. Body"), vec!["  Intro.", "Body"]);
    }

    #[test]
    fn test_consecutive_terminals() {
        assert_eq!(seg("Why?! Because. . Ok"), vec!["Why?!", "Because.", ".", "Ok"]);
    }

    #[test]
    fn test_information_separator_is_a_boundary() {
        assert_eq!(
            seg("Patient homebound.\x1cSkilled care.\x1f\x1dDone."),
            vec!["Patient homebound.", "Skilled care.", "Done."]
        );
    }

    #[test]
    fn test_segmenter_is_object_safe() {
        let s: Box<dyn Segmenter> = Box::new(PunctuationSegmenter);
        assert_eq!(s.segment("A. B").len(), 2);
    }
}
