//! Sentence boundary detection for resume text.
//!
//! The segmenter is the only analysis component with loadable language
//! resources: an abbreviation list that suppresses false boundaries after
//! tokens like "Dr." or "B.Sc.". The list is loaded exactly once at process
//! start; a configured resource that cannot be read or parsed is a hard
//! `ResourceUnavailable` failure rather than a silent fallback to naive
//! splitting, so extraction quality stays deterministic and testable.
//!
//! The detection heuristic itself: a run of `.`, `!` or `?` (plus trailing
//! closing quotes/brackets) ends a sentence when it is followed by
//! whitespace and an uppercase letter, digit, or opening quote, unless the
//! token before a period is a known abbreviation or a single initial.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::config::Config;

/// Abbreviation list bundled with the repository; used when no override
/// resource is configured.
const BUNDLED_ABBREVIATIONS: &str = include_str!("../../assets/abbreviations_en.txt");

/// Errors raised while loading segmenter language resources.
#[derive(Debug, Error)]
pub enum SegmenterError {
    #[error("Sentence segmenter resource unavailable: {0}")]
    ResourceUnavailable(String),
}

/// Splits raw text into an ordered, non-overlapping sequence of sentence
/// spans covering the input. Immutable after construction; share via `Arc`.
#[derive(Debug)]
pub struct SentenceSegmenter {
    /// Lowercased abbreviations, stored without their trailing period.
    abbreviations: HashSet<String>,
}

impl SentenceSegmenter {
    /// Loads segmentation resources per the application config.
    ///
    /// With `SEGMENTER_ABBREVIATIONS` set, the file at that path replaces the
    /// bundled list; a missing, unreadable, or empty file is an error. This is
    /// the explicit readiness check invoked once in `main`.
    pub fn load(config: &Config) -> Result<Self, SegmenterError> {
        match &config.segmenter_abbreviations {
            Some(path) => Self::from_resource_file(path),
            None => Self::from_abbreviation_lines(BUNDLED_ABBREVIATIONS.lines()),
        }
    }

    /// Loads the abbreviation list from an explicit resource file.
    pub fn from_resource_file(path: impl AsRef<Path>) -> Result<Self, SegmenterError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SegmenterError::ResourceUnavailable(format!(
                "cannot read abbreviation list {}: {e}",
                path.display()
            ))
        })?;
        let segmenter = Self::from_abbreviation_lines(raw.lines())?;
        tracing::info!(
            path = %path.display(),
            entries = segmenter.abbreviations.len(),
            "Loaded segmenter abbreviation resource"
        );
        Ok(segmenter)
    }

    /// Builds the segmenter from abbreviation lines. Lines are lowercased and
    /// stripped of a trailing period; `#` comments and blanks are skipped.
    pub fn from_abbreviation_lines<'a>(
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, SegmenterError> {
        let abbreviations: HashSet<String> = lines
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.trim_end_matches('.').to_lowercase())
            .collect();
        if abbreviations.is_empty() {
            return Err(SegmenterError::ResourceUnavailable(
                "abbreviation list contains no entries".to_string(),
            ));
        }
        Ok(Self { abbreviations })
    }

    /// Splits `text` into sentence spans, in order, covering all
    /// keyword-bearing input. Spans are not trimmed; callers decide.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let bytes = text.as_bytes();
        let mut iter = text.char_indices().peekable();

        while let Some((idx, ch)) = iter.next() {
            if !matches!(ch, '.' | '!' | '?') {
                continue;
            }

            // Consume the whole terminator run plus closing punctuation.
            let mut end = idx + ch.len_utf8();
            while let Some(&(next_idx, next_ch)) = iter.peek() {
                if matches!(next_ch, '.' | '!' | '?' | '"' | '\'' | ')' | ']') {
                    end = next_idx + next_ch.len_utf8();
                    iter.next();
                } else {
                    break;
                }
            }

            if ch == '.' && self.is_abbreviation_before(text, idx) {
                continue;
            }

            if boundary_follows(&text[end..]) {
                let sentence = &text[start..end];
                if !sentence.trim().is_empty() {
                    sentences.push(sentence);
                }
                // Skip whitespace so the next span starts at visible text.
                start = end;
                while start < bytes.len() && bytes[start].is_ascii_whitespace() {
                    start += 1;
                }
            }
        }

        if start < text.len() && !text[start..].trim().is_empty() {
            sentences.push(&text[start..]);
        }
        sentences
    }

    /// Checks whether the token immediately preceding the period at
    /// `dot_idx` is a known abbreviation or a single initial ("John D.").
    fn is_abbreviation_before(&self, text: &str, dot_idx: usize) -> bool {
        let token = text[..dot_idx]
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("");
        let token = token.trim_start_matches(|c: char| !c.is_alphanumeric());
        if token.is_empty() {
            return false;
        }
        if token.chars().count() == 1 && token.chars().all(char::is_alphabetic) {
            return true;
        }
        self.abbreviations.contains(&token.to_lowercase())
    }
}

/// A terminator run ends a sentence when followed by end-of-text or by
/// whitespace and a capital letter, digit, or opening quote/bracket.
fn boundary_follows(rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        None => return true,
        Some(c) if !c.is_whitespace() => return false,
        Some(_) => {}
    }
    match chars.find(|c| !c.is_whitespace()) {
        None => true,
        Some(c) => c.is_uppercase() || c.is_ascii_digit() || matches!(c, '"' | '\'' | '(' | '['),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn segmenter() -> SentenceSegmenter {
        SentenceSegmenter::from_abbreviation_lines(BUNDLED_ABBREVIATIONS.lines()).unwrap()
    }

    #[test]
    fn test_splits_on_terminator_followed_by_capital() {
        let s = segmenter();
        let sentences = s.segment("I write Rust. I also write SQL. Ask me anything!");
        assert_eq!(
            sentences,
            vec!["I write Rust.", "I also write SQL.", "Ask me anything!"]
        );
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        let s = segmenter();
        let sentences = s.segment("Dr. Smith taught me C. He was great.");
        // "Dr." is suppressed; "C." is a single initial and also suppressed,
        // so the split lands after "C. He" never happens.
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_decimal_numbers_do_not_split() {
        let s = segmenter();
        let sentences = s.segment("Graduated with a 3.9 GPA. Joined a startup.");
        assert_eq!(
            sentences,
            vec!["Graduated with a 3.9 GPA.", "Joined a startup."]
        );
    }

    #[test]
    fn test_trailing_text_without_terminator_is_kept() {
        let s = segmenter();
        let sentences = s.segment("First sentence. trailing fragment without period");
        // Lowercase follow-up after the period is not a boundary, so the
        // whole input stays one span.
        assert_eq!(sentences.len(), 1);

        let sentences = s.segment("First sentence. Trailing fragment without period");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], "Trailing fragment without period");
    }

    #[test]
    fn test_empty_input_yields_no_sentences() {
        let s = segmenter();
        assert!(s.segment("").is_empty());
        assert!(s.segment("   \n\t  ").is_empty());
    }

    #[test]
    fn test_spans_cover_input_in_order() {
        let s = segmenter();
        let text = "One thing. Another thing. A third thing.";
        let sentences = s.segment(text);
        let mut cursor = 0;
        for sentence in &sentences {
            let found = text[cursor..].find(sentence).expect("span present in order");
            cursor += found + sentence.len();
        }
    }

    #[test]
    fn test_missing_resource_file_is_resource_unavailable() {
        let err = SentenceSegmenter::from_resource_file("/nonexistent/abbrev.txt").unwrap_err();
        assert!(matches!(err, SegmenterError::ResourceUnavailable(_)));
    }

    #[test]
    fn test_empty_resource_file_is_resource_unavailable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comments only").unwrap();
        let err = SentenceSegmenter::from_resource_file(file.path()).unwrap_err();
        assert!(matches!(err, SegmenterError::ResourceUnavailable(_)));
    }

    #[test]
    fn test_override_resource_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dr\nmr\nphd.").unwrap();
        let s = SentenceSegmenter::from_resource_file(file.path()).unwrap();
        assert_eq!(s.segment("Dr. Smith hired me. It went well.").len(), 2);
    }
}
