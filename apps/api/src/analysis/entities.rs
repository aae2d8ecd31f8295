//! Entity extraction: regex contact matching plus keyword classification.
//!
//! Extraction is total over all string input — malformed or empty text yields
//! an empty `EntitySet`, never an error. Patterns compile once at extractor
//! construction and are shared read-only across requests.

use std::sync::Arc;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::{EDUCATION_KEYWORDS, EXPERIENCE_KEYWORDS, SKILLS};
use crate::analysis::segmenter::SentenceSegmenter;

/// Local-part `@` domain `.` 2+ letter TLD. Syntactic plausibility only; no
/// semantic validation of the address.
const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// US 10-digit numbers with an optional single hyphen or dot after digit
/// groups 3 and 6. Parenthesized, spaced, and international formats are
/// deliberately not matched; a documented limitation, not a bug.
const PHONE_PATTERN: &str = r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b";

/// Structured entities pulled from one resume. A pure value: created once per
/// request, never mutated, discarded after use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySet {
    /// Email matches in text order; duplicates preserved.
    pub emails: Vec<String>,
    /// Phone matches in text order; duplicates preserved.
    pub phones: Vec<String>,
    /// Matched lexicon entries in lexicon order; each at most once.
    pub skills: Vec<String>,
    /// Trimmed sentences containing an education keyword, in text order.
    pub education: Vec<String>,
    /// Trimmed sentences containing an experience keyword, in text order.
    /// Classification is non-exclusive: a sentence may appear here and in
    /// `education` independently.
    pub experience: Vec<String>,
}

/// Applies the regex and keyword rules to raw resume text.
pub struct EntityExtractor {
    email_re: Regex,
    phone_re: Regex,
    segmenter: Arc<SentenceSegmenter>,
}

impl EntityExtractor {
    /// Compiles the contact patterns and captures the shared segmenter.
    pub fn new(segmenter: Arc<SentenceSegmenter>) -> Result<Self> {
        Ok(Self {
            email_re: Regex::new(EMAIL_PATTERN).context("email pattern failed to compile")?,
            phone_re: Regex::new(PHONE_PATTERN).context("phone pattern failed to compile")?,
            segmenter,
        })
    }

    /// Extracts the full entity set from `text`.
    pub fn extract(&self, text: &str) -> EntitySet {
        let lowered = text.to_lowercase();

        let emails = self
            .email_re
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        let phones = self
            .phone_re
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();

        // Whole-document substring containment, no word boundaries: "react"
        // inside "reactive" matches. Output order is lexicon order.
        let skills = SKILLS
            .iter()
            .filter(|skill| lowered.contains(*skill))
            .map(|skill| skill.to_string())
            .collect();

        let mut education = Vec::new();
        let mut experience = Vec::new();
        for sentence in self.segmenter.segment(text) {
            let sentence_lower = sentence.to_lowercase();
            if EDUCATION_KEYWORDS.iter().any(|kw| sentence_lower.contains(kw)) {
                education.push(sentence.trim().to_string());
            }
            if EXPERIENCE_KEYWORDS.iter().any(|kw| sentence_lower.contains(kw)) {
                experience.push(sentence.trim().to_string());
            }
        }

        EntitySet {
            emails,
            phones,
            skills,
            education,
            experience,
        }
    }
}
