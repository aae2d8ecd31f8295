//! Resume analysis core: deterministic text-to-entities pipeline.
//!
//! Raw document text goes in; structured entities, a 0-100 score, and a
//! four-line narrative summary come out. Everything here is pure and
//! synchronous per request. File parsing lives in `extract`, rendering in
//! `render`; this module has zero I/O and zero rendering dependencies.

pub mod entities;
pub mod handlers;
pub mod lexicon;
pub mod scoring;
pub mod segmenter;
pub mod summary;

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use crate::analysis::entities::{EntityExtractor, EntitySet};
use crate::analysis::scoring::{score_entities, ScoreResult};
use crate::analysis::segmenter::SentenceSegmenter;
use crate::analysis::summary::summarize;

/// The full result of analyzing one resume. A per-request value with no
/// identity; presentation collaborators consume it read-only.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub entities: EntitySet,
    pub score: ScoreResult,
    pub summary: Vec<String>,
}

/// Long-lived analysis front door shared through `AppState`. Owns the
/// compiled extraction patterns and the segmenter handle; safe for
/// concurrent use without coordination.
pub struct ResumeAnalyzer {
    extractor: EntityExtractor,
}

impl ResumeAnalyzer {
    /// Builds the analyzer on top of an initialized segmenter.
    pub fn new(segmenter: Arc<SentenceSegmenter>) -> Result<Self> {
        Ok(Self {
            extractor: EntityExtractor::new(segmenter)?,
        })
    }

    /// Runs extraction, scoring, and summarization over raw resume text.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let entities = self.extractor.extract(text);
        let score = score_entities(&entities);
        let summary = summarize(&entities);
        AnalysisReport {
            entities,
            score,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> ResumeAnalyzer {
        let segmenter = Arc::new(SentenceSegmenter::load(&crate::config::Config::for_tests()).unwrap());
        ResumeAnalyzer::new(segmenter).unwrap()
    }

    const SAMPLE: &str = "Contact: john@example.com, 555-123-4567. \
I have experience with Python and Docker. \
I earned a Bachelor degree from State University. \
I worked as a Software Engineer for 3 years.";

    #[test]
    fn test_sample_resume_end_to_end() {
        let report = analyzer().analyze(SAMPLE);

        assert_eq!(report.entities.emails, vec!["john@example.com"]);
        assert_eq!(report.entities.phones, vec!["555-123-4567"]);
        assert_eq!(report.entities.skills, vec!["python", "docker"]);
        assert_eq!(
            report.entities.education,
            vec!["I earned a Bachelor degree from State University."]
        );
        // Both the "experience with" sentence and the "worked as" sentence
        // carry experience keywords.
        assert_eq!(
            report.entities.experience,
            vec![
                "I have experience with Python and Docker.",
                "I worked as a Software Engineer for 3 years.",
            ]
        );

        // 10 (email) + 10 (phone) + 4 (2 skills) + 5 (1 education) + 10 (2 experience)
        assert_eq!(report.score.score, 39);
        assert_eq!(report.score.max_score, 100);
        assert_eq!(report.score.percentage, 39.0);

        assert_eq!(report.summary[0], "Contact Information: Complete");
        assert_eq!(report.summary[1], "Limited technical skills identified");
        assert_eq!(
            report.summary[2],
            "Education background identified with 1 entries"
        );
        assert_eq!(
            report.summary[3],
            "Work experience identified with 2 entries"
        );
    }

    #[test]
    fn test_empty_input_produces_empty_report() {
        let report = analyzer().analyze("");
        assert_eq!(report.entities, EntitySet::default());
        assert_eq!(report.score.score, 0);
        assert_eq!(report.score.percentage, 0.0);
        assert_eq!(
            report.summary,
            vec![
                "Contact Information: Missing",
                "Limited technical skills identified",
                "Education information not clearly identified",
                "Work experience not clearly identified",
            ]
        );
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let a = analyzer();
        let first = a.analyze(SAMPLE);
        let second = a.analyze(SAMPLE);
        assert_eq!(first.entities, second.entities);
        assert_eq!(first.score, second.score);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn test_skills_stay_within_lexicon() {
        let report = analyzer().analyze("python rustacean docker warp yew");
        for skill in &report.entities.skills {
            assert!(lexicon::SKILLS.contains(&skill.as_str()));
        }
    }
}
