//! Heuristic resume quality scoring.
//!
//! Additive point model over entity counts, each category capped
//! independently: contact 20, skills 30, education 25, experience 25. The
//! caps make a sum above 100 impossible by construction, so no final clamp
//! is applied.

use serde::{Deserialize, Serialize};

use crate::analysis::entities::EntitySet;

/// Declared maximum. A constant field rather than a derived value so the
/// response contract survives future weight retuning.
pub const MAX_SCORE: u32 = 100;

/// Bounded 0-100 quality measure derived from an [`EntitySet`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub max_score: u32,
    /// `round(score / max_score * 100, 1)`; numerically equal to `score`
    /// while `max_score` stays 100. The redundancy is intentional.
    pub percentage: f64,
}

/// Pure scoring function over an entity set.
pub fn score_entities(entities: &EntitySet) -> ScoreResult {
    let mut score = 0u32;

    // Contact information: presence only, counts beyond one are irrelevant.
    if !entities.emails.is_empty() {
        score += 10;
    }
    if !entities.phones.is_empty() {
        score += 10;
    }

    // 2 points per skill, capped at 30.
    score += (entities.skills.len() as u32 * 2).min(30);
    // 5 points per education entry, capped at 25.
    score += (entities.education.len() as u32 * 5).min(25);
    // 5 points per experience entry, capped at 25.
    score += (entities.experience.len() as u32 * 5).min(25);

    let percentage = ((score as f64 / MAX_SCORE as f64) * 100.0 * 10.0).round() / 10.0;

    ScoreResult {
        score,
        max_score: MAX_SCORE,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity_set(
        emails: usize,
        phones: usize,
        skills: usize,
        education: usize,
        experience: usize,
    ) -> EntitySet {
        EntitySet {
            emails: vec!["a@b.co".into(); emails],
            phones: vec!["555-123-4567".into(); phones],
            skills: (0..skills).map(|i| format!("skill{i}")).collect(),
            education: vec!["Earned a degree.".into(); education],
            experience: vec!["Led a team.".into(); experience],
        }
    }

    #[test]
    fn test_empty_entities_score_zero() {
        let result = score_entities(&EntitySet::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.max_score, 100);
        assert_eq!(result.percentage, 0.0);
    }

    #[test]
    fn test_contact_is_presence_based() {
        assert_eq!(score_entities(&entity_set(1, 0, 0, 0, 0)).score, 10);
        assert_eq!(score_entities(&entity_set(0, 1, 0, 0, 0)).score, 10);
        assert_eq!(score_entities(&entity_set(3, 4, 0, 0, 0)).score, 20);
    }

    #[test]
    fn test_category_caps() {
        // 16 skills * 2 = 32 capped at 30.
        assert_eq!(score_entities(&entity_set(0, 0, 16, 0, 0)).score, 30);
        // 6 education entries * 5 = 30 capped at 25.
        assert_eq!(score_entities(&entity_set(0, 0, 0, 6, 0)).score, 25);
        // 9 experience entries * 5 = 45 capped at 25.
        assert_eq!(score_entities(&entity_set(0, 0, 0, 0, 9)).score, 25);
    }

    #[test]
    fn test_full_resume_reaches_exactly_100() {
        let result = score_entities(&entity_set(1, 1, 15, 5, 5));
        assert_eq!(result.score, 100);
        assert_eq!(result.percentage, 100.0);
    }

    #[test]
    fn test_score_bounded_even_with_extreme_counts() {
        let result = score_entities(&entity_set(50, 50, 500, 500, 500));
        assert!(result.score <= 100);
    }

    #[test]
    fn test_percentage_tracks_score_to_one_decimal() {
        for counts in [(1, 0, 2, 1, 1), (0, 1, 7, 2, 3), (1, 1, 3, 0, 6)] {
            let result = score_entities(&entity_set(
                counts.0, counts.1, counts.2, counts.3, counts.4,
            ));
            assert_eq!(result.percentage, result.score as f64);
        }
    }
}
