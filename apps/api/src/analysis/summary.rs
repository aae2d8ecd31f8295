//! Narrative summary generation.
//!
//! Four threshold rules evaluated in fixed order (contact, skills,
//! education, experience), each contributing exactly one line. Thresholds
//! are strict inequalities: counts of exactly 10 skills or exactly 5
//! experience entries fall into the lower tier.

use crate::analysis::entities::EntitySet;

/// Builds the four-line summary for an entity set.
pub fn summarize(entities: &EntitySet) -> Vec<String> {
    let mut summary = Vec::with_capacity(4);

    if !entities.emails.is_empty() || !entities.phones.is_empty() {
        summary.push("Contact Information: Complete".to_string());
    } else {
        summary.push("Contact Information: Missing".to_string());
    }

    let skills_count = entities.skills.len();
    if skills_count > 10 {
        summary.push(format!(
            "Strong technical skills profile with {skills_count} identified skills"
        ));
    } else if skills_count > 5 {
        summary.push(format!(
            "Moderate technical skills profile with {skills_count} identified skills"
        ));
    } else {
        // The low tier intentionally does not interpolate the count.
        summary.push("Limited technical skills identified".to_string());
    }

    let education_count = entities.education.len();
    if education_count > 0 {
        summary.push(format!(
            "Education background identified with {education_count} entries"
        ));
    } else {
        summary.push("Education information not clearly identified".to_string());
    }

    let experience_count = entities.experience.len();
    if experience_count > 5 {
        summary.push(format!(
            "Extensive work experience with {experience_count} entries"
        ));
    } else if experience_count > 0 {
        summary.push(format!(
            "Work experience identified with {experience_count} entries"
        ));
    } else {
        summary.push("Work experience not clearly identified".to_string());
    }

    summary
}
