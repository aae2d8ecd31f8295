//! Fixed keyword lexicons driving entity extraction.
//!
//! All three lists are process-wide constants: read-only, initialized at
//! compile time, safe to share across concurrent requests. The skills list
//! doubles as the controlled vocabulary for the `skills` entity sequence, and
//! its iteration order defines the output order of matched skills.

/// Recognized technical skills. Matching is case-insensitive substring
/// containment against the whole document, so multi-word phrases must appear
/// verbatim ("machine learning", not "learning machines").
pub const SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "sql",
    "html",
    "css",
    "react",
    "node.js",
    "machine learning",
    "data analysis",
    "project management",
    "agile",
    "scrum",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "linux",
    "unix",
    "rest api",
    "mongodb",
    "mysql",
    "postgresql",
    "redis",
    "elasticsearch",
    "kafka",
    "spring",
    "django",
    "flask",
    "fastapi",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "pandas",
    "numpy",
    "matplotlib",
    "seaborn",
];

/// Keywords that flag a sentence as an education entry.
pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "degree",
    "diploma",
    "certification",
    "university",
    "college",
    "school",
    "graduation",
    "post-graduation",
];

/// Keywords that flag a sentence as a work-experience entry.
pub const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "worked",
    "job",
    "position",
    "role",
    "responsibility",
    "project",
    "team",
    "lead",
    "manager",
    "developer",
    "engineer",
    "architect",
    "consultant",
    "analyst",
    "specialist",
];
