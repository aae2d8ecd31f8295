//! Presentation collaborators: skills word cloud and PDF report.
//!
//! Both consume the analysis value types read-only; the core never depends
//! on anything in this module.

pub mod report;
pub mod wordcloud;
