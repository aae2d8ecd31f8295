//! POST /api/v1/analyze handler: multipart upload in, full report out.
//!
//! Boundary validation (file part present, filename, extension) happens here
//! before the core ever runs; the uploaded bytes live only for the duration
//! of the request, so nothing has to be cleaned up afterwards.

use axum::extract::{Multipart, State};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bytes::Bytes;
use serde::Serialize;

use crate::analysis::entities::EntitySet;
use crate::analysis::scoring::ScoreResult;
use crate::errors::AppError;
use crate::extract::{self, DocumentKind};
use crate::render;
use crate::state::AppState;

/// The multipart field carrying the resume document.
const RESUME_FIELD: &str = "resume";

/// Response body for a successful analysis.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub entities: EntitySet,
    pub score: ScoreResult,
    pub summary: Vec<String>,
    /// Base64-encoded SVG word cloud of the matched skills.
    pub wordcloud: String,
    /// Base64-encoded PDF report.
    pub pdf_report: String,
}

struct ResumeUpload {
    filename: String,
    bytes: Bytes,
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = read_resume_part(multipart).await?;
    let kind = DocumentKind::from_filename(&upload.filename).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid file type: '{}' (allowed: pdf, docx)",
            upload.filename
        ))
    })?;

    let text = extract::extract_text(kind, &upload.bytes)?;
    tracing::debug!(
        filename = %upload.filename,
        kind = ?kind,
        chars = text.len(),
        "Extracted document text"
    );

    let report = state.analyzer.analyze(&text);
    tracing::info!(
        filename = %upload.filename,
        score = report.score.score,
        skills = report.entities.skills.len(),
        education = report.entities.education.len(),
        experience = report.entities.experience.len(),
        "Resume analyzed"
    );

    let wordcloud = BASE64.encode(render::wordcloud::render_svg(&report.entities.skills));
    let pdf_report = BASE64.encode(
        render::report::build_pdf(&report).map_err(|e| AppError::Render(format!("{e:#}")))?,
    );

    Ok(Json(AnalyzeResponse {
        entities: report.entities,
        score: report.score,
        summary: report.summary,
        wordcloud,
        pdf_report,
    }))
}

/// Pulls the `resume` file part out of the multipart stream, enforcing the
/// pre-core validation rules.
async fn read_resume_part(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart payload: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        return Ok(ResumeUpload { filename, bytes });
    }
    Err(AppError::Validation("No file uploaded".to_string()))
}
