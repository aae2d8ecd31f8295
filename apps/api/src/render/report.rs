//! PDF report assembly.
//!
//! Lays the analysis report out on US-letter pages with builtin Helvetica
//! faces: title, score line, summary bullets, then one section per entity
//! category. Long resumes spill onto additional pages.

use anyhow::{Context, Result};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::analysis::AnalysisReport;

const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const MARGIN_MM: f32 = 20.0;
/// Rough character budget per body line at 11pt before wrapping.
const WRAP_COLUMNS: usize = 95;

/// Builds the full analysis report as PDF bytes.
pub fn build_pdf(report: &AnalysisReport) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Resume Analysis Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .context("failed to register report font")?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .context("failed to register report heading font")?;

    let mut writer = PageWriter {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    writer.heading(&bold, 24.0, "Resume Analysis Report");
    writer.line(
        &bold,
        14.0,
        &format!(
            "Resume Score: {}/{} ({}%)",
            report.score.score, report.score.max_score, report.score.percentage
        ),
    );
    writer.line(
        &regular,
        9.0,
        &format!("Generated {}", chrono::Utc::now().format("%Y-%m-%d")),
    );

    writer.heading(&bold, 14.0, "Summary");
    for point in &report.summary {
        writer.bullet(&regular, point);
    }

    writer.heading(&bold, 14.0, "Contact Information");
    if !report.entities.emails.is_empty() {
        writer.line(
            &regular,
            11.0,
            &format!("Email: {}", report.entities.emails.join(", ")),
        );
    }
    if !report.entities.phones.is_empty() {
        writer.line(
            &regular,
            11.0,
            &format!("Phone: {}", report.entities.phones.join(", ")),
        );
    }
    if report.entities.emails.is_empty() && report.entities.phones.is_empty() {
        writer.line(&regular, 11.0, "None found");
    }

    for (title, items) in [
        ("Skills", &report.entities.skills),
        ("Education", &report.entities.education),
        ("Experience", &report.entities.experience),
    ] {
        writer.heading(&bold, 14.0, title);
        if items.is_empty() {
            writer.line(&regular, 11.0, "None found");
        }
        for item in items {
            writer.bullet(&regular, item);
        }
    }

    doc.save_to_bytes().context("failed to serialize PDF report")
}

/// Tracks the vertical cursor and starts fresh pages as sections run long.
struct PageWriter<'a> {
    doc: &'a printpdf::PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl PageWriter<'_> {
    fn heading(&mut self, font: &IndirectFontRef, size: f32, text: &str) {
        self.advance(size * 0.8);
        self.write(font, size, MARGIN_MM, text);
    }

    fn line(&mut self, font: &IndirectFontRef, size: f32, text: &str) {
        for segment in wrap(text, WRAP_COLUMNS) {
            self.write(font, size, MARGIN_MM, &segment);
        }
    }

    fn bullet(&mut self, font: &IndirectFontRef, text: &str) {
        let mut first = true;
        for segment in wrap(text, WRAP_COLUMNS - 4) {
            let prefix = if first { "- " } else { "  " };
            self.write(font, 11.0, MARGIN_MM + 4.0, &format!("{prefix}{segment}"));
            first = false;
        }
    }

    fn write(&mut self, font: &IndirectFontRef, size: f32, x: f32, text: &str) {
        self.advance(size * 0.55);
        self.layer
            .use_text(sanitize(text), size, Mm(x), Mm(self.y), font);
    }

    /// Moves the cursor down `step` millimetres, rolling to a new page when
    /// the bottom margin is hit.
    fn advance(&mut self, step: f32) {
        self.y -= step;
        if self.y < MARGIN_MM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }
}

/// Builtin fonts are WinAnsi-encoded; anything outside printable ASCII is
/// replaced rather than risking unmappable glyphs.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\u{20}' || c.is_ascii_graphic() { c } else { '?' })
        .collect()
}

/// Greedy word wrap on a character budget.
fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > columns {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
