//! Deterministic SVG word cloud of matched skills.
//!
//! Skills arrive in lexicon order; earlier entries render larger, and words
//! flow left-to-right with wrapping on a fixed 800x400 canvas. Layout is a
//! pure function of the input so identical analyses produce identical
//! images.

const WIDTH: u32 = 800;
const HEIGHT: u32 = 400;
const MARGIN: f32 = 24.0;
const ROW_GAP: f32 = 14.0;
const MAX_FONT_SIZE: f32 = 34.0;
const MIN_FONT_SIZE: f32 = 14.0;

/// Rotating fill palette; index by word rank.
const PALETTE: &[&str] = &["#1f4e79", "#2e75b6", "#548235", "#bf6900", "#7030a0"];

/// Average glyph width as a fraction of font size for Helvetica-ish fonts.
/// Good enough for non-overlapping placement.
const GLYPH_WIDTH_EM: f32 = 0.58;

/// Renders the word cloud as an SVG document string.
pub fn render_svg(skills: &[String]) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    ));
    svg.push_str(&format!(
        r#"<rect width="{WIDTH}" height="{HEIGHT}" fill="white"/>"#
    ));

    if skills.is_empty() {
        svg.push_str(&format!(
            r##"<text x="{x}" y="{y}" font-family="Helvetica, sans-serif" font-size="20" fill="#888888" text-anchor="middle">No skills identified</text>"##,
            x = WIDTH / 2,
            y = HEIGHT / 2,
        ));
        svg.push_str("</svg>");
        return svg;
    }

    let mut x = MARGIN;
    let mut baseline = MARGIN + MAX_FONT_SIZE;
    for (rank, skill) in skills.iter().enumerate() {
        let size = (MAX_FONT_SIZE - rank as f32 * 1.5).max(MIN_FONT_SIZE);
        let estimated_width = skill.chars().count() as f32 * size * GLYPH_WIDTH_EM;
        if x + estimated_width > WIDTH as f32 - MARGIN {
            x = MARGIN;
            baseline += MAX_FONT_SIZE + ROW_GAP;
        }
        svg.push_str(&format!(
            r#"<text x="{x:.1}" y="{baseline:.1}" font-family="Helvetica, sans-serif" font-size="{size:.1}" fill="{fill}">{word}</text>"#,
            fill = PALETTE[rank % PALETTE.len()],
            word = escape_xml(skill),
        ));
        x += estimated_width + size;
    }

    svg.push_str("</svg>");
    svg
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_every_skill_appears_in_output() {
        let svg = render_svg(&skills(&["python", "docker", "kubernetes"]));
        for skill in ["python", "docker", "kubernetes"] {
            assert!(svg.contains(skill), "missing {skill}");
        }
    }

    #[test]
    fn test_empty_skills_render_placeholder() {
        let svg = render_svg(&[]);
        assert!(svg.contains("No skills identified"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let input = skills(&["python", "sql", "aws"]);
        assert_eq!(render_svg(&input), render_svg(&input));
    }

    #[test]
    fn test_output_is_wellformed_svg_envelope() {
        let svg = render_svg(&skills(&["git"]));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_many_skills_wrap_rows() {
        let many: Vec<String> = (0..30).map(|i| format!("skill-number-{i}")).collect();
        let svg = render_svg(&many);
        // All rows must stay on the canvas horizontally.
        for part in svg.split("<text ").skip(1) {
            let x: f32 = part
                .split('"')
                .nth(1)
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.0);
            assert!(x < WIDTH as f32);
        }
    }
}
