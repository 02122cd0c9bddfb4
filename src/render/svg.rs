//! SVG chart drawing
//!
//! A chart document is a title, a generation date and a list of
//! sections, each holding labeled horizontal bars. All bars in a
//! document share one linear scale anchored at the largest displayed
//! size.

use crate::report::model::GroupMap;
use crate::report::DELTA_DISPLAY_THRESHOLD_MB;

pub(crate) const BAR_HEIGHT: u32 = 20;
pub(crate) const BAR_GAP: u32 = 5;
pub(crate) const SECTION_GAP: u32 = 30;
pub(crate) const LABEL_WIDTH: u32 = 200;
pub(crate) const MAX_BAR_WIDTH: u32 = 400;
pub(crate) const MARGIN: u32 = 40;

/// Fill colors per backend combination key, in legend order
const PALETTE: &[(&str, &str)] = &[
    ("xnnpack", "#3498db"),
    ("coreml", "#27ae60"),
    ("mps", "#9b59b6"),
    ("vulkan", "#e67e22"),
    ("coreml-xnnpack", "#1abc9c"),
    ("mps-xnnpack", "#8e44ad"),
    ("vulkan-xnnpack", "#d35400"),
    ("coreml-mps-xnnpack", "#16a085"),
];

/// Fill for combinations outside the palette
const DEFAULT_COLOR: &str = "#95a5a6";

/// One labeled bar
pub(crate) struct BarRow {
    pub label: String,
    pub backend_key: String,
    pub size_mb: f64,
    pub delta_mb: f64,
}

/// One chart section with its heading
pub(crate) struct ChartSection {
    pub heading: String,
    pub rows: Vec<BarRow>,
}

/// Flatten platform groups into bar rows, keeping only backend keys the
/// predicate accepts
///
/// Groups keep their map order; entries within a group are re-sorted
/// ascending by size so a bar never sits above a shorter one.
pub(crate) fn collect_rows<F>(groups: &GroupMap, keep: F) -> Vec<BarRow>
where
    F: Fn(&str) -> bool,
{
    let mut rows = Vec::new();
    for (group, backends) in groups {
        let mut entries: Vec<_> = backends.iter().filter(|(key, _)| keep(key)).collect();
        entries.sort_by(|a, b| a.1.size_mb.total_cmp(&b.1.size_mb));

        for (backend, entry) in entries {
            rows.push(BarRow {
                label: format!("{} ({})", group, backend),
                backend_key: backend.clone(),
                size_mb: entry.size_mb,
                delta_mb: entry.delta_mb,
            });
        }
    }
    rows
}

/// Render sections into a complete standalone SVG document
pub(crate) fn render_chart(title: &str, generated_at: &str, sections: &[ChartSection]) -> String {
    let total_bars: usize = sections.iter().map(|s| s.rows.len()).sum();
    let max_size = sections
        .iter()
        .flat_map(|s| s.rows.iter())
        .map(|r| r.size_mb)
        .fold(0.0_f64, f64::max);
    // A chart with no bars still needs a nonzero divisor.
    let max_size = if max_size == 0.0 { 1.0 } else { max_size };

    let width = MARGIN * 2 + LABEL_WIDTH + MAX_BAR_WIDTH + 150;
    let height = MARGIN * 2
        + total_bars as u32 * (BAR_HEIGHT + BAR_GAP)
        + sections.len() as u32 * SECTION_GAP
        + 100;

    let mut parts = vec![
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
        ),
        "<style>".to_string(),
        "  .title { font: bold 16px sans-serif; fill: #333; }".to_string(),
        "  .subtitle { font: 12px sans-serif; fill: #666; }".to_string(),
        "  .label { font: 11px sans-serif; fill: #333; }".to_string(),
        "  .value { font: 10px sans-serif; fill: #333; }".to_string(),
        "  .delta { font: 10px sans-serif; fill: #27ae60; }".to_string(),
        "  .section { font: bold 12px sans-serif; fill: #555; }".to_string(),
        "</style>".to_string(),
        format!(r##"<rect width="{width}" height="{height}" fill="#ffffff"/>"##),
        format!(
            r#"<text x="{x}" y="25" text-anchor="middle" class="title">{title}</text>"#,
            x = width / 2,
            title = xml_escape(title)
        ),
        format!(
            r#"<text x="{x}" y="45" text-anchor="middle" class="subtitle">Generated: {date}</text>"#,
            x = width / 2,
            date = date_prefix(generated_at)
        ),
    ];

    let mut y = 70;

    for section in sections {
        parts.push(format!(
            r#"<text x="{MARGIN}" y="{y}" class="section">{}</text>"#,
            section.heading
        ));
        y += 20;

        for row in &section.rows {
            let text_y = y + BAR_HEIGHT / 2 + 4;
            parts.push(format!(
                r#"<text x="{MARGIN}" y="{text_y}" class="label">{}</text>"#,
                xml_escape(&row.label)
            ));

            let bar_x = MARGIN + LABEL_WIDTH;
            let bar_width = row.size_mb / max_size * MAX_BAR_WIDTH as f64;
            parts.push(format!(
                r#"<rect x="{bar_x}" y="{y}" width="{bar_width:.1}" height="{BAR_HEIGHT}" fill="{color}" rx="2"/>"#,
                color = backend_color(&row.backend_key)
            ));

            let value_x = bar_x as f64 + bar_width + 5.0;
            parts.push(format!(
                r#"<text x="{value_x:.1}" y="{text_y}" class="value">{size:.1} MB</text>"#,
                size = row.size_mb
            ));

            if row.delta_mb > DELTA_DISPLAY_THRESHOLD_MB {
                let delta_x = value_x + 60.0;
                parts.push(format!(
                    r#"<text x="{delta_x:.1}" y="{text_y}" class="delta">(+{delta:.1})</text>"#,
                    delta = row.delta_mb
                ));
            }

            y += BAR_HEIGHT + BAR_GAP;
        }

        y += SECTION_GAP;
    }

    y += 10;
    parts.push(format!(
        r#"<text x="{MARGIN}" y="{y}" class="section">LEGEND</text>"#
    ));
    y += 15;

    let mut legend_x = MARGIN;
    for (key, color) in PALETTE.iter().take(6) {
        parts.push(format!(
            r#"<rect x="{legend_x}" y="{y}" width="12" height="12" fill="{color}" rx="2"/>"#
        ));
        parts.push(format!(
            r#"<text x="{x}" y="{text_y}" class="label">{key}</text>"#,
            x = legend_x + 16,
            text_y = y + 10
        ));
        legend_x += 120;
        if legend_x > width - 150 {
            legend_x = MARGIN;
            y += 18;
        }
    }

    parts.push("</svg>".to_string());
    parts.join("\n")
}

fn backend_color(key: &str) -> &'static str {
    PALETTE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

/// First 10 characters of an RFC 3339 timestamp, the calendar date
fn date_prefix(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
