//! Single-document chart layout

use crate::render::svg::{collect_rows, render_chart, ChartSection};
use crate::render::{ChartFile, ChartRenderer};
use crate::report::SizeReport;

/// Chart file name produced by the combined layout
pub const COMBINED_CHART_FILE: &str = "size-report.svg";

/// Renders every build variant into one document
///
/// Both variant sections appear even when empty so a release that only
/// shipped one variant is visibly incomplete rather than silently
/// truncated.
pub struct CombinedRenderer;

impl ChartRenderer for CombinedRenderer {
    fn name(&self) -> &str {
        "combined"
    }

    fn render(&self, report: &SizeReport) -> Vec<ChartFile> {
        let sections: Vec<ChartSection> = report
            .platforms
            .iter()
            .map(|(variant, groups)| ChartSection {
                heading: format!("{} BUILDS", variant.to_uppercase()),
                rows: collect_rows(groups, |_| true),
            })
            .collect();

        let title = format!("ExecuTorch FFI Library Sizes ({})", report.release_tag);
        vec![ChartFile {
            filename: COMBINED_CHART_FILE.to_string(),
            contents: render_chart(&title, &report.generated_at, &sections),
        }]
    }
}
