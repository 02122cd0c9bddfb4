//! Per-variant chart layout

use crate::render::svg::{collect_rows, render_chart, ChartSection};
use crate::render::{ChartFile, ChartRenderer};
use crate::report::{SizeReport, BASELINE_BACKEND};

/// Renders one document per non-empty build variant
///
/// To keep each chart readable only the baseline and single-backend
/// additions are drawn. The JSON report always carries every
/// combination regardless of layout.
pub struct SplitRenderer;

impl ChartRenderer for SplitRenderer {
    fn name(&self) -> &str {
        "split"
    }

    fn render(&self, report: &SizeReport) -> Vec<ChartFile> {
        report
            .platforms
            .iter()
            .filter(|(_, groups)| !groups.is_empty())
            .map(|(variant, groups)| {
                let section = ChartSection {
                    heading: format!("{} BUILDS", variant.to_uppercase()),
                    rows: collect_rows(groups, is_baseline_or_single_addition),
                };
                let title = format!(
                    "ExecuTorch FFI Library Sizes ({}, {})",
                    report.release_tag, variant
                );
                ChartFile {
                    filename: format!("size-report-{}.svg", variant),
                    contents: render_chart(&title, &report.generated_at, &[section]),
                }
            })
            .collect()
    }
}

/// True for the baseline itself and for combinations that add exactly
/// one backend to it
///
/// Backend names are single filename tokens and can never contain the
/// key separator, so the component count equals the backend count.
fn is_baseline_or_single_addition(key: &str) -> bool {
    if key == BASELINE_BACKEND {
        return true;
    }
    let components: Vec<&str> = key.split('-').collect();
    components.len() == 2 && components.contains(&BASELINE_BACKEND)
}
