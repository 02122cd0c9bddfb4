//! Console summary formatting

use crate::fmt::{format_mb, CHART};
use crate::report::model::SizeReport;
use console::style;
use std::fmt::{self, Write as _};

/// Deltas at or below this magnitude in MB are treated as noise and not
/// annotated
pub const DELTA_DISPLAY_THRESHOLD_MB: f64 = 0.05;

/// Format the size report for console output
pub fn format_summary(report: &SizeReport) -> Result<String, fmt::Error> {
    let mut output = String::new();

    writeln!(output, "\n{}", "=".repeat(70))?;
    writeln!(
        output,
        "{} Size Analysis Summary - {}",
        CHART,
        style(&report.release_tag).cyan()
    )?;
    writeln!(output, "{}", "=".repeat(70))?;

    for (variant, groups) in &report.platforms {
        if groups.is_empty() {
            continue;
        }

        writeln!(
            output,
            "\n{}",
            style(format!("{} BUILDS:", variant.to_uppercase())).bold()
        )?;
        writeln!(output, "{}", "-".repeat(40))?;

        for (group, backends) in groups {
            writeln!(output, "\n  {}:", style(group).bold())?;

            for (backend, entry) in backends {
                let annotation = if entry.delta_mb > DELTA_DISPLAY_THRESHOLD_MB {
                    style(format!("(+{})", format_mb(entry.delta_mb)))
                        .red()
                        .to_string()
                } else if entry.delta_mb < -DELTA_DISPLAY_THRESHOLD_MB {
                    style(format!("({})", format_mb(entry.delta_mb)))
                        .green()
                        .to_string()
                } else {
                    style("(baseline)").dim().to_string()
                };

                writeln!(
                    output,
                    "    {:<30} {:>10}  {}",
                    backend,
                    format_mb(entry.size_mb),
                    annotation
                )?;
            }
        }
    }

    writeln!(output, "\n{}", "=".repeat(70))?;

    Ok(output)
}

/// Print the summary to stdout
pub fn print_summary(report: &SizeReport) {
    match format_summary(report) {
        Ok(text) => print!("{}", text),
        Err(e) => eprintln!("Error formatting summary: {}", e),
    }
}
