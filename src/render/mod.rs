//! Chart rendering
//!
//! Provides:
//! - The [`ChartRenderer`] strategy trait
//! - A combined layout drawing every variant into one document
//! - A split layout drawing one focused document per variant

pub mod combined;
pub mod split;

mod svg;

pub use combined::{CombinedRenderer, COMBINED_CHART_FILE};
pub use split::SplitRenderer;

use crate::report::SizeReport;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A rendered chart document ready to be written
#[derive(Debug, Clone)]
pub struct ChartFile {
    /// File name relative to the output directory
    pub filename: String,
    /// Complete SVG document contents
    pub contents: String,
}

/// Strategy for turning a size report into chart documents
pub trait ChartRenderer {
    /// Renderer name used in log output
    fn name(&self) -> &str;

    /// Render the report into one or more chart documents
    ///
    /// Renderers only read the report; no value computed by the
    /// aggregation may change here.
    fn render(&self, report: &SizeReport) -> Vec<ChartFile>;
}

/// Chart layout identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartLayout {
    /// Every build variant and backend combination in one document
    #[default]
    Combined,
    /// One document per build variant, limited to the baseline and
    /// single-backend additions
    Split,
}

impl FromStr for ChartLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "combined" => Ok(Self::Combined),
            "split" => Ok(Self::Split),
            _ => Err(format!(
                "Unknown chart layout: {} (expected 'combined' or 'split')",
                s
            )),
        }
    }
}

impl ChartLayout {
    /// Get layout name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Combined => "combined",
            Self::Split => "split",
        }
    }

    /// Build the renderer implementing this layout
    pub fn renderer(&self) -> Box<dyn ChartRenderer> {
        match self {
            Self::Combined => Box::new(CombinedRenderer),
            Self::Split => Box::new(SplitRenderer),
        }
    }
}
