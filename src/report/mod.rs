//! Size report assembly
//!
//! Provides:
//! - Grouping of parsed artifacts by build variant and platform-arch
//! - Baseline delta computation per group
//! - The JSON report model
//! - Console summary formatting

pub mod aggregator;
pub mod display;
pub mod model;

pub use aggregator::{aggregate, BASELINE_BACKEND};
pub use display::{format_summary, print_summary, DELTA_DISPLAY_THRESHOLD_MB};
pub use model::{BackendEntry, BackendMap, GroupMap, SizeReport};
