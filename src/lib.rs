#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! sizechart library
//!
//! This library provides the core functionality for release artifact size
//! reporting. It can be used programmatically in addition to the CLI
//! interface.
//!
//! # Basic Example
//!
//! Parsing an artifact filename:
//!
//! ```
//! use sizechart::artifact::parse_artifact;
//!
//! let record = parse_artifact(
//!     "libexecutorch_ffi-ios-simulator-arm64-xnnpack-coreml-release.tar.gz",
//!     15_728_640,
//! )
//! .unwrap();
//!
//! assert_eq!(record.platform, "ios-simulator");
//! assert_eq!(record.arch, "arm64");
//! assert_eq!(record.backend_key(), "coreml-xnnpack");
//! assert_eq!(record.size_mb(), 15.0);
//! ```
//!
//! # Advanced Example: Size Deltas
//!
//! Aggregating parsed records into a report:
//!
//! ```
//! use sizechart::artifact::parse_artifact;
//! use sizechart::report::aggregate;
//!
//! let assets = [
//!     ("libexecutorch_ffi-linux-x86_64-xnnpack-release.tar.gz", 10_485_760_u64),
//!     ("libexecutorch_ffi-linux-x86_64-xnnpack-vulkan-release.tar.gz", 13_107_200),
//!     ("checksums.txt", 120),
//! ];
//! let records: Vec<_> = assets
//!     .iter()
//!     .filter_map(|(name, size)| parse_artifact(name, *size))
//!     .collect();
//!
//! // The checksums file is dropped, the two artifacts survive
//! assert_eq!(records.len(), 2);
//!
//! let report = aggregate(&records, "v1.0.0", "2024-06-01T12:00:00+00:00");
//! let group = &report.platforms["release"]["linux-x86_64"];
//! assert_eq!(group["xnnpack"].delta_mb, 0.0);
//! assert_eq!(group["vulkan-xnnpack"].delta_mb, 2.5);
//! ```
//!
//! # Advanced Example: Rendering Charts
//!
//! Turning a report into SVG documents:
//!
//! ```
//! use sizechart::artifact::parse_artifact;
//! use sizechart::render::ChartLayout;
//! use sizechart::report::aggregate;
//!
//! let record = parse_artifact(
//!     "libexecutorch_ffi-macos-arm64-xnnpack-release.tar.gz",
//!     10_485_760,
//! )
//! .unwrap();
//! let report = aggregate(&[record], "v1.0.0", "2024-06-01T12:00:00+00:00");
//!
//! let charts = ChartLayout::Combined.renderer().render(&report);
//! assert_eq!(charts.len(), 1);
//! assert_eq!(charts[0].filename, "size-report.svg");
//! assert!(charts[0].contents.starts_with("<svg"));
//! ```

/// Artifact filename parsing and the parsed record model
pub mod artifact;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file loading
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// GitHub release metadata access
pub mod github;
/// Infrastructure traits for filesystem and command execution
pub mod infra;
/// Chart rendering strategies
pub mod render;
/// Report aggregation and console output
pub mod report;
