//! Size report data model
//!
//! All maps are insertion-ordered so the JSON report reads the same way
//! the aggregation built it: build variants first release then debug,
//! platform groups lexicographic, entries ascending by size.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One backend combination inside a platform group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendEntry {
    /// Artifact size in MB, rounded to two decimals
    pub size_mb: f64,
    /// Size difference against the group baseline in MB, rounded to two
    /// decimals; 0.0 for the baseline itself and when no baseline exists
    pub delta_mb: f64,
    /// Asset filename the entry was derived from
    pub filename: String,
}

/// Backend combination key to entry, ordered ascending by size
pub type BackendMap = IndexMap<String, BackendEntry>;

/// Platform-arch key to its backend entries, ordered lexicographically
pub type GroupMap = IndexMap<String, BackendMap>;

/// Complete size report for one release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeReport {
    /// Release tag the report was generated for
    pub release_tag: String,
    /// Generation timestamp, RFC 3339
    pub generated_at: String,
    /// Build variant name to its platform groups; both variant keys are
    /// always present, even when empty
    pub platforms: IndexMap<String, GroupMap>,
}

impl SizeReport {
    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize size report: {}", e))
    }

    /// Total number of backend entries across all variants and groups
    pub fn entry_count(&self) -> usize {
        self.platforms
            .values()
            .flat_map(|groups| groups.values())
            .map(|backends| backends.len())
            .sum()
    }
}
