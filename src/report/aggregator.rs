//! Grouping and baseline delta computation

use crate::artifact::{ArtifactRecord, BuildVariant};
use crate::report::model::{BackendEntry, BackendMap, GroupMap, SizeReport};
use indexmap::IndexMap;

/// Backend combination treated as the baseline within each group
pub const BASELINE_BACKEND: &str = "xnnpack";

/// Build a [`SizeReport`] from parsed artifact records
///
/// Records are grouped by build variant, then platform-arch, then
/// backend combination. Within each group the artifact whose backend
/// combination is exactly [`BASELINE_BACKEND`] anchors the deltas; when
/// a group has no such artifact every delta is 0.0.
pub fn aggregate(records: &[ArtifactRecord], release_tag: &str, generated_at: &str) -> SizeReport {
    let mut platforms = IndexMap::new();
    // Both variant keys appear in the report even when no artifact
    // matched, release first
    for variant in [BuildVariant::Release, BuildVariant::Debug] {
        let matching: Vec<&ArtifactRecord> =
            records.iter().filter(|r| r.variant == variant).collect();
        platforms.insert(variant.as_str().to_string(), build_groups(&matching));
    }

    SizeReport {
        release_tag: release_tag.to_string(),
        generated_at: generated_at.to_string(),
        platforms,
    }
}

fn build_groups(records: &[&ArtifactRecord]) -> GroupMap {
    let mut buckets: IndexMap<String, Vec<&ArtifactRecord>> = IndexMap::new();
    for record in records {
        buckets.entry(record.group_key()).or_default().push(record);
    }
    buckets.sort_keys();

    buckets
        .into_iter()
        .map(|(key, group)| (key, build_entries(&group)))
        .collect()
}

fn build_entries(group: &[&ArtifactRecord]) -> BackendMap {
    // Baseline lookup runs over input order so the first match wins
    // when a group carries duplicates
    let baseline = group
        .iter()
        .find(|r| r.backend_key() == BASELINE_BACKEND)
        .copied();

    let mut ordered: Vec<&ArtifactRecord> = group.to_vec();
    ordered.sort_by(|a, b| a.size_mb().total_cmp(&b.size_mb()));

    let mut entries = BackendMap::new();
    for record in ordered {
        let delta_mb = match baseline {
            Some(b) if record != b => record.size_mb() - b.size_mb(),
            _ => 0.0,
        };
        entries.insert(
            record.backend_key(),
            BackendEntry {
                size_mb: round2(record.size_mb()),
                delta_mb: round2(delta_mb),
                filename: record.filename.clone(),
            },
        );
    }
    entries
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
