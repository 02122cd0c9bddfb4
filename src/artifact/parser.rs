//! Artifact filename parsing
//!
//! Asset names follow the pattern
//! `libexecutorch_ffi-<platform>-<arch>[-<backend>...]-<variant>.<ext>`
//! where platform and arch may each span two tokens (compound forms).
//! Names that do not match are skipped silently so unrelated release
//! assets (checksums, installers) never abort a report.

use crate::artifact::record::{ArtifactRecord, BuildVariant};

/// Prefix every library artifact name carries
pub const ARTIFACT_PREFIX: &str = "libexecutorch_ffi-";

/// Checksum sidecar suffix, always skipped
const CHECKSUM_SUFFIX: &str = ".sha256";

/// Recognized archive suffixes
const ARCHIVE_SUFFIXES: &[&str] = &[".tar.gz", ".zip"];

/// Backend assumed when the name carries no backend tokens
pub const DEFAULT_BACKEND: &str = "xnnpack";

/// Two-token platform spellings merged into one tag
const COMPOUND_PLATFORMS: &[(&str, &str)] = &[("ios", "simulator")];

/// Two-token architecture spellings merged into one tag
const COMPOUND_ARCHES: &[(&str, &str)] = &[("arm64", "v8a"), ("armeabi", "v7a")];

/// Parse a release asset name into an [`ArtifactRecord`]
///
/// Returns `None` for assets that are not library archives. Rejections
/// are logged at debug level so a surprising skip can be diagnosed with
/// `RUST_LOG=debug`.
pub fn parse_artifact(filename: &str, size_bytes: u64) -> Option<ArtifactRecord> {
    if filename.ends_with(CHECKSUM_SUFFIX) {
        log::debug!("skipping checksum sidecar: {filename}");
        return None;
    }

    let stem = filename.strip_prefix(ARTIFACT_PREFIX)?;
    let stem = strip_archive_suffix(stem).or_else(|| {
        log::debug!("skipping asset with unrecognized suffix: {filename}");
        None
    })?;

    let tokens: Vec<&str> = stem.split('-').collect();
    // platform + arch + variant is the minimum, and a lone triple would
    // leave no token for the backend list either
    if tokens.len() < 4 {
        log::debug!("skipping asset with too few name tokens: {filename}");
        return None;
    }

    let (variant_token, rest) = tokens.split_last()?;
    let variant = BuildVariant::from_token(variant_token).or_else(|| {
        log::debug!("skipping asset with unknown build variant: {filename}");
        None
    })?;

    let (platform, rest) = take_compound(rest, COMPOUND_PLATFORMS)?;
    let (arch, rest) = take_compound(rest, COMPOUND_ARCHES)?;

    let backends: Vec<String> = if rest.is_empty() {
        vec![DEFAULT_BACKEND.to_string()]
    } else {
        rest.iter().map(|s| s.to_string()).collect()
    };

    Some(ArtifactRecord {
        platform,
        arch,
        backends,
        variant,
        size_bytes,
        filename: filename.to_string(),
    })
}

fn strip_archive_suffix(name: &str) -> Option<&str> {
    ARCHIVE_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
}

/// Take one tag off the front of `tokens`, merging a two-token spelling
/// from `table` into its hyphenated form
fn take_compound<'a>(
    tokens: &'a [&'a str],
    table: &[(&str, &str)],
) -> Option<(String, &'a [&'a str])> {
    let (first, rest) = tokens.split_first()?;
    if let Some(next) = rest.first() {
        if table.iter().any(|(a, b)| a == first && b == next) {
            return Some((format!("{first}-{next}"), &rest[1..]));
        }
    }
    Some((first.to_string(), rest))
}
