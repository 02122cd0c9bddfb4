//! Test fixture helpers for building release payloads
//!
//! Provides utilities for writing `gh api` style release JSON that the
//! `report --from` path consumes, plus canned asset lists.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Number of bytes in one mebibyte
pub const MB: u64 = 1024 * 1024;

/// One release asset entry for [`write_release_payload`]
pub struct AssetSpec {
    pub name: String,
    pub size: u64,
}

/// Shorthand constructor for an asset entry
pub fn asset(name: &str, size: u64) -> AssetSpec {
    AssetSpec {
        name: name.to_string(),
        size,
    }
}

/// Write a release payload holding the given assets to `dir/release.json`
///
/// The file matches the shape `gh api repos/{repo}/releases/tags/{tag}`
/// prints, trimmed to the fields the report reads.
pub fn write_release_payload(dir: &Path, assets: &[AssetSpec]) -> PathBuf {
    let entries: Vec<serde_json::Value> = assets
        .iter()
        .map(|a| serde_json::json!({ "name": a.name, "size": a.size }))
        .collect();
    let payload = serde_json::json!({ "tag_name": "unused", "assets": entries });

    let path = dir.join("release.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(&payload).expect("payload should serialize"),
    )
    .expect("payload file should be writable");
    path
}

/// Write an arbitrary string as the payload file (for malformed input tests)
pub fn write_raw_payload(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("release.json");
    fs::write(&path, contents).expect("payload file should be writable");
    path
}

/// A representative release: two platforms with baseline and one backend
/// addition each, debug twins for one platform, plus a checksum sidecar
/// and an unrelated asset that the report must skip.
///
/// Release builds: linux-x86_64 at 14 MB baseline / 17 MB with vulkan,
/// macos-arm64 at 15 MB baseline / 19 MB with coreml.
/// Debug builds: macos-arm64 at 45 MB baseline / 52 MB with coreml.
pub fn representative_assets() -> Vec<AssetSpec> {
    vec![
        asset("libexecutorch_ffi-macos-arm64-xnnpack-release.tar.gz", 15 * MB),
        asset(
            "libexecutorch_ffi-macos-arm64-coreml-xnnpack-release.tar.gz",
            19 * MB,
        ),
        asset("libexecutorch_ffi-linux-x86_64-xnnpack-release.tar.gz", 14 * MB),
        asset(
            "libexecutorch_ffi-linux-x86_64-vulkan-xnnpack-release.tar.gz",
            17 * MB,
        ),
        asset("libexecutorch_ffi-macos-arm64-xnnpack-debug.tar.gz", 45 * MB),
        asset(
            "libexecutorch_ffi-macos-arm64-coreml-xnnpack-debug.tar.gz",
            52 * MB,
        ),
        asset("libexecutorch_ffi-macos-arm64-xnnpack-release.tar.gz.sha256", 64),
        asset("checksums.txt", 120),
    ]
}

/// A release-only asset list with a single platform
pub fn single_platform_assets() -> Vec<AssetSpec> {
    vec![
        asset("libexecutorch_ffi-linux-x86_64-xnnpack-release.tar.gz", 10 * MB),
        asset(
            "libexecutorch_ffi-linux-x86_64-mps-xnnpack-release.tar.gz",
            12 * MB + MB / 2,
        ),
    ]
}
