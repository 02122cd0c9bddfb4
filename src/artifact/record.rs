//! Parsed artifact data model

use std::fmt;

/// Build variant an artifact was compiled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildVariant {
    /// Optimized release build
    Release,
    /// Debug build with assertions and symbols
    Debug,
}

impl BuildVariant {
    /// Parse a filename token into a build variant
    ///
    /// Returns `None` for anything other than the two recognized spellings.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "release" => Some(Self::Release),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    /// Lowercase name used in report keys and chart filenames
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One release artifact, derived from its filename and byte size
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactRecord {
    /// Platform tag (e.g. "linux", "ios-simulator")
    pub platform: String,
    /// Architecture tag (e.g. "x86_64", "arm64-v8a")
    pub arch: String,
    /// Backends compiled into the artifact, in filename order
    pub backends: Vec<String>,
    /// Build variant
    pub variant: BuildVariant,
    /// Asset size in bytes
    pub size_bytes: u64,
    /// Asset filename as published in the release
    pub filename: String,
}

impl ArtifactRecord {
    /// Size in megabytes
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }

    /// Canonical backend combination key: sorted and joined with '-'
    ///
    /// Sorting makes the key invariant under the order backends appear
    /// in the filename.
    pub fn backend_key(&self) -> String {
        let mut backends = self.backends.clone();
        backends.sort();
        backends.join("-")
    }

    /// Platform-architecture key used for grouping
    pub fn group_key(&self) -> String {
        format!("{}-{}", self.platform, self.arch)
    }
}
