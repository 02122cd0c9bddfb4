//! Configuration file loading
//!
//! An optional `.sizechart.toml` in the working directory supplies defaults
//! for settings that are not given on the command line:
//!
//! ```toml
//! repo = "owner/name"
//! layout = "split"
//! out-dir = "reports"
//! ```

use crate::infra::{FileSystem, RealFileSystem};
use crate::render::ChartLayout;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".sizechart.toml";

/// sizechart configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Default repository in owner/name form
    pub repo: Option<String>,

    /// Default chart layout
    pub layout: Option<ChartLayout>,

    /// Default output directory for report files
    #[serde(rename = "out-dir")]
    pub out_dir: Option<PathBuf>,
}

impl ConfigFile {
    /// Validate configuration values
    ///
    /// Ensures the repository coordinate is in owner/name form.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref repo) = self.repo {
            if !repo.contains('/') || repo.starts_with('/') || repo.ends_with('/') {
                anyhow::bail!("Repository '{}' must be in owner/name form", repo);
            }
        }
        Ok(())
    }
}

/// Handles loading configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .sizechart.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sizechart::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Default repo: {:?}", config.repo);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(working_dir: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(working_dir, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(working_dir: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = working_dir.join(CONFIG_FILE_NAME);

        // Read file atomically - no TOCTOU race window
        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Return default config if file doesn't exist
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).context("Failed to read .sizechart.toml");
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).context("Failed to parse .sizechart.toml")?;

        config
            .validate()
            .context("Invalid .sizechart.toml configuration")?;

        Ok(config)
    }
}
