//! Report command implementation
//!
//! Handles the `sizechart report` command: fetch the release asset
//! list, parse artifact names, aggregate size deltas and write the JSON
//! report plus the SVG charts.

use anyhow::Result;
use chrono::Utc;
use console::style;
use std::env;
use std::path::{Path, PathBuf};

use crate::artifact::{parse_artifact, ArtifactRecord};
use crate::config::{ConfigFile, ConfigLoader};
use crate::error::SizechartError;
use crate::fmt::{CHECKMARK, ROCKET};
use crate::github::{self, ReleaseAsset, ReleaseClient, DEFAULT_REPO};
use crate::infra::{CommandExecutor, FileSystem, RealFileSystem};
use crate::render::ChartLayout;
use crate::report::{aggregate, print_summary};

/// JSON report file name
pub const JSON_REPORT_FILE: &str = "size-report.json";

/// Resolved settings for one report run
#[derive(Debug, Clone, PartialEq)]
struct ReportSettings {
    tag: String,
    repo: String,
    layout: ChartLayout,
    out_dir: PathBuf,
}

/// Main report command handler
///
/// Settings resolve in CLI > environment > config file > default order;
/// the release tag is the only setting without a default.
///
/// # Examples
///
/// ```no_run
/// use sizechart::cmd::report::cmd_report;
///
/// // Report on a tag with defaults for everything else
/// cmd_report(Some("v1.0.1"), None, None, None, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - No release tag is given on the command line or in RELEASE_TAG
/// - The gh CLI is missing or the fetch fails
/// - No asset name parses as a library artifact
/// - An output file cannot be written
pub fn cmd_report(
    tag: Option<&str>,
    repo: Option<&str>,
    layout: Option<&str>,
    out_dir: Option<&str>,
    from: Option<&str>,
) -> Result<()> {
    let working_dir = env::current_dir()?;
    let config = ConfigLoader::load(&working_dir)?;

    let settings = resolve_settings(
        tag,
        repo,
        layout,
        out_dir,
        env::var("RELEASE_TAG").ok(),
        env::var("GITHUB_REPOSITORY").ok(),
        &config,
    )?;

    cmd_report_impl(&settings, from, &ReleaseClient::new(), &RealFileSystem, true)
}

/// Resolve run settings from CLI arguments, environment variables and
/// the config file, in that precedence order
fn resolve_settings(
    cli_tag: Option<&str>,
    cli_repo: Option<&str>,
    cli_layout: Option<&str>,
    cli_out_dir: Option<&str>,
    env_tag: Option<String>,
    env_repo: Option<String>,
    config: &ConfigFile,
) -> Result<ReportSettings> {
    // Empty environment values count as unset
    let env_tag = env_tag.filter(|t| !t.is_empty());
    let env_repo = env_repo.filter(|r| !r.is_empty());

    let tag = cli_tag
        .map(str::to_string)
        .or(env_tag)
        .ok_or(SizechartError::MissingReleaseTag)?;

    let repo = cli_repo
        .map(str::to_string)
        .or(env_repo)
        .or_else(|| config.repo.clone())
        .unwrap_or_else(|| DEFAULT_REPO.to_string());

    let layout = match cli_layout {
        Some(name) => name
            .parse::<ChartLayout>()
            .map_err(|e| anyhow::anyhow!(e))?,
        None => config.layout.unwrap_or_default(),
    };

    let out_dir = cli_out_dir
        .map(PathBuf::from)
        .or_else(|| config.out_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(ReportSettings {
        tag,
        repo,
        layout,
        out_dir,
    })
}

/// Internal implementation that allows injecting the release client and
/// filesystem, and skipping the gh check, for testing
fn cmd_report_impl<CE: CommandExecutor, FS: FileSystem>(
    settings: &ReportSettings,
    from: Option<&str>,
    client: &ReleaseClient<CE>,
    fs: &FS,
    check_tool: bool,
) -> Result<()> {
    println!("{} {} Size Report", ROCKET, style("sizechart").bold());
    println!();
    println!("Analyzing release: {}", style(&settings.tag).cyan());
    println!("Repository: {}", settings.repo);

    println!();
    println!("Fetching release assets...");
    let assets = load_assets(settings, from, client, fs, check_tool)?;
    println!("Found {} assets", assets.len());

    let records: Vec<ArtifactRecord> = assets
        .iter()
        .filter_map(|asset| parse_artifact(&asset.name, asset.size))
        .collect();
    println!("Parsed {} library artifacts", records.len());

    if records.is_empty() {
        return Err(SizechartError::NoArtifacts {
            tag: settings.tag.clone(),
            asset_count: assets.len(),
        }
        .into());
    }

    println!();
    println!("Calculating size deltas...");
    let generated_at = Utc::now().to_rfc3339();
    let report = aggregate(&records, &settings.tag, &generated_at);

    println!();
    println!("Generating outputs...");

    // Render everything before the first write so a failure never
    // leaves a partial report behind
    let json = report.to_json()?;
    let charts = settings.layout.renderer().render(&report);

    fs.create_dir_all(&settings.out_dir)
        .map_err(|e| SizechartError::Io {
            context: format!("creating {}", settings.out_dir.display()),
            source: e,
        })?;

    write_output(fs, &settings.out_dir.join(JSON_REPORT_FILE), &json)?;
    for chart in &charts {
        write_output(fs, &settings.out_dir.join(&chart.filename), &chart.contents)?;
    }

    print_summary(&report);

    println!();
    println!("{} Done!", CHECKMARK);

    Ok(())
}

/// Load assets from a saved payload file or from the GitHub API
fn load_assets<CE: CommandExecutor, FS: FileSystem>(
    settings: &ReportSettings,
    from: Option<&str>,
    client: &ReleaseClient<CE>,
    fs: &FS,
    check_tool: bool,
) -> Result<Vec<ReleaseAsset>> {
    match from {
        Some(path) => {
            let payload = fs
                .read_to_string(Path::new(path))
                .map_err(|e| SizechartError::Io {
                    context: format!("reading {}", path),
                    source: e,
                })?;
            github::decode_assets(payload.as_bytes())
        }
        None => {
            if check_tool && !ReleaseClient::check_installation() {
                return Err(github::gh_missing_error().into());
            }
            client.fetch_assets(&settings.repo, &settings.tag)
        }
    }
}

fn write_output<FS: FileSystem>(fs: &FS, path: &Path, contents: &str) -> Result<()> {
    fs.write(path, contents).map_err(|e| SizechartError::Io {
        context: format!("writing {}", path.display()),
        source: e,
    })?;
    println!("{} Generated {}", CHECKMARK, style(path.display()).green());
    Ok(())
}
