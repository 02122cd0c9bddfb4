//! GitHub release metadata access through the gh CLI
//!
//! Release assets are listed with `gh api repos/{repo}/releases/tags/{tag}`.
//! Authentication is left to gh itself, which picks up GH_TOKEN or a
//! previous `gh auth login` from the environment.

use crate::error::SizechartError;
use crate::infra::{CommandExecutor, RealCommandExecutor};
use anyhow::Result;
use serde::Deserialize;

/// Repository queried when none is configured
pub const DEFAULT_REPO: &str = "abdelaziz-mahdy/executorch_native";

/// One downloadable asset attached to a release
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// Asset filename
    pub name: String,
    /// Asset size in bytes
    pub size: u64,
}

/// Subset of the release payload returned by `gh api`
#[derive(Debug, Deserialize)]
struct ReleasePayload {
    #[serde(default)]
    assets: Vec<ReleaseAsset>,
}

/// GitHub release client with dependency injection for testability
pub struct ReleaseClient<CE: CommandExecutor = RealCommandExecutor> {
    executor: CE,
}

impl ReleaseClient<RealCommandExecutor> {
    /// Create a new ReleaseClient with real command execution
    pub fn new() -> Self {
        Self {
            executor: RealCommandExecutor,
        }
    }

    /// Check if the gh CLI is installed and available in PATH
    pub fn check_installation() -> bool {
        which::which("gh").is_ok()
    }
}

/// Error reported when the gh binary cannot be found
pub fn gh_missing_error() -> SizechartError {
    SizechartError::ToolMissing {
        tool: "gh".to_string(),
        install_cmd: "brew install gh (or see https://cli.github.com)".to_string(),
        docs_url: Some("https://cli.github.com/".to_string()),
    }
}

impl Default for ReleaseClient<RealCommandExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<CE: CommandExecutor> ReleaseClient<CE> {
    /// Create a ReleaseClient with a custom command executor (for testing)
    pub fn with_executor(executor: CE) -> Self {
        Self { executor }
    }

    /// Fetch the asset list for a release tag.
    ///
    /// Returns every asset attached to the release, whether or not it
    /// matches the artifact naming scheme.
    pub fn fetch_assets(&self, repo: &str, tag: &str) -> Result<Vec<ReleaseAsset>> {
        let endpoint = format!("repos/{}/releases/tags/{}", repo, tag);
        log::debug!("fetching release metadata: gh api {}", endpoint);

        let output = match self
            .executor
            .execute(|cmd| cmd.args(["api", &endpoint]), "gh")
        {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(gh_missing_error().into());
            }
            Err(e) => {
                return Err(SizechartError::Io {
                    context: "running gh api".to_string(),
                    source: e,
                }
                .into());
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(SizechartError::FetchFailed {
                repo: repo.to_string(),
                tag: tag.to_string(),
                stderr,
            }
            .into());
        }

        decode_assets(&output.stdout)
    }
}

/// Decode the asset list out of a `gh api` release payload.
///
/// Also used for `--from` files, which hold the same JSON that
/// `gh api repos/{repo}/releases/tags/{tag}` prints.
pub fn decode_assets(payload: &[u8]) -> Result<Vec<ReleaseAsset>> {
    let release: ReleasePayload =
        serde_json::from_slice(payload).map_err(|e| SizechartError::ReleaseDecode {
            context: "GitHub release JSON".to_string(),
            source: e,
        })?;
    Ok(release.assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::mock_exit_status;
    use std::io;
    use std::process::{Command, Output};
    use std::sync::{Arc, Mutex};

    // Mock CommandExecutor for testing
    struct MockCommandExecutor {
        stdout: Vec<u8>,
        stderr: Vec<u8>,
        exit_code: i32,
        io_error: Option<io::ErrorKind>,
        recorded: Arc<Mutex<Vec<String>>>,
    }

    impl MockCommandExecutor {
        fn success(stdout: &[u8]) -> Self {
            Self {
                stdout: stdout.to_vec(),
                stderr: vec![],
                exit_code: 0,
                io_error: None,
                recorded: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failure(stderr: &[u8]) -> Self {
            Self {
                stdout: vec![],
                stderr: stderr.to_vec(),
                exit_code: 1,
                io_error: None,
                recorded: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn io_error(kind: io::ErrorKind) -> Self {
            Self {
                stdout: vec![],
                stderr: vec![],
                exit_code: 0,
                io_error: Some(kind),
                recorded: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn recorded_invocation(&self) -> Vec<String> {
            self.recorded.lock().unwrap().clone()
        }
    }

    impl CommandExecutor for MockCommandExecutor {
        fn output(&self, cmd: &mut Command) -> io::Result<Output> {
            let mut invocation = vec![cmd.get_program().to_string_lossy().to_string()];
            invocation.extend(
                cmd.get_args()
                    .map(|arg| arg.to_string_lossy().to_string()),
            );
            *self.recorded.lock().unwrap() = invocation;

            if let Some(kind) = self.io_error {
                return Err(io::Error::new(kind, "mock error"));
            }

            Ok(Output {
                status: mock_exit_status(self.exit_code),
                stdout: self.stdout.clone(),
                stderr: self.stderr.clone(),
            })
        }
    }

    const SAMPLE_PAYLOAD: &str = r#"{
        "tag_name": "v1.0.0",
        "assets": [
            {"name": "libexecutorch_ffi-linux-x86_64-xnnpack-release.tar.gz", "size": 10485760, "url": "ignored"},
            {"name": "checksums.txt", "size": 120}
        ]
    }"#;

    #[test]
    fn test_fetch_assets_success_decodes_names_and_sizes() {
        let mock = MockCommandExecutor::success(SAMPLE_PAYLOAD.as_bytes());
        let client = ReleaseClient::with_executor(mock);

        let assets = client.fetch_assets("owner/name", "v1.0.0").unwrap();

        assert_eq!(assets.len(), 2);
        assert_eq!(
            assets[0].name,
            "libexecutorch_ffi-linux-x86_64-xnnpack-release.tar.gz"
        );
        assert_eq!(assets[0].size, 10_485_760);
        assert_eq!(assets[1].name, "checksums.txt");
    }

    #[test]
    fn test_fetch_assets_builds_release_endpoint() {
        let mock = MockCommandExecutor::success(b"{\"assets\": []}");
        let recorded = mock.recorded.clone();
        let client = ReleaseClient::with_executor(mock);

        client.fetch_assets("owner/name", "v2.1.0").unwrap();

        let invocation = recorded.lock().unwrap().clone();
        assert_eq!(
            invocation,
            vec![
                "gh".to_string(),
                "api".to_string(),
                "repos/owner/name/releases/tags/v2.1.0".to_string(),
            ]
        );
    }

    #[test]
    fn test_fetch_assets_command_failure_reports_stderr() {
        let mock = MockCommandExecutor::failure(b"gh: Not Found (HTTP 404)\n");
        let client = ReleaseClient::with_executor(mock);

        let err = client
            .fetch_assets("owner/name", "v9.9.9")
            .expect_err("non-zero gh exit should fail");

        let sc_err = err
            .downcast_ref::<SizechartError>()
            .expect("should be a SizechartError");
        match sc_err {
            SizechartError::FetchFailed { tag, stderr, .. } => {
                assert_eq!(tag, "v9.9.9");
                assert!(stderr.contains("HTTP 404"));
            }
            other => panic!("expected FetchFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_assets_missing_gh_reports_tool_missing() {
        let mock = MockCommandExecutor::io_error(io::ErrorKind::NotFound);
        let client = ReleaseClient::with_executor(mock);

        let err = client
            .fetch_assets("owner/name", "v1.0.0")
            .expect_err("missing binary should fail");

        let sc_err = err
            .downcast_ref::<SizechartError>()
            .expect("should be a SizechartError");
        assert!(matches!(sc_err, SizechartError::ToolMissing { tool, .. } if tool == "gh"));
    }

    #[test]
    fn test_fetch_assets_other_io_error_reports_io() {
        let mock = MockCommandExecutor::io_error(io::ErrorKind::PermissionDenied);
        let client = ReleaseClient::with_executor(mock);

        let err = client
            .fetch_assets("owner/name", "v1.0.0")
            .expect_err("io failure should fail");

        let sc_err = err
            .downcast_ref::<SizechartError>()
            .expect("should be a SizechartError");
        assert!(matches!(sc_err, SizechartError::Io { .. }));
    }

    #[test]
    fn test_decode_assets_without_assets_key_returns_empty() {
        let assets = decode_assets(b"{\"tag_name\": \"v1.0.0\"}").unwrap();
        assert!(assets.is_empty());
    }

    #[test]
    fn test_decode_assets_invalid_json_reports_decode_error() {
        let err = decode_assets(b"<html>rate limited</html>").expect_err("html is not a release");

        let sc_err = err
            .downcast_ref::<SizechartError>()
            .expect("should be a SizechartError");
        assert!(matches!(sc_err, SizechartError::ReleaseDecode { .. }));
    }

    #[test]
    fn test_decode_assets_missing_size_field_reports_decode_error() {
        let payload = br#"{"assets": [{"name": "artifact.tar.gz"}]}"#;
        let result = decode_assets(payload);
        assert!(result.is_err());
    }

    #[test]
    fn test_mock_invocation_is_recorded() {
        let mock = MockCommandExecutor::success(b"{}");
        let output = mock
            .execute(|cmd| cmd.args(["api", "repos/a/b/releases/tags/v1"]), "gh")
            .unwrap();
        assert!(output.status.success());
        assert_eq!(mock.recorded_invocation()[0], "gh");
    }
}
