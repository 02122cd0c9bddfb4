//! Enhanced error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Documentation links
//! - Proper exit codes for CI/CD
//!
//! # Examples
//!
//! ```
//! use sizechart::error::SizechartError;
//!
//! let error = SizechartError::MissingReleaseTag;
//! assert_eq!(error.exit_code(), 64); // EX_USAGE
//! assert!(error.suggestion().is_some());
//! ```

use thiserror::Error;

/// Enhanced sizechart errors with contextual suggestions
#[derive(Error, Debug)]
pub enum SizechartError {
    /// No release tag given on the command line or in the environment
    #[error("No release tag specified")]
    MissingReleaseTag,

    /// Required tool is not installed
    #[error("Tool not installed: {tool}")]
    ToolMissing {
        /// Tool name
        tool: String,
        /// Installation command
        install_cmd: String,
        /// Optional documentation URL
        docs_url: Option<String>,
    },

    /// Fetching release metadata from GitHub failed
    #[error("Failed to fetch release '{tag}' from {repo}")]
    FetchFailed {
        /// Repository in owner/name form
        repo: String,
        /// Release tag that was requested
        tag: String,
        /// Error output from the gh invocation
        stderr: String,
    },

    /// Release payload could not be decoded
    #[error("Unexpected release payload: {context}")]
    ReleaseDecode {
        /// Context about what was being decoded
        context: String,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },

    /// Release contained no artifacts matching the naming scheme
    #[error("No size artifacts found in release '{tag}'")]
    NoArtifacts {
        /// Release tag that was inspected
        tag: String,
        /// Total number of assets in the release
        asset_count: usize,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl SizechartError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// Returns a user-friendly suggestion for how to fix the error, if available.
    ///
    /// # Examples
    ///
    /// ```
    /// use sizechart::error::SizechartError;
    ///
    /// let error = SizechartError::ToolMissing {
    ///     tool: "gh".to_string(),
    ///     install_cmd: "brew install gh".to_string(),
    ///     docs_url: None,
    /// };
    ///
    /// let suggestion = error.suggestion();
    /// assert!(suggestion.is_some());
    /// assert!(suggestion.unwrap().contains("brew install"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::MissingReleaseTag => Some(
                "Pass the tag on the command line (sizechart report --tag v1.2.3) \
                 or set the RELEASE_TAG environment variable"
                    .to_string(),
            ),
            Self::ToolMissing { install_cmd, .. } => Some(format!("Install with: {}", install_cmd)),
            Self::FetchFailed { tag, stderr, .. } => {
                if stderr.contains("HTTP 404") {
                    Some(format!(
                        "Check that release '{}' exists and the repository is spelled owner/name",
                        tag
                    ))
                } else if stderr.contains("auth login") || stderr.contains("Bad credentials") {
                    Some("Authenticate first: run 'gh auth login' or set GH_TOKEN".to_string())
                } else if stderr.contains("rate limit") {
                    Some("GitHub API rate limit hit. Set GH_TOKEN to raise the limit".to_string())
                } else {
                    Some("Check the gh error output above and verify network access".to_string())
                }
            }
            Self::ReleaseDecode { .. } => {
                Some("The release payload did not look like a GitHub release. \
                      If you used --from, check that the file holds 'gh api' output"
                    .to_string())
            }
            Self::NoArtifacts { asset_count, .. } => Some(format!(
                "The release has {} asset(s) but none match \
                 libexecutorch_ffi-<platform>-<arch>[-<backends>]-<variant>.tar.gz|.zip",
                asset_count
            )),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get documentation URL for this error.
    ///
    /// Returns a URL to relevant documentation for resolving this error type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sizechart::error::SizechartError;
    ///
    /// let error = SizechartError::ToolMissing {
    ///     tool: "gh".to_string(),
    ///     install_cmd: "brew install gh".to_string(),
    ///     docs_url: Some("https://cli.github.com/".to_string()),
    /// };
    ///
    /// assert_eq!(error.docs_url().unwrap(), "https://cli.github.com/");
    /// ```
    pub fn docs_url(&self) -> Option<&str> {
        match self {
            Self::ToolMissing { docs_url, .. } => docs_url.as_deref(),
            Self::FetchFailed { .. } => Some("https://cli.github.com/manual/gh_api"),
            Self::NoArtifacts { .. } => {
                Some("https://github.com/abdelaziz-mahdy/sizechart#artifact-naming")
            }
            _ => None,
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes based on the error type, following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use sizechart::error::SizechartError;
    ///
    /// let error = SizechartError::ToolMissing {
    ///     tool: "gh".to_string(),
    ///     install_cmd: "brew install gh".to_string(),
    ///     docs_url: None,
    /// };
    ///
    /// assert_eq!(error.exit_code(), 127); // Command not found
    /// assert_eq!(SizechartError::MissingReleaseTag.exit_code(), 64); // EX_USAGE
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingReleaseTag => 64, // EX_USAGE (sysexits.h)
            Self::ToolMissing { .. } => 127, // Command not found (Unix convention)
            Self::FetchFailed { .. } => 1, // Generic error (upstream failure)
            Self::ReleaseDecode { .. } => 65, // EX_DATAERR
            Self::NoArtifacts { .. } => 65, // EX_DATAERR
            Self::Io { .. } => 74,         // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions and documentation links
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        // Main error message
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        // Try to downcast to SizechartError for suggestions
        if let Some(sc_error) = error.downcast_ref::<SizechartError>() {
            // Suggestions
            if let Some(suggestion) = sc_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }

            // Documentation link
            if let Some(docs) = sc_error.docs_url() {
                output.push_str(&format!("{} {}\n", style("docs:").blue(), docs));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(sc_error) = error.downcast_ref::<SizechartError>() {
            sc_error.exit_code()
        } else {
            1 // Generic error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("not json").unwrap_err()
    }

    #[test]
    fn test_missing_release_tag_has_suggestion() {
        let err = SizechartError::MissingReleaseTag;

        let suggestion = err
            .suggestion()
            .expect("MissingReleaseTag should have suggestion");
        assert!(suggestion.contains("--tag"));
        assert!(suggestion.contains("RELEASE_TAG"));
    }

    #[test]
    fn test_tool_missing_has_suggestion() {
        let err = SizechartError::ToolMissing {
            tool: "gh".to_string(),
            install_cmd: "brew install gh".to_string(),
            docs_url: Some("https://cli.github.com/".to_string()),
        };

        let suggestion = err
            .suggestion()
            .expect("ToolMissing should have suggestion");
        assert!(suggestion.contains("brew install gh"));
    }

    #[test]
    fn test_fetch_failed_not_found_mentions_tag() {
        let err = SizechartError::FetchFailed {
            repo: "owner/name".to_string(),
            tag: "v9.9.9".to_string(),
            stderr: "gh: Not Found (HTTP 404)".to_string(),
        };

        let suggestion = err
            .suggestion()
            .expect("FetchFailed should have suggestion");
        assert!(suggestion.contains("v9.9.9"));
    }

    #[test]
    fn test_fetch_failed_auth_error_suggests_login() {
        let err = SizechartError::FetchFailed {
            repo: "owner/name".to_string(),
            tag: "v1.0.0".to_string(),
            stderr: "To get started with GitHub CLI, please run: gh auth login".to_string(),
        };

        let suggestion = err
            .suggestion()
            .expect("FetchFailed should have suggestion");
        assert!(suggestion.contains("gh auth login"));
        assert!(suggestion.contains("GH_TOKEN"));
    }

    #[test]
    fn test_fetch_failed_rate_limit_suggests_token() {
        let err = SizechartError::FetchFailed {
            repo: "owner/name".to_string(),
            tag: "v1.0.0".to_string(),
            stderr: "API rate limit exceeded for 1.2.3.4".to_string(),
        };

        let suggestion = err
            .suggestion()
            .expect("FetchFailed should have suggestion");
        assert!(suggestion.contains("GH_TOKEN"));
    }

    #[test]
    fn test_no_artifacts_reports_asset_count() {
        let err = SizechartError::NoArtifacts {
            tag: "v1.0.0".to_string(),
            asset_count: 7,
        };

        let suggestion = err
            .suggestion()
            .expect("NoArtifacts should have suggestion");
        assert!(suggestion.contains("7 asset(s)"));
        assert!(suggestion.contains("libexecutorch_ffi-"));
    }

    #[test]
    fn test_io_error_has_context() {
        let err = SizechartError::Io {
            context: "writing size-report.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        let suggestion = err.suggestion().expect("Io error should have suggestion");
        assert!(suggestion.contains("permissions"));
        assert!(suggestion.contains("size-report.json"));
    }

    #[test]
    fn test_exit_codes_follow_conventions() {
        assert_eq!(SizechartError::MissingReleaseTag.exit_code(), 64); // EX_USAGE

        let tool_err = SizechartError::ToolMissing {
            tool: "gh".to_string(),
            install_cmd: "brew install gh".to_string(),
            docs_url: None,
        };
        assert_eq!(tool_err.exit_code(), 127); // Command not found

        let no_artifacts = SizechartError::NoArtifacts {
            tag: "v1.0.0".to_string(),
            asset_count: 0,
        };
        assert_eq!(no_artifacts.exit_code(), 65); // EX_DATAERR
    }

    #[test]
    fn test_all_error_variants_have_exit_codes() {
        let errors = vec![
            SizechartError::MissingReleaseTag,
            SizechartError::ToolMissing {
                tool: "test".to_string(),
                install_cmd: "test".to_string(),
                docs_url: None,
            },
            SizechartError::FetchFailed {
                repo: "test/test".to_string(),
                tag: "test".to_string(),
                stderr: "test".to_string(),
            },
            SizechartError::ReleaseDecode {
                context: "test".to_string(),
                source: decode_error(),
            },
            SizechartError::NoArtifacts {
                tag: "test".to_string(),
                asset_count: 0,
            },
            SizechartError::Io {
                context: "test".to_string(),
                source: std::io::Error::other("test"),
            },
        ];

        for err in errors {
            let exit_code = err.exit_code();
            assert!(
                exit_code > 0,
                "Error {:?} should have non-zero exit code",
                err
            );
            assert!(exit_code < 256, "Exit code should fit in a byte");
        }
    }

    #[test]
    fn test_all_error_variants_have_suggestions() {
        let errors = vec![
            SizechartError::MissingReleaseTag,
            SizechartError::ToolMissing {
                tool: "gh".to_string(),
                install_cmd: "brew install gh".to_string(),
                docs_url: None,
            },
            SizechartError::FetchFailed {
                repo: "test/test".to_string(),
                tag: "v1.0.0".to_string(),
                stderr: "network unreachable".to_string(),
            },
            SizechartError::ReleaseDecode {
                context: "assets array".to_string(),
                source: decode_error(),
            },
            SizechartError::NoArtifacts {
                tag: "v1.0.0".to_string(),
                asset_count: 3,
            },
            SizechartError::Io {
                context: "reading payload".to_string(),
                source: std::io::Error::other("test"),
            },
        ];

        for err in &errors {
            let suggestion = err.suggestion();
            assert!(
                suggestion.is_some(),
                "Error {:?} should have a suggestion",
                err
            );
            assert!(
                !suggestion.unwrap().is_empty(),
                "Suggestion should not be empty"
            );
        }
    }

    #[test]
    fn test_formatter_includes_help_for_typed_errors() {
        let err = anyhow::Error::new(SizechartError::MissingReleaseTag);
        let formatted = ErrorFormatter::format(&err);

        assert!(formatted.contains("error:"));
        assert!(formatted.contains("No release tag specified"));
        assert!(formatted.contains("help:"));
    }

    #[test]
    fn test_formatter_exit_code_for_untyped_error_is_generic() {
        let err = anyhow::anyhow!("something else went wrong");
        assert_eq!(ErrorFormatter::exit_code(&err), 1);
    }
}
