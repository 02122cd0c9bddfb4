//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Release payload fixture builders
//! - Asset lists covering the artifact naming scheme
//!
//! Integration tests drive the binary through `--from` payload files so
//! they never need network access or an installed gh CLI.

pub mod fixtures;
