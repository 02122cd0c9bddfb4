//! Release artifact model and filename parsing
//!
//! Artifacts are never downloaded; everything the report needs is derived
//! from the asset filename and its byte size.

pub mod parser;
pub mod record;

// Re-export the types used throughout the crate
pub use parser::parse_artifact;
pub use record::{ArtifactRecord, BuildVariant};
