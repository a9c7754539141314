//! YAML fragment model for otelcol-config
//!
//! Parses fragment bytes into a `serde_yaml` tree, navigates it by fixed
//! key paths, and renders it back deterministically.

pub mod diff;
pub mod document;
pub mod error;
pub mod path;

pub use diff::unified_diff;
pub use document::YamlDocument;
pub use error::{Error, Result};
pub use path::KeyPath;
