//! Key path navigation over YAML mappings
//!
//! A [`KeyPath`] is an ordered list of mapping keys. Walking it never fails
//! loudly: a missing key or a node that is not a mapping at any level
//! collapses to `None`, so hand-written partial structures are handled the
//! same way as absent ones.
//!
//! ```
//! use otelcol_content::KeyPath;
//!
//! let path = KeyPath::parse("extensions.sumologic.collector_fields");
//! assert_eq!(path.keys(), ["extensions", "sumologic", "collector_fields"]);
//! assert_eq!(path.to_string(), "extensions.sumologic.collector_fields");
//! ```

use serde_yaml::{Mapping, Value};
use std::fmt;

/// Ordered sequence of mapping keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    keys: Vec<String>,
}

impl KeyPath {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a dot-separated path. Empty segments are skipped.
    pub fn parse(dotted: &str) -> Self {
        Self::new(dotted.split('.').filter(|s| !s.is_empty()))
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// A new path with `key` appended.
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut keys = self.keys.clone();
        keys.push(key.into());
        Self { keys }
    }

    /// Node at this path, if every level exists.
    pub fn get<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.keys
            .iter()
            .try_fold(root, |node, key| node.as_mapping()?.get(key.as_str()))
    }

    /// Mutable node at this path, if every level exists.
    pub fn get_mut<'a>(&self, root: &'a mut Value) -> Option<&'a mut Value> {
        self.keys
            .iter()
            .try_fold(root, |node, key| node.as_mapping_mut()?.get_mut(key.as_str()))
    }

    /// Mapping at this path; `None` if absent or not a mapping.
    pub fn mapping<'a>(&self, root: &'a Value) -> Option<&'a Mapping> {
        self.get(root)?.as_mapping()
    }

    pub fn mapping_mut<'a>(&self, root: &'a mut Value) -> Option<&'a mut Mapping> {
        self.get_mut(root)?.as_mapping_mut()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keys.join("."))
    }
}
