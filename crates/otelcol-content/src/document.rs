//! Parsed YAML fragment

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::path::KeyPath;

/// One parsed YAML fragment.
///
/// An empty fragment parses to a null root. Rendering is deterministic:
/// two-space indentation, mapping keys in their original order. Comments
/// and flow styles from the source are not carried over.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlDocument {
    root: Value,
}

impl YamlDocument {
    pub fn parse(source: &[u8]) -> Result<Self> {
        let root: Value = serde_yaml::from_slice(source).map_err(|e| Error::parse(e.to_string()))?;
        Ok(Self { root })
    }

    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    /// Whether the mapping at `path` has `key`.
    ///
    /// Keys compare by scalar text, so `2024` and `true` match keys that
    /// YAML reads as a number or a boolean.
    pub fn contains_key(&self, path: &KeyPath, key: &str) -> bool {
        path.mapping(&self.root)
            .is_some_and(|mapping| find_key(mapping, key).is_some())
    }

    /// Remove `key` from the mapping at `path`, keeping sibling order.
    ///
    /// The mapping itself is left in place even when it becomes empty.
    pub fn remove_key(&mut self, path: &KeyPath, key: &str) -> Option<Value> {
        let mapping = path.mapping_mut(&mut self.root)?;
        let found = find_key(mapping, key)?.clone();
        mapping.shift_remove(&found)
    }

    pub fn render(&self) -> Result<Vec<u8>> {
        serde_yaml::to_string(&self.root)
            .map(String::into_bytes)
            .map_err(|e| Error::render(e.to_string()))
    }
}

/// First key of `mapping` whose scalar text equals `key`.
fn find_key<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Value> {
    mapping.iter().map(|(k, _)| k).find(|k| match k {
        Value::String(s) => s == key,
        Value::Number(n) => n.to_string() == key,
        Value::Bool(b) => b.to_string() == key,
        _ => false,
    })
}
