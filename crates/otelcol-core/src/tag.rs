//! Tag location inside a fragment
//!
//! Tags live at `extensions.sumologic.collector_fields.<tag>`.

use otelcol_content::{KeyPath, YamlDocument};
use std::fmt;

use crate::{Error, Result};

/// Keys leading to the `collector_fields` mapping.
const COLLECTOR_FIELDS: [&str; 3] = ["extensions", "sumologic", "collector_fields"];

/// Path of the mapping that holds tags.
pub fn collector_fields_path() -> KeyPath {
    KeyPath::new(COLLECTOR_FIELDS)
}

/// A validated, non-empty tag name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagName(String);

impl TagName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyTagName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether `tag` is defined in `document`. A missing document defines nothing.
pub fn locate(document: Option<&YamlDocument>, tag: &TagName) -> bool {
    document.is_some_and(|doc| doc.contains_key(&collector_fields_path(), tag.as_str()))
}

/// Remove `tag` from `document`, returning whether it was there.
pub fn remove(document: &mut YamlDocument, tag: &TagName) -> bool {
    document
        .remove_key(&collector_fields_path(), tag.as_str())
        .is_some()
}
