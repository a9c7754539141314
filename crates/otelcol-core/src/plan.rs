//! Write plans
//!
//! A [`WritePlan`] lists the fragments an operation rewrites together with
//! their new content. Fragments not in the plan stay untouched on disk.

use std::collections::BTreeMap;

use otelcol_content::unified_diff;
use otelcol_fs::FragmentStore;

use crate::directory::ConfigDirectory;
use crate::Result;

/// Fragments to persist, keyed by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WritePlan {
    writes: BTreeMap<String, Vec<u8>>,
    shadowed_by: Vec<String>,
}

impl WritePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, content: Vec<u8>) {
        self.writes.insert(name.into(), content);
    }

    pub(crate) fn set_shadowed_by(&mut self, fragments: Vec<String>) {
        self.shadowed_by = fragments;
    }

    /// True when nothing needs to be written.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// New content planned for `name`.
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.writes.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.writes.contains_key(name)
    }

    /// Planned file names in write order.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.writes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.writes
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_slice()))
    }

    /// User-owned fragments that keep defining the tag after this plan runs.
    pub fn shadowed_by(&self) -> &[String] {
        &self.shadowed_by
    }

    /// Persist every planned fragment in name order.
    ///
    /// Stops at the first failing write. Fragments written before the
    /// failure stay written; there is no rollback across files.
    pub fn apply<S>(&self, store: &mut S) -> Result<Vec<String>>
    where
        S: FragmentStore + ?Sized,
    {
        let mut written = Vec::with_capacity(self.writes.len());
        for (name, content) in &self.writes {
            store.write(name, content)?;
            tracing::info!(fragment = %name, "Updated fragment");
            written.push(name.clone());
        }
        Ok(written)
    }

    /// Unified diff of every planned fragment against its current content.
    pub fn preview(&self, directory: &ConfigDirectory) -> String {
        let mut out = String::new();
        for (name, content) in &self.writes {
            let old = directory
                .get(name)
                .map(|fragment| String::from_utf8_lossy(fragment.raw()).into_owned())
                .unwrap_or_default();
            let new = String::from_utf8_lossy(content);
            out.push_str(&unified_diff(name, &old, &new));
        }
        out
    }
}
