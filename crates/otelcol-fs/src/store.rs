//! Fragment stores
//!
//! A [`FragmentStore`] is a flat namespace of YAML fragments addressed by
//! file name. Absence is a normal state: [`FragmentStore::read`] returns
//! `Ok(None)` for a missing fragment and [`FragmentStore::list`] returns an
//! empty list for a missing directory.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::name::{is_fragment_name, validate_fragment_name};
use crate::{Error, Result, io};

/// Named access to the fragments of one configuration directory.
pub trait FragmentStore {
    /// Fragment names present in the store, sorted.
    fn list(&self) -> Result<Vec<String>>;

    /// Read a fragment's bytes if it exists.
    fn read(&self, name: &str) -> Result<Option<Vec<u8>>>;

    /// Replace a fragment's content.
    fn write(&mut self, name: &str, content: &[u8]) -> Result<()>;
}

/// Fragment store backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the fragments.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// On-disk path of a fragment.
    pub fn path_of(&self, name: &str) -> Result<PathBuf> {
        validate_fragment_name(name)?;
        Ok(self.root.join(name))
    }
}

impl FragmentStore for DirStore {
    fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(root = %self.root.display(), "Fragment directory missing");
                return Ok(Vec::new());
            }
            Err(e) => return Err(Error::io(&self.root, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&self.root, e))?;
            let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
            // Symlinked fragments are followed like regular files
            let is_file = file_type.is_file()
                || (file_type.is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                tracing::warn!(path = %entry.path().display(), "Skipping non UTF-8 file name");
                continue;
            };
            if is_fragment_name(&name) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<Option<Vec<u8>>> {
        io::read_if_exists(&self.path_of(name)?)
    }

    /// Symlinked fragments are written through to their target.
    fn write(&mut self, name: &str, content: &[u8]) -> Result<()> {
        let path = self.path_of(name)?;
        let is_symlink = fs::symlink_metadata(&path)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false);
        let target = if is_symlink {
            fs::canonicalize(&path).map_err(|e| Error::io(&path, e))?
        } else {
            path
        };
        io::write_atomic(&target, content)
    }
}

/// In-memory fragment store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_file(mut self, name: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        self.files.insert(name.into(), content.as_ref().to_vec());
        self
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }
}

impl FragmentStore for MemoryStore {
    fn list(&self) -> Result<Vec<String>> {
        Ok(self
            .files
            .keys()
            .filter(|name| is_fragment_name(name))
            .cloned()
            .collect())
    }

    fn read(&self, name: &str) -> Result<Option<Vec<u8>>> {
        validate_fragment_name(name)?;
        Ok(self.files.get(name).cloned())
    }

    fn write(&mut self, name: &str, content: &[u8]) -> Result<()> {
        validate_fragment_name(name)?;
        self.files.insert(name.to_string(), content.to_vec());
        Ok(())
    }
}
