//! Fragment file name rules

use crate::{Error, Result};

/// Extensions recognised as YAML fragments.
const FRAGMENT_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Whether `name` looks like a YAML fragment (`*.yaml` or `*.yml`).
pub fn is_fragment_name(name: &str) -> bool {
    match name.rfind('.') {
        Some(idx) if idx > 0 => {
            let ext = name[idx + 1..].to_ascii_lowercase();
            FRAGMENT_EXTENSIONS.contains(&ext.as_str())
        }
        _ => false,
    }
}

/// Reject names that could escape the configuration directory.
///
/// Fragment names are single path components: no separators, no `.`/`..`,
/// nothing empty.
pub fn validate_fragment_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_name(name, "name is empty"));
    }
    if name == "." || name == ".." {
        return Err(Error::invalid_name(name, "name refers to a directory"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(Error::invalid_name(name, "name contains a path separator"));
    }
    if name.contains('\0') {
        return Err(Error::invalid_name(name, "name contains a NUL byte"));
    }
    Ok(())
}
