//! Error types for otelcol-core

/// Result type for otelcol-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in otelcol-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Override requested while user-owned fragments define the same tag
    #[error(
        "Tag '{tag}' is defined in user-owned fragment(s): {}. Remove it there or run without --override",
        .fragments.join(", ")
    )]
    UserConflict { tag: String, fragments: Vec<String> },

    /// Tag names are non-empty mapping keys
    #[error("Tag name must not be empty")]
    EmptyTagName,

    /// Fragment exists but is not valid YAML
    #[error("Failed to parse fragment {name}: {source}")]
    FragmentParse {
        name: String,
        #[source]
        source: otelcol_content::Error,
    },

    /// Edited fragment could not be serialized
    #[error("Failed to render fragment {name}: {source}")]
    FragmentRender {
        name: String,
        #[source]
        source: otelcol_content::Error,
    },

    /// Filesystem error from otelcol-fs
    #[error(transparent)]
    Fs(#[from] otelcol_fs::Error),
}

impl Error {
    /// Stable error code for scripted callers
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserConflict { .. } => "CONFLICT",
            Self::EmptyTagName => "VALIDATION_ERROR",
            Self::FragmentParse { .. } => "PARSE_ERROR",
            Self::FragmentRender { .. } => "RENDER_ERROR",
            Self::Fs(_) => "IO_ERROR",
        }
    }
}
