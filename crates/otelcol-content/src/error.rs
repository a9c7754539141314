//! Error types for otelcol-content

/// Result type for otelcol-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in otelcol-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse YAML content: {message}")]
    Parse { message: String },

    #[error("Failed to render YAML content: {message}")]
    Render { message: String },
}

impl Error {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}
