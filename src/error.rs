use thiserror::Error;

/// Errors that can occur while extracting or emitting microdata
#[derive(Error, Debug)]
pub enum MicrodataError {
    /// The tree nests deeper than the configured bound
    #[error("Tree nesting exceeds the maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// A serialized node tree could not be decoded
    #[error("Failed to parse node tree: {0}")]
    TreeParseFailed(String),

    /// Extraction options were malformed or out of range
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for microdata operations
pub type Result<T> = std::result::Result<T, MicrodataError>;
