use thiserror::Error;

use crate::frontmatter::FrontmatterError;

/// Errors surfaced by the serialization pipeline.
///
/// Delegate compiler messages are carried verbatim; this layer never
/// rewrites, wraps, or logs them.
#[derive(Debug, Error)]
pub enum MdxError {
    /// The delegate compiler rejected the document. The message is the
    /// delegate's own, including its source excerpt and position.
    #[error("{0}")]
    Compile(String),
    /// Frontmatter extraction failed.
    #[error(transparent)]
    Frontmatter(#[from] FrontmatterError),
    /// Byte sources must be valid UTF-8.
    #[error("source is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    /// Scope or frontmatter values could not be serialized.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
