//! Error types for docwiki.
//!
//! Library crates use [`DocWikiError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all docwiki operations.
#[derive(Debug, thiserror::Error)]
pub enum DocWikiError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Network/HTTP error while fetching a documentation page.
    #[error("network error: {0}")]
    Network(String),

    /// Malformed input (URLs, documents).
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid runtime value (zero columns, empty provider name, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// A fatal error raised while processing one provider.
    #[error("provider {provider}: {source}")]
    Provider {
        provider: String,
        #[source]
        source: Box<DocWikiError>,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DocWikiError>;

impl DocWikiError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach the provider being processed when this error occurred.
    pub fn for_provider(self, provider: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            source: Box::new(self),
        }
    }
}
