// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Memeforge.

use thiserror::Error;

/// Top-level error type for all Memeforge operations.
#[derive(Debug, Error)]
pub enum MemeforgeError {
    // -- Ingestion errors --
    #[error("file format not supported: {path}")]
    UnsupportedFormat { path: String },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("external tool `{tool}` failed: {reason}")]
    ExternalToolFailure { tool: String, reason: String },

    // -- Image errors --
    #[error("cannot open image {path}: {cause}")]
    ImageOpen {
        path: String,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- Front end --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("no {0} available")]
    NoResources(String),

    #[error("an author is required when a quote body is given")]
    MissingAuthor,

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MemeforgeError {
    /// Build a [`MemeforgeError::Parse`] for `path`.
    pub fn parse(path: impl AsRef<std::path::Path>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.as_ref().display().to_string(),
            reason: reason.into(),
        }
    }

    /// Build a [`MemeforgeError::UnsupportedFormat`] for `path`.
    pub fn unsupported(path: impl AsRef<std::path::Path>) -> Self {
        Self::UnsupportedFormat {
            path: path.as_ref().display().to_string(),
        }
    }

    /// Build a [`MemeforgeError::ImageOpen`], keeping the decoder's error as
    /// the source.
    pub fn image_open(
        path: impl AsRef<std::path::Path>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ImageOpen {
            path: path.as_ref().display().to_string(),
            cause: Box::new(cause),
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MemeforgeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn image_open_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad magic");
        let err = MemeforgeError::image_open("dog.jpg", io);
        assert_eq!(err.to_string(), "cannot open image dog.jpg: bad magic");
        assert!(err.source().is_some());
    }

    #[test]
    fn unsupported_names_path() {
        let err = MemeforgeError::unsupported("quotes.xyz");
        assert!(matches!(
            err,
            MemeforgeError::UnsupportedFormat { ref path } if path == "quotes.xyz"
        ));
    }
}
