//! Error types for the loader pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort processing of a single source file.
///
/// Lint findings are never an error condition; they are reported through the
/// host's warning/error signals instead.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// External config file could not be read.
    #[error("failed to read config file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        source: std::io::Error,
    },

    /// External config file is not valid JSON-with-comments.
    #[error("failed to parse config file '{}': {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// The lint engine itself failed.
    #[error("lint engine failed: {0}")]
    Engine(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The blocking adapter could not build its runtime.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl LoaderError {
    pub(crate) fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }
}
