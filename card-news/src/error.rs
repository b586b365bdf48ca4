//! Error type for the fallible edges: dataset and config loading, output.
//!
//! Rendering itself never fails.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading input or writing output.
#[derive(Debug, Error)]
pub enum CardNewsError {
    /// Filesystem read or write failed
    #[error("I/O error on {}", .path.display())]
    Io {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Dataset is not a JSON array of news items
    #[error("invalid news dataset {}", .path.display())]
    Json {
        /// Dataset file
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file is not valid TOML for [`crate::config::CardNewsConfig`]
    #[error("invalid config {}", .path.display())]
    Toml {
        /// Config file
        path: PathBuf,
        /// Parser error
        #[source]
        source: toml::de::Error,
    },

    /// Two items in one dataset share an id
    #[error("duplicate news id {0}")]
    DuplicateId(i64),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CardNewsError>;
