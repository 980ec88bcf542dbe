//! Error types for content-access-core.
//!
//! The decision path itself never fails. These errors come from the
//! ambient layers around it: loading site configuration and resolving
//! names supplied on the command line.

use std::path::{Path, PathBuf};

/// Errors that can occur outside the access decision itself.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error while reading a specific file.
    #[error("I/O error at {}: {source}", path.display())]
    IoWithPath {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML deserialization error.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration is structurally valid TOML but semantically wrong.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A permission name outside the fixed permission contract.
    #[error("Unknown permission: {name}")]
    UnknownPermission {
        /// The name that was supplied
        name: String,
    },

    /// An access operation name that is not recognised.
    #[error("Unknown operation: {name}")]
    UnknownOperation {
        /// The name that was supplied
        name: String,
    },

    /// Content item not present in the loaded configuration.
    #[error("Content item not found: {id}")]
    ItemNotFound {
        /// Item ID that was not found
        id: String,
    },

    /// Actor not present in the loaded configuration.
    #[error("Actor not found: {id}")]
    ActorNotFound {
        /// Actor ID that was not found
        id: String,
    },
}

/// Convenience `Result` type alias for content-access operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error reports a missing referenced entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ItemNotFound { .. } | Error::ActorNotFound { .. })
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
