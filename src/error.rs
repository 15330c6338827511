//! Error types.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while reading a configuration source.
///
/// None of these are fatal: a [`DnsConfig`](crate::DnsConfig) is always
/// produced, and the error is attached to it as an advisory value.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// The file that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },

    /// The configuration file was opened but its metadata could not be read.
    #[error("failed to stat {}: {source}", path.display())]
    Stat {
        /// The file that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },

    /// Network adapter enumeration failed.
    #[error("failed to enumerate network adapters: {0}")]
    Adapters(String),
}

impl ConfigError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn stat(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Stat {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    /// Returns the kind of the underlying I/O error, if there is one.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Open { source, .. } | Self::Stat { source, .. } => Some(source.kind()),
            Self::Adapters(_) => None,
        }
    }

    /// Returns `true` if the configuration file does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }
}

impl PartialEq for ConfigError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Open { path: a, source: x }, Self::Open { path: b, source: y })
            | (Self::Stat { path: a, source: x }, Self::Stat { path: b, source: y }) => {
                a == b && x.kind() == y.kind()
            }
            (Self::Adapters(a), Self::Adapters(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ConfigError {}
