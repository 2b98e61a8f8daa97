//! Settings error types.

use std::path::PathBuf;

use thiserror::Error;

/// Why a settings file could not be turned into [`PeriopSettings`].
///
/// A missing file is not an error; it yields the compiled defaults.
///
/// [`PeriopSettings`]: crate::PeriopSettings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not JSON, or its values do not fit the settings schema.
    #[error("settings JSON rejected: {0}")]
    Json(#[from] serde_json::Error),

    /// Values decoded but break a cross-field rule.
    #[error("bad setting: {0}")]
    InvalidValue(String),
}

/// Result alias for settings loading.
pub type Result<T> = std::result::Result<T, SettingsError>;
