//! # periop-settings
//!
//! Presentation and reference data for the `periop` binary: log level,
//! output format, and the operating-room slot catalog. Risk weights are
//! compiled into `periop-risk` and never read from here.
//!
//! Precedence, lowest first: [`PeriopSettings::default()`], then
//! `~/.periop/settings.json` merged over it, then `PERIOP_*` environment
//! variables. See [`loader`].

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    ENV_LOG_LEVEL, ENV_PRETTY_OUTPUT, apply_env_overrides, apply_overrides, load_settings,
    load_settings_from_path, merge_into, parse_bool, settings_path,
};
pub use types::*;

use std::sync::OnceLock;

static SETTINGS: OnceLock<PeriopSettings> = OnceLock::new();

/// Process-wide settings, loaded from the default path on first use.
///
/// A load failure is logged and replaced by compiled defaults.
pub fn get_settings() -> &'static PeriopSettings {
    SETTINGS.get_or_init(|| {
        load_settings().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "settings unusable, falling back to defaults");
            PeriopSettings::default()
        })
    })
}

/// Seed the process-wide settings before anything calls [`get_settings`].
///
/// # Errors
///
/// Hands `settings` back if the slot was already filled.
#[allow(clippy::result_large_err)]
pub fn init_settings(settings: PeriopSettings) -> std::result::Result<(), PeriopSettings> {
    SETTINGS.set(settings)
}
