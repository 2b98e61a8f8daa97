//! The settings tree.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and `#[serde(default)]`,
//! so a settings file only needs the fields it changes.

use std::collections::HashSet;

use periop_core::{TimeSlot, reference_catalog};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SettingsError};

/// Schema version written into fresh settings.
pub const SETTINGS_VERSION: &str = "1";

/// Root settings type.
///
/// # JSON Format
///
/// ```json
/// {
///   "logging": { "level": "debug" },
///   "output": { "pretty": true },
///   "scheduling": { "slots": [ { "id": "1", "time": "07:30 AM", "date": "2024-01-15", "room": "OR-1", "team": "Team A" } ] }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriopSettings {
    /// Settings schema version.
    pub version: String,
    /// Log output configuration.
    pub logging: LoggingSettings,
    /// CLI output configuration.
    pub output: OutputSettings,
    /// Slot catalog and related scheduling data.
    pub scheduling: SchedulingSettings,
}

impl Default for PeriopSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION.to_string(),
            logging: LoggingSettings::default(),
            output: OutputSettings::default(),
            scheduling: SchedulingSettings::default(),
        }
    }
}

impl PeriopSettings {
    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::InvalidValue("empty logging level".into()));
        }
        let mut seen = HashSet::new();
        for slot in &self.scheduling.slots {
            if !seen.insert(slot.id.as_str()) {
                return Err(SettingsError::InvalidValue(format!(
                    "duplicate slot id: {}",
                    slot.id
                )));
            }
        }
        Ok(())
    }
}

/// Logging settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// CLI output settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputSettings {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

/// Scheduling reference data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulingSettings {
    /// Operating-room slot catalog, earliest first.
    pub slots: Vec<TimeSlot>,
}

impl Default for SchedulingSettings {
    fn default() -> Self {
        Self {
            slots: reference_catalog(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
