//! Layered settings loading.
//!
//! Compiled defaults first, then the JSON file merged over them key by key,
//! then `PERIOP_*` environment variables, then [`PeriopSettings::validate`].
//! A settings file only has to mention what it changes.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{Result, SettingsError};
use crate::types::PeriopSettings;

/// Environment variable overriding `logging.level`.
pub const ENV_LOG_LEVEL: &str = "PERIOP_LOG_LEVEL";
/// Environment variable overriding `output.pretty`.
pub const ENV_PRETTY_OUTPUT: &str = "PERIOP_PRETTY_OUTPUT";

const TRUE_WORDS: [&str; 4] = ["true", "1", "yes", "on"];
const FALSE_WORDS: [&str; 4] = ["false", "0", "no", "off"];

/// `~/.periop/settings.json`, falling back to `/tmp` when `HOME` is unset.
pub fn settings_path() -> PathBuf {
    std::env::var_os("HOME")
        .map_or_else(|| PathBuf::from("/tmp"), PathBuf::from)
        .join(".periop")
        .join("settings.json")
}

/// [`load_settings_from_path`] on [`settings_path`].
pub fn load_settings() -> Result<PeriopSettings> {
    load_settings_from_path(&settings_path())
}

/// Load every layer for the file at `path`.
///
/// A missing file counts as empty. An unreadable file, bad JSON, or values
/// failing validation are errors.
pub fn load_settings_from_path(path: &Path) -> Result<PeriopSettings> {
    let mut settings = file_over_defaults(path)?;
    apply_env_overrides(&mut settings);
    settings.validate()?;
    Ok(settings)
}

fn file_over_defaults(path: &Path) -> Result<PeriopSettings> {
    let mut value = serde_json::to_value(PeriopSettings::default())?;

    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), "merging settings file");
            merge_into(&mut value, serde_json::from_str(&text)?);
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file");
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    Ok(serde_json::from_value(value)?)
}

/// Merge `overlay` into `base` in place.
///
/// Objects merge key by key. Any other overlay value, arrays included,
/// replaces the base value outright. `null` leaves the base untouched.
pub fn merge_into(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                if let Some(existing) = base_map.get_mut(&key) {
                    merge_into(existing, value);
                } else if !value.is_null() {
                    let _ = base_map.insert(key, value);
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Apply `PERIOP_*` variables from the process environment.
pub fn apply_env_overrides(settings: &mut PeriopSettings) {
    apply_overrides(settings, |name| std::env::var(name).ok());
}

/// Apply overrides read through `lookup`.
///
/// Blank levels and unrecognized booleans are ignored with a warning.
pub fn apply_overrides<F>(settings: &mut PeriopSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        if level.trim().is_empty() {
            warn!(var = ENV_LOG_LEVEL, "blank override ignored");
        } else {
            settings.logging.level = level;
        }
    }

    if let Some(raw) = lookup(ENV_PRETTY_OUTPUT) {
        match parse_bool(&raw) {
            Some(pretty) => settings.output.pretty = pretty,
            None => warn!(var = ENV_PRETTY_OUTPUT, value = %raw, "not a boolean, override ignored"),
        }
    }
}

/// Read an on/off word, ignoring case and surrounding whitespace.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let word = raw.trim();
    if TRUE_WORDS.iter().any(|w| word.eq_ignore_ascii_case(w)) {
        Some(true)
    } else if FALSE_WORDS.iter().any(|w| word.eq_ignore_ascii_case(w)) {
        Some(false)
    } else {
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
