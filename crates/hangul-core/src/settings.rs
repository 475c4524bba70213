//! Global settings loaded from TOML, following the same OnceLock pattern as the
//! keyboard layout.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub special_keys: SpecialKeySettings,
    #[serde(default)]
    keymap: HashMap<String, Vec<String>>,
    /// Parsed keymap: key_code → (normal, shifted).
    #[serde(skip)]
    keymap_parsed: Vec<(u16, String, String)>,
}

impl Settings {
    /// Look up a remapped key by key_code and shift state.
    pub fn keymap_get(&self, key_code: u16, has_shift: bool) -> Option<&str> {
        self.keymap_parsed
            .iter()
            .find_map(|(code, normal, shifted)| {
                if *code == key_code {
                    Some(if has_shift {
                        shifted.as_str()
                    } else {
                        normal.as_str()
                    })
                } else {
                    None
                }
            })
    }

    pub fn is_extra_special(&self, key_code: u16) -> bool {
        self.special_keys.extra.contains(&key_code)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpecialKeySettings {
    #[serde(default)]
    pub extra: Vec<u16>,
    #[serde(default)]
    pub option_is_special: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.keymap_parsed = parse_keymap(&s.keymap)?;
    Ok(s)
}

fn parse_keymap(
    raw: &HashMap<String, Vec<String>>,
) -> Result<Vec<(u16, String, String)>, SettingsError> {
    let mut result = Vec::new();
    for (key_str, values) in raw {
        let key_code: u16 = key_str.parse().map_err(|_| SettingsError::InvalidValue {
            field: format!("keymap.{}", key_str),
            reason: "key_code must be a u16 integer".to_string(),
        })?;
        if values.len() != 2 {
            return Err(SettingsError::InvalidValue {
                field: format!("keymap.{}", key_str),
                reason: "value must be [\"normal\", \"shifted\"]".to_string(),
            });
        }
        if values.iter().any(|v| v.is_empty()) {
            return Err(SettingsError::InvalidValue {
                field: format!("keymap.{}", key_str),
                reason: "remapped text must not be empty".to_string(),
            });
        }
        result.push((key_code, values[0].clone(), values[1].clone()));
    }
    Ok(result)
}
