use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::unicode::is_compat_jamo;

pub const DEFAULT_TOML: &str = include_str!("default_layout.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Deserialize)]
struct LayoutConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key must be a single ASCII character: {0:?}")]
    InvalidKey(String),
    #[error("value for key {key:?} must be a single compatibility jamo, got {value:?}")]
    InvalidJamo { key: String, value: String },
    #[error("keyboard layout already initialized")]
    AlreadyInitialized,
}

/// Returns the embedded two-bulsik layout TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Parse layout TOML into a sorted `key → jamo` map.
pub fn parse_layout_toml(toml_str: &str) -> Result<BTreeMap<char, char>, LayoutError> {
    let config: LayoutConfig =
        toml::from_str(toml_str).map_err(|e| LayoutError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(LayoutError::Empty);
    }

    let mut map = BTreeMap::new();
    for (key, value) in config.mappings {
        let key_char = single_char(&key)
            .filter(char::is_ascii)
            .ok_or_else(|| LayoutError::InvalidKey(key.clone()))?;
        let jamo = single_char(&value)
            .filter(|&c| is_compat_jamo(c))
            .ok_or_else(|| LayoutError::InvalidJamo {
                key: key.clone(),
                value: value.clone(),
            })?;
        map.insert(key_char, jamo);
    }
    Ok(map)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// Latin key → jamo table consulted by the composer on every keystroke.
pub struct KeyLayout {
    keys: BTreeMap<char, char>,
}

impl KeyLayout {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), LayoutError> {
        // Validate eagerly
        parse_layout_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| LayoutError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static KeyLayout {
        static INSTANCE: OnceLock<KeyLayout> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let keys = parse_layout_toml(toml_str).expect("layout TOML must be valid");
            KeyLayout { keys }
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, LayoutError> {
        Ok(KeyLayout {
            keys: parse_layout_toml(toml_str)?,
        })
    }

    pub fn jamo_for(&self, key: char) -> Option<char> {
        self.keys.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
