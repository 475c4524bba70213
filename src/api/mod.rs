//! UniFFI export layer: Swift bindings for the Hangul engine.
//!
//! Each public type here maps to a generated Swift class, struct, or enum.

mod engine;
mod types;

pub use engine::HangulEngine;
pub use types::{HangulError, HangulEvent, HangulKeyResponse};

use std::path::Path;

use hangul_core::jamo::layout;
use hangul_core::{settings, KeyLayout};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn read_config(path: &str) -> Result<String, HangulError> {
    std::fs::read_to_string(path).map_err(|e| HangulError::Io {
        msg: format!("{path}: {e}"),
    })
}

/// Install a custom keyboard layout. Must run before the first session.
#[uniffi::export]
fn layout_load_config(path: String) -> Result<(), HangulError> {
    let content = read_config(&path)?;
    KeyLayout::init_custom(content).map_err(|e| HangulError::InvalidData { msg: e.to_string() })?;
    tracing::debug!(%path, "custom layout installed");
    Ok(())
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), HangulError> {
    let content = read_config(&path)?;
    settings::init_custom(content).map_err(|e| HangulError::InvalidData { msg: e.to_string() })?;
    tracing::debug!(%path, "custom settings installed");
    Ok(())
}

#[uniffi::export]
fn layout_default_config() -> String {
    layout::default_toml().to_string()
}

#[uniffi::export]
fn settings_default_config() -> String {
    settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn init_tracing(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
