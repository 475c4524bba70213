//! Hangul input engine for the macOS input method.
//!
//! The composition engine and session controller live in the member crates
//! (`hangul-core`, `hangul-session`); this crate exports them to Swift via
//! UniFFI.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;
