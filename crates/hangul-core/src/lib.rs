//! Two-bulsik Hangul composition: jamo tables, keyboard layout, and the
//! syllable composition state machine.

pub mod compose;
pub mod jamo;
pub mod settings;
pub mod unicode;

pub use compose::{CompositionResult, CompositionState, HangulComposer};
pub use jamo::layout::KeyLayout;
