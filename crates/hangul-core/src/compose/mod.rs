//! Syllable composition state machine.
//!
//! `HangulComposer` consumes one Latin key at a time and reports whether the
//! caller should show pre-edit text, insert finished text, or pass the key
//! on untouched. It holds at most one syllable in flight.


use tracing::{debug, trace};

use crate::jamo::{self, layout::KeyLayout};
use crate::unicode::compose_syllable;

/// Outcome of feeding one key to the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositionResult {
    /// Pre-edit text changed; show it as marked text.
    Composing(String),
    /// `committed` is final. `composing`, when present, is the already
    /// started next syllable to mark right after the insertion.
    Committed {
        committed: String,
        composing: Option<String>,
    },
    /// The key is not Hangul input and nothing was pending.
    Passthrough,
}

impl CompositionResult {
    fn commit(committed: String) -> Self {
        Self::Committed {
            committed,
            composing: None,
        }
    }
}

/// The composer's entire memory. Indices are choseong / jungseong /
/// jongseong table positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositionState {
    #[default]
    Empty,
    ChoseongOnly(usize),
    ChoseongJungseong(usize, usize),
    Complete(usize, usize, usize),
}

impl CompositionState {
    /// Text for this state: a compatibility jamo for a lone initial, a
    /// precomposed syllable otherwise.
    pub fn text(&self) -> Option<String> {
        let c = match *self {
            Self::Empty => return None,
            Self::ChoseongOnly(cho) => jamo::choseong_jamo(cho)?,
            Self::ChoseongJungseong(cho, jung) => compose_syllable(cho, jung, 0)?,
            Self::Complete(cho, jung, jong) => compose_syllable(cho, jung, jong)?,
        };
        Some(c.to_string())
    }
}

/// Two-bulsik composer. One instance per input session.
pub struct HangulComposer {
    state: CompositionState,
    layout: &'static KeyLayout,
}

impl Default for HangulComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl HangulComposer {
    pub fn new() -> Self {
        Self::with_layout(KeyLayout::global())
    }

    pub fn with_layout(layout: &'static KeyLayout) -> Self {
        Self {
            state: CompositionState::Empty,
            layout,
        }
    }

    pub fn state(&self) -> CompositionState {
        self.state
    }

    pub fn has_composition(&self) -> bool {
        self.state != CompositionState::Empty
    }

    /// Current pre-edit text; empty when nothing is composing.
    pub fn composing_text(&self) -> String {
        self.state.text().unwrap_or_default()
    }

    /// Feed one Latin key.
    pub fn process(&mut self, key: char) -> CompositionResult {
        let Some(jamo) = self.layout.jamo_for(key) else {
            if !self.has_composition() {
                return CompositionResult::Passthrough;
            }
            // Unmapped key ends the syllable; the key itself follows it.
            let mut committed = self.finish_composition();
            committed.push(key);
            debug!(%committed, "non-hangul key flushed composition");
            return CompositionResult::commit(committed);
        };

        let result = if jamo::is_consonant(jamo) {
            self.process_consonant(jamo)
        } else {
            self.process_vowel(jamo)
        };
        trace!(%key, %jamo, state = ?self.state, ?result, "process");
        result
    }

    /// Return the pending text and reset to `Empty`.
    pub fn finish_composition(&mut self) -> String {
        let text = self.composing_text();
        self.state = CompositionState::Empty;
        text
    }

    /// Undo one keystroke of the pending syllable.
    ///
    /// Returns the remaining pre-edit text, or `None` once nothing is left.
    pub fn delete_backward(&mut self) -> Option<String> {
        use CompositionState::*;

        self.state = match self.state {
            Empty | ChoseongOnly(_) => Empty,
            ChoseongJungseong(cho, jung) => match jamo::split_compound_vowel(jung) {
                Some((base, _)) => ChoseongJungseong(cho, base),
                None => ChoseongOnly(cho),
            },
            Complete(cho, jung, jong) => match jamo::split_jongseong(jong) {
                Some((remaining, _)) => Complete(cho, jung, remaining),
                None => ChoseongJungseong(cho, jung),
            },
        };
        self.state.text()
    }

    pub fn reset(&mut self) {
        self.state = CompositionState::Empty;
    }

    /// Commit what is pending and start over from `jamo` as a new initial.
    /// A consonant that cannot begin a syllable is committed literally.
    fn commit_and_restart(&mut self, jamo: char) -> CompositionResult {
        let mut committed = self.finish_composition();
        match jamo::choseong_index(jamo) {
            Some(cho) => {
                self.state = CompositionState::ChoseongOnly(cho);
                CompositionResult::Committed {
                    committed,
                    composing: self.state.text(),
                }
            }
            None => {
                committed.push(jamo);
                CompositionResult::commit(committed)
            }
        }
    }

    fn composing(&self) -> CompositionResult {
        CompositionResult::Composing(self.composing_text())
    }

    fn process_consonant(&mut self, jamo: char) -> CompositionResult {
        use CompositionState::*;

        match self.state {
            Empty => match jamo::choseong_index(jamo) {
                Some(cho) => {
                    self.state = ChoseongOnly(cho);
                    self.composing()
                }
                None => CompositionResult::commit(jamo.to_string()),
            },
            ChoseongOnly(cho) => match jamo::double_choseong(cho, jamo) {
                Some(tense) => {
                    self.state = ChoseongOnly(tense);
                    self.composing()
                }
                None => self.commit_and_restart(jamo),
            },
            ChoseongJungseong(cho, jung) => match jamo::jongseong_index(jamo) {
                Some(jong) => {
                    self.state = Complete(cho, jung, jong);
                    self.composing()
                }
                None => self.commit_and_restart(jamo),
            },
            Complete(cho, jung, jong) => match jamo::compound_jongseong(jong, jamo) {
                Some(compound) => {
                    self.state = Complete(cho, jung, compound);
                    self.composing()
                }
                None => self.commit_and_restart(jamo),
            },
        }
    }

    fn process_vowel(&mut self, jamo: char) -> CompositionResult {
        use CompositionState::*;

        let Some(jung_new) = jamo::jungseong_index(jamo) else {
            let mut committed = self.finish_composition();
            committed.push(jamo);
            return CompositionResult::commit(committed);
        };

        match self.state {
            // A vowel never opens a syllable on its own.
            Empty => CompositionResult::commit(jamo.to_string()),
            ChoseongOnly(cho) => {
                self.state = ChoseongJungseong(cho, jung_new);
                self.composing()
            }
            ChoseongJungseong(cho, jung) => match jamo::compound_vowel(jung, jung_new) {
                Some(compound) => {
                    self.state = ChoseongJungseong(cho, compound);
                    self.composing()
                }
                None => {
                    let mut committed = self.finish_composition();
                    committed.push(jamo);
                    CompositionResult::commit(committed)
                }
            },
            Complete(cho, jung, jong) => self.link_final(cho, jung, jong, jamo, jung_new),
        }
    }

    /// A vowel after a closed syllable pulls the final consonant (or the
    /// second half of a compound final) into a new syllable.
    fn link_final(
        &mut self,
        cho: usize,
        jung: usize,
        jong: usize,
        vowel: char,
        jung_new: usize,
    ) -> CompositionResult {
        let carried = match jamo::split_jongseong(jong) {
            Some((remaining, split)) => {
                jamo::choseong_index(split).map(|next_cho| (remaining, next_cho))
            }
            None => jamo::jongseong_to_choseong(jong).map(|next_cho| (0, next_cho)),
        };

        let Some((kept_jong, next_cho)) = carried else {
            let mut committed = self.finish_composition();
            committed.push(vowel);
            return CompositionResult::commit(committed);
        };

        let committed = compose_syllable(cho, jung, kept_jong)
            .map(String::from)
            .unwrap_or_default();
        self.state = CompositionState::ChoseongJungseong(next_cho, jung_new);
        CompositionResult::Committed {
            committed,
            composing: self.state.text(),
        }
    }
}
