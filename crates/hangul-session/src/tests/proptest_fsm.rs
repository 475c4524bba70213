//! Property-based tests for the InputController state machine.
//!
//! Generates random key sequences via proptest and verifies that the text
//! client always mirrors the composer and that no typed text is lost.

use proptest::prelude::*;

use hangul_core::unicode::{is_compat_jamo, is_hangul_syllable};

use super::{type_string, Document};
use crate::types::{KeyEvent, SpecialKey};
use crate::InputController;

// ---------------------------------------------------------------------------
// Host-facing operations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Action {
    TypeKey(char),
    Backspace,
    Space,
    Return,
    ModifiedKey,
    Commit,
    Cancel,
    /// Focus change: deactivate, then activate again with the same document.
    Refocus,
}

fn arb_hangul_key() -> impl Strategy<Value = char> {
    prop::sample::select("qwertyuiopasdfghjklzxcvbnmQWERTOP".chars().collect::<Vec<_>>())
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        60 => arb_hangul_key().prop_map(Action::TypeKey),
        4 => prop::sample::select(vec!['1', '.', ',', '?', ';']).prop_map(Action::TypeKey),
        10 => Just(Action::Backspace),
        5 => Just(Action::Space),
        3 => Just(Action::Return),
        2 => Just(Action::ModifiedKey),
        2 => Just(Action::Commit),
        2 => Just(Action::Cancel),
        2 => Just(Action::Refocus),
    ]
}

fn execute_action(controller: &mut InputController<Document>, action: &Action) {
    match action {
        Action::TypeKey(ch) => {
            if !controller.handle_key(KeyEvent::text(&ch.to_string())) {
                // Host inserts unconsumed characters itself.
                if let Some(doc) = controller.client_mut() {
                    doc.text.push(*ch);
                }
            }
        }
        Action::Backspace => {
            if !controller.handle_key(KeyEvent::Backspace) {
                if let Some(doc) = controller.client_mut() {
                    doc.native_backspace();
                }
            }
        }
        Action::Space => {
            if !controller.handle_key(KeyEvent::Space) {
                if let Some(doc) = controller.client_mut() {
                    doc.text.push(' ');
                }
            }
        }
        Action::Return => {
            controller.handle_key(KeyEvent::Special(SpecialKey::Return));
        }
        Action::ModifiedKey => {
            controller.handle_key(KeyEvent::ModifiedKey);
        }
        Action::Commit => controller.commit_composition(),
        Action::Cancel => controller.cancel_composition(),
        Action::Refocus => {
            let doc = controller.deactivate().expect("session is active");
            controller.activate(doc);
        }
    }
}

fn check_invariants(controller: &InputController<Document>) -> Result<(), TestCaseError> {
    let doc = controller.client().expect("session is active");

    // Marked text always mirrors the composer.
    prop_assert_eq!(&doc.marked, &controller.composing_text());
    prop_assert_eq!(controller.is_composing(), !doc.marked.is_empty());

    // At most one syllable or jamo is ever in flight.
    let mut chars = doc.marked.chars();
    if let Some(c) = chars.next() {
        prop_assert!(is_hangul_syllable(c) || is_compat_jamo(c), "marked {:?}", c);
        prop_assert!(chars.next().is_none());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn marked_text_mirrors_composer(actions in prop::collection::vec(arb_action(), 1..80)) {
        let mut controller = InputController::new();
        controller.activate(Document::default());
        for action in &actions {
            execute_action(&mut controller, action);
            check_invariants(&controller)?;
        }
    }

    #[test]
    fn deactivation_never_drops_hangul(keys in prop::collection::vec(arb_hangul_key(), 1..40)) {
        let mut controller = InputController::new();
        controller.activate(Document::default());
        let typed: String = keys.iter().collect();
        type_string(&mut controller, &typed);

        let doc = controller.deactivate().expect("session is active");
        prop_assert!(doc.marked.is_empty());
        prop_assert!(!doc.text.is_empty());
        prop_assert!(doc.text.chars().all(|c| is_hangul_syllable(c) || is_compat_jamo(c)));
        prop_assert!(!controller.is_composing());
    }

    #[test]
    fn backspace_only_touches_pending_syllable(
        prefix in prop::collection::vec(arb_hangul_key(), 0..20),
        tail in prop::collection::vec(arb_hangul_key(), 1..6),
    ) {
        let mut controller = InputController::new();
        controller.activate(Document::default());
        let prefix: String = prefix.iter().collect();
        type_string(&mut controller, &prefix);
        controller.handle_key(KeyEvent::Space);
        let tail: String = tail.iter().collect();
        type_string(&mut controller, &tail);

        let committed = controller.client().map(|d| d.text.clone()).unwrap_or_default();
        let mut steps = 0;
        while controller.is_composing() {
            prop_assert!(controller.handle_key(KeyEvent::Backspace));
            steps += 1;
            // compound final, final, compound vowel, vowel, initial
            prop_assert!(steps <= 5);
        }
        let doc = controller.client().expect("session is active");
        prop_assert_eq!(&doc.text, &committed);
        prop_assert!(doc.marked.is_empty());
    }

    #[test]
    fn finish_is_idempotent(keys in prop::collection::vec(arb_hangul_key(), 0..10)) {
        let mut composer = hangul_core::HangulComposer::new();
        for k in &keys {
            composer.process(*k);
        }
        let pending = composer.composing_text();
        prop_assert_eq!(composer.finish_composition(), pending);
        prop_assert_eq!(composer.finish_composition(), String::new());
    }
}
