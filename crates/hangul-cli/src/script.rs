//! Key scripts: literal characters plus `<name>` tokens for named keys.
//!
//! `rk<bs>k<space>` types ㄱ ㅏ, deletes one step, types ㅏ again, then
//! presses Space. A literal `<` is written `<lt>`.

use hangul_session::{key, HostEvent, FLAG_SHIFT};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown key token <{0}>")]
    UnknownToken(String),
    #[error("unterminated '<' at offset {0}")]
    Unterminated(usize),
}

/// One replayable step.
#[derive(Debug, Clone)]
pub enum Step {
    Key { label: String, event: HostEvent },
    Activate,
    Deactivate,
}

impl Step {
    pub fn label(&self) -> &str {
        match self {
            Step::Key { label, .. } => label,
            Step::Activate => "<activate>",
            Step::Deactivate => "<deactivate>",
        }
    }
}

/// Key code reported for characters with no US-ANSI key.
pub const UNMAPPED_KEY_CODE: u16 = 0xFFFF;

// (unshifted, shifted, macOS ANSI key code)
const ANSI_KEYS: &[(char, char, u16)] = &[
    ('a', 'A', 0),
    ('s', 'S', 1),
    ('d', 'D', 2),
    ('f', 'F', 3),
    ('h', 'H', 4),
    ('g', 'G', 5),
    ('z', 'Z', 6),
    ('x', 'X', 7),
    ('c', 'C', 8),
    ('v', 'V', 9),
    ('b', 'B', 11),
    ('q', 'Q', 12),
    ('w', 'W', 13),
    ('e', 'E', 14),
    ('r', 'R', 15),
    ('y', 'Y', 16),
    ('t', 'T', 17),
    ('1', '!', 18),
    ('2', '@', 19),
    ('3', '#', 20),
    ('4', '$', 21),
    ('6', '^', 22),
    ('5', '%', 23),
    ('=', '+', 24),
    ('9', '(', 25),
    ('7', '&', 26),
    ('-', '_', 27),
    ('8', '*', 28),
    ('0', ')', 29),
    (']', '}', 30),
    ('o', 'O', 31),
    ('u', 'U', 32),
    ('[', '{', 33),
    ('i', 'I', 34),
    ('p', 'P', 35),
    ('l', 'L', 37),
    ('j', 'J', 38),
    ('\'', '"', 39),
    ('k', 'K', 40),
    (';', ':', 41),
    ('\\', '|', 42),
    (',', '<', 43),
    ('/', '?', 44),
    ('n', 'N', 45),
    ('m', 'M', 46),
    ('.', '>', 47),
    ('`', '~', 50),
];

/// Host event for a typed character, with the key code and shift flag a
/// US keyboard would report.
pub fn char_event(ch: char) -> HostEvent {
    let text = ch.to_string();
    if ch == ' ' {
        return HostEvent::key_down(key::SPACE, &text, 0);
    }
    for &(plain, shifted, code) in ANSI_KEYS {
        if ch == plain {
            return HostEvent::key_down(code, &text, 0);
        }
        if ch == shifted {
            return HostEvent::key_down(code, &text, FLAG_SHIFT);
        }
    }
    HostEvent::key_down(UNMAPPED_KEY_CODE, &text, 0)
}

fn named_event(name: &str) -> Option<HostEvent> {
    let (code, text) = match name {
        "bs" => (key::BACKSPACE, "\u{7f}"),
        "enter" => (key::RETURN, "\r"),
        "tab" => (key::TAB, "\t"),
        "esc" => (key::ESCAPE, "\u{1b}"),
        "space" => (key::SPACE, " "),
        "left" => (key::LEFT, ""),
        "right" => (key::RIGHT, ""),
        "up" => (key::UP, ""),
        "down" => (key::DOWN, ""),
        "del" => (key::FORWARD_DELETE, ""),
        "home" => (key::HOME, ""),
        "end" => (key::END, ""),
        "lt" => return Some(char_event('<')),
        _ => return None,
    };
    Some(HostEvent::key_down(code, text, 0))
}

pub fn parse_script(script: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    let mut rest = script;
    let mut offset = 0;

    while let Some(ch) = rest.chars().next() {
        if ch != '<' {
            steps.push(Step::Key {
                label: ch.to_string(),
                event: char_event(ch),
            });
            offset += ch.len_utf8();
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        let close = rest.find('>').ok_or(ScriptError::Unterminated(offset))?;
        let name = &rest[1..close];
        let step = match name {
            "activate" => Step::Activate,
            "deactivate" => Step::Deactivate,
            _ => Step::Key {
                label: format!("<{name}>"),
                event: named_event(name)
                    .ok_or_else(|| ScriptError::UnknownToken(name.to_string()))?,
            },
        };
        steps.push(step);
        offset += close + 1;
        rest = &rest[close + 1..];
    }

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_codes(steps: &[Step]) -> Vec<u16> {
        steps
            .iter()
            .filter_map(|s| match s {
                Step::Key { event, .. } => Some(event.key_code),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_plain_letters() {
        let steps = parse_script("rk").unwrap();
        assert_eq!(key_codes(&steps), vec![15, 40]);
        assert_eq!(steps[0].label(), "r");
    }

    #[test]
    fn test_shifted_letter_sets_flag() {
        let steps = parse_script("R").unwrap();
        let Step::Key { event, .. } = &steps[0] else {
            panic!("expected key step");
        };
        assert_eq!(event.key_code, 15);
        assert_eq!(event.flags, FLAG_SHIFT);
        assert_eq!(event.text, "R");
    }

    #[test]
    fn test_named_tokens() {
        let steps = parse_script("r<bs><space><enter><del>").unwrap();
        assert_eq!(
            key_codes(&steps),
            vec![15, key::BACKSPACE, key::SPACE, key::RETURN, key::FORWARD_DELETE]
        );
        assert_eq!(steps[1].label(), "<bs>");
    }

    #[test]
    fn test_lifecycle_tokens() {
        let steps = parse_script("r<deactivate><activate>").unwrap();
        assert!(matches!(steps[1], Step::Deactivate));
        assert!(matches!(steps[2], Step::Activate));
    }

    #[test]
    fn test_literal_lt() {
        let steps = parse_script("<lt>").unwrap();
        let Step::Key { event, .. } = &steps[0] else {
            panic!("expected key step");
        };
        assert_eq!(event.text, "<");
        assert_eq!(event.flags, FLAG_SHIFT);
    }

    #[test]
    fn test_literal_space_is_space_key() {
        let steps = parse_script("r k<space>").unwrap();
        assert_eq!(key_codes(&steps), vec![15, key::SPACE, 40, key::SPACE]);
    }

    #[test]
    fn test_non_ascii_unmapped() {
        let steps = parse_script("가").unwrap();
        assert_eq!(key_codes(&steps), vec![UNMAPPED_KEY_CODE]);
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(
            parse_script("r<foo>").unwrap_err(),
            ScriptError::UnknownToken("foo".to_string())
        );
    }

    #[test]
    fn test_unterminated_token() {
        assert_eq!(
            parse_script("rk<bs").unwrap_err(),
            ScriptError::Unterminated(2)
        );
    }
}
