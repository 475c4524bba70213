use hangul_core::settings::Settings;

// macOS virtual key codes
pub mod key {
    pub const RETURN: u16 = 36;
    pub const TAB: u16 = 48;
    pub const SPACE: u16 = 49;
    pub const BACKSPACE: u16 = 51;
    pub const ESCAPE: u16 = 53;
    pub const KEYPAD_ENTER: u16 = 76;
    pub const HOME: u16 = 115;
    pub const PAGE_UP: u16 = 116;
    pub const FORWARD_DELETE: u16 = 117;
    pub const END: u16 = 119;
    pub const PAGE_DOWN: u16 = 121;
    pub const LEFT: u16 = 123;
    pub const RIGHT: u16 = 124;
    pub const DOWN: u16 = 125;
    pub const UP: u16 = 126;

    /// F1..F12 in order.
    pub const FUNCTION: [u16; 12] = [
        0x7A, 0x78, 0x63, 0x76, 0x60, 0x61, 0x62, 0x64, 0x65, 0x6D, 0x67, 0x6F,
    ];
}

// Flag bits for handle_event
pub const FLAG_SHIFT: u8 = 1;
/// Control or Command is held.
pub const FLAG_HAS_MODIFIER: u8 = 2;
pub const FLAG_OPTION: u8 = 4;

/// Host event kind. Only key-down events reach the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    KeyDown,
    KeyUp,
    FlagsChanged,
}

/// Raw event as delivered by the host.
#[derive(Debug, Clone)]
pub struct HostEvent {
    pub kind: EventKind,
    pub key_code: u16,
    /// Characters the host produced for the key, already shift-applied.
    pub text: String,
    pub flags: u8,
}

impl HostEvent {
    pub fn key_down(key_code: u16, text: &str, flags: u8) -> Self {
        Self {
            kind: EventKind::KeyDown,
            key_code,
            text: text.to_string(),
            flags,
        }
    }
}

/// Keys that end composition and are then handled natively by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKey {
    Return,
    Tab,
    Escape,
    Left,
    Right,
    Up,
    Down,
    /// F1..F12, 1-based.
    Function(u8),
    Home,
    End,
    PageUp,
    PageDown,
    ForwardDelete,
    /// Configured via `special_keys.extra`.
    Other(u16),
}

impl SpecialKey {
    fn from_key_code(key_code: u16) -> Option<Self> {
        let special = match key_code {
            key::RETURN | key::KEYPAD_ENTER => Self::Return,
            key::TAB => Self::Tab,
            key::ESCAPE => Self::Escape,
            key::LEFT => Self::Left,
            key::RIGHT => Self::Right,
            key::UP => Self::Up,
            key::DOWN => Self::Down,
            key::HOME => Self::Home,
            key::END => Self::End,
            key::PAGE_UP => Self::PageUp,
            key::PAGE_DOWN => Self::PageDown,
            key::FORWARD_DELETE => Self::ForwardDelete,
            code => {
                let n = key::FUNCTION.iter().position(|&f| f == code)?;
                Self::Function(n as u8 + 1)
            }
        };
        Some(special)
    }
}

/// A key-down event after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    Special(SpecialKey),
    /// Control/Command chord (Option too when configured).
    ModifiedKey,
    Backspace,
    Space,
    Text { text: String },
    /// Text substituted by a `[keymap]` entry. Always consumed, even when
    /// it is not Hangul input.
    Remapped { text: String },
}

impl KeyEvent {
    pub fn text(s: &str) -> Self {
        Self::Text {
            text: s.to_string(),
        }
    }

    /// Classify a raw key-down. Chords win over key codes, so Cmd+Backspace
    /// is a modified key, not a composition step.
    pub fn classify(key_code: u16, text: &str, flags: u8, settings: &Settings) -> Self {
        if flags & FLAG_HAS_MODIFIER != 0 {
            return Self::ModifiedKey;
        }
        if let Some(special) = SpecialKey::from_key_code(key_code) {
            return Self::Special(special);
        }
        if settings.is_extra_special(key_code) {
            return Self::Special(SpecialKey::Other(key_code));
        }
        if flags & FLAG_OPTION != 0 && settings.special_keys.option_is_special {
            return Self::ModifiedKey;
        }
        match key_code {
            key::BACKSPACE => Self::Backspace,
            key::SPACE => Self::Space,
            _ => match settings.keymap_get(key_code, flags & FLAG_SHIFT != 0) {
                Some(remapped) => Self::Remapped {
                    text: remapped.to_string(),
                },
                None => Self::text(text),
            },
        }
    }
}
