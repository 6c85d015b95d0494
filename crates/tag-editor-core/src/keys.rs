//! Keyboard input types and the tag input key filter.
//!
//! Platform-agnostic key representation: browser code converts
//! `KeyboardEvent.key` into [`Key`] and asks [`filter_tag_key`] whether the
//! keystroke may reach a tag input. The filter is a convenience for the user,
//! not validation; [`TagText`](crate::TagText) still checks what gets saved.

use smol_str::SmolStr;

/// Key values for keyboard input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key.
    Character(SmolStr),

    /// Unknown/unidentified key.
    Unidentified,

    // === Whitespace / editing ===
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    Space,

    // === Navigation ===
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,

    // === Modifiers ===
    Alt,
    AltGraph,
    CapsLock,
    Control,
    Meta,
    Shift,

    /// Any other named key (function keys, media keys, ...).
    Named(SmolStr),
}

impl Key {
    /// Create a character key.
    pub fn character(s: impl Into<SmolStr>) -> Self {
        Self::Character(s.into())
    }

    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn parse(key: &str) -> Self {
        match key {
            "" | "Unidentified" => Self::Unidentified,
            " " | "Spacebar" => Self::Space,
            "Backspace" => Self::Backspace,
            "Delete" | "Del" => Self::Delete,
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            "Escape" | "Esc" => Self::Escape,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Alt" => Self::Alt,
            "AltGraph" => Self::AltGraph,
            "CapsLock" => Self::CapsLock,
            "Control" => Self::Control,
            "Meta" | "OS" => Self::Meta,
            "Shift" => Self::Shift,
            other if other.chars().count() == 1 => Self::Character(other.into()),
            other => Self::Named(other.into()),
        }
    }

    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::ArrowLeft
                | Self::ArrowRight
                | Self::ArrowUp
                | Self::ArrowDown
                | Self::Home
                | Self::End
        )
    }

    /// Check if this is a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Self::Alt | Self::AltGraph | Self::CapsLock | Self::Control | Self::Meta | Self::Shift
        )
    }
}

/// Modifier key state for a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
        meta: false,
    };

    pub const CTRL_ALT: Self = Self {
        ctrl: true,
        alt: true,
        shift: false,
        meta: false,
    };
}

/// A key together with the modifiers held while pressing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn shift(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::SHIFT,
        }
    }
}

/// Decision for a keydown in a tag input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFilter {
    /// Let the browser handle the key.
    Allow,
    /// Prevent default; the key never reaches the input.
    Suppress,
    /// Enter: prevent default and blur the field.
    Commit,
}

impl KeyFilter {
    /// Whether the platform default should be prevented.
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::Allow)
    }
}

/// Classify a keydown in a tag input.
///
/// Letters, unshifted digits, navigation and editing keys and space pass.
/// Anything typed with Ctrl and Alt together is dropped, since that is how
/// AltGr symbols arrive on many layouts.
pub fn filter_tag_key(combo: &KeyCombo) -> KeyFilter {
    if combo.modifiers.ctrl && combo.modifiers.alt {
        return KeyFilter::Suppress;
    }

    match &combo.key {
        Key::Enter => KeyFilter::Commit,
        Key::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => KeyFilter::Allow,
                (Some(c), None) if c.is_ascii_digit() && !combo.modifiers.shift => {
                    KeyFilter::Allow
                }
                _ => KeyFilter::Suppress,
            }
        }
        Key::Space | Key::Backspace | Key::Delete => KeyFilter::Allow,
        key if key.is_navigation() || key.is_modifier() => KeyFilter::Allow,
        _ => KeyFilter::Suppress,
    }
}

/// Classify a keydown in a single-line text field.
///
/// Only Enter is intercepted (committed by blurring); everything else passes.
pub fn filter_single_line_key(combo: &KeyCombo) -> KeyFilter {
    match combo.key {
        Key::Enter => KeyFilter::Commit,
        _ => KeyFilter::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(key: &str) -> KeyFilter {
        filter_tag_key(&KeyCombo::new(Key::parse(key)))
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(Key::parse("a"), Key::character("a"));
        assert_eq!(Key::parse(" "), Key::Space);
        assert_eq!(Key::parse("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::parse("F5"), Key::Named("F5".into()));
        assert_eq!(Key::parse(""), Key::Unidentified);
    }

    #[test]
    fn test_hash_suppressed_letter_allowed() {
        assert_eq!(filter("#"), KeyFilter::Suppress);
        assert_eq!(filter("A"), KeyFilter::Allow);
        assert_eq!(
            filter_tag_key(&KeyCombo::shift(Key::character("A"))),
            KeyFilter::Allow
        );
    }

    #[test]
    fn test_separator_and_symbols_suppressed() {
        for key in [",", "-", "_", ".", "é", "Tab", "Escape", "F5"] {
            assert_eq!(filter(key), KeyFilter::Suppress, "{key}");
        }
    }

    #[test]
    fn test_digits_only_without_shift() {
        assert_eq!(filter("7"), KeyFilter::Allow);
        assert_eq!(
            filter_tag_key(&KeyCombo::shift(Key::character("7"))),
            KeyFilter::Suppress
        );
    }

    #[test]
    fn test_editing_and_navigation_allowed() {
        for key in [
            " ",
            "Backspace",
            "Delete",
            "ArrowLeft",
            "ArrowRight",
            "ArrowUp",
            "ArrowDown",
            "Home",
            "End",
            "Shift",
        ] {
            assert_eq!(filter(key), KeyFilter::Allow, "{key:?}");
        }
    }

    #[test]
    fn test_ctrl_alt_suppressed() {
        let combo = KeyCombo::with_modifiers(Key::character("q"), Modifiers::CTRL_ALT);
        assert_eq!(filter_tag_key(&combo), KeyFilter::Suppress);
    }

    #[test]
    fn test_enter_commits() {
        assert_eq!(filter("Enter"), KeyFilter::Commit);
        assert!(KeyFilter::Commit.prevents_default());
        assert_eq!(
            filter_single_line_key(&KeyCombo::new(Key::Enter)),
            KeyFilter::Commit
        );
        assert_eq!(
            filter_single_line_key(&KeyCombo::new(Key::character("#"))),
            KeyFilter::Allow
        );
    }
}
