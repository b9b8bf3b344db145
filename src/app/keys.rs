//! Keyboard input as delivered by the host.
//!
//! Only one combination matters to the dispatcher: the platform modifier
//! (Ctrl or Meta/Cmd) together with lowercase `k`, which toggles the command
//! palette from anywhere in the document. Escape dismisses an open palette.

use std::fmt;

/// Logical key, independent of modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
}

/// Modifier flags held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

/// A key event with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// A press with no modifiers.
    #[must_use]
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// `key` held together with Ctrl.
    #[must_use]
    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        }
    }

    /// `key` held together with Meta (Cmd on macOS).
    #[must_use]
    pub fn meta(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                meta: true,
                ..Modifiers::default()
            },
        }
    }

    /// Whether this press is the command palette shortcut.
    ///
    /// Matches `k` with Ctrl or Meta held; the key itself is compared
    /// case-sensitively, so Shift+Ctrl+K does not count.
    #[must_use]
    pub const fn is_palette_shortcut(&self) -> bool {
        matches!(self.key, Key::Char('k')) && (self.modifiers.ctrl || self.modifiers.meta)
    }

    /// Parses combos such as `ctrl+k`, `cmd+k`, `esc`, or `a`.
    ///
    /// Modifier names: `ctrl`/`control`, `meta`/`cmd`/`super`, `alt`/`option`,
    /// `shift`. A trailing `++` (or a bare `+`) names the plus key itself.
    /// Returns `None` for unknown modifiers or key names.
    ///
    /// # Examples
    ///
    /// ```
    /// use artauction::app::keys::KeyPress;
    ///
    /// assert!(KeyPress::parse("ctrl+k").unwrap().is_palette_shortcut());
    /// assert!(KeyPress::parse("cmd+k").unwrap().is_palette_shortcut());
    /// assert!(!KeyPress::parse("k").unwrap().is_palette_shortcut());
    /// assert!(KeyPress::parse("hyper+k").is_none());
    /// ```
    #[must_use]
    pub fn parse(combo: &str) -> Option<Self> {
        let combo = combo.trim();
        let (modifier_part, key_name) = if combo == "+" {
            ("", "+")
        } else if let Some(prefix) = combo.strip_suffix("++") {
            (prefix, "+")
        } else {
            combo
                .rsplit_once('+')
                .map_or(("", combo), |(prefix, key)| (prefix, key.trim()))
        };
        if key_name.is_empty() {
            return None;
        }

        let mut modifiers = Modifiers::default();
        let modifier_part = modifier_part.trim();
        if !modifier_part.is_empty() {
            for part in modifier_part.split('+').map(str::trim) {
                match part.to_ascii_lowercase().as_str() {
                    "ctrl" | "control" => modifiers.ctrl = true,
                    "meta" | "cmd" | "super" => modifiers.meta = true,
                    "alt" | "option" => modifiers.alt = true,
                    "shift" => modifiers.shift = true,
                    _ => return None,
                }
            }
        }

        let key = match key_name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Key::Enter,
            "esc" | "escape" => Key::Escape,
            "backspace" => Key::Backspace,
            "tab" => Key::Tab,
            "space" => Key::Char(' '),
            _ => {
                let mut chars = key_name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { key, modifiers })
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.meta {
            f.write_str("meta+")?;
        }
        if self.modifiers.alt {
            f.write_str("alt+")?;
        }
        if self.modifiers.shift {
            f.write_str("shift+")?;
        }
        match self.key {
            Key::Char(c) => write!(f, "{c}"),
            Key::Enter => f.write_str("enter"),
            Key::Escape => f.write_str("esc"),
            Key::Backspace => f.write_str("backspace"),
            Key::Tab => f.write_str("tab"),
        }
    }
}
