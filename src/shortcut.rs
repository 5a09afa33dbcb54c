//! Keyboard shortcut types with platform-aware display.
//!
//! This module provides:
//! - `Shortcut` - A keyboard shortcut (modifiers + key)
//! - `Modifiers` - Modifier key flags (cmd, ctrl, alt, shift)
//! - `ShortcutSet` - The ordered chord list bound to a command
//! - `ShortcutParseError` - Detailed parse errors for user feedback

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a shortcut string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutParseError {
    #[error("shortcut string is empty")]
    Empty,
    #[error("shortcut has no key, only modifiers")]
    MissingKey,
    #[error("unknown token '{0}' in shortcut")]
    UnknownToken(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// Modifier keys for a shortcut.
///
/// Note on `cmd` (platform accelerator):
/// - On macOS: Command (⌘)
/// - On Windows/Linux: Ctrl
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub cmd: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
}

impl Modifiers {
    pub fn cmd() -> Self {
        Self {
            cmd: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn any(&self) -> bool {
        self.cmd || self.ctrl || self.alt || self.shift
    }

    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Platform enum for display formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Windows,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::MacOS
        }
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(target_os = "linux")]
        {
            Platform::Linux
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            Platform::Linux
        }
    }
}

/// A keyboard shortcut consisting of modifier keys and a main key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shortcut {
    pub key: String,
    pub modifiers: Modifiers,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: canonicalize_key(&key.into()),
            modifiers,
        }
    }

    /// Synthesize a shortcut from a widget mnemonic character.
    ///
    /// Known limitation carried over from the original heuristic: mnemonics
    /// are always rendered as `Alt+<char>`, without respecting the macOS
    /// Meta-key convention.
    pub fn alt_mnemonic(mnemonic: char) -> Self {
        Self {
            key: mnemonic.to_ascii_lowercase().to_string(),
            modifiers: Modifiers::alt(),
        }
    }

    pub fn parse(s: &str) -> Result<Self, ShortcutParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        let normalized = s.replace('+', " ");
        let parts: Vec<&str> = normalized.split_whitespace().collect();
        if parts.is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        let mut modifiers = Modifiers::default();
        let mut key_part: Option<&str> = None;

        for part in &parts {
            let part_lower = part.to_lowercase();
            match part_lower.as_str() {
                "cmd" | "command" | "meta" | "super" | "win" | "⌘" | "mod" => {
                    modifiers.cmd = true
                }
                "ctrl" | "control" | "ctl" | "^" => modifiers.ctrl = true,
                "alt" | "opt" | "option" | "⌥" => modifiers.alt = true,
                "shift" | "shft" | "⇧" => modifiers.shift = true,
                _ => {
                    if key_part.is_some() {
                        return Err(ShortcutParseError::UnknownToken(part.to_string()));
                    }
                    key_part = Some(part);
                }
            }
        }

        let key = key_part.ok_or(ShortcutParseError::MissingKey)?;
        let canonical_key = canonicalize_key(key);
        if !is_known_key(&canonical_key) {
            return Err(ShortcutParseError::UnknownKey(key.to_string()));
        }

        Ok(Self {
            key: canonical_key,
            modifiers,
        })
    }

    pub fn display(&self) -> String {
        self.display_for_platform(Platform::current())
    }

    pub fn display_for_platform(&self, platform: Platform) -> String {
        match platform {
            Platform::MacOS => self.display_macos(),
            Platform::Windows | Platform::Linux => self.display_text(),
        }
    }

    fn display_macos(&self) -> String {
        let mut s = String::new();
        if self.modifiers.ctrl {
            s.push('⌃');
        }
        if self.modifiers.alt {
            s.push('⌥');
        }
        if self.modifiers.shift {
            s.push('⇧');
        }
        if self.modifiers.cmd {
            s.push('⌘');
        }
        s.push_str(&self.key_display_symbol());
        s
    }

    /// Text rendering (`Ctrl+Shift+K` style). Also used verbatim for
    /// mnemonic-synthesized shortcuts on every platform.
    pub fn display_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }
        if self.modifiers.cmd {
            parts.push("Meta".to_string());
        }
        parts.push(self.key_display_text());
        parts.join("+")
    }

    fn key_display_symbol(&self) -> String {
        match self.key.as_str() {
            "enter" => "↵",
            "escape" => "⎋",
            "tab" => "⇥",
            "space" => "␣",
            "backspace" => "⌫",
            "delete" => "⌦",
            "up" => "↑",
            "down" => "↓",
            "left" => "←",
            "right" => "→",
            k => return k.to_uppercase(),
        }
        .to_string()
    }

    fn key_display_text(&self) -> String {
        match self.key.as_str() {
            "enter" => "Enter",
            "escape" => "Esc",
            "tab" => "Tab",
            "space" => "Space",
            "backspace" => "Backspace",
            "delete" => "Delete",
            "up" => "Up",
            "down" => "Down",
            "left" => "Left",
            "right" => "Right",
            "home" => "Home",
            "end" => "End",
            "pageup" => "PageUp",
            "pagedown" => "PageDown",
            k => return k.to_uppercase(),
        }
        .to_string()
    }

    pub fn to_canonical_string(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if self.modifiers.alt {
            parts.push("alt");
        }
        if self.modifiers.cmd {
            parts.push("cmd");
        }
        if self.modifiers.ctrl {
            parts.push("ctrl");
        }
        if self.modifiers.shift {
            parts.push("shift");
        }
        parts.push(&self.key);
        parts.join("+")
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// The ordered set of key chords bound to a command.
///
/// An empty set is the "no shortcut" sentinel. Reminder text renders the
/// first chord only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutSet(SmallVec<[Shortcut; 2]>);

impl ShortcutSet {
    pub fn none() -> Self {
        Self(SmallVec::new())
    }

    pub fn single(shortcut: Shortcut) -> Self {
        let mut chords = SmallVec::new();
        chords.push(shortcut);
        Self(chords)
    }

    pub fn from_chords(chords: impl IntoIterator<Item = Shortcut>) -> Self {
        Self(chords.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Shortcut> {
        self.0.first()
    }

    pub fn chords(&self) -> &[Shortcut] {
        &self.0
    }

    /// Human-readable rendering of the first chord, or `None` when unbound.
    pub fn reminder_text(&self) -> Option<String> {
        self.first().map(Shortcut::display)
    }
}

/// Canonicalize a key name to the internal standard form.
pub fn canonicalize_key(key: &str) -> String {
    let key_lower = key.to_lowercase();
    match key_lower.as_str() {
        "arrowup" | "uparrow" => "up",
        "arrowdown" | "downarrow" => "down",
        "arrowleft" | "leftarrow" => "left",
        "arrowright" | "rightarrow" => "right",
        "return" => "enter",
        "esc" => "escape",
        "back" => "backspace",
        "del" => "delete",
        "pgup" => "pageup",
        "pgdn" | "pgdown" => "pagedown",
        "/" | "forwardslash" => "slash",
        "-" | "dash" | "hyphen" => "minus",
        "=" | "equals" => "equal",
        _ => return key_lower,
    }
    .to_string()
}

/// Check if a key name is known/valid.
pub fn is_known_key(key: &str) -> bool {
    if key.len() == 1 {
        let c = key.chars().next().unwrap_or('\0');
        return c.is_ascii_lowercase() || c.is_ascii_digit();
    }
    matches!(
        key,
        "f1" | "f2"
            | "f3"
            | "f4"
            | "f5"
            | "f6"
            | "f7"
            | "f8"
            | "f9"
            | "f10"
            | "f11"
            | "f12"
            | "space"
            | "enter"
            | "tab"
            | "escape"
            | "backspace"
            | "delete"
            | "insert"
            | "up"
            | "down"
            | "left"
            | "right"
            | "home"
            | "end"
            | "pageup"
            | "pagedown"
            | "slash"
            | "minus"
            | "equal"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_modifiers_and_key() {
        let s = Shortcut::parse("Ctrl+Shift+K").expect("should parse");
        assert!(s.modifiers.ctrl);
        assert!(s.modifiers.shift);
        assert!(!s.modifiers.alt);
        assert_eq!(s.key, "k");
    }

    #[test]
    fn parse_rejects_empty_and_modifier_only() {
        assert_eq!(Shortcut::parse("  "), Err(ShortcutParseError::Empty));
        assert_eq!(
            Shortcut::parse("ctrl+shift"),
            Err(ShortcutParseError::MissingKey)
        );
    }

    #[test]
    fn parse_rejects_unknown_key() {
        assert!(matches!(
            Shortcut::parse("ctrl+bogus"),
            Err(ShortcutParseError::UnknownKey(_))
        ));
    }

    #[test]
    fn text_display_joins_with_plus() {
        let s = Shortcut::parse("ctrl+shift+p").expect("should parse");
        assert_eq!(s.display_text(), "Ctrl+Shift+P");
    }

    #[test]
    fn mnemonic_shortcut_always_renders_alt() {
        let s = Shortcut::alt_mnemonic('3');
        assert_eq!(s.display_text(), "Alt+3");
        let s = Shortcut::alt_mnemonic('N');
        assert_eq!(s.display_text(), "Alt+N");
    }

    #[test]
    fn shortcut_set_reminder_uses_first_chord_only() {
        let set = ShortcutSet::from_chords([
            Shortcut::parse("ctrl+c").expect("parse"),
            Shortcut::parse("ctrl+insert").expect("parse"),
        ]);
        assert_eq!(
            set.first().map(Shortcut::display_text),
            Some("Ctrl+C".to_string())
        );
    }

    #[test]
    fn empty_set_is_the_unbound_sentinel() {
        let set = ShortcutSet::none();
        assert!(set.is_empty());
        assert_eq!(set.reminder_text(), None);
    }

    #[test]
    fn canonical_string_orders_modifiers() {
        let s = Shortcut::parse("shift+ctrl+alt+x").expect("parse");
        assert_eq!(s.to_canonical_string(), "alt+ctrl+shift+x");
    }
}
