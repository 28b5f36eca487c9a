//! Key bindings and the first-match dispatcher.
//!
//! A binding fires when its key matches and its mode mask shares at least
//! one bit with the current mode. The table is scanned in declaration
//! order and only the first match fires.

use std::fmt;

use super::Action;
use crate::state::{Delta, Mode};

/// Raw input code delivered by the display surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "char", into = "char"))]
pub struct KeyCode(pub u32);

impl KeyCode {
    /// Every `char` has its own code; the mapping is lossless.
    pub const fn from_char(ch: char) -> Self {
        Self(ch as u32)
    }

    /// Printable character for this code, if it is one.
    pub fn as_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl From<char> for KeyCode {
    fn from(ch: char) -> Self {
        Self::from_char(ch)
    }
}

impl From<KeyCode> for char {
    fn from(code: KeyCode) -> char {
        code.as_char().unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(ch) if !ch.is_control() => write!(f, "'{ch}'"),
            _ => write!(f, "<{:#06x}>", self.0),
        }
    }
}

/// One input rule.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyBinding {
    pub key: KeyCode,
    /// Modes in which the binding is live; any overlap suffices.
    pub modes: Mode,
    pub action: Action,
    /// Turns added to the clock when the binding fires.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost: u64,
}

impl KeyBinding {
    pub fn new(key: char, modes: Mode, action: Action, cost: u64) -> Self {
        Self {
            key: KeyCode::from_char(key),
            modes,
            action,
            cost,
        }
    }

    pub fn matches(&self, key: KeyCode, mode: Mode) -> bool {
        self.key == key && self.modes.overlaps(mode)
    }
}

/// Ordered binding table; read-only once the session starts.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BindingTable {
    bindings: Vec<KeyBinding>,
}

impl BindingTable {
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        Self { bindings }
    }

    /// First binding in declaration order that matches `key` under `mode`.
    pub fn resolve(&self, key: KeyCode, mode: Mode) -> Option<&KeyBinding> {
        self.bindings.iter().find(|binding| binding.matches(key, mode))
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The stock table. Order matters: `x` prints a creature in cursor mode
    /// and falls through to the test message in game mode.
    pub fn defaults() -> Self {
        use Action::*;
        let game = Mode::GAME;
        let edit_or_cursor = Mode::EDIT | Mode::CURSOR;

        Self::new(vec![
            KeyBinding::new('q', Mode::ALL, Quit, 0),
            KeyBinding::new('w', game, ShiftPlayer(Delta::UP), 1),
            KeyBinding::new('s', game, ShiftPlayer(Delta::DOWN), 1),
            KeyBinding::new('a', game, ShiftPlayer(Delta::LEFT), 1),
            KeyBinding::new('d', game, ShiftPlayer(Delta::RIGHT), 1),
            KeyBinding::new('w', edit_or_cursor, ShiftCursor(Delta::UP), 0),
            KeyBinding::new('s', edit_or_cursor, ShiftCursor(Delta::DOWN), 0),
            KeyBinding::new('a', edit_or_cursor, ShiftCursor(Delta::LEFT), 0),
            KeyBinding::new('d', edit_or_cursor, ShiftCursor(Delta::RIGHT), 0),
            KeyBinding::new('i', game, ShiftCamera(Delta::UP), 0),
            KeyBinding::new('k', game, ShiftCamera(Delta::DOWN), 0),
            KeyBinding::new('j', game, ShiftCamera(Delta::LEFT), 0),
            KeyBinding::new('l', game, ShiftCamera(Delta::RIGHT), 0),
            KeyBinding::new('n', game, Count, 0),
            KeyBinding::new('p', game | Mode::EDIT, ToggleEdit, 0),
            KeyBinding::new('e', Mode::EDIT, PlaceWall, 0),
            KeyBinding::new('r', Mode::EDIT, SaveMap, 0),
            KeyBinding::new('b', game, ShowLog, 0),
            KeyBinding::new('u', Mode::ALL, Error("Test".to_string()), 1),
            KeyBinding::new('c', game | Mode::CURSOR, ToggleCursor, 0),
            KeyBinding::new('x', Mode::CURSOR, PrintCreature, 0),
            KeyBinding::new('x', game, TestMessage, 0),
        ])
    }
}

impl FromIterator<KeyBinding> for BindingTable {
    fn from_iter<I: IntoIterator<Item = KeyBinding>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
