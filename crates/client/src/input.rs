//! Translation from terminal key events to the core's raw key codes.
//!
//! Which code does what is decided entirely by the binding table; this
//! module only turns `crossterm` events into codes.

use crossterm::event::{KeyCode as TermKey, KeyEvent, KeyEventKind};
use game_core::KeyCode;

const ESCAPE: u32 = 0x1b;
const ENTER: u32 = '\n' as u32;
const TAB: u32 = '\t' as u32;
const BACKSPACE: u32 = 0x7f;

/// Returns the key code for a press, or `None` for releases and keys
/// without a code.
pub fn key_code(event: KeyEvent) -> Option<KeyCode> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    match event.code {
        TermKey::Char(ch) => Some(KeyCode::from_char(ch)),
        TermKey::Esc => Some(KeyCode(ESCAPE)),
        TermKey::Enter => Some(KeyCode(ENTER)),
        TermKey::Tab => Some(KeyCode(TAB)),
        TermKey::Backspace => Some(KeyCode(BACKSPACE)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn chars_map_to_their_code_point() {
        let event = KeyEvent::new(TermKey::Char('w'), KeyModifiers::NONE);
        assert_eq!(key_code(event), Some(KeyCode::from_char('w')));
    }

    #[test]
    fn releases_and_arrows_are_ignored() {
        let mut release = KeyEvent::new(TermKey::Char('w'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(key_code(release), None);
        assert_eq!(
            key_code(KeyEvent::new(TermKey::Left, KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn escape_has_a_code() {
        let event = KeyEvent::new(TermKey::Esc, KeyModifiers::NONE);
        assert_eq!(key_code(event), Some(KeyCode(0x1b)));
    }
}
