//! Key mapping from terminal events to scan codes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_frogger_types::ScanCode;

/// Map a terminal key code to the game's five-key layout.
pub fn scan_code(code: KeyCode) -> Option<ScanCode> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') => {
            Some(ScanCode::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
            Some(ScanCode::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Some(ScanCode::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Some(ScanCode::Right)
        }
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(ScanCode::Confirm),
        _ => None,
    }
}

/// Check if the key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(scan_code(KeyCode::Up), Some(ScanCode::Up));
        assert_eq!(scan_code(KeyCode::Down), Some(ScanCode::Down));
        assert_eq!(scan_code(KeyCode::Left), Some(ScanCode::Left));
        assert_eq!(scan_code(KeyCode::Right), Some(ScanCode::Right));

        assert_eq!(scan_code(KeyCode::Char('w')), Some(ScanCode::Up));
        assert_eq!(scan_code(KeyCode::Char('S')), Some(ScanCode::Down));
        assert_eq!(scan_code(KeyCode::Char('h')), Some(ScanCode::Left));
        assert_eq!(scan_code(KeyCode::Char('l')), Some(ScanCode::Right));
    }

    #[test]
    fn test_confirm_keys() {
        assert_eq!(scan_code(KeyCode::Enter), Some(ScanCode::Confirm));
        assert_eq!(scan_code(KeyCode::Char('r')), Some(ScanCode::Confirm));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(scan_code(KeyCode::Char('x')), None);
        assert_eq!(scan_code(KeyCode::Tab), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
