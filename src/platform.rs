//! Platform-specific key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Modifier that, with `S`, submits the form
/// - macOS: CONTROL or SUPER (Cmd key, when the terminal reports it)
/// - Linux/Windows: CONTROL
#[cfg(target_os = "macos")]
const SUBMIT_MODIFIERS: &[KeyModifiers] = &[KeyModifiers::CONTROL, KeyModifiers::SUPER];

#[cfg(not(target_os = "macos"))]
const SUBMIT_MODIFIERS: &[KeyModifiers] = &[KeyModifiers::CONTROL];

/// Submit shortcut display for the status bar
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

pub fn is_submit_shortcut(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
        && SUBMIT_MODIFIERS.iter().any(|m| key.modifiers.contains(*m))
}

pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_s_submits() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(is_submit_shortcut(&key));
    }

    #[test]
    fn test_plain_s_does_not_submit() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert!(!is_submit_shortcut(&key));
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        assert!(is_interrupt(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_interrupt(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }
}
