use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Dialog shortcuts
    Confirm, // Ctrl+Enter or Ctrl+S
    Cancel,  // Esc or Ctrl+C

    // Editing
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Enter,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    WordLeft,
    WordRight,

    // Focus and pointer
    FocusNext, // Tab
    FocusPrev, // Shift+Tab
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(map_event(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a raw crossterm event. Unbound input maps to `None`.
pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Keyboard enhancement can report releases too; only presses count
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::trace!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key_event.modifiers.contains(KeyModifiers::ALT);

    match key_event.code {
        KeyCode::Enter if ctrl => Some(TuiEvent::Confirm),
        KeyCode::Char('s') if ctrl => Some(TuiEvent::Confirm),
        KeyCode::Char('c') if ctrl => Some(TuiEvent::Cancel),
        // Ctrl+J is a bare LF in most terminals without keyboard enhancement
        KeyCode::Char('j') if ctrl => Some(TuiEvent::Enter),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(TuiEvent::InputChar(c)),
        KeyCode::Esc => Some(TuiEvent::Cancel),
        KeyCode::Enter => Some(TuiEvent::Enter),
        KeyCode::Backspace => Some(TuiEvent::Backspace),
        KeyCode::Delete => Some(TuiEvent::Delete),
        KeyCode::Left if ctrl || alt => Some(TuiEvent::WordLeft),
        KeyCode::Right if ctrl || alt => Some(TuiEvent::WordRight),
        KeyCode::Left => Some(TuiEvent::CursorLeft),
        KeyCode::Right => Some(TuiEvent::CursorRight),
        KeyCode::Up => Some(TuiEvent::CursorUp),
        KeyCode::Down => Some(TuiEvent::CursorDown),
        KeyCode::Home => Some(TuiEvent::CursorHome),
        KeyCode::End => Some(TuiEvent::CursorEnd),
        KeyCode::Tab => Some(TuiEvent::FocusNext),
        KeyCode::BackTab => Some(TuiEvent::FocusPrev),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_confirm_shortcuts() {
        assert_eq!(
            map_event(key(KeyCode::Enter, KeyModifiers::CONTROL)),
            Some(TuiEvent::Confirm)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Confirm)
        );
    }

    #[test]
    fn test_cancel_shortcuts() {
        assert_eq!(
            map_event(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(TuiEvent::Cancel)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Cancel)
        );
    }

    #[test]
    fn test_plain_enter_is_newline_not_confirm() {
        assert_eq!(
            map_event(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(TuiEvent::Enter)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('j'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Enter)
        );
    }

    #[test]
    fn test_characters_and_shifted_characters() {
        assert_eq!(
            map_event(key(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('a'))
        );
        assert_eq!(
            map_event(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(TuiEvent::InputChar('A'))
        );
        assert_eq!(map_event(key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_word_movement() {
        assert_eq!(
            map_event(key(KeyCode::Left, KeyModifiers::CONTROL)),
            Some(TuiEvent::WordLeft)
        );
        assert_eq!(
            map_event(key(KeyCode::Right, KeyModifiers::ALT)),
            Some(TuiEvent::WordRight)
        );
        assert_eq!(
            map_event(key(KeyCode::Left, KeyModifiers::NONE)),
            Some(TuiEvent::CursorLeft)
        );
    }

    #[test]
    fn test_focus_keys() {
        assert_eq!(
            map_event(key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(TuiEvent::FocusNext)
        );
        assert_eq!(
            map_event(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(TuiEvent::FocusPrev)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn test_left_click_and_paste() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            map_event(Event::Mouse(click)),
            Some(TuiEvent::MouseClick(7, 3))
        );
        assert_eq!(
            map_event(Event::Paste("a\nb".into())),
            Some(TuiEvent::Paste("a\nb".into()))
        );
        assert_eq!(map_event(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
