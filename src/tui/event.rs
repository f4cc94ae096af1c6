use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Leave the app
    ForceQuit, // Ctrl+C
    Quit,      // Esc

    // Calculator keys (routed to core actions)
    Key(char),
    Submit, // Enter computes
    Backspace,
    Delete,
    Tab, // 2nd

    // Pointer
    MouseClick(u16, u16),
    MouseMove(u16, u16),

    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

/// Maps a raw crossterm event onto a `TuiEvent`, dropping the ones we ignore.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char(c)) => Some(TuiEvent::Key(c)),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Tab) => Some(TuiEvent::Tab),
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::Moved => Some(TuiEvent::MouseMove(mouse_event.column, mouse_event.row)),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(TuiEvent::Key('c'))
        );
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(translate(key(KeyCode::Enter, KeyModifiers::NONE)), Some(TuiEvent::Submit));
        assert_eq!(translate(key(KeyCode::Tab, KeyModifiers::NONE)), Some(TuiEvent::Tab));
        assert_eq!(translate(key(KeyCode::Esc, KeyModifiers::NONE)), Some(TuiEvent::Quit));
        assert_eq!(translate(key(KeyCode::F(1), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_left_click() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(translate(Event::Mouse(click)), Some(TuiEvent::MouseClick(4, 9)));

        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click
        };
        assert_eq!(translate(Event::Mouse(right)), None);
    }
}
