use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    ForceQuit, // Ctrl+C, always quits
    Escape,
    Submit,
    FocusNext, // Tab
    FocusPrev, // Shift+Tab
    Left,
    Right,
    InputChar(char),
    Paste(String), // Bracketed paste; also how terminals deliver dropped files
    Backspace,
    MouseClick(u16, u16),
    MouseDrag(u16, u16),
    MouseRelease(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {e}");
            return None;
        }
    }
    match event::read() {
        Ok(ev) => translate(ev),
        Err(e) => {
            log::warn!("Event read failed: {e}");
            None
        }
    }
}

/// Map a crossterm event to a `TuiEvent`. Unmapped events yield `None`.
pub fn translate(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse.column, mouse.row))
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                Some(TuiEvent::MouseDrag(mouse.column, mouse.row))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                Some(TuiEvent::MouseRelease(mouse.column, mouse.row))
            }
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<TuiEvent> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
        (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Left) => Some(TuiEvent::Left),
        (_, KeyCode::Right) => Some(TuiEvent::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_keys() {
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            translate(key(KeyCode::Char('2'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('2'))
        );
        assert_eq!(translate(key(KeyCode::Tab, KeyModifiers::NONE)), Some(TuiEvent::FocusNext));
        assert_eq!(
            translate(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(TuiEvent::FocusPrev)
        );
        assert_eq!(translate(key(KeyCode::Esc, KeyModifiers::NONE)), Some(TuiEvent::Escape));
        assert_eq!(translate(key(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let ev = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(ev), None);
    }

    #[test]
    fn test_mouse() {
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4)),
            Some(TuiEvent::MouseClick(3, 4))
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 6)),
            Some(TuiEvent::MouseDrag(5, 6))
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Up(MouseButton::Left), 5, 6)),
            Some(TuiEvent::MouseRelease(5, 6))
        );
        assert_eq!(translate(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)), None);
        assert_eq!(translate(mouse(MouseEventKind::Moved, 1, 1)), None);
    }

    #[test]
    fn test_paste_and_resize() {
        assert_eq!(
            translate(Event::Paste("/tmp/report.pdf".to_string())),
            Some(TuiEvent::Paste("/tmp/report.pdf".to_string()))
        );
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
