use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Back,

    // Bottom bar taps
    TapIndex(usize), // zero-based, from digit keys 1-9
    TapPrevious,
    TapNext,
    MouseClick(u16, u16),

    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {e}");
            return None;
        }
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            log::warn!("Event read failed: {e}");
            None
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Only react to presses, not repeats/releases from enhanced keyboards
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Backspace) => Some(TuiEvent::Back),
                (_, KeyCode::Left) => Some(TuiEvent::TapPrevious),
                (_, KeyCode::Right) | (_, KeyCode::Tab) => Some(TuiEvent::TapNext),
                (_, KeyCode::Char(c @ '1'..='9')) => {
                    Some(TuiEvent::TapIndex(c as usize - '1' as usize))
                }
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_digits_map_to_zero_based_taps() {
        assert_eq!(translate(key(KeyCode::Char('1'))), Some(TuiEvent::TapIndex(0)));
        assert_eq!(translate(key(KeyCode::Char('9'))), Some(TuiEvent::TapIndex(8)));
        assert_eq!(translate(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(translate(key(KeyCode::Esc)), Some(TuiEvent::Quit));
        assert_eq!(translate(key(KeyCode::Char('q'))), Some(TuiEvent::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(ctrl_c), Some(TuiEvent::Quit));
    }

    #[test]
    fn test_arrows_and_back() {
        assert_eq!(translate(key(KeyCode::Left)), Some(TuiEvent::TapPrevious));
        assert_eq!(translate(key(KeyCode::Right)), Some(TuiEvent::TapNext));
        assert_eq!(translate(key(KeyCode::Tab)), Some(TuiEvent::TapNext));
        assert_eq!(translate(key(KeyCode::Backspace)), Some(TuiEvent::Back));
    }

    #[test]
    fn test_left_click_only() {
        let click = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 7,
                row: 3,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(
            translate(click(MouseEventKind::Down(MouseButton::Left))),
            Some(TuiEvent::MouseClick(7, 3))
        );
        assert_eq!(translate(click(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(translate(click(MouseEventKind::Moved)), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
