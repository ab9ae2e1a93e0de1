//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use glance_protocol::{Message, Route};

/// Default poll timeout for events.
///
/// Also paces redraws, which keeps the finance frame pulse moving.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only left-click press events are handled, producing a `ClickAt` message
/// with the click coordinates.
#[must_use]
fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound. Key releases are ignored.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` or `Backspace` | Close overlay or clear selection |
/// | `Left` / `Right` | Previous / next preset or category |
/// | `Up` / `Down` | Previous / next headline or sidebar entry |
/// | `Enter` or `Space` | Select |
/// | `Tab` / `Shift+Tab` | Focus next / previous widget |
/// | `1`-`4` | Dashboard, Weather, News, Finance |
/// | `/` | Edit the focused widget's search box |
/// | `o` | Open the article link in the browser |
/// | `b` | Toggle sidebar |
/// | `t` | Toggle theme |
/// | `r` | Refresh |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if is_quit(&key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Tab => Some(Message::FocusNext),
        KeyCode::BackTab => Some(Message::FocusPrev),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),
        KeyCode::Backspace => Some(Message::Back),

        KeyCode::Char(digit @ '1'..='4') => {
            let index = digit.to_digit(10)? as usize - 1;
            Route::ALL
                .get(index)
                .map(|route| Message::GoTo { route: *route })
        }

        KeyCode::Char('/') => Some(Message::StartSearch),
        KeyCode::Char('o') => Some(Message::OpenLink),
        KeyCode::Char('b') => Some(Message::ToggleSidebar),
        KeyCode::Char('t') => Some(Message::ToggleTheme),
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a search-box message.
///
/// This function is used while a search box has keyboard focus, so every
/// printable key is text.
///
/// # Key Bindings (Search Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Enter` | Submit |
/// | `Esc` | Stop editing |
/// | `Backspace` | Delete last character |
/// | Any char | Input |
#[must_use]
pub fn key_to_search_message(key: KeyEvent) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if is_quit(&key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Message::SearchSubmit),
        KeyCode::Esc => Some(Message::SearchCancel),
        KeyCode::Backspace => Some(Message::SearchBackspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::SearchInput { ch })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseEvent, MouseEventKind};

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    fn make_mouse_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Left)),
            Some(Message::NavigateLeft)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Right)),
            Some(Message::NavigateRight)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Up)),
            Some(Message::NavigateUp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Down)),
            Some(Message::NavigateDown)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Tab)),
            Some(Message::FocusNext)
        );
        assert_eq!(
            key_to_message(make_key_with_modifiers(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Message::FocusPrev)
        );
    }

    #[test]
    fn digit_keys_go_to_routes() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('1'))),
            Some(Message::GoTo {
                route: Route::Dashboard
            })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('4'))),
            Some(Message::GoTo {
                route: Route::Finance
            })
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('5'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn selection_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter)),
            Some(Message::Select)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char(' '))),
            Some(Message::Select)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Backspace)),
            Some(Message::Back)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Esc)),
            Some(Message::Escape)
        );
    }

    #[test]
    fn shell_action_keys() {
        let cases = [
            ('/', Message::StartSearch),
            ('o', Message::OpenLink),
            ('b', Message::ToggleSidebar),
            ('t', Message::ToggleTheme),
            ('r', Message::Refresh),
            ('?', Message::ToggleHelp),
        ];
        for (ch, expected) in cases {
            assert_eq!(key_to_message(make_key(KeyCode::Char(ch))), Some(expected));
        }
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = make_key(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_message(key), None);
        assert_eq!(key_to_search_message(key), None);
    }

    #[test]
    fn mouse_left_click_generates_click_at() {
        let mouse = make_mouse_click(10, 5);
        assert_eq!(
            mouse_to_message(&mouse),
            Some(Message::ClickAt { column: 10, row: 5 })
        );
    }

    #[test]
    fn mouse_right_click_ignored() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(mouse_to_message(&mouse), None);
    }

    #[test]
    fn mouse_move_ignored() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(mouse_to_message(&mouse), None);
    }

    #[test]
    fn event_to_message_handles_mouse_events() {
        let mouse_event = Event::Mouse(make_mouse_click(15, 8));
        assert_eq!(
            event_to_message(&mouse_event),
            Some(Message::ClickAt { column: 15, row: 8 })
        );
    }

    #[test]
    fn event_to_message_ignores_resize_events() {
        let resize_event = Event::Resize(80, 24);
        assert_eq!(event_to_message(&resize_event), None);
    }

    #[test]
    fn search_mode_captures_text() {
        // Keys bound in normal mode are plain text while searching.
        for ch in ['a', 'r', 't', '/', '?', '1'] {
            assert_eq!(
                key_to_search_message(make_key(KeyCode::Char(ch))),
                Some(Message::SearchInput { ch })
            );
        }
        assert_eq!(
            key_to_search_message(make_key_with_modifiers(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Message::SearchInput { ch: 'A' })
        );
    }

    #[test]
    fn search_mode_editing_keys() {
        assert_eq!(
            key_to_search_message(make_key(KeyCode::Enter)),
            Some(Message::SearchSubmit)
        );
        assert_eq!(
            key_to_search_message(make_key(KeyCode::Esc)),
            Some(Message::SearchCancel)
        );
        assert_eq!(
            key_to_search_message(make_key(KeyCode::Backspace)),
            Some(Message::SearchBackspace)
        );
        assert_eq!(key_to_search_message(make_key(KeyCode::Left)), None);
    }

    #[test]
    fn search_mode_ctrl_c_still_quits() {
        assert_eq!(
            key_to_search_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
    }
}
