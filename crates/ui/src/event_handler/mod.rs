mod key_action;
mod modal;
mod normal_mode;
mod source;

pub use key_action::KeyAction;
pub use modal::ModalResponse;
pub use normal_mode::{CAPTURE_KEY, MAX_MODEL_KEY};
pub use source::{EventPoll, EventSource, POLL_INTERVAL, ScriptedEvents, TerminalEvents};

use crate::state::AppState;

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use self::{
    modal::{handle_modal_key, handle_modal_paste},
    normal_mode::handle_normal_key,
};

/// Event handler for the TUI application
pub struct EventHandler;

impl EventHandler {
    /// Handle a key press on the main screen
    ///
    /// Returns the intent to run, if the key maps to one. Releases and
    /// repeats reported by some terminals are ignored.
    pub fn handle_key_event(event: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        if state.has_modal() {
            return None;
        }

        handle_normal_key(event, state)
    }

    /// Handle any event on the main screen
    pub fn handle_event(event: &Event, state: &mut AppState) -> Option<KeyAction> {
        match event {
            Event::Key(key_event) => Self::handle_key_event(*key_event, state),
            Event::Paste(text) => {
                Self::handle_paste(text, state);
                None
            }
            _ => None,
        }
    }

    /// Insert a bracketed paste into the prompt, line breaks included
    ///
    /// Pasted newlines never send the prompt.
    pub fn handle_paste(text: &str, state: &mut AppState) {
        if state.has_modal() {
            return;
        }

        state.exit.reset_ctrl_c_count();
        state.input.reset_history_navigation();
        state.input.insert_str(text);
    }

    /// Handle a key press while a dialog is open
    pub fn handle_modal_event(event: &Event, state: &mut AppState) -> Option<ModalResponse> {
        let modal = state.modal.as_mut()?;

        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => handle_modal_key(*key_event, modal),
            Event::Paste(text) => {
                handle_modal_paste(text, modal);
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Modal;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_release_events_are_ignored() {
        let mut state = AppState::default();
        let release = KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        assert!(EventHandler::handle_key_event(release, &mut state).is_none());
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_keys_ignored_while_modal_open() {
        let mut state = AppState::default();
        state.modal = Some(Modal::error("Error", "boom"));

        let event = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(EventHandler::handle_key_event(event, &mut state).is_none());
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_handle_event_delegates_key_events() {
        let mut state = AppState::default();
        let event = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(EventHandler::handle_event(&event, &mut state), Some(KeyAction::SendToSelected));

        assert!(EventHandler::handle_event(&Event::FocusGained, &mut state).is_none());
    }

    #[test]
    fn test_paste_inserts_without_sending() {
        let mut state = AppState::default();
        for c in "intro ".chars() {
            EventHandler::handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), &mut state);
        }

        let paste = Event::Paste("first line\nsecond line".to_string());
        assert!(EventHandler::handle_event(&paste, &mut state).is_none());
        assert_eq!(state.input.buffer, "intro first line\nsecond line");
        assert_eq!(state.input.cursor, state.input.buffer.len());
    }

    #[test]
    fn test_paste_ignored_on_main_screen_while_modal_open() {
        let mut state = AppState::default();
        state.modal = Some(Modal::confirm("Reset Session", "Clear all conversation data?"));

        EventHandler::handle_event(&Event::Paste("text".to_string()), &mut state);
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_paste_into_save_path_dialog() {
        let mut state = AppState::default();
        state.modal = Some(Modal::save_path(""));

        let paste = Event::Paste("exports/relay.txt".to_string());
        assert!(EventHandler::handle_modal_event(&paste, &mut state).is_none());

        let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            EventHandler::handle_modal_event(&enter, &mut state),
            Some(ModalResponse::SavePath(Some(std::path::PathBuf::from("exports/relay.txt"))))
        );
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_handle_modal_event() {
        let mut state = AppState::default();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE));
        assert!(EventHandler::handle_modal_event(&event, &mut state).is_none());

        state.modal = Some(Modal::confirm("Reset Session", "Clear all conversation data?"));
        assert_eq!(
            EventHandler::handle_modal_event(&event, &mut state),
            Some(ModalResponse::Confirmed(true))
        );
    }
}
