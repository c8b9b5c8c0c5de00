use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::KeyAction;

/// Highest function key mapped to a model button
pub const MAX_MODEL_KEY: u8 = 8;

/// Function key that captures from the selected model
pub const CAPTURE_KEY: u8 = 9;

/// Handle keys when no dialog is open
pub fn handle_normal_key(event: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    if !(ctrl && matches!(event.code, KeyCode::Char('c'))) {
        state.exit.reset_ctrl_c_count();
    }

    match event.code {
        KeyCode::Char('c') if ctrl => {
            if state.exit.record_ctrl_c_press() {
                return Some(KeyAction::Exit);
            }
            state.set_status("Press Ctrl+C again to quit");
            None
        }
        KeyCode::Esc => Some(KeyAction::Exit),

        KeyCode::Enter if alt => {
            state.input.insert_char('\n');
            None
        }
        KeyCode::Enter => Some(KeyAction::SendToSelected),
        KeyCode::F(n) if (1..=MAX_MODEL_KEY).contains(&n) => Some(KeyAction::SendTo { index: usize::from(n - 1) }),
        KeyCode::F(CAPTURE_KEY) => Some(KeyAction::CaptureSelected),

        KeyCode::Char('a') if ctrl => Some(KeyAction::SendToAll),
        KeyCode::Char('r') if ctrl => Some(KeyAction::ResetSession),
        KeyCode::Char('e') if ctrl => Some(KeyAction::Export),
        KeyCode::Char('l') if ctrl => Some(KeyAction::ClearInput),

        KeyCode::Tab => {
            state.select_next_model();
            None
        }
        KeyCode::BackTab => {
            state.select_previous_model();
            None
        }

        KeyCode::PageUp => Some(KeyAction::PageUp),
        KeyCode::PageDown => Some(KeyAction::PageDown),
        KeyCode::Home if ctrl => Some(KeyAction::ScrollToTop),
        KeyCode::End if ctrl => Some(KeyAction::ScrollToBottom),

        KeyCode::Up => {
            state.input.navigate_up();
            None
        }
        KeyCode::Down => {
            state.input.navigate_down();
            None
        }

        KeyCode::Backspace => {
            state.input.backspace();
            None
        }
        KeyCode::Delete => {
            state.input.delete();
            None
        }
        KeyCode::Left => {
            state.input.move_left();
            None
        }
        KeyCode::Right => {
            state.input.move_right();
            None
        }
        KeyCode::Home => {
            state.input.move_home();
            None
        }
        KeyCode::End => {
            state.input.move_end();
            None
        }
        KeyCode::Char(c) if !ctrl && !alt => {
            state.input.insert_char(c);
            state.input.reset_history_navigation();
            None
        }
        _ => None,
    }
}
