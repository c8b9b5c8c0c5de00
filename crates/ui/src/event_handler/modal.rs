use crate::state::Modal;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use std::path::PathBuf;

/// Answer produced by a dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalResponse {
    Confirmed(bool),
    Dismissed,
    /// Chosen export path, `None` when cancelled
    SavePath(Option<PathBuf>),
}

/// Handle a key while a dialog is open; `Some` closes the dialog
pub fn handle_modal_key(event: KeyEvent, modal: &mut Modal) -> Option<ModalResponse> {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

    match modal {
        Modal::Confirm { .. } => match event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(ModalResponse::Confirmed(true)),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(ModalResponse::Confirmed(false)),
            KeyCode::Char('c') if ctrl => Some(ModalResponse::Confirmed(false)),
            _ => None,
        },
        Modal::Error { .. } => Some(ModalResponse::Dismissed),
        Modal::SavePath { input } => {
            match event.code {
                KeyCode::Enter => {
                    let path = input.buffer.trim();
                    if path.is_empty() {
                        return None;
                    }
                    return Some(ModalResponse::SavePath(Some(PathBuf::from(path))));
                }
                KeyCode::Esc => return Some(ModalResponse::SavePath(None)),
                KeyCode::Char('c') if ctrl => return Some(ModalResponse::SavePath(None)),
                KeyCode::Char('u') if ctrl => input.clear(),
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_home(),
                KeyCode::End => input.move_end(),
                KeyCode::Char(c) if !ctrl => input.insert_char(c),
                _ => {}
            }
            None
        }
    }
}

/// Handle pasted text while a dialog is open
///
/// Only the save-path prompt takes text; line breaks are dropped.
pub fn handle_modal_paste(text: &str, modal: &mut Modal) {
    if let Modal::SavePath { input } = modal {
        let line: String = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
        input.insert_str(&line);
    }
}
