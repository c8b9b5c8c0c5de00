/// Actions that can be triggered by key events
///
/// Editing keys (typing, cursor movement, history, model cycling) change
/// [`AppState`](crate::state::AppState) directly and produce no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Copy the prompt for the selected model
    SendToSelected,
    /// Copy the prompt for the model in button slot `index` (F1 = 0)
    SendTo { index: usize },
    /// Copy the prompt for every model
    SendToAll,
    /// Capture the clipboard as the selected model's reply
    CaptureSelected,
    /// Clear the session (asks first)
    ResetSession,
    /// Save the session to a text file
    Export,
    /// Empty the prompt composer
    ClearInput,
    /// Page up in the log
    PageUp,
    /// Page down in the log
    PageDown,
    /// Jump to top of the log
    ScrollToTop,
    /// Jump to bottom of the log
    ScrollToBottom,
    /// Exit the TUI application
    Exit,
}

impl KeyAction {
    /// Whether the action sends the prompt somewhere
    pub fn is_send(&self) -> bool {
        matches!(self, Self::SendToSelected | Self::SendTo { .. } | Self::SendToAll)
    }
}
