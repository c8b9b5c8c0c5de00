use super::rendering;
use crate::event_handler::{EventHandler, EventPoll, EventSource, ModalResponse};
use crate::state::{AppState, Modal};

use ratatui::{Terminal, backend::Backend};
use relayhub_core::Surface;
use std::path::{Path, PathBuf};

/// Terminal presentation surface
///
/// Owns the terminal, the drawable state and the event source. Dialogs run
/// a nested loop on the same event source until they are answered.
pub struct TuiView<B: Backend, E: EventSource> {
    terminal: Terminal<B>,
    state: AppState,
    events: E,
}

impl<B: Backend, E: EventSource> TuiView<B, E> {
    pub fn new(terminal: Terminal<B>, state: AppState, events: E) -> Self {
        Self { terminal, state, events }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn next_event(&mut self) -> EventPoll {
        self.events.next_event()
    }

    /// Draw the current state; failures are logged and the loop carries on
    pub fn draw(&mut self) {
        let state = &mut self.state;
        if let Err(e) = self.terminal.draw(|frame| rendering::draw(frame, state)) {
            tracing::error!(error = ?e, "failed to draw frame");
        }
    }

    /// Show `modal` and block until it is answered or input closes
    fn run_modal(&mut self, modal: Modal) -> Option<ModalResponse> {
        tracing::debug!(title = modal.title(), "dialog opened");
        self.state.modal = Some(modal);
        self.draw();

        let response = loop {
            match self.events.next_event() {
                EventPoll::Idle => continue,
                EventPoll::Closed => break None,
                EventPoll::Event(event) => {
                    if let Some(response) = EventHandler::handle_modal_event(&event, &mut self.state) {
                        break Some(response);
                    }
                    self.draw();
                }
            }
        };

        self.state.modal = None;
        response
    }
}

impl<B: Backend, E: EventSource> Surface for TuiView<B, E> {
    fn current_input_text(&self) -> String {
        self.state.input.buffer.clone()
    }

    fn clear_input(&mut self) {
        self.state.input.clear();
    }

    fn render_log(&mut self, entries: &[String]) {
        self.state.log.set_entries(entries.to_vec());
    }

    fn set_status(&mut self, status: &str) {
        self.state.set_status(status);
    }

    fn confirm(&mut self, title: &str, prompt: &str) -> bool {
        matches!(self.run_modal(Modal::confirm(title, prompt)), Some(ModalResponse::Confirmed(true)))
    }

    fn choose_save_path(&mut self, suggested: &Path) -> Option<PathBuf> {
        match self.run_modal(Modal::save_path(&suggested.display().to_string())) {
            Some(ModalResponse::SavePath(path)) => path,
            _ => None,
        }
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.run_modal(Modal::error(title, message));
    }
}
