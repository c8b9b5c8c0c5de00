mod event_loop;
mod rendering;
mod view;

pub use event_loop::{restore_terminal, run};
pub use rendering::draw;
pub use view::TuiView;

use crate::event_handler::{EventHandler, EventPoll, EventSource, KeyAction};

use crossterm::event::Event;
use ratatui::backend::Backend;
use relayhub_core::{Clipboard, Clock, Controller, Outcome};

/// Main TUI application
///
/// Routes key actions from the view to the controller. The controller owns
/// the ledger; the view owns everything on screen.
pub struct App<C: Clipboard, K: Clock, B: Backend, E: EventSource> {
    controller: Controller<C, K>,
    view: TuiView<B, E>,
}

impl<C: Clipboard, K: Clock, B: Backend, E: EventSource> App<C, K, B, E> {
    pub fn new(controller: Controller<C, K>, view: TuiView<B, E>) -> Self {
        let mut app = Self { controller, view };
        app.sync_turn_count();
        app
    }

    pub fn controller(&self) -> &Controller<C, K> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<C, K> {
        &mut self.controller
    }

    pub fn view(&self) -> &TuiView<B, E> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut TuiView<B, E> {
        &mut self.view
    }

    /// Run until the user quits or input closes
    pub fn run(&mut self) {
        tracing::info!(models = self.controller.roster().len(), "relay hub started");
        self.view.draw();

        while !self.view.state().should_exit {
            match self.view.next_event() {
                EventPoll::Idle => continue,
                EventPoll::Closed => break,
                EventPoll::Event(event) => {
                    self.handle_event(&event);
                    self.view.draw();
                }
            }
        }

        tracing::info!(turns = self.controller.ledger().len(), "relay hub stopped");
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Outcome> {
        let action = EventHandler::handle_event(event, self.view.state_mut())?;
        self.dispatch(action)
    }

    /// Run one action; returns the controller outcome for intents
    pub fn dispatch(&mut self, action: KeyAction) -> Option<Outcome> {
        let prompt = self.view.state().input.buffer.trim().to_string();

        let outcome = match action {
            KeyAction::SendToSelected => {
                let model = self.selected_model_id()?;
                self.controller.send_to_one(&model, &mut self.view)
            }
            KeyAction::SendTo { index } => {
                let Some(model) = self.view.state().model_id(index).map(str::to_string) else {
                    self.view
                        .state_mut()
                        .set_status(&format!("⚠ No model assigned to F{}", index + 1));
                    return None;
                };
                self.controller.send_to_one(&model, &mut self.view)
            }
            KeyAction::SendToAll => self.controller.send_to_all(&mut self.view),
            KeyAction::CaptureSelected => {
                let model = self.selected_model_id()?;
                self.controller.capture_from(&model, &mut self.view)
            }
            KeyAction::ResetSession => self.controller.reset_session(&mut self.view),
            KeyAction::Export => self.controller.export(&mut self.view),
            KeyAction::ClearInput => self.controller.clear_input(&mut self.view),
            KeyAction::PageUp => {
                let log = &mut self.view.state_mut().log;
                log.scroll_up(log.page_size());
                return None;
            }
            KeyAction::PageDown => {
                let log = &mut self.view.state_mut().log;
                log.scroll_down(log.page_size());
                return None;
            }
            KeyAction::ScrollToTop => {
                self.view.state_mut().log.scroll_to_top();
                return None;
            }
            KeyAction::ScrollToBottom => {
                self.view.state_mut().log.scroll_to_bottom();
                return None;
            }
            KeyAction::Exit => {
                self.view.state_mut().should_exit = true;
                return None;
            }
        };

        if action.is_send() && outcome == Outcome::Applied {
            self.view.state_mut().input.add_to_history(prompt);
        }
        self.sync_turn_count();
        tracing::debug!(?action, ?outcome, "action handled");

        Some(outcome)
    }

    fn selected_model_id(&mut self) -> Option<String> {
        let model = self.view.state().selected_model().map(|m| m.id.clone());
        if model.is_none() {
            self.view.state_mut().set_status("⚠ No models configured");
        }
        model
    }

    fn sync_turn_count(&mut self) {
        self.view.state_mut().turn_count = self.controller.ledger().turn_count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_handler::ScriptedEvents;
    use crate::state::AppState;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};
    use relayhub_core::{FixedClock, MemoryClipboard, Settings};

    type TestApp = App<MemoryClipboard, FixedClock, TestBackend, ScriptedEvents>;

    fn app(events: ScriptedEvents) -> TestApp {
        let settings = Settings::default();
        let clock = FixedClock::parse("2026-10-18 10:00:00").unwrap();
        let controller = Controller::new(&settings, MemoryClipboard::new(), clock);
        let terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        App::new(controller, TuiView::new(terminal, AppState::from_settings(&settings), events))
    }

    #[test]
    fn test_send_records_history_and_turns() {
        let mut events = ScriptedEvents::new();
        events.type_text("hello there").key(KeyCode::Enter);

        let mut app = app(events);
        app.run();

        assert_eq!(app.controller().clipboard().contents(), "hello there");
        assert_eq!(app.view().state().turn_count, 2);
        assert_eq!(app.view().state().input.message_history, vec!["hello there"]);
        assert_eq!(app.view().state().status.text, "✓ Copied to CHATGPT (2 words)");
    }

    #[test]
    fn test_failed_send_keeps_history_clean() {
        let mut app = app(ScriptedEvents::new());
        assert_eq!(app.dispatch(KeyAction::SendToSelected), Some(Outcome::Skipped));
        assert!(app.view().state().input.message_history.is_empty());
    }

    #[test]
    fn test_unassigned_function_key() {
        let mut app = app(ScriptedEvents::new());
        assert_eq!(app.dispatch(KeyAction::SendTo { index: 5 }), None);
        assert_eq!(app.view().state().status.text, "⚠ No model assigned to F6");
    }

    #[test]
    fn test_exit_action() {
        let mut app = app(ScriptedEvents::new());
        assert_eq!(app.dispatch(KeyAction::Exit), None);
        assert!(app.view().state().should_exit);
    }

    #[test]
    fn test_run_stops_on_escape() {
        let mut events = ScriptedEvents::new();
        events.key(KeyCode::Esc).type_text("never typed");

        let mut app = app(events);
        app.run();

        assert!(app.view().state().should_exit);
        assert!(app.view().state().input.is_empty());
    }
}
