use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use std::collections::VecDeque;
use std::time::Duration;

/// Poll interval for terminal input
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Result of waiting for input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPoll {
    Event(Event),
    /// Nothing arrived within the poll interval
    Idle,
    /// The source is exhausted or broken; the loop should stop
    Closed,
}

/// Where terminal events come from
pub trait EventSource {
    fn next_event(&mut self) -> EventPoll;
}

/// Live crossterm input
#[derive(Debug, Clone, Copy)]
pub struct TerminalEvents {
    timeout: Duration,
}

impl TerminalEvents {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TerminalEvents {
    fn default() -> Self {
        Self::new(POLL_INTERVAL)
    }
}

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> EventPoll {
        match crossterm::event::poll(self.timeout) {
            Ok(true) => match crossterm::event::read() {
                Ok(event) => EventPoll::Event(event),
                Err(e) => {
                    tracing::error!(error = %e, "terminal read failed");
                    EventPoll::Closed
                }
            },
            Ok(false) => EventPoll::Idle,
            Err(e) => {
                tracing::error!(error = %e, "terminal poll failed");
                EventPoll::Closed
            }
        }
    }
}

/// Pre-recorded events, closed once drained
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) -> &mut Self {
        self.events.push_back(event);
        self
    }

    pub fn key(&mut self, code: KeyCode) -> &mut Self {
        self.key_with(code, KeyModifiers::NONE)
    }

    pub fn key_with(&mut self, code: KeyCode, modifiers: KeyModifiers) -> &mut Self {
        self.push(Event::Key(KeyEvent::new(code, modifiers)))
    }

    pub fn ctrl(&mut self, c: char) -> &mut Self {
        self.key_with(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// One key press per character
    pub fn type_text(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.key(KeyCode::Char(c));
        }
        self
    }

    /// A bracketed paste of `text`
    pub fn paste(&mut self, text: &str) -> &mut Self {
        self.push(Event::Paste(text.to_string()))
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> EventPoll {
        match self.events.pop_front() {
            Some(event) => EventPoll::Event(event),
            None => EventPoll::Closed,
        }
    }
}
