pub mod app;
pub mod components;
pub mod event_handler;
pub mod layout;
pub mod state;
pub mod theme;

pub use app::{App, TuiView, run};
pub use event_handler::{EventHandler, EventPoll, EventSource, KeyAction, ScriptedEvents, TerminalEvents};
pub use state::{AppState, InputState, Modal};
pub use theme::{Theme, ThemeVariant};
