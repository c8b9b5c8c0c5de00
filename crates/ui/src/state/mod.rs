use crate::theme::ThemeVariant;

use relayhub_core::{ModelDescriptor, Settings};

mod exit;
mod input;
mod log;
mod modal;

pub use exit::{CTRL_C_WINDOW, ExitState};
pub use input::InputState;
pub use log::{LogLine, LogLineKind, LogState};
pub use modal::Modal;

/// Status shown before the first intent
pub const READY_STATUS: &str = "Ready";

/// Severity of a status message, read from its leading marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl StatusTone {
    pub fn from_text(text: &str) -> Self {
        match text.chars().next() {
            Some('✓') => Self::Success,
            Some('⚠') => Self::Warning,
            Some('✗') => Self::Error,
            _ => Self::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusLine {
    pub fn new(text: &str) -> Self {
        Self { text: text.to_string(), tone: StatusTone::from_text(text) }
    }
}

/// Everything the TUI draws
#[derive(Debug, Clone)]
pub struct AppState {
    pub input: InputState,
    pub log: LogState,
    pub status: StatusLine,
    /// Open dialog, if any
    pub modal: Option<Modal>,
    pub exit: ExitState,
    pub should_exit: bool,
    /// Next turn number, mirrored from the ledger
    pub turn_count: u32,
    models: Vec<ModelDescriptor>,
    selected_model: usize,
    theme_variant: ThemeVariant,
}

impl AppState {
    pub fn new(models: Vec<ModelDescriptor>, theme_variant: ThemeVariant) -> Self {
        Self {
            input: InputState::new(),
            log: LogState::new(),
            status: StatusLine::new(READY_STATUS),
            modal: None,
            exit: ExitState::new(),
            should_exit: false,
            turn_count: 1,
            models,
            selected_model: 0,
            theme_variant,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.models().to_vec(), ThemeVariant::from_dark_mode(settings.dark_mode))
    }

    pub fn models(&self) -> &[ModelDescriptor] {
        &self.models
    }

    pub fn model_id(&self, index: usize) -> Option<&str> {
        self.models.get(index).map(|m| m.id.as_str())
    }

    pub fn selected_index(&self) -> usize {
        self.selected_model
    }

    pub fn selected_model(&self) -> Option<&ModelDescriptor> {
        self.models.get(self.selected_model)
    }

    pub fn select_next_model(&mut self) {
        if !self.models.is_empty() {
            self.selected_model = (self.selected_model + 1) % self.models.len();
        }
    }

    pub fn select_previous_model(&mut self) {
        if !self.models.is_empty() {
            self.selected_model = (self.selected_model + self.models.len() - 1) % self.models.len();
        }
    }

    pub fn theme_variant(&self) -> ThemeVariant {
        self.theme_variant
    }

    pub fn set_status(&mut self, text: &str) {
        self.status = StatusLine::new(text);
    }

    pub fn has_modal(&self) -> bool {
        self.modal.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
