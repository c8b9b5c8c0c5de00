//! Intent handling: turns user actions into ledger mutations, clipboard
//! writes, and status reports on a presentation [`Surface`].

use crate::clipboard::Clipboard;
use crate::clock::Clock;
use crate::config::{PrivacySettings, Settings};
use crate::export;
use crate::ledger::{Direction, Ledger};
use crate::logging::{preview_content, sanitize_path};

use std::path::{Path, PathBuf};

/// Presentation capabilities the controller needs
///
/// Implemented by the terminal UI and by recording doubles in tests.
pub trait Surface {
    /// Text currently in the prompt composer
    fn current_input_text(&self) -> String;

    fn clear_input(&mut self);

    /// Replace the displayed conversation log
    fn render_log(&mut self, entries: &[String]);

    fn set_status(&mut self, status: &str);

    /// Blocking yes/no question
    fn confirm(&mut self, title: &str, prompt: &str) -> bool;

    /// Ask where to save an export, starting from `suggested`. `None` cancels.
    fn choose_save_path(&mut self, suggested: &Path) -> Option<PathBuf>;

    /// Blocking error dialog
    fn show_error(&mut self, title: &str, message: &str);
}

/// What an intent did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The ledger or clipboard changed as requested
    Applied,
    /// Nothing to do (blank input, empty clipboard, empty ledger)
    Skipped,
    /// The user declined a confirmation or save prompt
    Cancelled,
    /// An I/O collaborator failed; the user saw an error dialog
    Failed,
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Handles send, capture, reset, export and clear intents
///
/// Owns the session ledger; nothing else mutates it.
pub struct Controller<C: Clipboard, K: Clock> {
    ledger: Ledger,
    clipboard: C,
    clock: K,
    roster: Vec<String>,
    export_dir: Option<PathBuf>,
    privacy: PrivacySettings,
}

impl<C: Clipboard, K: Clock> Controller<C, K> {
    pub fn new(settings: &Settings, clipboard: C, clock: K) -> Self {
        Self {
            ledger: Ledger::new(),
            clipboard,
            clock,
            roster: settings.roster(),
            export_dir: settings.vault_path.clone(),
            privacy: settings.logging.privacy.clone(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    /// Copy the prompt and log it as sent to one model
    pub fn send_to_one(&mut self, model_id: &str, surface: &mut impl Surface) -> Outcome {
        let Some(prompt) = Self::read_prompt(surface) else {
            return Outcome::Skipped;
        };
        let model = model_id.to_uppercase();

        if let Err(e) = self.clipboard.write(&prompt) {
            tracing::error!(model = %model, error = %e, "clipboard write failed");
            surface.set_status(&format!("✗ Failed to send to {}", model_id));
            surface.show_error("Error", &format!("Failed to send: {}", e));
            return Outcome::Failed;
        }

        let words = word_count(&prompt);
        let timestamp = self.clock.time_of_day();
        self.ledger.append(&prompt, &model, Direction::SentTo, &timestamp);
        tracing::info!(
            model = %model,
            words,
            content = %preview_content(&prompt, &self.privacy),
            "prompt copied"
        );

        surface.render_log(&self.ledger.all_entries());
        surface.clear_input();
        surface.set_status(&format!("✓ Copied to {} ({} words)", model, words));
        Outcome::Applied
    }

    /// Copy the prompt once and log it as sent to every roster model
    pub fn send_to_all(&mut self, surface: &mut impl Surface) -> Outcome {
        let Some(prompt) = Self::read_prompt(surface) else {
            return Outcome::Skipped;
        };

        if let Err(e) = self.clipboard.write(&prompt) {
            tracing::error!(error = %e, "clipboard write failed for all models");
            surface.set_status("✗ Failed to send to all models");
            surface.show_error("Error", &format!("Failed: {}", e));
            return Outcome::Failed;
        }

        let words = word_count(&prompt);
        let timestamp = self.clock.time_of_day();
        for model in &self.roster {
            self.ledger.append(&prompt, model, Direction::SentTo, &timestamp);
        }
        tracing::info!(
            models = self.roster.len(),
            words,
            content = %preview_content(&prompt, &self.privacy),
            "prompt copied for all models"
        );

        surface.render_log(&self.ledger.all_entries());
        surface.clear_input();
        surface.set_status(&format!("✓ Copied for ALL MODELS ({} words)", words));
        Outcome::Applied
    }

    /// Log the clipboard contents as a response from `model_id`
    pub fn capture_from(&mut self, model_id: &str, surface: &mut impl Surface) -> Outcome {
        let model = model_id.to_uppercase();

        let response = match self.clipboard.read() {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::error!(model = %model, error = %e, "clipboard read failed");
                surface.set_status("✗ Failed to capture");
                surface.show_error("Error", &format!("Failed to capture: {}", e));
                return Outcome::Failed;
            }
        };

        if response.is_empty() {
            surface.set_status("⚠ Clipboard is empty");
            return Outcome::Skipped;
        }

        let words = word_count(&response);
        let timestamp = self.clock.time_of_day();
        self.ledger.append(&response, &model, Direction::ReceivedFrom, &timestamp);
        tracing::info!(
            model = %model,
            words,
            content = %preview_content(&response, &self.privacy),
            "response captured"
        );

        surface.render_log(&self.ledger.all_entries());
        surface.set_status(&format!("✓ Captured {} words from {}", words, model));
        Outcome::Applied
    }

    /// Clear the session after confirmation
    pub fn reset_session(&mut self, surface: &mut impl Surface) -> Outcome {
        if self.ledger.is_empty() {
            surface.set_status("Nothing to reset");
            return Outcome::Skipped;
        }

        if !surface.confirm("Reset Session", "Clear all conversation data?") {
            surface.set_status("Reset cancelled");
            return Outcome::Cancelled;
        }

        let cleared = self.ledger.len();
        self.ledger.reset();
        tracing::info!(cleared, "session reset");

        surface.render_log(&self.ledger.all_entries());
        surface.set_status("↻ Session reset");
        Outcome::Applied
    }

    /// Write the session to a user-chosen text file
    pub fn export(&mut self, surface: &mut impl Surface) -> Outcome {
        if self.ledger.is_empty() {
            surface.set_status("⚠ Nothing to export");
            return Outcome::Skipped;
        }

        let now = self.clock.now();
        let suggested = export::suggested_path(self.export_dir.as_deref(), now);
        let Some(path) = surface.choose_save_path(&suggested) else {
            surface.set_status("Export cancelled");
            return Outcome::Cancelled;
        };

        match export::write_export(&path, &self.ledger.all_entries(), now) {
            Ok(turns) => {
                surface.set_status(&format!("✓ Exported {} turns", turns));
                Outcome::Applied
            }
            Err(e) => {
                tracing::error!(path = %sanitize_path(&path), error = %e, "export failed");
                surface.set_status("✗ Export failed");
                surface.show_error("Export Failed", &e.to_string());
                Outcome::Failed
            }
        }
    }

    /// Empty the prompt composer
    pub fn clear_input(&mut self, surface: &mut impl Surface) -> Outcome {
        surface.clear_input();
        surface.set_status("Input cleared");
        Outcome::Applied
    }

    /// Trimmed, non-empty prompt text; warns on the surface otherwise
    fn read_prompt(surface: &mut impl Surface) -> Option<String> {
        let prompt = surface.current_input_text().trim().to_string();
        if prompt.is_empty() {
            surface.set_status("⚠ Cannot send empty message");
            return None;
        }
        Some(prompt)
    }
}
