use super::InputState;

/// Blocking dialog shown over the main screen
#[derive(Debug, Clone)]
pub enum Modal {
    /// Yes/no question
    Confirm { title: String, prompt: String },
    /// Error popup, dismissed by any key
    Error { title: String, message: String },
    /// Editable export destination
    SavePath { input: InputState },
}

impl Modal {
    pub fn confirm(title: &str, prompt: &str) -> Self {
        Self::Confirm { title: title.to_string(), prompt: prompt.to_string() }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self::Error { title: title.to_string(), message: message.to_string() }
    }

    pub fn save_path(suggested: &str) -> Self {
        Self::SavePath { input: InputState::with_text(suggested) }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Confirm { title, .. } | Self::Error { title, .. } => title,
            Self::SavePath { .. } => "Export Session",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_titles() {
        assert_eq!(Modal::confirm("Reset Session", "Sure?").title(), "Reset Session");
        assert_eq!(Modal::error("Error", "boom").title(), "Error");
        assert_eq!(Modal::save_path("out.txt").title(), "Export Session");
    }

    #[test]
    fn test_save_path_prefilled() {
        let Modal::SavePath { input } = Modal::save_path("/vault/LLM_Relay.txt") else {
            panic!("expected save path modal");
        };
        assert_eq!(input.buffer, "/vault/LLM_Relay.txt");
        assert_eq!(input.cursor, input.buffer.len());
    }
}
