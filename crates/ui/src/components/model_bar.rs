use crate::{
    event_handler::MAX_MODEL_KEY,
    layout::LayoutMode,
    state::AppState,
    theme::Theme,
};

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use relayhub_core::ModelDescriptor;

/// Short names in compact mode
const COMPACT_NAME_LEN: usize = 6;

/// One button per model in its accent color, then the send-to-all button
pub struct ModelBar<'a> {
    state: &'a AppState,
}

impl<'a> ModelBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let theme = Theme::palette(self.state.theme_variant());
        let mode = LayoutMode::from(area.width);

        let mut spans = Vec::new();
        for (index, model) in self.state.models().iter().enumerate() {
            let selected = index == self.state.selected_index();
            spans.push(Span::styled(if selected { "▸" } else { " " }, Style::default().fg(theme.fg)));
            spans.push(Span::styled(button_label(index, model, mode), Theme::button(model, theme, selected)));
        }
        spans.push(Span::raw("  "));
        spans.push(Span::styled(" ^A All ", Style::default().fg(theme.bg).bg(theme.accent)));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// `" F2 Claude "`, shortened in compact mode; models past F8 have no key
pub fn button_label(index: usize, model: &ModelDescriptor, mode: LayoutMode) -> String {
    let name = if mode.is_compact() {
        model.name.chars().take(COMPACT_NAME_LEN).collect()
    } else {
        model.name.clone()
    };

    if index < usize::from(MAX_MODEL_KEY) {
        format!(" F{} {} ", index + 1, name)
    } else {
        format!(" {} ", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, style::Color};

    #[test]
    fn test_button_label() {
        let model = ModelDescriptor::new("chatgpt", "ChatGPT Plus", "#10A37F");
        assert_eq!(button_label(0, &model, LayoutMode::Full), " F1 ChatGPT Plus ");
        assert_eq!(button_label(2, &model, LayoutMode::Compact), " F3 ChatGP ");
        assert_eq!(button_label(8, &model, LayoutMode::Medium), " ChatGPT Plus ");
    }

    #[test]
    fn test_model_bar_uses_model_colors() {
        let state = AppState::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|frame| ModelBar::new(&state).render(frame, frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..100u16).map(|x| buffer[(x, 0u16)].symbol()).collect();
        assert!(row.starts_with("▸ F1 ChatGPT "));
        assert!(row.contains(" F2 Claude "));
        assert!(row.contains(" F3 Gemini "));
        assert!(row.contains("^A All"));

        assert_eq!(buffer[(2u16, 0u16)].bg, Color::Rgb(16, 163, 127));
    }
}
