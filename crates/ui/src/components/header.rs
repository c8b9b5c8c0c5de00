use crate::{layout::HeaderSections, state::AppState, theme::Theme};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const APP_TITLE: &str = "LLM Relay Hub";

/// Header component displaying session information
///
/// Shows (depending on terminal width):
/// - App title
/// - Next turn number
/// - Model that F9 captures from
/// - Palette in use
pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Render the header to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let theme = Theme::palette(self.state.theme_variant());
        let sections = HeaderSections::new(area);

        if sections.title.width > 0 {
            let title = Paragraph::new(Line::from(Span::styled(APP_TITLE, Theme::title(theme))))
                .block(Block::default().borders(Borders::RIGHT).border_style(Theme::border(theme)));
            frame.render_widget(title, sections.title);
        }

        if sections.turns.width > 0 {
            let turns = Paragraph::new(Line::from(vec![
                Span::styled(" Turn ", Theme::muted(theme)),
                Span::styled(format!("{:03}", self.state.turn_count), Style::default().fg(theme.fg)),
            ]))
            .block(Block::default().borders(Borders::RIGHT).border_style(Theme::border(theme)));
            frame.render_widget(turns, sections.turns);
        }

        if sections.capture.width > 0 {
            let mut spans = vec![Span::styled(" Capture ▸ ", Theme::muted(theme))];
            if let Some(model) = self.state.selected_model() {
                spans.push(Span::styled(
                    model.id.to_uppercase(),
                    Style::default().fg(Theme::model_color(model, theme)),
                ));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), sections.capture);
        }

        if sections.theme.width > 0 {
            let variant = Paragraph::new(Line::from(Span::styled(
                self.state.theme_variant().as_str(),
                Theme::muted(theme),
            )))
            .alignment(Alignment::Right);
            frame.render_widget(variant, sections.theme);
        }
    }
}
