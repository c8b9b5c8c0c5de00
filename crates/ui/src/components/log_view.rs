use crate::{
    layout::inner,
    state::{AppState, LogLine, LogLineKind},
    theme::{Theme, ThemePalette},
};

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Conversation log: every turn record, newest at the bottom
pub struct LogView<'a> {
    state: &'a AppState,
}

impl<'a> LogView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let theme = Theme::palette(self.state.theme_variant());
        let log = &self.state.log;
        let text_area = inner(area);

        let title = if log.is_at_bottom() {
            " Conversation ".to_string()
        } else {
            format!(" Conversation (↑ {}) ", log.offset_from_bottom())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border(theme))
            .title(Span::styled(title, Theme::title(theme)));

        if log.is_empty() {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                "No turns yet. Type a prompt and press Enter to copy it.",
                Theme::muted(theme),
            )))
            .block(block);
            frame.render_widget(placeholder, area);
            return;
        }

        let lines = log.lines(text_area.width);
        let top = log.visible_top(lines.len(), text_area.height);
        let visible: Vec<Line<'_>> = lines
            .iter()
            .skip(top)
            .take(usize::from(text_area.height))
            .map(|line| Self::styled_line(line, theme))
            .collect();

        frame.render_widget(Paragraph::new(visible).block(block), area);
    }

    fn styled_line(line: &LogLine, theme: ThemePalette) -> Line<'static> {
        let style = match line.kind {
            LogLineKind::Header if line.text.contains("RECEIVED FROM") => {
                Style::default().fg(theme.green).add_modifier(Modifier::BOLD)
            }
            LogLineKind::Header => Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            LogLineKind::Body => Style::default().fg(theme.fg),
            LogLineKind::Rule => Theme::border(theme),
        };
        Line::from(Span::styled(line.text.clone(), style))
    }
}
