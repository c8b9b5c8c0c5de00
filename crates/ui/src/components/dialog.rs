use crate::{
    layout::{centered_popup, inner},
    state::{AppState, InputState, Modal},
    theme::{Theme, ThemePalette},
};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CONFIRM_WIDTH: u16 = 50;
const ERROR_WIDTH: u16 = 60;
const SAVE_PATH_WIDTH: u16 = 72;

/// Centered popup for the open [`Modal`]
pub struct Dialog<'a> {
    state: &'a AppState,
}

impl<'a> Dialog<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Render over `area`; does nothing without a modal
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let Some(modal) = &self.state.modal else {
            return;
        };
        let theme = Theme::palette(self.state.theme_variant());

        match modal {
            Modal::Confirm { title, prompt } => self.render_confirm(frame, area, title, prompt, theme),
            Modal::Error { title, message } => self.render_error(frame, area, title, message, theme),
            Modal::SavePath { input } => self.render_save_path(frame, area, modal.title(), input, theme),
        }
    }

    fn frame_popup(&self, frame: &mut Frame<'_>, popup: Rect, title: &str, border: Style, theme: ThemePalette) {
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(format!(" {} ", title), border.add_modifier(Modifier::BOLD)))
            .style(Theme::panel(theme));
        frame.render_widget(block, popup);
    }

    fn render_confirm(&self, frame: &mut Frame<'_>, area: Rect, title: &str, prompt: &str, theme: ThemePalette) {
        let popup = centered_popup(area, CONFIRM_WIDTH, 6);
        self.frame_popup(frame, popup, title, Style::default().fg(theme.yellow), theme);

        let lines = vec![
            Line::from(Span::styled(prompt, Style::default().fg(theme.fg))),
            Line::default(),
            Line::from(vec![
                Span::styled("[y]", Style::default().fg(theme.green)),
                Span::styled(" Yes   ", Theme::muted(theme)),
                Span::styled("[n]", Style::default().fg(theme.red)),
                Span::styled(" No", Theme::muted(theme)),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner(popup));
    }

    fn render_error(&self, frame: &mut Frame<'_>, area: Rect, title: &str, message: &str, theme: ThemePalette) {
        let text_width = usize::from(ERROR_WIDTH.min(area.width).saturating_sub(4).max(1));
        let wrapped = textwrap::wrap(message, text_width);
        let height = u16::try_from(wrapped.len()).unwrap_or(u16::MAX).saturating_add(4);

        let popup = centered_popup(area, ERROR_WIDTH, height);
        self.frame_popup(frame, popup, title, Style::default().fg(theme.red), theme);

        let mut lines: Vec<Line<'_>> = wrapped
            .into_iter()
            .map(|part| Line::from(Span::styled(part, Style::default().fg(theme.fg))))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Press any key", Theme::muted(theme))));

        let text_area = inner(popup);
        let padded = Rect { x: text_area.x + 1, width: text_area.width.saturating_sub(2), ..text_area };
        frame.render_widget(Paragraph::new(lines), padded);
    }

    fn render_save_path(
        &self, frame: &mut Frame<'_>, area: Rect, title: &str, input: &InputState, theme: ThemePalette,
    ) {
        let popup = centered_popup(area, SAVE_PATH_WIDTH, 7);
        self.frame_popup(frame, popup, title, Style::default().fg(theme.accent), theme);

        let text_area = inner(popup);
        let field_width = text_area.width.saturating_sub(2);
        let visible_before = tail_fitting(input.before_cursor(), usize::from(field_width.saturating_sub(1)));
        let after = &input.buffer[input.cursor..];

        let lines = vec![
            Line::from(Span::styled("Save session to:", Theme::muted(theme))),
            Line::from(Span::styled(
                format!("{}{}", visible_before, after),
                Style::default().fg(theme.fg).add_modifier(Modifier::UNDERLINED),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(theme.accent)),
                Span::styled(" save   ", Theme::muted(theme)),
                Span::styled("[Esc]", Style::default().fg(theme.accent)),
                Span::styled(" cancel", Theme::muted(theme)),
            ]),
        ];

        let padded = Rect { x: text_area.x + 1, width: field_width, ..text_area };
        frame.render_widget(Paragraph::new(lines), padded);

        if padded.width > 0 && padded.height > 1 {
            let column = u16::try_from(visible_before.width()).unwrap_or(u16::MAX).min(padded.width - 1);
            frame.set_cursor_position((padded.x + column, padded.y + 1));
        }
    }
}

/// Longest suffix of `text` at most `max_width` columns wide
pub fn tail_fitting(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = i;
    }
    &text[start..]
}
