use crate::{
    layout::inner,
    state::{AppState, InputState},
    theme::Theme,
};

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PLACEHOLDER: &str = "Type a prompt. Enter copies it for the selected model, Alt+Enter adds a line.";

/// Prompt composer with a visible cursor
pub struct Composer<'a> {
    state: &'a AppState,
}

impl<'a> Composer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let theme = Theme::palette(self.state.theme_variant());
        let input = &self.state.input;
        let text_area = inner(area);

        let mut title = vec![Span::styled(" Prompt ", Theme::title(theme))];
        if let Some(position) = input.history_position() {
            title.push(Span::styled(format!("[history {}] ", position), Theme::muted(theme)));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(Line::from(title))
            .style(Theme::panel(theme));

        if input.is_empty() {
            let placeholder = Paragraph::new(Span::styled(PLACEHOLDER, Theme::muted(theme)))
                .wrap(Wrap { trim: false })
                .block(block);
            frame.render_widget(placeholder, area);
        } else {
            let rows = wrap_rows(&input.buffer, text_area.width);
            let top = first_visible_row(input, &rows, text_area.height);
            let lines: Vec<Line<'_>> = rows
                .iter()
                .skip(top)
                .take(usize::from(text_area.height))
                .map(|row| Line::from(Span::styled(&input.buffer[row.clone()], Style::default().fg(theme.fg))))
                .collect();
            frame.render_widget(Paragraph::new(lines).block(block), area);
        }

        if !self.state.has_modal()
            && let Some(position) = cursor_position(input, text_area)
        {
            frame.set_cursor_position(position);
        }
    }
}

/// Byte ranges of the screen rows `text` occupies at `width` columns
///
/// Lines break at the last space that fits, or mid-word when a word is
/// wider than the row. Every byte except the `\n` separators lands in
/// exactly one row; a space that overflows hangs at the end of its row.
pub fn wrap_rows(text: &str, width: u16) -> Vec<Range<usize>> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    let mut line_start = 0;

    for line in text.split('\n') {
        let mut row_start = line_start;
        let mut row_width = 0;
        // Byte just past the last space in the row, and the row width there
        let mut last_break: Option<(usize, usize)> = None;

        for (offset, ch) in line.char_indices() {
            let at = line_start + offset;
            let ch_width = ch.width().unwrap_or(0);

            if row_width + ch_width > width && row_width > 0 {
                if ch == ' ' {
                    rows.push(row_start..at + 1);
                    row_start = at + 1;
                    row_width = 0;
                    last_break = None;
                    continue;
                }

                match last_break {
                    Some((split, split_width)) if split > row_start => {
                        rows.push(row_start..split);
                        row_start = split;
                        row_width -= split_width;
                    }
                    _ => {
                        rows.push(row_start..at);
                        row_start = at;
                        row_width = 0;
                    }
                }
                last_break = None;

                if row_width + ch_width > width && row_width > 0 {
                    rows.push(row_start..at);
                    row_start = at;
                    row_width = 0;
                }
            }

            row_width += ch_width;
            if ch == ' ' {
                last_break = Some((at + 1, row_width));
            }
        }

        rows.push(row_start..line_start + line.len());
        line_start += line.len() + 1;
    }

    rows
}

/// Row holding the cursor: the last row starting at or before it
fn cursor_row(input: &InputState, rows: &[Range<usize>]) -> usize {
    rows.iter().rposition(|row| row.start <= input.cursor).unwrap_or(0)
}

/// First row shown so the cursor row stays visible
fn first_visible_row(input: &InputState, rows: &[Range<usize>], height: u16) -> usize {
    cursor_row(input, rows).saturating_sub(usize::from(height.saturating_sub(1)))
}

/// Screen position of the input cursor inside `area`
pub fn cursor_position(input: &InputState, area: Rect) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }

    let rows = wrap_rows(&input.buffer, area.width);
    let row_index = cursor_row(input, &rows);
    let row_start = rows.get(row_index).map(|row| row.start).unwrap_or(0);
    let column = input.buffer[row_start..input.cursor].width();
    let row = row_index - first_visible_row(input, &rows, area.height);

    let x = area.x + u16::try_from(column).unwrap_or(u16::MAX).min(area.width - 1);
    let y = area.y + u16::try_from(row).unwrap_or(u16::MAX).min(area.height - 1);
    Some((x, y))
}
