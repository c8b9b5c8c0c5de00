use crate::{
    layout::LayoutMode,
    state::{AppState, StatusTone},
    theme::{Theme, ThemePalette},
};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Result of the last intent
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let theme = Theme::palette(self.state.theme_variant());
        let status = &self.state.status;
        let line = Line::from(Span::styled(format!(" {}", status.text), tone_style(status.tone, theme)));
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn tone_style(tone: StatusTone, theme: ThemePalette) -> Style {
    match tone {
        StatusTone::Info => Style::default().fg(theme.fg),
        StatusTone::Success => Style::default().fg(theme.green),
        StatusTone::Warning => Style::default().fg(theme.yellow),
        StatusTone::Error => Style::default().fg(theme.red),
    }
}

/// Keyboard shortcuts, right-aligned
pub struct KeyHints<'a> {
    state: &'a AppState,
}

impl<'a> KeyHints<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn hints(mode: LayoutMode) -> &'static [(&'static str, &'static str)] {
        match mode {
            LayoutMode::Full => &[
                ("[Enter]", " send  "),
                ("[F9]", " capture  "),
                ("[^A]", " all  "),
                ("[Tab]", " model  "),
                ("[^R]", " reset  "),
                ("[^E]", " export  "),
                ("[^L]", " clear  "),
                ("[Esc]", " quit"),
            ],
            LayoutMode::Medium => &[
                ("[Enter]", " send  "),
                ("[F9]", " capture  "),
                ("[^A]", " all  "),
                ("[^R]", " reset  "),
                ("[^E]", " export  "),
                ("[Esc]", " quit"),
            ],
            LayoutMode::Compact => &[("[Enter]", " send  "), ("[F9]", " capture  "), ("[Esc]", " quit")],
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let theme = Theme::palette(self.state.theme_variant());
        let spans: Vec<Span<'_>> = Self::hints(LayoutMode::from(area.width))
            .iter()
            .flat_map(|(key, label)| {
                [Span::styled(*key, Style::default().fg(theme.accent)), Span::styled(*label, Theme::muted(theme))]
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Right), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn row(terminal: &Terminal<TestBackend>, width: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..width).map(|x| buffer[(x, 0u16)].symbol()).collect()
    }

    #[test]
    fn test_status_bar_colors_by_tone() {
        let mut state = AppState::default();
        state.set_status("⚠ Clipboard is empty");

        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|frame| StatusBar::new(&state).render(frame, frame.area()))
            .unwrap();

        assert!(row(&terminal, 40).contains("Clipboard is empty"));
        let theme = Theme::palette(state.theme_variant());
        assert_eq!(terminal.backend().buffer()[(1u16, 0u16)].fg, theme.yellow);
    }

    #[test]
    fn test_hints_shrink_with_width() {
        assert_eq!(KeyHints::hints(LayoutMode::Full).len(), 8);
        assert_eq!(KeyHints::hints(LayoutMode::Medium).len(), 6);
        assert_eq!(KeyHints::hints(LayoutMode::Compact).len(), 3);
    }

    #[test]
    fn test_hints_render_right_aligned() {
        let state = AppState::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal
            .draw(|frame| KeyHints::new(&state).render(frame, frame.area()))
            .unwrap();

        let line = row(&terminal, 60);
        assert!(line.trim_end().ends_with("[Esc] quit"));
        assert!(line.starts_with(' '));
    }
}
