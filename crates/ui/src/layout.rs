use std::rc::Rc;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the prompt composer, borders included
pub const COMPOSER_HEIGHT: u16 = 5;

/// Layout breakpoints for responsive TUI
///
/// - >= 100 cols: full labels on buttons and hints
/// - 80-99 cols: shortened hints
/// - < 80 cols: compact buttons (key + short name)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Full,
    Medium,
    Compact,
}

impl From<u16> for LayoutMode {
    fn from(width: u16) -> Self {
        match width {
            w if w >= 100 => Self::Full,
            w if w >= 80 => Self::Medium,
            _ => Self::Compact,
        }
    }
}

impl LayoutMode {
    pub fn is_compact(&self) -> bool {
        matches!(self, Self::Compact)
    }
}

/// Calculated layout for the TUI, top to bottom
#[derive(Debug, Clone)]
pub struct TuiLayout {
    pub mode: LayoutMode,
    /// Title, turn counter and capture target (1 line)
    pub header: Rect,
    /// Conversation log
    pub log: Rect,
    /// Prompt composer
    pub composer: Rect,
    /// Model button row (1 line)
    pub buttons: Rect,
    /// Status message (1 line)
    pub status: Rect,
    /// Key hints (1 line)
    pub hints: Rect,
}

impl TuiLayout {
    pub fn calculate(area: Rect) -> Self {
        let mode = LayoutMode::from(area.width);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(COMPOSER_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            mode,
            header: chunks[0],
            log: chunks[1],
            composer: chunks[2],
            buttons: chunks[3],
            status: chunks[4],
            hints: chunks[5],
        }
    }

    /// Text area inside the bordered log block
    pub fn log_inner(&self) -> Rect {
        inner(self.log)
    }
}

/// Area inside a one-cell border
pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Popup of at most `width` x `height` centered in `area`
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

enum HeaderSize {
    Wide,
    Narrow,
}

impl From<u16> for HeaderSize {
    fn from(width: u16) -> Self {
        if width >= 60 { Self::Wide } else { Self::Narrow }
    }
}

/// Header cells: title, turn counter, capture target, theme
#[derive(Default)]
pub struct HeaderSections {
    pub title: Rect,
    pub turns: Rect,
    pub capture: Rect,
    pub theme: Rect,
}

impl HeaderSections {
    fn layout(area: Rect) -> Rc<[Rect]> {
        let constraints = match HeaderSize::from(area.width) {
            HeaderSize::Wide => vec![
                Constraint::Length(17),
                Constraint::Length(12),
                Constraint::Min(0),
                Constraint::Length(8),
            ],
            HeaderSize::Narrow => vec![Constraint::Length(12), Constraint::Min(0)],
        };

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area)
    }

    pub fn new(area: Rect) -> Self {
        let chunks = Self::layout(area);
        match HeaderSize::from(area.width) {
            HeaderSize::Wide => Self { title: chunks[0], turns: chunks[1], capture: chunks[2], theme: chunks[3] },
            HeaderSize::Narrow => Self { turns: chunks[0], capture: chunks[1], ..Self::default() },
        }
    }
}
