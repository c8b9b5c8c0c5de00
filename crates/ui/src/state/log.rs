/// Kind of a wrapped log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLineKind {
    /// `TURN nnn – ...` header
    Header,
    Body,
    /// Separator between records
    Rule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub kind: LogLineKind,
    pub text: String,
}

impl LogLine {
    fn new(kind: LogLineKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }
}

/// Rendered conversation log and its scroll position
///
/// Scroll is kept as a distance from the bottom so new records stay in view.
#[derive(Debug, Clone, Default)]
pub struct LogState {
    entries: Vec<String>,
    offset_from_bottom: usize,
    viewport_width: u16,
    viewport_height: u16,
}

impl LogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entries and jump to the bottom
    pub fn set_entries(&mut self, entries: Vec<String>) {
        self.entries = entries;
        self.offset_from_bottom = 0;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries wrapped to `width` columns, records separated by a rule
    pub fn lines(&self, width: u16) -> Vec<LogLine> {
        let width = usize::from(width.max(1));
        let mut lines = Vec::new();

        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                lines.push(LogLine::new(LogLineKind::Rule, "─".repeat(width)));
            }

            let (header, body) = match entry.split_once('\n') {
                Some((header, body)) => (header, Some(body)),
                None => (entry.as_str(), None),
            };

            for part in textwrap::wrap(header, width) {
                lines.push(LogLine::new(LogLineKind::Header, part));
            }
            if let Some(body) = body {
                for raw in body.split('\n') {
                    for part in textwrap::wrap(raw, width) {
                        lines.push(LogLine::new(LogLineKind::Body, part));
                    }
                }
            }
        }

        lines
    }

    /// Record the log viewport size and keep the offset in range
    pub fn update_viewport(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.offset_from_bottom = self.offset_from_bottom.min(self.max_offset());
    }

    pub fn max_offset(&self) -> usize {
        self.lines(self.viewport_width)
            .len()
            .saturating_sub(usize::from(self.viewport_height))
    }

    /// Index of the first visible line out of `total`
    pub fn visible_top(&self, total: usize, height: u16) -> usize {
        total
            .saturating_sub(usize::from(height))
            .saturating_sub(self.offset_from_bottom)
    }

    pub fn offset_from_bottom(&self) -> usize {
        self.offset_from_bottom
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset_from_bottom == 0
    }

    /// Lines moved by PageUp/PageDown
    pub fn page_size(&self) -> usize {
        usize::from(self.viewport_height.saturating_sub(1)).max(1)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset_from_bottom = self.offset_from_bottom.saturating_add(lines).min(self.max_offset());
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset_from_bottom = self.offset_from_bottom.saturating_sub(lines);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset_from_bottom = self.max_offset();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset_from_bottom = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LogState {
        let mut log = LogState::new();
        log.set_entries(vec![
            "TURN 001 – SENT TO CHATGPT @ 10:00:00\nHello".to_string(),
            "TURN 002 – RECEIVED FROM CHATGPT @ 10:00:05\nHi there\n\nSecond paragraph".to_string(),
        ]);
        log
    }

    #[test]
    fn test_lines_kinds() {
        let lines = sample().lines(80);
        let kinds: Vec<LogLineKind> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LogLineKind::Header,
                LogLineKind::Body,
                LogLineKind::Rule,
                LogLineKind::Header,
                LogLineKind::Body,
                LogLineKind::Body,
                LogLineKind::Body,
            ]
        );
        assert_eq!(lines[0].text, "TURN 001 – SENT TO CHATGPT @ 10:00:00");
        assert_eq!(lines[2].text.chars().count(), 80);
        assert_eq!(lines[5].text, "");
    }

    #[test]
    fn test_lines_wrap_long_body() {
        let mut log = LogState::new();
        log.set_entries(vec!["TURN 001 – SENT TO X @ 10:00:00\none two three four five six".to_string()]);

        let lines = log.lines(10);
        let body: Vec<&str> = lines
            .iter()
            .filter(|l| l.kind == LogLineKind::Body)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(body, vec!["one two", "three four", "five six"]);
    }

    #[test]
    fn test_scrolling_is_clamped() {
        let mut log = sample();
        log.update_viewport(80, 3);
        assert_eq!(log.max_offset(), 4);

        log.scroll_up(2);
        assert_eq!(log.offset_from_bottom(), 2);
        assert_eq!(log.visible_top(7, 3), 2);

        log.scroll_up(100);
        assert_eq!(log.offset_from_bottom(), 4);
        assert_eq!(log.visible_top(7, 3), 0);

        log.scroll_down(1);
        assert_eq!(log.offset_from_bottom(), 3);

        log.scroll_to_bottom();
        assert!(log.is_at_bottom());

        log.scroll_to_top();
        assert_eq!(log.offset_from_bottom(), 4);
    }

    #[test]
    fn test_new_entries_jump_to_bottom() {
        let mut log = sample();
        log.update_viewport(80, 3);
        log.scroll_up(3);

        log.set_entries(vec!["TURN 001 – SENT TO X @ 10:00:00\nfresh".to_string()]);
        assert!(log.is_at_bottom());
    }

    #[test]
    fn test_page_size() {
        let mut log = LogState::new();
        assert_eq!(log.page_size(), 1);
        log.update_viewport(40, 12);
        assert_eq!(log.page_size(), 11);
    }
}
