//! Session ledger: the ordered history of relayed turns.
//!
//! The ledger is the only owner of turn history. It is created once at
//! startup, mutated through [`Ledger::append`] and [`Ledger::reset`], and
//! dropped at exit.

use std::fmt;

/// Sequence number of a turn within a session, starting at 1
pub type Seq = u32;

/// Whether a turn was sent to or received from a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Prompt copied out for a model
    SentTo,
    /// Response captured back from a model
    ReceivedFrom,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::SentTo => "SENT TO",
            Direction::ReceivedFrom => "RECEIVED FROM",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One logged exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub sequence: Seq,
    pub direction: Direction,
    /// Model identifier, always uppercase
    pub model: String,
    /// Wall-clock time of day
    pub timestamp: String,
    /// Prompt or response text, verbatim
    pub content: String,
}

impl TurnRecord {
    pub fn new(
        sequence: Seq, direction: Direction, model: &str, timestamp: impl Into<String>, content: impl Into<String>,
    ) -> Self {
        Self {
            sequence,
            direction,
            model: model.to_uppercase(),
            timestamp: timestamp.into(),
            content: content.into(),
        }
    }

    /// Header line: sequence, direction, model and timestamp
    pub fn header(&self) -> String {
        format!(
            "TURN {:03} – {} {} @ {}",
            self.sequence, self.direction, self.model, self.timestamp
        )
    }

    /// Two-line block: header followed by the content verbatim
    pub fn render(&self) -> String {
        format!("{}\n{}", self.header(), self.content)
    }
}

impl fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Ordered turn records plus the next sequence number
///
/// `turn_count()` always equals `len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<TurnRecord>,
    next_seq: Seq,
}

impl Ledger {
    pub fn new() -> Self {
        Self { records: Vec::new(), next_seq: 1 }
    }

    /// Append a turn stamped with the current counter, then advance the counter.
    ///
    /// Emptiness of `content` is the caller's concern.
    pub fn append(&mut self, content: &str, model: &str, direction: Direction, timestamp: &str) -> &TurnRecord {
        let record = TurnRecord::new(self.next_seq, direction, model, timestamp, content);
        self.records.push(record);
        self.next_seq += 1;

        tracing::debug!(
            sequence = self.next_seq - 1,
            direction = direction.as_str(),
            model = %model.to_uppercase(),
            "turn appended"
        );

        &self.records[self.records.len() - 1]
    }

    /// Rendered records in append order
    pub fn all_entries(&self) -> Vec<String> {
        self.records.iter().map(TurnRecord::render).collect()
    }

    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    /// Clear every record and restart numbering at 1
    pub fn reset(&mut self) {
        self.records.clear();
        self.next_seq = 1;
    }

    /// Next sequence number to be assigned
    pub fn turn_count(&self) -> Seq {
        self.next_seq
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::SentTo.to_string(), "SENT TO");
        assert_eq!(Direction::ReceivedFrom.to_string(), "RECEIVED FROM");
    }

    #[test]
    fn test_turn_record_uppercases_model() {
        let record = TurnRecord::new(1, Direction::SentTo, "chatgpt", "10:00:00", "Hello");
        assert_eq!(record.model, "CHATGPT");
    }

    #[test]
    fn test_turn_record_render() {
        let record = TurnRecord::new(7, Direction::ReceivedFrom, "Claude", "09:15:30", "line one\nline two");
        assert_eq!(record.header(), "TURN 007 – RECEIVED FROM CLAUDE @ 09:15:30");
        assert_eq!(record.render(), "TURN 007 – RECEIVED FROM CLAUDE @ 09:15:30\nline one\nline two");
        assert_eq!(record.to_string(), record.render());
    }

    #[test]
    fn test_turn_record_wide_sequence() {
        let record = TurnRecord::new(1234, Direction::SentTo, "gemini", "23:59:59", "x");
        assert!(record.header().starts_with("TURN 1234 –"));
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.turn_count(), 1);
        assert!(ledger.all_entries().is_empty());
    }

    #[test]
    fn test_append_two_turns() {
        let mut ledger = Ledger::new();
        ledger.append("Hello", "chatgpt", Direction::SentTo, "10:00:00");
        ledger.append("Hi there", "chatgpt", Direction::ReceivedFrom, "10:00:05");

        let entries = ledger.all_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], "TURN 001 – SENT TO CHATGPT @ 10:00:00\nHello");
        assert_eq!(entries[1], "TURN 002 – RECEIVED FROM CHATGPT @ 10:00:05\nHi there");
        assert_eq!(ledger.turn_count(), 3);
    }

    #[test]
    fn test_turn_count_tracks_len() {
        let mut ledger = Ledger::new();
        for n in 0..25 {
            assert_eq!(ledger.turn_count() as usize, n + 1);
            assert_eq!(ledger.all_entries().len(), n);
            ledger.append("text", "claude", Direction::SentTo, "12:00:00");
        }
        assert_eq!(ledger.turn_count(), 26);
    }

    #[test]
    fn test_sequences_are_contiguous() {
        let mut ledger = Ledger::new();
        for _ in 0..5 {
            ledger.append("x", "gemini", Direction::ReceivedFrom, "08:00:00");
        }
        let sequences: Vec<Seq> = ledger.records().iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reset_restarts_numbering() {
        let mut ledger = Ledger::new();
        ledger.append("a", "chatgpt", Direction::SentTo, "10:00:00");
        ledger.append("b", "chatgpt", Direction::SentTo, "10:00:01");

        ledger.reset();
        assert_eq!(ledger.turn_count(), 1);
        assert!(ledger.all_entries().is_empty());

        let record = ledger.append("c", "claude", Direction::SentTo, "10:00:02");
        assert_eq!(record.sequence, 1);
    }

    #[test]
    fn test_reset_on_empty_ledger() {
        let mut ledger = Ledger::new();
        ledger.reset();
        assert_eq!(ledger, Ledger::default());
    }

    #[test]
    fn test_append_does_not_validate_content() {
        let mut ledger = Ledger::new();
        ledger.append("", "chatgpt", Direction::SentTo, "10:00:00");
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.all_entries()[0], "TURN 001 – SENT TO CHATGPT @ 10:00:00\n");
    }

    #[test]
    fn test_all_entries_is_a_snapshot() {
        let mut ledger = Ledger::new();
        ledger.append("first", "chatgpt", Direction::SentTo, "10:00:00");
        let snapshot = ledger.all_entries();

        ledger.append("second", "chatgpt", Direction::SentTo, "10:00:01");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(ledger.all_entries().len(), 2);
    }
}
