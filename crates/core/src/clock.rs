use chrono::{DateTime, Local, NaiveDateTime};

/// Source of wall-clock stamps
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// Time of day stamped on each turn (`%H:%M:%S`)
    fn time_of_day(&self) -> String {
        self.now().format("%H:%M:%S").to_string()
    }
}

/// Local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now: DateTime<Local> = Local::now();
        now.naive_local()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Parse `%Y-%m-%d %H:%M:%S`
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok().map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_time_of_day() {
        let clock = FixedClock::parse("2026-10-18 09:05:07").unwrap();
        assert_eq!(clock.time_of_day(), "09:05:07");
    }

    #[test]
    fn test_fixed_clock_parse_invalid() {
        assert!(FixedClock::parse("yesterday").is_none());
    }

    #[test]
    fn test_system_clock_time_of_day_shape() {
        let stamp = SystemClock.time_of_day();
        assert_eq!(stamp.len(), 8);
        assert_eq!(stamp.matches(':').count(), 2);
    }
}
