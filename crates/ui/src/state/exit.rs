use std::time::{Duration, Instant};

/// Window in which a second Ctrl+C quits
pub const CTRL_C_WINDOW: Duration = Duration::from_millis(2000);

/// Exit detection state
#[derive(Debug, Clone, Default)]
pub struct ExitState {
    /// Consecutive Ctrl+C press count
    ctrl_c_press_count: u8,
    /// Last Ctrl+C press timestamp
    last_ctrl_c_time: Option<Instant>,
}

impl ExitState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a Ctrl+C press and return whether it should trigger exit
    pub fn record_ctrl_c_press(&mut self) -> bool {
        self.record_ctrl_c_press_at(Instant::now())
    }

    pub fn record_ctrl_c_press_at(&mut self, now: Instant) -> bool {
        if let Some(last_time) = self.last_ctrl_c_time
            && now.duration_since(last_time) > CTRL_C_WINDOW
        {
            self.ctrl_c_press_count = 0;
        }

        self.ctrl_c_press_count = self.ctrl_c_press_count.saturating_add(1);
        self.last_ctrl_c_time = Some(now);

        self.ctrl_c_press_count >= 2
    }

    pub fn reset_ctrl_c_count(&mut self) {
        self.ctrl_c_press_count = 0;
        self.last_ctrl_c_time = None;
    }
}
