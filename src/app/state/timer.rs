use super::constants::COOKING_DURATION_SECS;

/// Countdown shown while cooking. Never goes below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTimer {
    pub(in crate::app) remaining_secs: u32,
    pub(in crate::app) running: bool,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self {
            remaining_secs: COOKING_DURATION_SECS,
            running: false,
        }
    }
}

impl CountdownTimer {
    pub(in crate::app) fn start(&mut self) {
        self.remaining_secs = COOKING_DURATION_SECS;
        self.running = true;
    }

    /// Stop and rewind to the full duration.
    pub(in crate::app) fn stop(&mut self) {
        self.running = false;
        self.remaining_secs = COOKING_DURATION_SECS;
    }

    pub(in crate::app) fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the periodic tick should be scheduled at all.
    pub(in crate::app) fn needs_tick(&self) -> bool {
        self.running && self.remaining_secs > 0
    }

    /// Consume one tick. Returns true when the countdown just reached zero.
    pub(in crate::app) fn tick(&mut self) -> bool {
        if !self.needs_tick() {
            return false;
        }
        self.remaining_secs -= 1;
        self.remaining_secs == 0
    }

    pub(in crate::app) fn label(&self) -> String {
        format_clock(self.remaining_secs)
    }
}

/// `H:MM:SS` from one hour up, `M:SS` below.
pub(crate) fn format_clock(total_secs: u32) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
