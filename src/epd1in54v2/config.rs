//! Timing configuration for the panel protocol

/// Timing knobs that vary between panel revisions.
///
/// The defaults reproduce the vendor driver: two busy-pin samples with a single
/// 10 ms back-off, and a 200/10/200 ms reset pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How many times the busy pin is sampled in one wait before giving up
    pub busy_poll_limit: u32,
    /// Delay between two busy-pin samples
    pub busy_poll_interval_ms: u32,
    /// Time the reset line is held high before and after the pulse
    pub reset_settle_ms: u32,
    /// Length of the low reset pulse
    pub reset_pulse_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            busy_poll_limit: 2,
            busy_poll_interval_ms: 10,
            reset_settle_ms: 200,
            reset_pulse_ms: 10,
        }
    }
}

impl Config {
    /// Set the number of busy-pin samples per wait. Zero is treated as one.
    pub fn with_busy_poll_limit(mut self, limit: u32) -> Self {
        self.busy_poll_limit = limit.max(1);
        self
    }

    /// Set the delay between busy-pin samples
    pub fn with_busy_poll_interval_ms(mut self, interval_ms: u32) -> Self {
        self.busy_poll_interval_ms = interval_ms;
        self
    }

    /// Set the reset pulse timing
    pub fn with_reset_timing(mut self, settle_ms: u32, pulse_ms: u32) -> Self {
        self.reset_settle_ms = settle_ms;
        self.reset_pulse_ms = pulse_ms;
        self
    }
}
