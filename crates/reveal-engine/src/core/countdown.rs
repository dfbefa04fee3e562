/// Client-side countdown.
///
/// `running` and `revealed` are never both true. Once `revealed` is set the
/// countdown refuses to start again; only `reset` (restart) clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownState {
    seconds_remaining: u32,
    running: bool,
    revealed: bool,
    /// Set by the first tick; a fresh or reset timer is never urgent.
    ticked: bool,
}

impl CountdownState {
    pub fn new(seconds: u32) -> Self {
        Self {
            seconds_remaining: seconds,
            running: false,
            revealed: false,
            ticked: false,
        }
    }

    /// Begin counting. Returns false (and does nothing) when already running
    /// or revealed.
    pub fn start(&mut self) -> bool {
        if self.running || self.revealed {
            return false;
        }
        self.running = true;
        true
    }

    /// Decrement by one second. Returns true exactly when this tick made the
    /// countdown expire; the countdown stops itself at that point.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.ticked = true;
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.running = false;
            return true;
        }
        false
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Mark the results as revealed. Stops the countdown.
    pub fn reveal(&mut self) {
        self.running = false;
        self.revealed = true;
    }

    /// Back to a fresh, stopped countdown.
    pub fn reset(&mut self, seconds: u32) {
        *self = Self::new(seconds);
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// `MM:SS`, zero padded. Minutes are not capped at 59.
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.seconds_remaining / 60,
            self.seconds_remaining % 60
        )
    }

    /// Low-time styling applies at `1..=threshold` seconds, from the first
    /// tick on.
    pub fn is_urgent(&self, threshold_secs: u32) -> bool {
        self.ticked && self.seconds_remaining > 0 && self.seconds_remaining <= threshold_secs
    }
}
