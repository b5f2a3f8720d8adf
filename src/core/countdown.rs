//! Per-second countdown driven by explicit ticks
//!
//! Ticks arrive on the same control flow as player input. Once stopped
//! (answer shown, game left) further ticks are no-ops.

use serde::{Deserialize, Serialize};

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tick {
    /// Still running with this many seconds left
    Running(u32),
    /// Reached zero on this tick
    Expired,
    /// Countdown was not running; nothing changed
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    limit_secs: u32,
    remaining: u32,
    running: bool,
}

impl Countdown {
    /// New countdown, already running
    pub fn new(limit_secs: u32) -> Self {
        Self {
            limit_secs,
            remaining: limit_secs,
            running: limit_secs > 0,
        }
    }

    /// New countdown that waits for [`Countdown::start`]
    pub fn paused(limit_secs: u32) -> Self {
        Self {
            running: false,
            ..Self::new(limit_secs)
        }
    }

    /// Start a paused countdown. False when already running or spent.
    pub fn start(&mut self) -> bool {
        if self.running || self.remaining == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Freeze at the current value
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Stale;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            Tick::Expired
        } else {
            Tick::Running(self.remaining)
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn limit(&self) -> u32 {
        self.limit_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_expiry() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.tick(), Tick::Running(2));
        assert_eq!(countdown.tick(), Tick::Running(1));
        assert_eq!(countdown.tick(), Tick::Expired);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_ticks_after_expiry_are_stale() {
        let mut countdown = Countdown::new(1);
        assert_eq!(countdown.tick(), Tick::Expired);
        assert_eq!(countdown.tick(), Tick::Stale);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_stopped_countdown_keeps_value() {
        let mut countdown = Countdown::new(15);
        countdown.tick();
        countdown.stop();
        assert_eq!(countdown.tick(), Tick::Stale);
        assert_eq!(countdown.remaining(), 14);
    }

    #[test]
    fn test_paused_countdown_waits_for_start() {
        let mut countdown = Countdown::paused(180);
        assert!(!countdown.is_running());
        assert_eq!(countdown.tick(), Tick::Stale);
        assert_eq!(countdown.remaining(), 180);

        assert!(countdown.start());
        assert!(!countdown.start());
        assert_eq!(countdown.tick(), Tick::Running(179));
    }

    #[test]
    fn test_spent_countdown_cannot_start() {
        let mut countdown = Countdown::new(1);
        countdown.tick();
        assert!(!countdown.start());
        assert_eq!(countdown.tick(), Tick::Stale);
    }
}
