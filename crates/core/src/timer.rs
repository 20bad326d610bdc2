//! Gravity timer.
//!
//! The fall interval keeps counting down across key presses: a key only uses up
//! part of the current interval, and a new interval starts once the piece has
//! fallen.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallTimer {
    interval: Duration,
    remaining: Duration,
}

impl FallTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            remaining: interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left before the piece falls.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// The interval has run out and the piece should fall now.
    pub fn is_due(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Account for time spent drawing and waiting on input.
    pub fn consume(&mut self, elapsed: Duration) {
        self.remaining = self.remaining.saturating_sub(elapsed);
    }

    /// The piece fell; start a new interval.
    pub fn expire(&mut self) {
        self.remaining = self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_wait_is_a_full_interval() {
        let timer = FallTimer::new(Duration::from_millis(500));
        assert_eq!(timer.remaining(), Duration::from_millis(500));
        assert!(!timer.is_due());
    }

    #[test]
    fn key_presses_do_not_restart_the_interval() {
        let mut timer = FallTimer::new(Duration::from_millis(500));
        timer.consume(Duration::from_millis(120));
        assert_eq!(timer.remaining(), Duration::from_millis(380));
        timer.consume(Duration::from_millis(80));
        assert_eq!(timer.remaining(), Duration::from_millis(300));
    }

    #[test]
    fn expiry_starts_a_new_interval() {
        let mut timer = FallTimer::new(Duration::from_millis(500));
        timer.consume(Duration::from_millis(200));
        timer.expire();
        assert_eq!(timer.remaining(), Duration::from_millis(500));
    }

    #[test]
    fn key_at_the_deadline_leaves_the_fall_due() {
        let mut timer = FallTimer::new(Duration::from_millis(100));
        timer.consume(Duration::from_millis(100));
        assert!(timer.is_due());
        assert_eq!(timer.remaining(), Duration::ZERO);

        timer.consume(Duration::from_millis(250));
        assert!(timer.is_due());
        timer.expire();
        assert_eq!(timer.remaining(), Duration::from_millis(100));
    }
}
