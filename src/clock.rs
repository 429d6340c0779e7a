use std::thread;
use std::time::{Duration, Instant};

pub trait Pacer {
    /// Blocks until the next tick boundary.
    fn wait_next_tick(&mut self);
}

/// Paces the loop at a constant number of ticks per second.
pub struct FixedRate {
    period: Duration,
    deadline: Instant,
}

impl FixedRate {
    pub fn new(period: Duration) -> Self {
        FixedRate {
            period,
            deadline: Instant::now() + period,
        }
    }

    // Returns how long to sleep from `now` and moves the deadline on. A loop
    // that fell behind restarts from `now` rather than bursting ticks.
    fn schedule(&mut self, now: Instant) -> Duration {
        let wait = self.deadline.saturating_duration_since(now);
        if wait.is_zero() {
            self.deadline = now + self.period;
        } else {
            self.deadline += self.period;
        }
        wait
    }
}

impl Pacer for FixedRate {
    fn wait_next_tick(&mut self) {
        let wait = self.schedule(Instant::now());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
    }
}
