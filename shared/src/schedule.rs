use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate tick deadlines.
///
/// Wake-up latency of up to one interval is absorbed so the average rate holds.
/// Longer stalls push the schedule forward instead of queueing catch-up ticks.
#[derive(Debug, Clone, Copy)]
pub struct TickSchedule {
    interval: Duration,
    last: Instant,
}

impl TickSchedule {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, last: now }
    }

    /// Deadline of the upcoming tick, for hosts that block until it.
    pub fn next_deadline(&mut self, now: Instant) -> Instant {
        let deadline = self.last + self.interval;
        self.last = deadline.max(now);
        deadline
    }

    /// Whether a tick is due, for hosts driven by redraw callbacks.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        let deadline = self.last + self.interval;
        if now < deadline {
            return false;
        }
        let floor = now.checked_sub(self.interval).unwrap_or(now);
        self.last = deadline.max(floor);
        true
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        (self.last + self.interval).saturating_duration_since(now)
    }
}

/// Clock plus wait, swappable so tests never sleep.
pub trait Pacer {
    fn now(&self) -> Instant;
    fn wait_until(&mut self, deadline: Instant);
}

/// Sleeps the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wait_until(&mut self, deadline: Instant) {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
    }
}
