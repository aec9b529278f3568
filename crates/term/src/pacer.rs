//! Frame pacing: the terminal stand-in for a display sync pulse.

use std::time::{Duration, Instant};

/// Paces the loop to one frame per tick interval. `wait_for_sync` is the
/// single blocking point of the whole program.
pub struct FramePacer {
    tick: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            next: Instant::now() + tick,
        }
    }

    /// Time left until the next frame boundary (zero if already past).
    pub fn remaining(&self) -> Duration {
        self.next.saturating_duration_since(Instant::now())
    }

    /// Block until the frame boundary, then arm the next one.
    pub fn wait_for_sync(&mut self) {
        let now = Instant::now();
        if let Some(wait) = self.next.checked_duration_since(now) {
            std::thread::sleep(wait);
        }
        self.next += self.tick;
        // After a long stall, skip ahead rather than bursting frames.
        let now = Instant::now();
        if self.next < now {
            self.next = now + self.tick;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_never_exceeds_tick() {
        let pacer = FramePacer::new(Duration::from_millis(16));
        assert!(pacer.remaining() <= Duration::from_millis(16));
    }

    #[test]
    fn test_wait_advances_the_boundary() {
        let mut pacer = FramePacer::new(Duration::from_millis(1));
        pacer.wait_for_sync();
        // The next boundary is rearmed in the future.
        assert!(pacer.remaining() > Duration::ZERO || pacer.next <= Instant::now() + pacer.tick);
    }
}
