use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of elapsed time for a budgeted run.
pub trait Clock {
    /// Time elapsed since the clock was started.
    fn elapsed(&self) -> Duration;
}

/// Wall clock, started at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Simulated clock that moves forward by a fixed tick on every read.
///
/// The first read reports zero, so a loop that checks the clock once per
/// iteration runs exactly `budget / tick` times (rounded up).
#[derive(Debug)]
pub struct TickClock {
    tick: Duration,
    reads: Cell<u32>,
}

impl TickClock {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            reads: Cell::new(0),
        }
    }

    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl Clock for TickClock {
    fn elapsed(&self) -> Duration {
        let n = self.reads.get();
        self.reads.set(n.saturating_add(1));
        self.tick * n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_clock_advances_per_read() {
        let clock = TickClock::new(Duration::from_millis(10));
        assert_eq!(clock.elapsed(), Duration::ZERO);
        assert_eq!(clock.elapsed(), Duration::from_millis(10));
        assert_eq!(clock.elapsed(), Duration::from_millis(20));
        assert_eq!(clock.reads(), 3);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::start();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }
}
