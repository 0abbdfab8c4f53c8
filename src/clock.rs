//! Frame clock
//!
//! Turns wall-clock sampling into the `dt` fed to [`crate::sim::tick`].
//! Measured deltas are clamped to `max_dt`: after a stall the scene takes one
//! ordinary-sized step.

use std::time::{Duration, Instant};

/// Monotonic time since some fixed origin
pub trait TimeSource {
    fn now(&self) -> Duration;
}

/// [`TimeSource`] backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTime {
    start: Instant,
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Samples a time source once per frame
#[derive(Debug)]
pub struct Clock<S: TimeSource = MonotonicTime> {
    source: S,
    last: Duration,
    max_dt: f32,
    frames: u64,
}

impl Clock<MonotonicTime> {
    pub fn new(max_dt: f32) -> Self {
        Self::with_source(MonotonicTime::default(), max_dt)
    }
}

impl<S: TimeSource> Clock<S> {
    pub fn with_source(source: S, max_dt: f32) -> Self {
        let last = source.now();
        Self {
            source,
            last,
            max_dt,
            frames: 0,
        }
    }

    /// Seconds since the previous tick, clamped to `[0, max_dt]`
    pub fn tick(&mut self) -> f32 {
        let now = self.source.now();
        let raw = now.saturating_sub(self.last).as_secs_f32();
        self.last = now;
        self.frames += 1;

        if raw > self.max_dt {
            log::debug!("Frame took {raw:.3}s, clamping to {:.3}s", self.max_dt);
        }
        raw.min(self.max_dt)
    }

    /// Ticks taken so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Manually advanced time for tests
    #[derive(Clone, Default)]
    struct ManualTime(Rc<Cell<Duration>>);

    impl ManualTime {
        fn advance(&self, secs: f32) {
            self.0.set(self.0.get() + Duration::from_secs_f32(secs));
        }
    }

    impl TimeSource for ManualTime {
        fn now(&self) -> Duration {
            self.0.get()
        }
    }

    #[test]
    fn test_measures_elapsed() {
        let time = ManualTime::default();
        let mut clock = Clock::with_source(time.clone(), 0.1);

        time.advance(0.016);
        assert!((clock.tick() - 0.016).abs() < 1e-6);
        time.advance(0.02);
        assert!((clock.tick() - 0.02).abs() < 1e-6);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn test_no_time_passed() {
        let time = ManualTime::default();
        let mut clock = Clock::with_source(time, 0.1);
        assert_eq!(clock.tick(), 0.0);
    }

    #[test]
    fn test_clamps_stalls() {
        let time = ManualTime::default();
        let mut clock = Clock::with_source(time.clone(), 0.1);
        time.advance(2.5);
        assert_eq!(clock.tick(), 0.1);
        // The stall is consumed, not carried over
        time.advance(0.016);
        assert!((clock.tick() - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic_clock_is_non_negative() {
        let mut clock = Clock::new(0.1);
        let dt = clock.tick();
        assert!((0.0..=0.1).contains(&dt));
    }
}
