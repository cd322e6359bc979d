//! Time management utilities
//!
//! Two clocks live here: [`Timer`] measures real frame times for diagnostics,
//! while [`Clock`] produces the integer [`ClockTime`] that drives the update loop.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Logical ticks per second of the update clock
pub const TICKS_PER_SECOND: u32 = 60;

/// Integer number of logical frames since the clock started
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(pub u32);

impl ClockTime {
    /// Convert an elapsed duration into whole ticks
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let ticks = elapsed.as_millis() * u128::from(TICKS_PER_SECOND) / 1000;
        Self(u32::try_from(ticks).unwrap_or(u32::MAX))
    }

    /// The tick immediately after this one
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Number of ticks from `self` up to `later` (zero if `later` is not ahead)
    pub fn ticks_until(self, later: Self) -> u32 {
        later.0.saturating_sub(self.0)
    }
}

/// Monotonic logical clock
pub struct Clock {
    start: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// Start a clock at tick zero
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    /// Current logical time
    pub fn now(&self) -> ClockTime {
        ClockTime::from_elapsed(self.start.elapsed())
    }
}

/// Whole seconds since the Unix epoch
///
/// Returns zero if the system clock is set before 1970.
pub fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// High-precision timer for frame timing
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_from_elapsed() {
        assert_eq!(ClockTime::from_elapsed(Duration::ZERO), ClockTime(0));
        assert_eq!(ClockTime::from_elapsed(Duration::from_secs(1)), ClockTime(60));
        assert_eq!(ClockTime::from_elapsed(Duration::from_millis(1500)), ClockTime(90));
        // Partial ticks are truncated
        assert_eq!(ClockTime::from_elapsed(Duration::from_millis(16)), ClockTime(0));
        assert_eq!(ClockTime::from_elapsed(Duration::from_millis(17)), ClockTime(1));
    }

    #[test]
    fn test_ticks_until() {
        assert_eq!(ClockTime(3).ticks_until(ClockTime(10)), 7);
        assert_eq!(ClockTime(10).ticks_until(ClockTime(3)), 0);
        assert_eq!(ClockTime(5).next(), ClockTime(6));
        assert_eq!(ClockTime(u32::MAX).next(), ClockTime(u32::MAX));
    }

    #[test]
    fn test_clock_is_monotonic() {
        let clock = Clock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_timer_counts_frames() {
        let mut timer = Timer::new();
        assert_eq!(timer.average_fps(), 0.0);
        timer.update();
        timer.update();
        assert_eq!(timer.frame_count(), 2);
        assert!(timer.delta_time() >= 0.0);
    }
}
