//! Scheduled service-meter ticking
//!
//! The simulated SMU increment runs on a fixed wall-clock interval for the
//! lifetime of a dashboard session. The ticker is owned by the session and
//! polled from its event loop; nothing here spawns a timer, so tests can
//! drive the schedule with explicit instants or fast-forward it directly.

use crate::surface::{apply_tick, DisplaySurface};
use tokio::time::{Duration, Instant};
use tracing::debug;

/// Default interval between simulated meter increments.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(5);

/// Periodic tick task for the SMU displays of one session.
#[derive(Debug)]
pub struct MeterTicker {
    interval: Duration,
    last_tick: Instant,
    paused: bool,
    ticks_applied: u64,
}

impl MeterTicker {
    /// Create a ticker whose schedule starts now.
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    /// Create a ticker with an explicit schedule origin.
    pub fn starting_at(interval: Duration, origin: Instant) -> Self {
        let interval = if interval.is_zero() {
            DEFAULT_TICK_INTERVAL
        } else {
            interval
        };
        Self {
            interval,
            last_tick: origin,
            paused: false,
            ticks_applied: 0,
        }
    }

    /// Apply every tick that has come due by `now`.
    ///
    /// A slow frame that swallows several intervals catches up in one call,
    /// so N elapsed intervals always produce exactly N increments. While
    /// paused the schedule is pinned to `now` and nothing accumulates.
    /// Returns the number of ticks applied.
    pub fn poll(&mut self, now: Instant, surface: &mut dyn DisplaySurface) -> u32 {
        if self.paused {
            self.last_tick = now;
            return 0;
        }

        let elapsed = now.saturating_duration_since(self.last_tick);
        let due = (elapsed.as_millis() / self.interval.as_millis()) as u32;
        if due == 0 {
            return 0;
        }

        let updated = apply_tick(surface, due);
        self.last_tick += self.interval * due;
        self.ticks_applied += u64::from(due);
        debug!("Meter tick x{} applied to {} displays", due, updated);
        due
    }

    /// Fast-forward the simulation by `ticks` intervals without waiting.
    pub fn advance_by(&mut self, ticks: u32, surface: &mut dyn DisplaySurface) -> usize {
        let updated = apply_tick(surface, ticks);
        self.ticks_applied += u64::from(ticks);
        updated
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Total ticks applied over the session, for the status bar.
    pub fn ticks_applied(&self) -> u64 {
        self.ticks_applied
    }
}

impl Default for MeterTicker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CounterHandle;

    struct OneCell(String);

    impl DisplaySurface for OneCell {
        fn counter_handles(&self) -> Vec<CounterHandle> {
            vec![CounterHandle::new(0)]
        }

        fn value(&self, _handle: CounterHandle) -> Option<String> {
            Some(self.0.clone())
        }

        fn set_value(&mut self, _handle: CounterHandle, value: String) -> bool {
            self.0 = value;
            true
        }
    }

    #[test]
    fn test_nothing_due_before_interval() {
        let origin = Instant::now();
        let mut ticker = MeterTicker::starting_at(Duration::from_secs(5), origin);
        let mut surface = OneCell("120.00".into());

        assert_eq!(ticker.poll(origin + Duration::from_secs(4), &mut surface), 0);
        assert_eq!(surface.0, "120.00");
    }

    #[test]
    fn test_single_interval_ticks_once() {
        let origin = Instant::now();
        let mut ticker = MeterTicker::starting_at(Duration::from_secs(5), origin);
        let mut surface = OneCell("120.00".into());

        assert_eq!(ticker.poll(origin + Duration::from_secs(5), &mut surface), 1);
        assert_eq!(surface.0, "120.01");
    }

    #[test]
    fn test_slow_frame_catches_up() {
        let origin = Instant::now();
        let mut ticker = MeterTicker::starting_at(Duration::from_secs(5), origin);
        let mut surface = OneCell("120.00".into());

        assert_eq!(ticker.poll(origin + Duration::from_secs(16), &mut surface), 3);
        assert_eq!(surface.0, "120.03");
        assert_eq!(ticker.ticks_applied(), 3);
    }

    #[test]
    fn test_pause_pins_the_schedule() {
        let origin = Instant::now();
        let mut ticker = MeterTicker::starting_at(Duration::from_secs(5), origin);
        let mut surface = OneCell("120.00".into());

        ticker.set_paused(true);
        assert_eq!(ticker.poll(origin + Duration::from_secs(30), &mut surface), 0);

        ticker.set_paused(false);
        // Time spent paused must not replay as a burst of ticks.
        assert_eq!(ticker.poll(origin + Duration::from_secs(31), &mut surface), 0);
        assert_eq!(ticker.poll(origin + Duration::from_secs(35), &mut surface), 1);
        assert_eq!(surface.0, "120.01");
    }

    #[test]
    fn test_advance_by_fast_forwards() {
        let mut ticker = MeterTicker::default();
        let mut surface = OneCell("4250.00".into());

        assert_eq!(ticker.advance_by(10, &mut surface), 1);
        assert_eq!(surface.0, "4250.10");
        assert_eq!(ticker.ticks_applied(), 10);
    }

    #[test]
    fn test_zero_interval_falls_back_to_default() {
        let ticker = MeterTicker::new(Duration::ZERO);
        assert_eq!(ticker.interval(), DEFAULT_TICK_INTERVAL);
    }
}
