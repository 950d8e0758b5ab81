//! Wall-clock delta timing and frame pacing.

use std::thread;
use std::time::{Duration, Instant};

/// How [`Timer::sleep_to_fps`] spends the remaining frame budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PacingMode {
    /// A single coarse sleep for the whole budget.
    #[default]
    Simple,
    /// Sleep for all but the last millisecond, then busy-wait the rest for
    /// tighter accuracy.
    Precise,
}

pub struct Timer {
    mode: PacingMode,
    start: Instant,
    prev: Instant,
    current: Instant,
    delta: f32,
}

impl Timer {
    pub fn new(mode: PacingMode) -> Self {
        let now = Instant::now();
        Self {
            mode,
            start: now,
            prev: now,
            current: now,
            delta: 0.0,
        }
    }

    /// Reinitializes all timestamps to now and zeroes the delta.
    pub fn start(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.prev = now;
        self.current = now;
        self.delta = 0.0;
    }

    pub fn reset(&mut self) {
        self.start();
    }

    /// Records the time since the previous tick as the current delta and
    /// advances the previous-tick timestamp.
    pub fn tick(&mut self) {
        self.current = Instant::now();
        self.delta = (self.current - self.prev).as_secs_f32();
        self.prev = self.current;
    }

    /// Seconds between the two most recent ticks.
    pub fn delta_time(&self) -> f32 {
        self.delta
    }

    /// Seconds from start to the most recent tick.
    pub fn total_time(&self) -> f32 {
        (self.current - self.start).as_secs_f32()
    }

    /// Blocks the calling thread for the given duration.
    pub fn delay(&self, duration: Duration) {
        thread::sleep(duration);
    }

    /// Waits out the rest of the frame so one iteration takes about
    /// `1 / target_fps` seconds.
    ///
    /// Returns immediately when the last delta already exceeded the budget;
    /// over-budget frames are not corrected or accumulated.
    pub fn sleep_to_fps(&self, target_fps: f32) {
        let budget = 1.0 / target_fps - self.delta;
        if budget <= 0.0 {
            return;
        }

        match self.mode {
            PacingMode::Simple => thread::sleep(Duration::from_secs_f32(budget)),
            PacingMode::Precise => {
                let begin = Instant::now();
                if budget > 0.002 {
                    thread::sleep(Duration::from_secs_f32(budget - 0.001));
                }
                while begin.elapsed().as_secs_f32() < budget {
                    std::hint::spin_loop();
                }
            }
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(PacingMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_measures_elapsed_time() {
        let mut timer = Timer::new(PacingMode::Simple);
        timer.delay(Duration::from_millis(20));
        timer.tick();
        // Sleep guarantees a lower bound; allow generous slack above it.
        assert!(timer.delta_time() >= 0.019);
        assert!(timer.delta_time() < 0.5);
    }

    #[test]
    fn total_time_runs_to_the_last_tick() {
        let mut timer = Timer::new(PacingMode::Simple);
        timer.delay(Duration::from_millis(10));
        timer.tick();
        let total = timer.total_time();
        assert!(total >= 0.009);
        // Measured against the last tick, not against "now".
        timer.delay(Duration::from_millis(10));
        assert_eq!(timer.total_time(), total);
    }

    #[test]
    fn reset_zeroes_the_delta() {
        let mut timer = Timer::new(PacingMode::Precise);
        timer.delay(Duration::from_millis(5));
        timer.tick();
        assert!(timer.delta_time() > 0.0);
        timer.reset();
        assert_eq!(timer.delta_time(), 0.0);
        assert_eq!(timer.total_time(), 0.0);
    }

    #[test]
    fn over_budget_frames_return_immediately() {
        let mut timer = Timer::new(PacingMode::Simple);
        timer.delay(Duration::from_millis(30));
        timer.tick();
        // Budget for 60 FPS is ~16 ms, already spent.
        let before = Instant::now();
        timer.sleep_to_fps(60.0);
        assert!(before.elapsed() < Duration::from_millis(10));
    }

    #[test]
    fn precise_pacing_waits_out_the_budget() {
        let mut timer = Timer::new(PacingMode::Precise);
        timer.tick();
        let before = Instant::now();
        timer.sleep_to_fps(100.0);
        assert!(before.elapsed() >= Duration::from_millis(9));
    }
}
