use web_time::{Duration, Instant};

/// Frame timing: per-frame delta, smoothed FPS and optional frame limiting.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Seconds between the two most recent ticks
    delta: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    /// Create a timer whose first frame is measured from `start`.
    #[must_use]
    pub fn starting_at(target_fps: u32, start: Instant) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: start,
            delta: 0.0,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
        }
    }

    /// Returns true if enough time has passed since the last tick to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Mark the start of a frame now. Returns seconds since the previous
    /// tick, the `delta_time` for frame-rate-independent movement.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Mark the start of a frame at `now`.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.delta = elapsed.as_secs_f32();

        if self.delta > 0.0 {
            let instant_fps = 1.0 / self.delta;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        self.delta
    }

    /// Seconds between the two most recent ticks.
    #[must_use]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Average milliseconds per frame, derived from the smoothed FPS.
    #[must_use]
    pub fn frame_time_ms(&self) -> f32 {
        1000.0 / self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_elapsed_seconds() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(0, start);
        let dt = timing.tick_at(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
        assert_eq!(timing.delta(), dt);

        let dt = timing.tick_at(start + Duration::from_millis(48));
        assert!((dt - 0.032).abs() < 1e-6);
    }

    #[test]
    fn fps_converges_to_frame_rate() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(0, start);
        for frame in 1..=400 {
            let _ = timing.tick_at(start + Duration::from_millis(10 * frame));
        }
        assert!((timing.fps() - 100.0).abs() < 1.0);
        assert!((timing.frame_time_ms() - 10.0).abs() < 0.1);
    }

    #[test]
    fn clock_going_backwards_yields_zero_delta() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(0, start + Duration::from_secs(1));
        assert_eq!(timing.tick_at(start), 0.0);
        assert_eq!(timing.fps(), 60.0);
    }

    #[test]
    fn unlimited_always_renders() {
        assert!(FrameTiming::new(0).should_render());
        let capped = FrameTiming::starting_at(
            30,
            Instant::now() + Duration::from_secs(60),
        );
        assert!(!capped.should_render());
    }
}
