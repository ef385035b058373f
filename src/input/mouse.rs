use glam::Vec2;

/// Cursor position the first sample is measured from before any real
/// cursor event arrives (centre of an 800x600 window).
const INITIAL_CURSOR: Vec2 = Vec2::new(400.0, 300.0);

/// Mouse-look state: whether cursor motion steers the camera, and the last
/// cursor sample deltas are measured against.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseLook {
    enabled: bool,
    first_sample: bool,
    last: Vec2,
}

impl Default for MouseLook {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseLook {
    /// Mouse-look starts disabled with the first sample armed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: false,
            first_sample: true,
            last: INITIAL_CURSOR,
        }
    }

    /// Whether cursor motion currently steers the camera.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Flip mouse-look and return the new state. Disabling re-arms the first
    /// sample so re-enabling never produces a jump.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if !self.enabled {
            self.first_sample = true;
        }
        self.enabled
    }

    /// Feed an absolute cursor position. Returns the look offset
    /// `(dx, dy)` with `dy` positive when the cursor moved up, or `None`
    /// while mouse-look is disabled.
    pub fn sample(&mut self, x: f32, y: f32) -> Option<Vec2> {
        if !self.enabled {
            return None;
        }

        let current = Vec2::new(x, y);
        if self.first_sample {
            self.last = current;
            self.first_sample = false;
        }

        // Screen Y grows downward.
        let offset = Vec2::new(current.x - self.last.x, self.last.y - current.y);
        self.last = current;
        Some(offset)
    }

    /// Feed a relative device delta. Returns the look offset with `dy`
    /// flipped to positive-up, or `None` while mouse-look is disabled.
    /// The absolute cursor reference is left untouched.
    #[must_use]
    pub fn motion(&self, dx: f32, dy: f32) -> Option<Vec2> {
        if !self.enabled {
            return None;
        }
        Some(Vec2::new(dx, -dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_ignores_motion() {
        let mut look = MouseLook::new();
        assert!(!look.enabled());
        assert_eq!(look.sample(10.0, 10.0), None);
    }

    #[test]
    fn first_sample_after_enable_is_zero() {
        let mut look = MouseLook::new();
        assert!(look.toggle());
        assert_eq!(look.sample(900.0, 20.0), Some(Vec2::ZERO));
        assert_eq!(look.sample(910.0, 15.0), Some(Vec2::new(10.0, 5.0)));
    }

    #[test]
    fn reenable_does_not_jump() {
        let mut look = MouseLook::new();
        let _ = look.toggle();
        let _ = look.sample(100.0, 100.0);
        assert!(!look.toggle());
        // Cursor wanders while disabled.
        assert_eq!(look.sample(700.0, 500.0), None);
        assert!(look.toggle());
        assert_eq!(look.sample(650.0, 480.0), Some(Vec2::ZERO));
    }

    #[test]
    fn downward_cursor_motion_is_negative_offset() {
        let mut look = MouseLook::new();
        let _ = look.toggle();
        let _ = look.sample(0.0, 0.0);
        assert_eq!(look.sample(0.0, 30.0), Some(Vec2::new(0.0, -30.0)));
    }

    #[test]
    fn relative_motion_flips_y_and_has_no_first_sample() {
        let mut look = MouseLook::new();
        assert_eq!(look.motion(5.0, 5.0), None);
        let _ = look.toggle();
        assert_eq!(look.motion(12.0, 4.0), Some(Vec2::new(12.0, -4.0)));
        // Relative deltas do not consume the absolute first sample.
        assert_eq!(look.sample(300.0, 200.0), Some(Vec2::ZERO));
    }
}
