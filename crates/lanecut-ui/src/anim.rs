//! Animation helpers for smooth UI transitions.

/// A float that interpolates linearly from a start value to a target over a
/// fixed duration, with completion detection.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
}

impl Tween {
    /// Create a new tween. A non-positive `duration` completes immediately.
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Advance the animation by `dt` seconds and return the current value.
    pub fn tick(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    /// Final value.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Whether the animation has run its full duration.
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_interpolates() {
        let mut tw = Tween::new(0.0, 100.0, 0.08);
        assert_eq!(tw.value(), 0.0);
        let mid = tw.tick(0.04);
        assert!((mid - 50.0).abs() < 0.01);
        assert!(!tw.finished());
    }

    #[test]
    fn test_tween_completes_and_clamps() {
        let mut tw = Tween::new(10.0, 20.0, 0.08);
        let v = tw.tick(1.0);
        assert_eq!(v, 20.0);
        assert!(tw.finished());
        // Further ticks stay at the target.
        assert_eq!(tw.tick(0.5), 20.0);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let tw = Tween::new(1.0, 2.0, 0.0);
        assert!(tw.finished());
        assert_eq!(tw.value(), 2.0);
    }
}
