//! Short linear tweens for scalar properties such as creature scale.

/// Linear interpolation of a single value over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarTween {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

impl ScalarTween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration.max(0.0),
        }
    }

    /// A tween that has already settled on `value`.
    pub fn settled(value: f32) -> Self {
        Self::new(value, value, 0.0)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advances the tween and returns the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    /// Progress through the tween in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_and_settles_on_target() {
        let mut tween = ScalarTween::new(1.0, 1.1, 0.3);
        assert_eq!(tween.value(), 1.0);
        assert!(!tween.is_finished());

        let mid = tween.advance(0.15);
        assert!((mid - 1.05).abs() < 1e-5);

        tween.advance(1.0);
        assert!(tween.is_finished());
        assert!((tween.value() - 1.1).abs() < 1e-6);
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn settled_tween_is_finished() {
        let tween = ScalarTween::settled(1.4);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 1.4);
        assert_eq!(tween.target(), 1.4);
    }
}
