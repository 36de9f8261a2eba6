//! Spin animation.
//!
//! The wheel model jumps straight to the new cumulative rotation; this
//! module eases the displayed rotation from the old value to the new one so
//! the wheel visibly spins forward before settling.

use std::time::Duration;

/// An in-flight spin from one cumulative rotation to another.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinAnimation {
    from: f64,
    to: f64,
    elapsed: Duration,
    duration: Duration,
}

impl SpinAnimation {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Advances the clock. Returns true once the animation has settled.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(elapsed);
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Rotation to draw right now (cubic ease-out).
    pub fn current_rotation(&self) -> f64 {
        let t = self.progress();
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    pub fn target(&self) -> f64 {
        self.to
    }
}
