//! Exponential smoothing toward a target.
//!
//! Every step closes a fixed fraction `alpha` of the remaining gap, so for
//! `alpha` in (0, 1] the value converges monotonically and never overshoots.

use glam::Vec2;

/// One smoothing step: `current + (target - current) * alpha`.
#[inline]
pub fn smooth_toward(current: f32, target: f32, alpha: f32) -> f32 {
    let a = alpha.clamp(0.0, 1.0);
    current + (target - current) * a
}

#[inline]
pub fn smooth_toward_vec2(current: Vec2, target: Vec2, alpha: f32) -> Vec2 {
    let a = alpha.clamp(0.0, 1.0);
    current + (target - current) * a
}

/// Number of fixed steps needed before the remaining gap is at most
/// `tolerance` (as a fraction of the initial gap).
///
/// Returns `None` for an `alpha` that never converges (zero or negative).
pub fn steps_to_within(alpha: f32, tolerance: f32) -> Option<u32> {
    if alpha <= 0.0 || tolerance <= 0.0 {
        return None;
    }
    if alpha >= 1.0 || tolerance >= 1.0 {
        return Some(1);
    }
    let keep = (1.0 - alpha as f64).ln();
    let n = ((tolerance as f64).ln() / keep).ceil();
    Some(n.max(1.0) as u32)
}

/// A scalar that eases toward whatever target it is given each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed {
    value: f32,
    alpha: f32,
}

impl Smoothed {
    pub fn new(initial: f32, alpha: f32) -> Self {
        Self {
            value: initial,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    #[inline]
    pub fn step(&mut self, target: f32) -> f32 {
        self.value = smooth_toward(self.value, target, self.alpha);
        self.value
    }

    pub fn reset(&mut self, value: f32) {
        self.value = value;
    }
}
