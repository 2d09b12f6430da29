//! Per-frame motion of the primary mesh.
//!
//! Rotation is a pure function of time and scroll. Hover blend, base scale
//! and the pointer-follow offset are exponentially smoothed toward targets
//! computed from the current inputs; the scroll multiplier and depth are
//! applied on top every frame and never fed back into the smoothed values.

use crate::constants::*;
use crate::material::MaterialUniforms;
use crate::scroll::{depth_offset, scroll_multiplier};
use crate::smoothing::{smooth_toward_vec2, Smoothed};
use crate::state::{FrameInputs, MeshTransform, Viewport};
use glam::{Vec2, Vec3};

/// Tuning of the hero mesh motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroMotion {
    pub rotation_rate: Vec3,
    pub scroll_rotation: Vec3,
    pub base_scale: f32,
    pub hover_scale: f32,
    pub breathing_amplitude: f32,
    pub breathing_rate: f32,
    pub follow_divisor: f32,
    pub hover_alpha: f32,
    pub scale_alpha: f32,
    pub follow_alpha: f32,
}

impl Default for HeroMotion {
    fn default() -> Self {
        Self {
            rotation_rate: ROTATION_RATE,
            scroll_rotation: SCROLL_ROTATION,
            base_scale: BASE_SCALE,
            hover_scale: HOVER_SCALE,
            breathing_amplitude: BREATHING_AMPLITUDE,
            breathing_rate: BREATHING_RATE,
            follow_divisor: FOLLOW_DIVISOR,
            hover_alpha: HOVER_BLEND_ALPHA,
            scale_alpha: SCALE_ALPHA,
            follow_alpha: FOLLOW_ALPHA,
        }
    }
}

impl HeroMotion {
    /// Euler angles at `time` seconds and `scroll` progress.
    #[inline]
    pub fn rotation_at(&self, time: f32, scroll: f32) -> Vec3 {
        self.rotation_rate * time + self.scroll_rotation * scroll
    }

    /// Scale the mesh eases toward, before scroll shrink.
    #[inline]
    pub fn target_scale(&self, time: f32, hovered: bool) -> f32 {
        let base = if hovered {
            self.hover_scale
        } else {
            self.base_scale
        };
        base * (1.0 + self.breathing_amplitude * (time * self.breathing_rate).sin())
    }

    /// Offset the mesh eases toward; zero unless hovered.
    #[inline]
    pub fn follow_target(&self, pointer: Vec2, viewport: Viewport, hovered: bool) -> Vec2 {
        if !hovered || self.follow_divisor <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            pointer.x * viewport.width / self.follow_divisor,
            pointer.y * viewport.height / self.follow_divisor,
        )
    }
}

pub struct HeroAnimator {
    motion: HeroMotion,
    hover_blend: Smoothed,
    scale: Smoothed,
    offset: Vec2,
    transform: MeshTransform,
    material: MaterialUniforms,
}

impl HeroAnimator {
    pub fn new(motion: HeroMotion) -> Self {
        Self {
            motion,
            hover_blend: Smoothed::new(0.0, motion.hover_alpha),
            scale: Smoothed::new(motion.base_scale, motion.scale_alpha),
            offset: Vec2::ZERO,
            transform: MeshTransform {
                scale: motion.base_scale,
                ..MeshTransform::default()
            },
            material: MaterialUniforms::default(),
        }
    }

    pub fn motion(&self) -> &HeroMotion {
        &self.motion
    }

    pub fn transform(&self) -> &MeshTransform {
        &self.transform
    }

    pub fn material(&self) -> &MaterialUniforms {
        &self.material
    }

    /// Smoothed pointer-follow offset before scroll depth is applied.
    pub fn follow_offset(&self) -> Vec2 {
        self.offset
    }

    /// Smoothed base scale before the scroll multiplier.
    pub fn base_scale(&self) -> f32 {
        self.scale.value()
    }

    pub fn update(&mut self, inputs: &FrameInputs, viewport: Viewport) -> &MeshTransform {
        let m = self.motion;

        self.material.time = inputs.time;

        let blend_target = if inputs.hovered { 1.0 } else { 0.0 };
        self.material.hover_blend = self.hover_blend.step(blend_target);
        self.material.distort = MaterialUniforms::distort_for(self.material.hover_blend);

        self.transform.rotation = m.rotation_at(inputs.time, inputs.scroll);

        let base = self
            .scale
            .step(m.target_scale(inputs.time, inputs.hovered));

        let follow = m.follow_target(inputs.pointer, viewport, inputs.hovered);
        self.offset = smooth_toward_vec2(self.offset, follow, m.follow_alpha);

        let shrink = scroll_multiplier(inputs.scroll);
        self.transform.scale = base * shrink;
        self.transform.position = Vec3::new(
            self.offset.x,
            self.offset.y,
            depth_offset(inputs.scroll),
        );
        self.material.intensity = shrink;

        &self.transform
    }
}
