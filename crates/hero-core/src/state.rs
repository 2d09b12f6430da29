//! Per-frame scene state shared with the web and native frontends.
//!
//! These types avoid referencing platform-specific APIs. Frontends sample
//! their inputs into a [`FrameSample`] once per display refresh and hand it to
//! the scene; everything else here is owned and mutated by the scene itself.

use crate::scroll::sanitize_progress;
use glam::{Mat4, Quat, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera on +Z at `distance` looking at the origin.
    pub fn looking_at_origin(distance: f32, fov_deg: f32, znear: f32, zfar: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: fov_deg.to_radians(),
            znear,
            zfar,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// World-space size of the visible frustum slice through the target.
    pub fn viewport(&self) -> Viewport {
        let distance = (self.eye - self.target).length();
        let height = 2.0 * (self.fovy_radians * 0.5).tan() * distance;
        Viewport {
            width: height * self.aspect,
            height,
        }
    }
}

/// Visible world extent at the camera target plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Map a normalized device coordinate onto the target plane.
    #[inline]
    pub fn ndc_to_world(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(ndc.x * self.width * 0.5, ndc.y * self.height * 0.5)
    }
}

/// External inputs sampled at the start of a frame. Only the latest value of
/// each input matters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameSample {
    /// Seconds since the scene started.
    pub time: f32,
    /// Pointer in normalized device coordinates, `None` when outside the layer.
    pub pointer: Option<Vec2>,
    /// Scroll progress through the hero region.
    pub scroll: f32,
}

impl FrameSample {
    pub fn new(time: f32, pointer: Option<Vec2>, scroll: f32) -> Self {
        Self {
            time: if time.is_finite() { time.max(0.0) } else { 0.0 },
            pointer: pointer.filter(|p| p.is_finite()),
            scroll: sanitize_progress(scroll),
        }
    }
}

/// Everything the hero animator reads in one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInputs {
    pub time: f32,
    pub pointer: Vec2,
    pub scroll: f32,
    pub hovered: bool,
}

impl FrameInputs {
    pub fn from_sample(sample: &FrameSample, hovered: bool) -> Self {
        Self {
            time: sample.time,
            pointer: sample.pointer.unwrap_or(Vec2::ZERO),
            scroll: sample.scroll,
            hovered,
        }
    }
}

/// Two-state hover machine. Level-triggered: the smoothing in the animator
/// produces the gradual transition, not the event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

impl HoverState {
    pub fn pointer_enter(&mut self) {
        *self = HoverState::Hovered;
    }

    pub fn pointer_leave(&mut self) {
        *self = HoverState::Idle;
    }

    /// Apply the latest hit-test result; returns true when the state changed.
    pub fn sample(&mut self, over: bool) -> bool {
        let before = *self;
        if over {
            self.pointer_enter();
        } else {
            self.pointer_leave();
        }
        before != *self
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        matches!(self, HoverState::Hovered)
    }
}

/// Transform of the primary mesh, rewritten every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshTransform {
    pub position: Vec3,
    /// Euler angles (XYZ order), radians.
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for MeshTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl MeshTransform {
    pub fn rotation_quat(&self) -> Quat {
        euler_xyz(self.rotation)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.rotation_quat(),
            self.position,
        )
    }
}

#[inline]
pub fn euler_xyz(angles: Vec3) -> Quat {
    Quat::from_euler(glam::EulerRot::XYZ, angles.x, angles.y, angles.z)
}
