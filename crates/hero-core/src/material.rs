//! Uniform set of the distorted hero material and the light rig it is lit by.
//!
//! The material is plain data: the animator writes it each frame and the
//! renderer packs it into [`MeshUniforms`] for the pipeline.

use crate::constants::*;
use crate::state::{Camera, MeshTransform};
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialUniforms {
    pub time: f32,
    /// Smoothed hover amount in [0, 1].
    pub hover_blend: f32,
    /// Gradient stops at 0, 0.5 and 1 across the surface (linear RGB).
    pub gradient: [Vec3; 3],
    /// Tint of the secondary point light (linear RGB).
    pub accent: Vec3,
    /// Scroll-coupled brightness/opacity multiplier.
    pub intensity: f32,
    /// Noise displacement amount.
    pub distort: f32,
    /// Noise animation speed.
    pub speed: f32,
}

impl Default for MaterialUniforms {
    fn default() -> Self {
        Self {
            time: 0.0,
            hover_blend: 0.0,
            gradient: [
                linear_rgb(GOLD_LIGHT),
                linear_rgb(GOLD_PALE),
                linear_rgb(GOLD_DEEP),
            ],
            accent: linear_rgb(GOLD_LIGHT),
            intensity: 1.0,
            distort: DISTORT_IDLE,
            speed: DISTORT_SPEED,
        }
    }
}

impl MaterialUniforms {
    /// Displacement for a given hover blend: idle amount eased toward the
    /// hovered amount.
    #[inline]
    pub fn distort_for(hover_blend: f32) -> f32 {
        DISTORT_IDLE + (DISTORT_HOVER - DISTORT_IDLE) * hover_blend.clamp(0.0, 1.0)
    }
}

/// Ambient + directional + tinted point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightRig {
    pub ambient: f32,
    pub directional_pos: Vec3,
    pub directional_intensity: f32,
    pub point_pos: Vec3,
    pub point_intensity: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient: AMBIENT_INTENSITY,
            directional_pos: Vec3::from_array(DIRECTIONAL_LIGHT_POS),
            directional_intensity: DIRECTIONAL_LIGHT_INTENSITY,
            point_pos: Vec3::from_array(POINT_LIGHT_POS),
            point_intensity: POINT_LIGHT_INTENSITY,
        }
    }
}

/// GPU layout of the mesh pass uniforms. Every member is 16-byte aligned.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub gradient_a: [f32; 4],
    pub gradient_b: [f32; 4],
    pub gradient_c: [f32; 4],
    /// xyz point light tint
    pub accent: [f32; 4],
    /// xyz direction toward the light, w intensity
    pub light_dir: [f32; 4],
    /// xyz position, w intensity
    pub point_light: [f32; 4],
    /// xyz camera eye, w ambient
    pub eye_ambient: [f32; 4],
    /// time, hover_blend, intensity, distort
    pub params: [f32; 4],
    /// speed, noise radius, unused, unused
    pub params2: [f32; 4],
}

impl MeshUniforms {
    pub fn pack(
        camera: &Camera,
        transform: &MeshTransform,
        material: &MaterialUniforms,
        lights: &LightRig,
    ) -> Self {
        let v4 = |v: Vec3, w: f32| [v.x, v.y, v.z, w];
        let model: Mat4 = transform.model_matrix();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            gradient_a: v4(material.gradient[0], 1.0),
            gradient_b: v4(material.gradient[1], 1.0),
            gradient_c: v4(material.gradient[2], 1.0),
            accent: v4(material.accent, 1.0),
            light_dir: v4(
                lights.directional_pos.normalize_or_zero(),
                lights.directional_intensity,
            ),
            point_light: v4(lights.point_pos, lights.point_intensity),
            eye_ambient: v4(camera.eye, lights.ambient),
            params: [
                material.time,
                material.hover_blend,
                material.intensity,
                material.distort,
            ],
            params2: [material.speed, DISTORT_RADIUS, 0.0, 0.0],
        }
    }
}
