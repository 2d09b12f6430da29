use super::{rgba, DecorContext, Decoration, SpriteInstance};
use crate::constants::*;
use glam::{Quat, Vec2, Vec3};
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingConfig {
    pub count: usize,
    pub base_radius: f32,
    pub spacing: f32,
    pub dots: usize,
    pub base_rate: f32,
    pub rate_step: f32,
    pub tilt: f32,
    pub tilt_step: f32,
    pub dot_size: f32,
    pub color: [f32; 3],
    pub opacity: f32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            count: RING_COUNT,
            base_radius: RING_BASE_RADIUS,
            spacing: RING_SPACING,
            dots: RING_DOTS,
            base_rate: RING_BASE_RATE,
            rate_step: RING_RATE_STEP,
            tilt: RING_TILT,
            tilt_step: RING_TILT_STEP,
            dot_size: RING_DOT_SIZE,
            color: GOLD_PALE,
            opacity: RING_OPACITY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub radius: f32,
    /// Signed angular rate; sign alternates with index parity.
    pub rate: f32,
    pub tilt: f32,
}

impl Ring {
    #[inline]
    pub fn angle_at(&self, time: f32) -> f32 {
        self.rate * time
    }
}

/// Concentric dotted rings spinning in alternating directions.
pub struct RingSet {
    rings: SmallVec<[Ring; 8]>,
    circle: Vec<Vec2>,
    dot_size: f32,
    color: [f32; 4],
}

impl RingSet {
    pub fn new(cfg: &RingConfig) -> Self {
        let rings = (0..cfg.count)
            .map(|i| {
                let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
                Ring {
                    radius: cfg.base_radius + cfg.spacing * i as f32,
                    rate: (cfg.base_rate + cfg.rate_step * i as f32) * direction,
                    tilt: cfg.tilt + cfg.tilt_step * i as f32,
                }
            })
            .collect();
        let circle = (0..cfg.dots)
            .map(|k| {
                let a = k as f32 / cfg.dots as f32 * TAU;
                Vec2::new(a.cos(), a.sin())
            })
            .collect();
        Self {
            rings,
            circle,
            dot_size: cfg.dot_size,
            color: rgba(linear_rgb(cfg.color), cfg.opacity),
        }
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }
}

impl Decoration for RingSet {
    fn len(&self) -> usize {
        self.rings.len() * self.circle.len()
    }

    fn update(&mut self, ctx: &DecorContext, out: &mut Vec<SpriteInstance>) {
        for ring in &self.rings {
            let rot = Quat::from_rotation_x(ring.tilt) * Quat::from_rotation_z(ring.angle_at(ctx.time));
            for c in &self.circle {
                let p = rot * Vec3::new(c.x * ring.radius, c.y * ring.radius, 0.0);
                out.push(SpriteInstance {
                    position: p.to_array(),
                    size: self.dot_size,
                    color: self.color,
                });
            }
        }
    }
}
