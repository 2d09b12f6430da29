use super::{random_direction, rgba, DecorContext, Decoration, SpriteInstance};
use crate::constants::*;
use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub count: usize,
    pub radius_min: f32,
    pub radius_max: f32,
    pub rate: f32,
    pub size: f32,
    pub color: [f32; 3],
    pub opacity: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            radius_min: STAR_RADIUS_MIN,
            radius_max: STAR_RADIUS_MAX,
            rate: STAR_RATE,
            size: STAR_SIZE,
            color: STAR_WHITE,
            opacity: STAR_OPACITY,
        }
    }
}

/// Distant shell of stars drifting about Y.
pub struct Starfield {
    stars: Vec<Vec3>,
    rate: f32,
    size: f32,
    color: [f32; 4],
}

impl Starfield {
    pub fn new(cfg: &StarfieldConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let span = (cfg.radius_max - cfg.radius_min).max(0.0);
        let stars = (0..cfg.count)
            .map(|_| random_direction(&mut rng) * (cfg.radius_min + rng.gen::<f32>() * span))
            .collect();
        Self {
            stars,
            rate: cfg.rate,
            size: cfg.size,
            color: rgba(linear_rgb(cfg.color), cfg.opacity),
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.stars
    }
}

impl Decoration for Starfield {
    fn len(&self) -> usize {
        self.stars.len()
    }

    fn update(&mut self, ctx: &DecorContext, out: &mut Vec<SpriteInstance>) {
        let rot = Quat::from_rotation_y(ctx.time * self.rate);
        out.extend(self.stars.iter().map(|p| SpriteInstance {
            position: (rot * *p).to_array(),
            size: self.size,
            color: self.color,
        }));
    }
}
