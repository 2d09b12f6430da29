//! Secondary decorative groups drawn as camera-facing sprites.
//!
//! Every group generates its layout once (seeded, so repeatable) and writes
//! its world-space sprites into a buffer owned by the scene each frame.

mod particles;
mod rings;
mod stars;

pub use particles::{repel_offset, FieldConfig, OrbitCloud, OrbitConfig, ParticleField};
pub use rings::{Ring, RingConfig, RingSet};
pub use stars::{Starfield, StarfieldConfig};

use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::TAU;

/// One instanced billboard.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 3],
    pub size: f32,
    /// linear rgb + opacity
    pub color: [f32; 4],
}

/// What a group may read during its per-frame update.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecorContext {
    pub time: f32,
    /// Pointer projected onto the target plane, `None` when absent.
    pub pointer_world: Option<Vec2>,
}

pub trait Decoration {
    /// Number of sprites written per frame; fixed for the group's lifetime.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append exactly `len()` sprites to `out`.
    fn update(&mut self, ctx: &DecorContext, out: &mut Vec<SpriteInstance>);
}

/// Uniformly distributed direction on the unit sphere.
pub(crate) fn random_direction(rng: &mut StdRng) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

#[inline]
pub(crate) fn rgba(rgb: Vec3, opacity: f32) -> [f32; 4] {
    [rgb.x, rgb.y, rgb.z, opacity.clamp(0.0, 1.0)]
}
