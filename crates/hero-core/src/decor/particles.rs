use super::{random_direction, rgba, DecorContext, Decoration, SpriteInstance};
use crate::constants::*;
use crate::state::euler_xyz;
use glam::{Quat, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

// ---------------- Orbiting particles ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    pub count: usize,
    pub radius_min: f32,
    pub radius_span: f32,
    pub height: f32,
    pub rate: f32,
    pub size: f32,
    pub color: [f32; 3],
    pub opacity: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            count: ORBIT_COUNT,
            radius_min: ORBIT_RADIUS_MIN,
            radius_span: ORBIT_RADIUS_SPAN,
            height: ORBIT_HEIGHT,
            rate: ORBIT_RATE,
            size: ORBIT_SIZE,
            color: GOLD_LIGHT,
            opacity: ORBIT_OPACITY,
        }
    }
}

/// Loose ring of particles around the hero mesh, slowly spinning about Y.
pub struct OrbitCloud {
    positions: Vec<Vec3>,
    rate: f32,
    size: f32,
    color: [f32; 4],
}

impl OrbitCloud {
    pub fn new(cfg: &OrbitConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = (0..cfg.count)
            .map(|i| {
                let angle = i as f32 / cfg.count as f32 * TAU;
                let radius = cfg.radius_min + rng.gen::<f32>() * cfg.radius_span;
                let y = (rng.gen::<f32>() - 0.5) * cfg.height;
                Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
            })
            .collect();
        Self {
            positions,
            rate: cfg.rate,
            size: cfg.size,
            color: rgba(linear_rgb(cfg.color), cfg.opacity),
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }
}

impl Decoration for OrbitCloud {
    fn len(&self) -> usize {
        self.positions.len()
    }

    fn update(&mut self, ctx: &DecorContext, out: &mut Vec<SpriteInstance>) {
        let rot = Quat::from_rotation_y(ctx.time * self.rate);
        out.extend(self.positions.iter().map(|p| SpriteInstance {
            position: (rot * *p).to_array(),
            size: self.size,
            color: self.color,
        }));
    }
}

// ---------------- Pointer-reactive particle sphere ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub radius: f32,
    pub radius_min_frac: f32,
    pub radius_span_frac: f32,
    pub rotation_rate: Vec3,
    pub repel_radius: f32,
    pub repel_strength: f32,
    pub wave_amplitude: f32,
    pub wave_rate: f32,
    pub wave_phase_step: f32,
    pub size: f32,
    pub color: [f32; 3],
    pub opacity: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: FIELD_COUNT,
            radius: FIELD_RADIUS,
            radius_min_frac: FIELD_RADIUS_MIN_FRAC,
            radius_span_frac: FIELD_RADIUS_SPAN_FRAC,
            rotation_rate: FIELD_ROTATION_RATE,
            repel_radius: FIELD_REPEL_RADIUS,
            repel_strength: FIELD_REPEL_STRENGTH,
            wave_amplitude: FIELD_WAVE_AMPLITUDE,
            wave_rate: FIELD_WAVE_RATE,
            wave_phase_step: FIELD_WAVE_PHASE_STEP,
            size: FIELD_SIZE,
            color: GOLD_LIGHT,
            opacity: FIELD_OPACITY,
        }
    }
}

impl FieldConfig {
    pub fn radius_bounds(&self) -> (f32, f32) {
        (
            self.radius * self.radius_min_frac,
            self.radius * (self.radius_min_frac + self.radius_span_frac),
        )
    }
}

/// 2D push of a particle away from the pointer (both on the XY plane).
///
/// Strongest at zero distance and fading linearly to nothing at `radius`.
/// When the particle sits on the pointer the direction is taken from the
/// particle's own position instead, so no division by zero can occur.
pub fn repel_offset(original: Vec3, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    if radius <= 0.0 {
        return Vec2::ZERO;
    }
    let d = original.truncate() - pointer;
    let dist = d.length();
    let falloff = (1.0 - dist / radius).max(0.0);
    if falloff <= 0.0 {
        return Vec2::ZERO;
    }
    let dir = if dist > REPEL_EPSILON {
        d / dist
    } else {
        let own = original.truncate();
        let len = own.length();
        if len > REPEL_EPSILON {
            own / len
        } else {
            Vec2::X
        }
    };
    dir * (strength * radius * 0.5 * falloff)
}

/// Sphere of particles that scatter away from the pointer and shimmer.
pub struct ParticleField {
    cfg: FieldConfig,
    originals: Vec<Vec3>,
    displaced: Vec<Vec3>,
    color: [f32; 4],
}

impl ParticleField {
    pub fn new(cfg: &FieldConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let (r_min, _) = cfg.radius_bounds();
        let span = cfg.radius * cfg.radius_span_frac;
        let originals: Vec<Vec3> = (0..cfg.count)
            .map(|_| {
                let dir = random_direction(&mut rng);
                dir * (r_min + rng.gen::<f32>() * span)
            })
            .collect();
        let displaced = originals.clone();
        Self {
            cfg: *cfg,
            originals,
            displaced,
            color: rgba(linear_rgb(cfg.color), cfg.opacity),
        }
    }

    pub fn originals(&self) -> &[Vec3] {
        &self.originals
    }

    /// Local-space positions after the latest update.
    pub fn displaced(&self) -> &[Vec3] {
        &self.displaced
    }

    pub fn rotation_at(&self, time: f32) -> Vec3 {
        self.cfg.rotation_rate * time
    }

    fn recompute(&mut self, time: f32, pointer: Option<Vec2>) {
        let cfg = &self.cfg;
        for (i, (o, out)) in self
            .originals
            .iter()
            .zip(self.displaced.iter_mut())
            .enumerate()
        {
            let push = pointer
                .map(|p| repel_offset(*o, p, cfg.repel_radius, cfg.repel_strength))
                .unwrap_or(Vec2::ZERO);
            let wave = (time * cfg.wave_rate + i as f32 * cfg.wave_phase_step).sin()
                * cfg.wave_amplitude;
            *out = Vec3::new(o.x + push.x + wave, o.y + push.y + wave, o.z + wave);
        }
    }
}

impl Decoration for ParticleField {
    fn len(&self) -> usize {
        self.originals.len()
    }

    fn update(&mut self, ctx: &DecorContext, out: &mut Vec<SpriteInstance>) {
        self.recompute(ctx.time, ctx.pointer_world);
        let rot = euler_xyz(self.rotation_at(ctx.time));
        out.extend(self.displaced.iter().map(|p| SpriteInstance {
            position: (rot * *p).to_array(),
            size: self.cfg.size,
            color: self.color,
        }));
    }
}
