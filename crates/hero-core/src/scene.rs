//! Scene assembly: presets, validation, and the per-frame update.

use crate::animator::{HeroAnimator, HeroMotion};
use crate::constants::*;
use crate::decor::{
    DecorContext, Decoration, FieldConfig, OrbitCloud, OrbitConfig, ParticleField, RingConfig,
    RingSet, SpriteInstance, Starfield, StarfieldConfig,
};
use crate::error::SceneError;
use crate::geometry::{MeshData, MeshShape, TorusKnot};
use crate::material::{LightRig, MaterialUniforms};
use crate::picking::ray_sphere;
use crate::state::{Camera, FrameInputs, FrameSample, HoverState, MeshTransform};
use glam::Vec2;
use instant::Instant;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub distance: f32,
    pub fov_deg: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: CAMERA_Z,
            fov_deg: HERO_FOV_DEG,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroConfig {
    pub shape: MeshShape,
    pub motion: HeroMotion,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            shape: MeshShape::TorusKnot(TorusKnot::default()),
            motion: HeroMotion::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub lights: LightRig,
    pub hero: Option<HeroConfig>,
    pub rings: Option<RingConfig>,
    pub orbit: Option<OrbitConfig>,
    pub field: Option<FieldConfig>,
    pub stars: Option<StarfieldConfig>,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::preset(ScenePreset::Hero)
    }
}

impl SceneConfig {
    pub fn preset(preset: ScenePreset) -> Self {
        match preset {
            ScenePreset::Hero => Self {
                camera: CameraConfig::default(),
                lights: LightRig::default(),
                hero: Some(HeroConfig::default()),
                rings: Some(RingConfig::default()),
                orbit: Some(OrbitConfig::default()),
                field: None,
                stars: Some(StarfieldConfig::default()),
                seed: DEFAULT_SEED,
            },
            ScenePreset::Particles => Self {
                camera: CameraConfig {
                    fov_deg: PARTICLES_FOV_DEG,
                    ..CameraConfig::default()
                },
                lights: LightRig::default(),
                hero: None,
                rings: None,
                orbit: None,
                field: Some(FieldConfig::default()),
                stars: None,
                seed: DEFAULT_SEED,
            },
        }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        let fov = self.camera.fov_deg;
        if !positive(fov) || fov >= 180.0 {
            return Err(SceneError::FieldOfView(fov));
        }
        if let Some(r) = &self.rings {
            if r.count == 0 || r.dots == 0 {
                return Err(SceneError::EmptyGroup { what: "rings" });
            }
            if !positive(r.base_radius) || r.spacing < 0.0 {
                return Err(SceneError::RadiusRange {
                    what: "rings",
                    min: r.base_radius,
                    max: r.base_radius + r.spacing * (r.count - 1) as f32,
                });
            }
        }
        if let Some(o) = &self.orbit {
            if o.count == 0 {
                return Err(SceneError::EmptyGroup { what: "orbit" });
            }
            if !positive(o.radius_min) || o.radius_span < 0.0 {
                return Err(SceneError::RadiusRange {
                    what: "orbit",
                    min: o.radius_min,
                    max: o.radius_min + o.radius_span,
                });
            }
        }
        if let Some(f) = &self.field {
            if f.count == 0 {
                return Err(SceneError::EmptyGroup { what: "field" });
            }
            let (min, max) = f.radius_bounds();
            if !positive(min) || max < min {
                return Err(SceneError::RadiusRange {
                    what: "field",
                    min,
                    max,
                });
            }
        }
        if let Some(s) = &self.stars {
            if s.count == 0 {
                return Err(SceneError::EmptyGroup { what: "stars" });
            }
            if !positive(s.radius_min) || s.radius_max < s.radius_min {
                return Err(SceneError::RadiusRange {
                    what: "stars",
                    min: s.radius_min,
                    max: s.radius_max,
                });
            }
        }
        Ok(())
    }
}

#[inline]
fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

/// Named scene layouts selectable at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScenePreset {
    /// Distorted torus knot with orbiting particles, rings and stars.
    #[default]
    Hero,
    /// Pointer-reactive particle sphere on its own.
    Particles,
}

impl ScenePreset {
    pub fn name(&self) -> &'static str {
        match self {
            ScenePreset::Hero => "hero",
            ScenePreset::Particles => "particles",
        }
    }
}

impl fmt::Display for ScenePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenePreset {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hero" | "" => Ok(ScenePreset::Hero),
            "particles" => Ok(ScenePreset::Particles),
            other => Err(SceneError::UnknownPreset(other.to_string())),
        }
    }
}

/// The primary mesh: geometry, hover state and animator.
pub struct HeroMesh {
    geometry: MeshData,
    bounding_radius: f32,
    hover: HoverState,
    animator: HeroAnimator,
}

impl HeroMesh {
    fn new(cfg: &HeroConfig) -> Result<Self, SceneError> {
        let geometry = cfg.shape.build()?;
        let bounding_radius = geometry.bounding_radius();
        Ok(Self {
            geometry,
            bounding_radius,
            hover: HoverState::default(),
            animator: HeroAnimator::new(cfg.motion),
        })
    }

    pub fn geometry(&self) -> &MeshData {
        &self.geometry
    }

    pub fn transform(&self) -> &MeshTransform {
        self.animator.transform()
    }

    pub fn material(&self) -> &MaterialUniforms {
        self.animator.material()
    }

    pub fn animator(&self) -> &HeroAnimator {
        &self.animator
    }

    pub fn hover(&self) -> HoverState {
        self.hover
    }

    /// Whether a pointer at `ndc` is over the mesh at its current transform.
    ///
    /// The bounding sphere rejects most misses; survivors are tested against
    /// every triangle in model space.
    pub fn hit_test(&self, camera: &Camera, ndc: Vec2) -> bool {
        let t = self.transform();
        let (ro, rd) = camera.ray_from_ndc(ndc);
        if ray_sphere(ro, rd, t.position, self.bounding_radius * t.scale).is_none() {
            return false;
        }
        let inv = t.model_matrix().inverse();
        let local_ro = inv.transform_point3(ro);
        let local_rd = inv.transform_vector3(rd);
        self.geometry.ray_hit(local_ro, local_rd).is_some()
    }
}

/// Monotonic seconds since the scene started.
#[derive(Clone, Copy, Debug)]
pub struct SceneClock {
    start: Instant,
}

impl Default for SceneClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

pub struct Scene {
    camera: Camera,
    lights: LightRig,
    hero: Option<HeroMesh>,
    decorations: Vec<Box<dyn Decoration>>,
    sprites: Vec<SpriteInstance>,
    last_inputs: FrameInputs,
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;
        let cam = &config.camera;
        let camera = Camera::looking_at_origin(cam.distance, cam.fov_deg, cam.znear, cam.zfar);
        let hero = config.hero.as_ref().map(HeroMesh::new).transpose()?;

        // Per-group seeds so adding a group does not reshuffle the others.
        let mut decorations: Vec<Box<dyn Decoration>> = Vec::new();
        if let Some(s) = &config.stars {
            decorations.push(Box::new(Starfield::new(s, config.seed ^ 0x5354_4152)));
        }
        if let Some(r) = &config.rings {
            decorations.push(Box::new(RingSet::new(r)));
        }
        if let Some(o) = &config.orbit {
            decorations.push(Box::new(OrbitCloud::new(o, config.seed ^ 0x4f52_4254)));
        }
        if let Some(f) = &config.field {
            decorations.push(Box::new(ParticleField::new(f, config.seed ^ 0x4649_454c)));
        }
        let capacity = decorations.iter().map(|d| d.len()).sum();

        if let Some(h) = &hero {
            log::info!(
                "[scene] mesh verts={} tris={} radius={:.2}",
                h.geometry.vertex_count(),
                h.geometry.triangle_count(),
                h.bounding_radius
            );
        }
        log::info!(
            "[scene] decorations={} sprites={}",
            decorations.len(),
            capacity
        );

        Ok(Self {
            camera,
            lights: config.lights,
            hero,
            decorations,
            sprites: Vec::with_capacity(capacity),
            last_inputs: FrameInputs::default(),
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn lights(&self) -> &LightRig {
        &self.lights
    }

    pub fn hero(&self) -> Option<&HeroMesh> {
        self.hero.as_ref()
    }

    pub fn sprites(&self) -> &[SpriteInstance] {
        &self.sprites
    }

    /// Sprites written per frame; constant for the scene's lifetime.
    pub fn sprite_capacity(&self) -> usize {
        self.decorations.iter().map(|d| d.len()).sum()
    }

    pub fn last_inputs(&self) -> &FrameInputs {
        &self.last_inputs
    }

    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
    }

    /// Advance one frame with freshly sampled inputs.
    pub fn advance(&mut self, sample: FrameSample) {
        let sample = FrameSample::new(sample.time, sample.pointer, sample.scroll);
        let viewport = self.camera.viewport();

        let hovered = match &mut self.hero {
            Some(hero) => {
                let over = sample
                    .pointer
                    .map(|p| hero.hit_test(&self.camera, p))
                    .unwrap_or(false);
                if hero.hover.sample(over) {
                    log::debug!("[hover] {:?}", hero.hover);
                }
                hero.hover.is_hovered()
            }
            None => false,
        };

        let inputs = FrameInputs::from_sample(&sample, hovered);
        if let Some(hero) = &mut self.hero {
            hero.animator.update(&inputs, viewport);
        }

        let ctx = DecorContext {
            time: sample.time,
            pointer_world: sample.pointer.map(|p| viewport.ndc_to_world(p)),
        };
        self.sprites.clear();
        for d in self.decorations.iter_mut() {
            d.update(&ctx, &mut self.sprites);
        }
        self.last_inputs = inputs;
    }
}
