use glam::Vec3;

// Shared visual tuning constants used by both web and native frontends.

// Palette (sRGB, 0..1)
pub const GOLD_LIGHT: [f32; 3] = [201.0 / 255.0, 168.0 / 255.0, 138.0 / 255.0]; // #c9a88a
pub const GOLD_PALE: [f32; 3] = [212.0 / 255.0, 184.0 / 255.0, 150.0 / 255.0]; // #d4b896
pub const GOLD_DEEP: [f32; 3] = [166.0 / 255.0, 124.0 / 255.0, 82.0 / 255.0]; // #a67c52
pub const STAR_WHITE: [f32; 3] = [244.0 / 255.0, 238.0 / 255.0, 230.0 / 255.0];

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const HERO_FOV_DEG: f32 = 50.0;
pub const PARTICLES_FOV_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_LIGHT_POS: [f32; 3] = [10.0, 10.0, 5.0];
pub const DIRECTIONAL_LIGHT_INTENSITY: f32 = 1.0;
pub const POINT_LIGHT_POS: [f32; 3] = [-10.0, -10.0, -5.0];
pub const POINT_LIGHT_INTENSITY: f32 = 0.5;

// Primary mesh: torus knot (radius, tube, tubular, radial, p, q)
pub const KNOT_RADIUS: f32 = 1.0;
pub const KNOT_TUBE: f32 = 0.35;
pub const KNOT_TUBULAR_SEGMENTS: u32 = 200;
pub const KNOT_RADIAL_SEGMENTS: u32 = 32;
pub const KNOT_P: u32 = 2;
pub const KNOT_Q: u32 = 3;
pub const ICOSPHERE_MAX_DETAIL: u32 = 6;

// Smoothing factors (fraction of the remaining gap closed per frame)
pub const HOVER_BLEND_ALPHA: f32 = 0.1;
pub const SCALE_ALPHA: f32 = 0.1;
pub const FOLLOW_ALPHA: f32 = 0.05;

// Rotation: linear drift per axis (rad/s) plus extra rotation at full scroll
pub const ROTATION_RATE: Vec3 = Vec3::new(0.2, 0.3, 0.1);
pub const SCROLL_ROTATION: Vec3 = Vec3::new(
    std::f32::consts::PI,
    std::f32::consts::FRAC_PI_2,
    0.0,
);

// Scale
pub const BASE_SCALE: f32 = 1.0;
pub const HOVER_SCALE: f32 = 1.2;
pub const BREATHING_AMPLITUDE: f32 = 0.03;
pub const BREATHING_RATE: f32 = 0.8; // rad/s

// Pointer follow: offset = pointer * viewport / divisor
pub const FOLLOW_DIVISOR: f32 = 8.0;

// Scroll coupling
pub const DEPTH_PER_SCROLL: f32 = 3.0; // world units the mesh recedes at full scroll
pub const SCROLL_SHRINK: f32 = 0.7; // multiplier lost per unit of scroll
pub const SCROLL_FLOOR: f32 = 0.3; // never shrink below this

// Material
pub const DISTORT_IDLE: f32 = 0.2;
pub const DISTORT_HOVER: f32 = 0.4;
pub const DISTORT_SPEED: f32 = 2.0;
pub const DISTORT_RADIUS: f32 = 1.0;

// Concentric rings
pub const RING_COUNT: usize = 3;
pub const RING_BASE_RADIUS: f32 = 2.0;
pub const RING_SPACING: f32 = 0.35;
pub const RING_DOTS: usize = 96;
pub const RING_BASE_RATE: f32 = 0.15; // rad/s for ring 0
pub const RING_RATE_STEP: f32 = 0.05; // added per ring index
pub const RING_TILT: f32 = 1.2; // rad about X for ring 0
pub const RING_TILT_STEP: f32 = 0.25;
pub const RING_DOT_SIZE: f32 = 0.03;
pub const RING_OPACITY: f32 = 0.35;

// Orbiting particles around the hero mesh
pub const ORBIT_COUNT: usize = 50;
pub const ORBIT_RADIUS_MIN: f32 = 2.5;
pub const ORBIT_RADIUS_SPAN: f32 = 0.5;
pub const ORBIT_HEIGHT: f32 = 2.0; // total vertical spread
pub const ORBIT_RATE: f32 = 0.1; // rad/s about Y
pub const ORBIT_SIZE: f32 = 0.05;
pub const ORBIT_OPACITY: f32 = 0.6;

// Pointer-reactive particle sphere
pub const FIELD_COUNT: usize = 3000;
pub const FIELD_RADIUS: f32 = 2.5;
pub const FIELD_RADIUS_MIN_FRAC: f32 = 0.8;
pub const FIELD_RADIUS_SPAN_FRAC: f32 = 0.4;
pub const FIELD_ROTATION_RATE: Vec3 = Vec3::new(0.02, 0.05, 0.0);
pub const FIELD_REPEL_RADIUS: f32 = 1.5;
pub const FIELD_REPEL_STRENGTH: f32 = 0.5;
pub const FIELD_WAVE_AMPLITUDE: f32 = 0.02;
pub const FIELD_WAVE_RATE: f32 = 2.0;
pub const FIELD_WAVE_PHASE_STEP: f32 = 0.01;
pub const FIELD_SIZE: f32 = 0.025;
pub const FIELD_OPACITY: f32 = 0.8;

// Background starfield (spherical shell)
pub const STAR_COUNT: usize = 400;
pub const STAR_RADIUS_MIN: f32 = 15.0;
pub const STAR_RADIUS_MAX: f32 = 30.0;
pub const STAR_RATE: f32 = 0.01; // rad/s about Y
pub const STAR_SIZE: f32 = 0.12;
pub const STAR_OPACITY: f32 = 0.7;

// Deterministic layout of all decorative buffers
pub const DEFAULT_SEED: u64 = 42;

// Below this distance the repulsion direction is undefined
pub const REPEL_EPSILON: f32 = 1e-5;

/// Convert an sRGB-encoded channel to linear light.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
pub fn linear_rgb(rgb: [f32; 3]) -> Vec3 {
    Vec3::new(
        srgb_to_linear(rgb[0]),
        srgb_to_linear(rgb[1]),
        srgb_to_linear(rgb[2]),
    )
}
