use crate::geometry::MeshData;
use crate::state::Camera;
use glam::{Vec2, Vec3, Vec4};

impl Camera {
    /// Compute a world-space ray through a normalized device coordinate.
    ///
    /// Returns `(ray_origin, ray_direction)`; the origin is the camera eye.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye;
        let rd = (p1 - ro).normalize_or_zero();
        (ro, rd)
    }
}

/// Nearest non-negative hit distance along the ray, if any.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Möller-Trumbore ray/triangle test; hits on either face count.
#[inline]
pub fn ray_triangle(ray_origin: Vec3, ray_dir: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let e1 = b - a;
    let e2 = c - a;
    let p = ray_dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < 1e-8 {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = ray_origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = ray_dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv_det;
    (t >= 0.0).then_some(t)
}

impl MeshData {
    /// Nearest triangle hit along a ray given in the mesh's local space.
    ///
    /// The direction need not be unit length; `t` is in its units.
    pub fn ray_hit(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<f32> {
        let vert = |i: u32| Vec3::from_array(self.positions[i as usize]);
        self.indices
            .chunks_exact(3)
            .filter_map(|tri| {
                ray_triangle(ray_origin, ray_dir, vert(tri[0]), vert(tri[1]), vert(tri[2]))
            })
            .reduce(f32::min)
    }
}
