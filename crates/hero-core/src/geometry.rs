//! Procedural geometry for the primary mesh.

use crate::constants::{
    ICOSPHERE_MAX_DETAIL, KNOT_P, KNOT_Q, KNOT_RADIAL_SEGMENTS, KNOT_RADIUS, KNOT_TUBE,
    KNOT_TUBULAR_SEGMENTS,
};
use crate::error::GeometryError;
use fnv::FnvHashMap;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed triangle list.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Distance from the local origin to the farthest vertex.
    pub fn bounding_radius(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| Vec3::from_array(*p).length())
            .fold(0.0, f32::max)
    }

    pub fn vertices(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((p, n), uv)| MeshVertex {
                position: *p,
                normal: *n,
                uv: *uv,
            })
            .collect()
    }
}

/// Parameters of a (p, q) torus knot tube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorusKnot {
    pub radius: f32,
    pub tube: f32,
    pub tubular_segments: u32,
    pub radial_segments: u32,
    pub p: u32,
    pub q: u32,
}

impl Default for TorusKnot {
    fn default() -> Self {
        Self {
            radius: KNOT_RADIUS,
            tube: KNOT_TUBE,
            tubular_segments: KNOT_TUBULAR_SEGMENTS,
            radial_segments: KNOT_RADIAL_SEGMENTS,
            p: KNOT_P,
            q: KNOT_Q,
        }
    }
}

/// Which primary mesh to build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeshShape {
    TorusKnot(TorusKnot),
    Icosphere { radius: f32, detail: u32 },
}

impl MeshShape {
    pub fn build(&self) -> Result<MeshData, GeometryError> {
        match *self {
            MeshShape::TorusKnot(k) => torus_knot(&k),
            MeshShape::Icosphere { radius, detail } => icosphere(radius, detail),
        }
    }
}

fn check_length(what: &'static str, v: f32) -> Result<(), GeometryError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::BadLength { what, got: v })
    }
}

fn check_segments(what: &'static str, got: u32) -> Result<(), GeometryError> {
    if got < 3 {
        return Err(GeometryError::TooFewSegments { what, min: 3, got });
    }
    Ok(())
}

/// Sweep a circular cross-section along the knot curve using a Frenet-like
/// frame built from neighbouring curve points.
pub fn torus_knot(k: &TorusKnot) -> Result<MeshData, GeometryError> {
    check_length("knot radius", k.radius)?;
    check_length("knot tube", k.tube)?;
    check_segments("tubular", k.tubular_segments)?;
    check_segments("radial", k.radial_segments)?;
    if k.p == 0 {
        return Err(GeometryError::TooFewSegments {
            what: "knot p",
            min: 1,
            got: 0,
        });
    }

    let tubular = k.tubular_segments;
    let radial = k.radial_segments;
    let n_verts = ((tubular + 1) * (radial + 1)) as usize;
    let mut mesh = MeshData {
        positions: Vec::with_capacity(n_verts),
        normals: Vec::with_capacity(n_verts),
        uvs: Vec::with_capacity(n_verts),
        indices: Vec::with_capacity((tubular * radial * 6) as usize),
    };

    let curve = |u: f32| -> Vec3 {
        let qu_over_p = k.q as f32 / k.p as f32 * u;
        let cs = qu_over_p.cos();
        Vec3::new(
            k.radius * (2.0 + cs) * 0.5 * u.cos(),
            k.radius * (2.0 + cs) * 0.5 * u.sin(),
            k.radius * qu_over_p.sin() * 0.5,
        )
    };

    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * k.p as f32 * TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);
        let t = p2 - p1;
        let mut n = p2 + p1;
        let b = t.cross(n).normalize_or_zero();
        n = b.cross(t).normalize_or_zero();

        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let cx = -k.tube * v.cos();
            let cy = k.tube * v.sin();
            let pos = p1 + n * cx + b * cy;
            mesh.positions.push(pos.to_array());
            mesh.normals
                .push((pos - p1).normalize_or_zero().to_array());
            mesh.uvs
                .push([i as f32 / tubular as f32, j as f32 / radial as f32]);
        }
    }

    for j in 1..=tubular {
        for i in 1..=radial {
            let a = (radial + 1) * (j - 1) + (i - 1);
            let b = (radial + 1) * j + (i - 1);
            let c = (radial + 1) * j + i;
            let d = (radial + 1) * (j - 1) + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    Ok(mesh)
}

const ICO_T: f32 = 1.618_034; // golden ratio

const ICO_VERTICES: [[f32; 3]; 12] = [
    [-1.0, ICO_T, 0.0],
    [1.0, ICO_T, 0.0],
    [-1.0, -ICO_T, 0.0],
    [1.0, -ICO_T, 0.0],
    [0.0, -1.0, ICO_T],
    [0.0, 1.0, ICO_T],
    [0.0, -1.0, -ICO_T],
    [0.0, 1.0, -ICO_T],
    [ICO_T, 0.0, -1.0],
    [ICO_T, 0.0, 1.0],
    [-ICO_T, 0.0, -1.0],
    [-ICO_T, 0.0, 1.0],
];

const ICO_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Subdivided icosahedron with shared vertices projected onto a sphere.
///
/// `detail` levels give `10 * 4^detail + 2` vertices and `20 * 4^detail`
/// triangles.
pub fn icosphere(radius: f32, detail: u32) -> Result<MeshData, GeometryError> {
    check_length("icosphere radius", radius)?;
    if detail > ICOSPHERE_MAX_DETAIL {
        return Err(GeometryError::TooDetailed {
            got: detail,
            max: ICOSPHERE_MAX_DETAIL,
        });
    }

    let mut dirs: Vec<Vec3> = ICO_VERTICES
        .iter()
        .map(|v| Vec3::from_array(*v).normalize())
        .collect();
    let mut faces: Vec<[u32; 3]> = ICO_FACES.to_vec();

    for _ in 0..detail {
        let mut midpoints: FnvHashMap<(u32, u32), u32> = FnvHashMap::default();
        let mut next = Vec::with_capacity(faces.len() * 4);
        let mut midpoint = |a: u32, b: u32, dirs: &mut Vec<Vec3>| -> u32 {
            let key = (a.min(b), a.max(b));
            *midpoints.entry(key).or_insert_with(|| {
                let m = ((dirs[a as usize] + dirs[b as usize]) * 0.5).normalize();
                dirs.push(m);
                (dirs.len() - 1) as u32
            })
        };
        for [a, b, c] in faces {
            let ab = midpoint(a, b, &mut dirs);
            let bc = midpoint(b, c, &mut dirs);
            let ca = midpoint(c, a, &mut dirs);
            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }
        faces = next;
    }

    let mut mesh = MeshData::default();
    for d in &dirs {
        mesh.positions.push((*d * radius).to_array());
        mesh.normals.push(d.to_array());
        let u = 0.5 + d.z.atan2(d.x) / TAU;
        let v = 0.5 - d.y.clamp(-1.0, 1.0).asin() / PI;
        mesh.uvs.push([u, v]);
    }
    mesh.indices = faces.into_iter().flatten().collect();
    Ok(mesh)
}
