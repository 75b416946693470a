//! Icosahedron generation and midpoint subdivision.

use glam::DVec3;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{EdgeKey, MeshError};

/// Number of vertices in the base icosahedron.
pub const BASE_VERTEX_COUNT: usize = 12;

/// Number of triangles in the base icosahedron.
pub const BASE_FACE_COUNT: usize = 20;

/// Triangle table of the base icosahedron, counter-clockwise seen from outside.
const ICOSAHEDRON_FACES: [[u32; 3]; BASE_FACE_COUNT] = [
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

/// Vertex positions and triangle indices of a geodesic sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGeometry {
    /// Vertex positions, all at distance `radius` from the origin.
    pub vertices: Vec<DVec3>,
    /// Triangles as vertex index triples.
    pub faces: Vec<[u32; 3]>,
    /// Radius of the sphere the vertices lie on.
    pub radius: f64,
}

impl MeshGeometry {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Mean of the three corners of face `index`.
    ///
    /// The centroid is not projected back onto the sphere, so it sits slightly
    /// inside it.
    pub fn face_centroid(&self, index: usize) -> DVec3 {
        triangle_centroid(&self.vertices, self.faces[index])
    }
}

/// Mean of the three corners of `face`, indexing into `vertices`.
#[inline]
pub fn triangle_centroid(vertices: &[DVec3], [a, b, c]: [u32; 3]) -> DVec3 {
    (vertices[a as usize] + vertices[b as usize] + vertices[c as usize]) / 3.0
}

/// Face count after `detail` subdivision passes: `20 * 4^detail`.
///
/// Saturates at `usize::MAX` when the count does not fit.
pub fn expected_face_count(detail: u32) -> usize {
    4usize
        .checked_pow(detail)
        .and_then(|n| n.checked_mul(BASE_FACE_COUNT))
        .unwrap_or(usize::MAX)
}

/// Vertex count after `detail` subdivision passes: `10 * 4^detail + 2`.
///
/// Saturates at `usize::MAX` when the count does not fit.
pub fn expected_vertex_count(detail: u32) -> usize {
    4usize
        .checked_pow(detail)
        .and_then(|n| n.checked_mul(10))
        .and_then(|n| n.checked_add(2))
        .unwrap_or(usize::MAX)
}

/// Scale `v` so that it lies on the sphere of the given radius.
///
/// Returns [`MeshError::DegenerateVector`] for zero-length or non-finite input
/// instead of producing NaN coordinates.
pub fn project_to_sphere(v: DVec3, radius: f64) -> Result<DVec3, MeshError> {
    let len = v.length();
    if len == 0.0 || !len.is_finite() {
        return Err(MeshError::DegenerateVector {
            x: v.x,
            y: v.y,
            z: v.z,
        });
    }
    Ok(v * (radius / len))
}

/// Build a geodesic sphere with `detail` subdivision passes.
///
/// `detail = 0` yields the bare icosahedron. Each pass multiplies the face
/// count by four; no upper bound is enforced.
pub fn build_mesh(detail: u32, radius: f64) -> Result<MeshGeometry, MeshError> {
    if !(radius > 0.0 && radius.is_finite()) {
        return Err(MeshError::InvalidRadius(radius));
    }

    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let corners = [
        DVec3::new(-1.0, t, 0.0),
        DVec3::new(1.0, t, 0.0),
        DVec3::new(-1.0, -t, 0.0),
        DVec3::new(1.0, -t, 0.0),
        DVec3::new(0.0, -1.0, t),
        DVec3::new(0.0, 1.0, t),
        DVec3::new(0.0, -1.0, -t),
        DVec3::new(0.0, 1.0, -t),
        DVec3::new(t, 0.0, -1.0),
        DVec3::new(t, 0.0, 1.0),
        DVec3::new(-t, 0.0, -1.0),
        DVec3::new(-t, 0.0, 1.0),
    ];

    let mut vertices = Vec::with_capacity(BASE_VERTEX_COUNT);
    for corner in corners {
        vertices.push(project_to_sphere(corner, radius)?);
    }
    let mut faces = ICOSAHEDRON_FACES.to_vec();

    for _ in 0..detail {
        faces = subdivide(&mut vertices, &faces, radius)?;
    }

    debug!(
        detail,
        radius,
        vertices = vertices.len(),
        faces = faces.len(),
        "built geodesic mesh"
    );

    Ok(MeshGeometry {
        vertices,
        faces,
        radius,
    })
}

/// Split every triangle into four, sharing edge midpoints through one cache.
fn subdivide(
    vertices: &mut Vec<DVec3>,
    faces: &[[u32; 3]],
    radius: f64,
) -> Result<Vec<[u32; 3]>, MeshError> {
    // One new vertex per edge, and a closed mesh has 3/2 edges per face.
    vertices.reserve(faces.len() / 2 * 3);
    let mut cache = MidpointCache::new(vertices, radius);
    let mut new_faces = Vec::with_capacity(faces.len() * 4);

    for &[a, b, c] in faces {
        let ab = cache.midpoint(a, b)?;
        let bc = cache.midpoint(b, c)?;
        let ca = cache.midpoint(c, a)?;

        new_faces.push([a, ab, ca]);
        new_faces.push([b, bc, ab]);
        new_faces.push([c, ca, bc]);
        new_faces.push([ab, bc, ca]);
    }

    Ok(new_faces)
}

/// Edge-midpoint lookup for a single subdivision pass.
///
/// Borrows the vertex list mutably for the duration of the pass; dropping the
/// cache ends the pass and the midpoints become ordinary vertices.
pub struct MidpointCache<'a> {
    vertices: &'a mut Vec<DVec3>,
    radius: f64,
    midpoints: FxHashMap<EdgeKey, u32>,
}

impl<'a> MidpointCache<'a> {
    /// Start a pass over `vertices`, projecting new midpoints to `radius`.
    pub fn new(vertices: &'a mut Vec<DVec3>, radius: f64) -> Self {
        Self {
            vertices,
            radius,
            midpoints: FxHashMap::default(),
        }
    }

    /// Index of the midpoint vertex of edge `(a, b)`, creating it on first use.
    pub fn midpoint(&mut self, a: u32, b: u32) -> Result<u32, MeshError> {
        let key = EdgeKey::new(a, b);
        if let Some(&idx) = self.midpoints.get(&key) {
            return Ok(idx);
        }

        let mid = (self.vertices[a as usize] + self.vertices[b as usize]) * 0.5;
        let mid = project_to_sphere(mid, self.radius)?;
        let idx = self.vertices.len() as u32;
        self.vertices.push(mid);
        self.midpoints.insert(key, idx);
        Ok(idx)
    }

    /// Number of midpoints created so far in this pass.
    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    /// Whether no midpoint has been created yet.
    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }
}
