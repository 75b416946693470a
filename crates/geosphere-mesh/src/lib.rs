//! Geodesic sphere construction.
//!
//! Builds a regular icosahedron on a sphere of a given radius and refines it by
//! repeated 1-to-4 triangle subdivision. Shared edge midpoints are created once
//! per pass, so adjacent triangles always reference the same vertex index.

mod edge;
mod error;
mod icosphere;

pub use edge::EdgeKey;
pub use error::MeshError;
pub use icosphere::{
    BASE_FACE_COUNT, BASE_VERTEX_COUNT, MeshGeometry, MidpointCache, build_mesh,
    expected_face_count, expected_vertex_count, project_to_sphere, triangle_centroid,
};
