//! Mesh construction error types.

/// Errors that can occur while building a geodesic mesh.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// A vector with zero or non-finite length could not be projected onto the sphere.
    #[error("cannot project degenerate vector ({x}, {y}, {z}) onto sphere")]
    DegenerateVector {
        /// X component of the offending vector.
        x: f64,
        /// Y component of the offending vector.
        y: f64,
        /// Z component of the offending vector.
        z: f64,
    },

    /// The sphere radius must be positive and finite.
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
}
