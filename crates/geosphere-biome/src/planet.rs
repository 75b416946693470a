//! The planet aggregate: geometry plus per-face biomes.

use geosphere_mesh::{MeshError, MeshGeometry, build_mesh};
use rand::Rng;

use crate::{BiomeMap, DEFAULT_LAND_RADIUS_FACTOR, classify};

/// Parameters for building a [`Planet`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetSettings {
    /// Number of subdivision passes.
    pub detail: u32,
    /// Sphere radius in canvas units.
    pub radius: f64,
    /// How many land centers to scatter.
    pub land_center_count: usize,
    /// Land reach as a fraction of `radius`.
    pub land_radius_factor: f64,
}

impl Default for PlanetSettings {
    fn default() -> Self {
        Self {
            detail: 3,
            radius: 180.0,
            land_center_count: 7,
            land_radius_factor: DEFAULT_LAND_RADIUS_FACTOR,
        }
    }
}

/// A classified geodesic sphere, rebuilt wholesale whenever settings change.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    /// Vertices and faces.
    pub geometry: MeshGeometry,
    /// Land centers and per-face biomes, parallel to `geometry.faces`.
    pub biomes: BiomeMap,
}

impl Planet {
    /// Build the mesh, then classify it once.
    pub fn generate<R: Rng>(settings: &PlanetSettings, rng: &mut R) -> Result<Self, MeshError> {
        let geometry = build_mesh(settings.detail, settings.radius)?;
        let biomes = classify(
            &geometry.vertices,
            &geometry.faces,
            geometry.radius,
            settings.land_center_count,
            settings.land_radius_factor,
            rng,
        );
        Ok(Self { geometry, biomes })
    }

    /// Vertex positions.
    pub fn vertices(&self) -> &[glam::DVec3] {
        &self.geometry.vertices
    }

    /// Triangles.
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.geometry.faces
    }

    /// Biome of each face, in face order.
    pub fn face_biomes(&self) -> &[crate::Biome] {
        &self.biomes.face_biomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::land_rng;

    #[test]
    fn test_generate_default() {
        let planet = Planet::generate(&PlanetSettings::default(), &mut land_rng(Some(11))).unwrap();
        assert_eq!(planet.faces().len(), 20 * 4usize.pow(3));
        assert_eq!(planet.face_biomes().len(), planet.faces().len());
        assert_eq!(planet.biomes.land_centers.len(), 7);
    }

    #[test]
    fn test_generate_rejects_bad_radius() {
        let settings = PlanetSettings {
            radius: 0.0,
            ..PlanetSettings::default()
        };
        assert!(Planet::generate(&settings, &mut land_rng(Some(1))).is_err());
    }

    #[test]
    fn test_regenerate_replaces_centers() {
        let settings = PlanetSettings::default();
        let mut rng = land_rng(Some(8));
        let first = Planet::generate(&settings, &mut rng).unwrap();
        let second = Planet::generate(&settings, &mut rng).unwrap();
        assert_eq!(first.geometry, second.geometry);
        assert_ne!(first.biomes.land_centers, second.biomes.land_centers);
    }
}
