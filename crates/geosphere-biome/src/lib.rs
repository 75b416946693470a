//! Land/sea classification for geodesic spheres.
//!
//! A handful of land centers are scattered uniformly over the sphere; every
//! face whose centroid lies close enough to one of them becomes land, the rest
//! is sea. The random source is passed in explicitly so seeded runs are
//! reproducible.

mod land;
mod planet;

pub use land::{
    Biome, BiomeMap, DEFAULT_LAND_RADIUS_FACTOR, classify, classify_point, land_rng,
    random_land_centers,
};
pub use planet::{Planet, PlanetSettings};
