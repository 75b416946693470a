//! Land center placement and per-face classification.

use geosphere_mesh::triangle_centroid;
use glam::DVec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Land reach as a fraction of the sphere radius.
pub const DEFAULT_LAND_RADIUS_FACTOR: f64 = 0.55;

/// Surface type of a single face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Biome {
    /// Within reach of a land center.
    Land,
    /// Everything else.
    Sea,
}

/// Result of classifying every face of a mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BiomeMap {
    /// Points the land masses grow around. Not rendered.
    pub land_centers: Vec<DVec3>,
    /// One entry per face, in face order.
    pub face_biomes: Vec<Biome>,
}

impl BiomeMap {
    /// Number of faces classified as land.
    pub fn land_count(&self) -> usize {
        self.face_biomes.iter().filter(|b| **b == Biome::Land).count()
    }

    /// Number of faces classified as sea.
    pub fn sea_count(&self) -> usize {
        self.face_biomes.len() - self.land_count()
    }
}

/// Build the RNG used for land placement.
///
/// A fixed seed gives the same continents every time; `None` draws a fresh
/// seed from the thread RNG.
pub fn land_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}

/// Scatter `count` points uniformly over the sphere of the given radius.
///
/// The polar angle comes from `acos(2u - 1)` so points do not bunch up at the
/// poles.
pub fn random_land_centers<R: Rng>(rng: &mut R, radius: f64, count: usize) -> Vec<DVec3> {
    (0..count)
        .map(|_| {
            let theta = (2.0 * rng.random::<f64>() - 1.0).acos();
            let phi = std::f64::consts::TAU * rng.random::<f64>();
            DVec3::new(
                radius * theta.sin() * phi.cos(),
                radius * theta.sin() * phi.sin(),
                radius * theta.cos(),
            )
        })
        .collect()
}

/// Classify a single point: land if strictly closer than `threshold` to any center.
pub fn classify_point(point: DVec3, land_centers: &[DVec3], threshold: f64) -> Biome {
    if land_centers
        .iter()
        .any(|center| point.distance(*center) < threshold)
    {
        Biome::Land
    } else {
        Biome::Sea
    }
}

/// Place `land_center_count` centers and classify every face by its centroid.
///
/// Zero centers yields an all-sea sphere.
pub fn classify<R: Rng>(
    vertices: &[DVec3],
    faces: &[[u32; 3]],
    radius: f64,
    land_center_count: usize,
    land_radius_factor: f64,
    rng: &mut R,
) -> BiomeMap {
    let land_centers = random_land_centers(rng, radius, land_center_count);
    let threshold = land_radius_factor * radius;

    let face_biomes: Vec<Biome> = faces
        .iter()
        .map(|&face| classify_point(triangle_centroid(vertices, face), &land_centers, threshold))
        .collect();

    let map = BiomeMap {
        land_centers,
        face_biomes,
    };
    debug!(
        centers = land_center_count,
        land = map.land_count(),
        sea = map.sea_count(),
        "classified faces"
    );
    map
}
