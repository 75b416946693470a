//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Canvas settings.
    pub window: WindowConfig,
    /// Planet geometry, classification and animation settings.
    pub globe: GlobeConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Canvas configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

/// Planet configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    /// Sphere radius in canvas units.
    pub radius: f64,
    /// Subdivision passes applied to the icosahedron.
    pub detail: u32,
    /// Spin rate in radians per second.
    pub rotation_speed: f64,
    /// Number of land centers scattered per build.
    pub land_center_count: u32,
    /// Land reach as a fraction of the radius.
    pub land_radius_factor: f64,
    /// Perspective distance. Must exceed the radius.
    pub field_of_view: f64,
    /// Stroke mesh edges over the filled faces.
    pub show_wireframe: bool,
    /// Seed for the land RNG, applied once when the globe screen is created.
    /// Each build draws its centers from that RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: 180.0,
            detail: 3,
            rotation_speed: 1.0,
            land_center_count: 7,
            land_radius_factor: 0.55,
            field_of_view: 400.0,
            show_wireframe: false,
            seed: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Validation ---

impl Config {
    /// Reject settings that would produce a degenerate planet or projection.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let globe = &self.globe;

        if !(globe.radius > 0.0 && globe.radius.is_finite()) {
            return Err(invalid("globe.radius", format!("must be positive, got {}", globe.radius)));
        }
        if !(globe.field_of_view.is_finite() && globe.field_of_view > globe.radius) {
            return Err(invalid(
                "globe.field_of_view",
                format!(
                    "must be greater than the radius ({}), got {}",
                    globe.radius, globe.field_of_view
                ),
            ));
        }
        if !(globe.land_radius_factor >= 0.0 && globe.land_radius_factor.is_finite()) {
            return Err(invalid(
                "globe.land_radius_factor",
                format!("must be non-negative, got {}", globe.land_radius_factor),
            ));
        }
        if !globe.rotation_speed.is_finite() {
            return Err(invalid(
                "globe.rotation_speed",
                format!("must be finite, got {}", globe.rotation_speed),
            ));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid(
                "window",
                format!("size must be non-zero, got {}x{}", self.window.width, self.window.height),
            ));
        }
        if globe.detail > 7 {
            log::warn!(
                "globe.detail = {} builds {} faces; expect a slow start",
                globe.detail,
                20u64 * 4u64.pow(globe.detail)
            );
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidValue { field, reason }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
