// Constants

use serde::{Deserialize, Serialize};

use crate::render::Rgba;

// Tolerances
pub const BASE_VECTOR_TOLERANCE: f64 = 1e-10; // For construction of base matrices
pub const LATTICE_TOLERANCE: f64 = 1e-10; // For most lattice operations

// Defaults for the engine configuration
pub const DEFAULT_RATIONALIZE_ACCURACY: f64 = 1e-3;
pub const DEFAULT_RATIONALIZE_ITERATIONS: usize = 10;
pub const DEFAULT_SITE_COLLISION_RADIUS: f64 = 0.5; // physical units (Å for the presets)
pub const DEFAULT_SCALE_FACTOR: f64 = 10.0; // scene units per physical unit
pub const DEFAULT_MAX_TILE_EXTENT: f64 = 4096.0; // scene units (pixels) per tile side

/// Appearance of a rendered lattice site, in physical length units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteStyle {
    pub diameter: f64,
    pub edge_width: f64,
    pub fill: Rgba,
    pub edge: Rgba,
}

impl SiteStyle {
    /// Style used for the interactive background.
    pub fn interactive() -> Self {
        SiteStyle {
            diameter: 0.5,
            edge_width: 0.06,
            fill: Rgba::new(255, 255, 255, 0),
            edge: Rgba::new(255, 255, 255, 60),
        }
    }

    /// Style used for publication-quality output.
    pub fn publish() -> Self {
        SiteStyle {
            diameter: 0.5,
            edge_width: 0.06,
            fill: Rgba::new(255, 255, 255, 0),
            edge: Rgba::new(0, 0, 0, 255),
        }
    }
}

impl Default for SiteStyle {
    fn default() -> Self {
        Self::interactive()
    }
}

/// Tunables of the lattice engine.
///
/// Passed to the geometry model at construction so that tests can vary the
/// rationalization budget and collision radius deterministically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Termination accuracy `|p/q - x|` for [`crate::lattice::rationalize`].
    pub rationalize_accuracy: f64,
    /// Maximum number of continued-fraction terms evaluated.
    pub rationalize_max_iterations: usize,
    /// Distance (physical units) within which a point collides with a site.
    pub site_collision_radius: f64,
    /// Upper bound (scene units) on either side of the tile image.
    pub max_tile_extent: f64,
    pub tile_style: SiteStyle,
    pub publish_style: SiteStyle,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            rationalize_accuracy: DEFAULT_RATIONALIZE_ACCURACY,
            rationalize_max_iterations: DEFAULT_RATIONALIZE_ITERATIONS,
            site_collision_radius: DEFAULT_SITE_COLLISION_RADIUS,
            max_tile_extent: DEFAULT_MAX_TILE_EXTENT,
            tile_style: SiteStyle::interactive(),
            publish_style: SiteStyle::publish(),
        }
    }
}

impl EngineConfig {
    pub fn with_rationalize(mut self, accuracy: f64, max_iterations: usize) -> Self {
        self.rationalize_accuracy = accuracy;
        self.rationalize_max_iterations = max_iterations;
        self
    }

    pub fn with_collision_radius(mut self, radius: f64) -> Self {
        self.site_collision_radius = radius;
        self
    }

    pub fn with_max_tile_extent(mut self, extent: f64) -> Self {
        self.max_tile_extent = extent;
        self
    }

    pub fn style(&self, high_quality: bool) -> &SiteStyle {
        if high_quality {
            &self.publish_style
        } else {
            &self.tile_style
        }
    }
}
