//! Lattice coordinate engine
//!
//! This library defines a periodic 2D lattice with a multi-site unit cell and converts
//! between lattice-index space, physical space and rendering (scene) space. On top of the
//! geometry it answers spatial queries, keeps an occupancy index of placed features and
//! rasterises a tileable image of the lattice for background display.

pub mod config;
pub mod errors;
pub mod geometries;
pub mod interfaces;
pub mod lattice;
pub mod occupancy;
pub mod query;
pub mod render;

pub use config::EngineConfig;
pub use errors::LatticeError;
pub use interfaces::Space;
pub use lattice::{LatticeCoord, LatticeGeometry};
pub use occupancy::SiteOccupancy;
pub use query::SpatialQuery;
pub use render::{Rgba, TileImage};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, LatticeError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
