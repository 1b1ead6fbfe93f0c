//! Lattice module: lattice coordinates, the lattice geometry model and its algorithms.
//!
//! Quick reference
//! - Types: [`LatticeCoord`], [`LatticeGeometry`], [`BaseMatrix`], [`Rational`], [`LatticeDefinition`]
//! - Conversions: [`LatticeGeometry::lattice_to_physical`], [`LatticeGeometry::physical_to_scene`],
//!   [`LatticeGeometry::scene_to_physical`], [`LatticeGeometry::fractional_indices`]
//! - Queries: [`LatticeGeometry::nearest_site`], [`LatticeGeometry::enclosed_sites_in_rect`],
//!   [`LatticeGeometry::enclosed_sites_between`]
//! - Tiling: [`rationalize`], [`LatticeGeometry::tile_approx`], [`LatticeGeometry::tile_pixel_size`]
//! - Construction: [`square_lattice`], [`rectangular_lattice`], [`hexagonal_lattice`],
//!   [`oblique_lattice`], [`si_100_2x1_lattice`]
//!
//! See submodules for full details: [`lattice_coord`], [`base_matrix`], [`lattice_geometry`],
//! [`lattice_algorithms`], [`lattice_construction`].

// ======================== MODULE DECLARATIONS ========================
pub mod base_matrix;
pub mod lattice_algorithms;
pub mod lattice_construction;
pub mod lattice_coord;
pub mod lattice_geometry;


// ======================== RE-EXPORTED PUBLIC API (curated) ========================
#[doc(inline)]
pub use lattice_coord::LatticeCoord;

#[doc(inline)]
pub use lattice_geometry::LatticeGeometry;

pub use base_matrix::BaseMatrix;

pub use lattice_algorithms::{Rational, rationalize};

pub use lattice_construction::{
    LatticeDefinition, LatticeVectors, hexagonal_lattice, oblique_lattice, rectangular_lattice,
    si_100_2x1_lattice, square_lattice,
};

/// A convenience prelude for importing common lattice items.
pub mod prelude {
    #[doc(no_inline)]
    pub use super::{LatticeCoord, LatticeGeometry};
    #[doc(no_inline)]
    pub use crate::interfaces::Space;
}
