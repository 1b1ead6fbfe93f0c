use thiserror::Error;

use crate::lattice::LatticeCoord;

#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("Invalid lattice: {0}")]
    InvalidLattice(String),

    #[error("Invalid lattice coordinate {coord}: sub-site index must be in 0..{basis_count}")]
    InvalidCoordinate {
        coord: LatticeCoord,
        basis_count: usize,
    },

    #[error("Invalid lattice definition: {0}")]
    Definition(String),

    #[error("Failed to parse lattice definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
