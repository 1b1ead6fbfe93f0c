use std::fs;
use std::path::Path;

use log::info;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_SCALE_FACTOR, EngineConfig};
use crate::errors::LatticeError;
use crate::lattice::LatticeGeometry;

// Standard lattice construction utilities for common 2D lattices, one basis site at the origin

/// Create a square lattice with given lattice parameter
pub fn square_lattice(a: f64, scale_factor: f64) -> Result<LatticeGeometry, LatticeError> {
    rectangular_lattice(a, a, scale_factor)
}

/// Create a rectangular lattice with given lattice parameters
pub fn rectangular_lattice(a: f64, b: f64, scale_factor: f64) -> Result<LatticeGeometry, LatticeError> {
    LatticeGeometry::new(
        Vector2::new(a, 0.0),
        Vector2::new(0.0, b),
        vec![Vector2::zeros()],
        scale_factor,
        EngineConfig::default(),
    )
}

/// Create a hexagonal lattice with given lattice parameter (γ = 60°)
pub fn hexagonal_lattice(a: f64, scale_factor: f64) -> Result<LatticeGeometry, LatticeError> {
    oblique_lattice(a, a, 60.0_f64.to_radians(), scale_factor)
}

/// Create an oblique lattice with given parameters and angle γ (radians) between a1 and a2
pub fn oblique_lattice(a: f64, b: f64, gamma: f64, scale_factor: f64) -> Result<LatticeGeometry, LatticeError> {
    LatticeGeometry::new(
        Vector2::new(a, 0.0),
        Vector2::new(b * gamma.cos(), b * gamma.sin()),
        vec![Vector2::zeros()],
        scale_factor,
        EngineConfig::default(),
    )
}

/// Hydrogen-terminated Si(100)-2×1 surface: dimer rows along a2, two dangling-bond sites
/// per unit cell. Lengths in Å.
pub fn si_100_2x1_lattice(scale_factor: f64) -> Result<LatticeGeometry, LatticeError> {
    si_100_2x1_definition(scale_factor).build()
}

fn si_100_2x1_definition(scale_factor: f64) -> LatticeDefinition {
    LatticeDefinition {
        name: Some("Si(100)-2x1".to_string()),
        vectors: LatticeVectors::Explicit {
            a1: [3.84, 0.0],
            a2: [0.0, 7.68],
        },
        basis: vec![[0.0, 0.0], [0.0, 2.25]],
        scale_factor,
        config: EngineConfig::default(),
    }
}

/// How the two lattice vectors are given in a lattice definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LatticeVectors {
    /// Both vectors given component-wise.
    Explicit { a1: [f64; 2], a2: [f64; 2] },
    /// Lengths `a = |a1|`, `b = |a2|` and the angle between them in degrees; `a1` lies along x.
    Parameters { a: f64, b: f64, gamma_deg: f64 },
}

impl LatticeVectors {
    pub fn resolve(&self) -> (Vector2<f64>, Vector2<f64>) {
        match *self {
            LatticeVectors::Explicit { a1, a2 } => (Vector2::from(a1), Vector2::from(a2)),
            LatticeVectors::Parameters { a, b, gamma_deg } => {
                let gamma = gamma_deg.to_radians();
                (
                    Vector2::new(a, 0.0),
                    Vector2::new(b * gamma.cos(), b * gamma.sin()),
                )
            }
        }
    }
}

fn default_scale_factor() -> f64 {
    DEFAULT_SCALE_FACTOR
}

/// Serializable description of a lattice, as stored in a lattice definition file.
///
/// ```toml
/// name = "Si(100)-2x1"
/// scale_factor = 10.0
/// basis = [[0.0, 0.0], [0.0, 2.25]]
///
/// [vectors]
/// kind = "explicit"
/// a1 = [3.84, 0.0]
/// a2 = [0.0, 7.68]
///
/// [config]
/// rationalize_max_iterations = 12
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeDefinition {
    #[serde(default)]
    pub name: Option<String>,
    pub vectors: LatticeVectors,
    /// Basis-site offsets within the unit cell, physical units.
    pub basis: Vec<[f64; 2]>,
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
    #[serde(default)]
    pub config: EngineConfig,
}

impl LatticeDefinition {
    pub fn from_toml_str(text: &str) -> Result<Self, LatticeError> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> Result<String, LatticeError> {
        toml::to_string(self).map_err(|e| LatticeError::Definition(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LatticeError> {
        let path = path.as_ref();
        let definition = Self::from_toml_str(&fs::read_to_string(path)?)?;
        info!(
            "Loaded lattice definition '{}' from {}",
            definition.name.as_deref().unwrap_or("unnamed"),
            path.display()
        );
        Ok(definition)
    }

    /// Build the geometry model described by this definition.
    pub fn build(&self) -> Result<LatticeGeometry, LatticeError> {
        let (a1, a2) = self.vectors.resolve();
        let basis = self.basis.iter().map(|b| Vector2::from(*b)).collect();
        LatticeGeometry::new(a1, a2, basis, self.scale_factor, self.config.clone())
    }
}

impl Default for LatticeDefinition {
    fn default() -> Self {
        si_100_2x1_definition(DEFAULT_SCALE_FACTOR)
    }
}
