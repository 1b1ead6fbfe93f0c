use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Identifies a lattice site: unit-cell indices `n`, `m` and the sub-site index `l`
/// into the unit-cell basis.
///
/// Arithmetic is component-wise and may produce coordinates that are not valid;
/// validate after combining coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LatticeCoord {
    pub n: i32,
    pub m: i32,
    pub l: i32,
}

impl LatticeCoord {
    pub const fn new(n: i32, m: i32, l: i32) -> Self {
        LatticeCoord { n, m, l }
    }

    /// The empty coordinate `(-1, -1, -1)`, never valid.
    pub const fn invalid() -> Self {
        LatticeCoord { n: -1, m: -1, l: -1 }
    }

    /// Structural validity: all components non-negative.
    ///
    /// The geometry model applies the stricter check that `l` is below the basis count,
    /// see [`crate::lattice::LatticeGeometry::is_valid_coord`].
    pub fn is_valid(&self) -> bool {
        self.n >= 0 && self.m >= 0 && self.l >= 0
    }
}

impl Default for LatticeCoord {
    fn default() -> Self {
        Self::invalid()
    }
}

impl Add for LatticeCoord {
    type Output = LatticeCoord;

    fn add(self, other: LatticeCoord) -> LatticeCoord {
        LatticeCoord::new(self.n + other.n, self.m + other.m, self.l + other.l)
    }
}

impl Sub for LatticeCoord {
    type Output = LatticeCoord;

    fn sub(self, other: LatticeCoord) -> LatticeCoord {
        LatticeCoord::new(self.n - other.n, self.m - other.m, self.l - other.l)
    }
}

impl Mul<i32> for LatticeCoord {
    type Output = LatticeCoord;

    fn mul(self, k: i32) -> LatticeCoord {
        LatticeCoord::new(self.n * k, self.m * k, self.l * k)
    }
}

impl fmt::Display for LatticeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.n, self.m, self.l)
    }
}
