use nalgebra::{Matrix2, Vector2};

use crate::config::BASE_VECTOR_TOLERANCE;
use crate::errors::LatticeError;

/// Validated pair of 2D lattice vectors together with the scalars derived from them.
///
/// The derived scalars are what the closed-form inversion into fractional lattice
/// indices needs: squared lengths, the orthogonality flag and the cotangent of the
/// angle between the two vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseMatrix {
    base_matrix: Matrix2<f64>,
    squared_lengths: [f64; 2],
    dot: f64,
    orthogonal: bool,
    coth: f64,
}

impl BaseMatrix {
    pub fn from_base_vectors(
        base_1: Vector2<f64>,
        base_2: Vector2<f64>,
    ) -> Result<Self, LatticeError> {
        // Run tests on the base vectors to decide whether a base matrix can be constructed
        if !base_1.iter().chain(base_2.iter()).all(|c| c.is_finite()) {
            return Err(LatticeError::InvalidLattice(
                "Lattice vectors must have finite components.".to_string(),
            ));
        }
        if base_1.norm() < BASE_VECTOR_TOLERANCE || base_2.norm() < BASE_VECTOR_TOLERANCE {
            return Err(LatticeError::InvalidLattice(
                "Lattice vectors must not be zero.".to_string(),
            ));
        }

        // Linearly non-dependent
        let cross = base_1.perp(&base_2);
        if cross.abs() < BASE_VECTOR_TOLERANCE {
            return Err(LatticeError::InvalidLattice(
                "Lattice vectors are linearly dependent.".to_string(),
            ));
        }

        let dot = base_1.dot(&base_2);
        let orthogonal = dot == 0.0;
        let coth = if orthogonal { 0.0 } else { dot / cross.abs() };

        Ok(BaseMatrix {
            base_matrix: Matrix2::from_columns(&[base_1, base_2]),
            squared_lengths: [base_1.norm_squared(), base_2.norm_squared()],
            dot,
            orthogonal,
            coth,
        })
    }

    pub fn from_matrix(matrix: Matrix2<f64>) -> Result<Self, LatticeError> {
        Self::from_base_vectors(matrix.column(0).into(), matrix.column(1).into())
    }

    /// Solve `point = a1 * n_f + a2 * m_f` for the real-valued indices `(n_f, m_f)`.
    ///
    /// Orthogonal vectors reduce to independent projections. Otherwise the projections
    /// are decoupled with the cotangent: `1 + coth² = |a1|²|a2|² / |a1×a2|²`.
    pub fn fractional(&self, point: Vector2<f64>) -> Vector2<f64> {
        let [a1, a2] = self.base_vectors();
        let [len1_sq, len2_sq] = self.squared_lengths;
        let d1 = point.dot(&a1) / len1_sq;
        let d2 = point.dot(&a2) / len2_sq;

        if self.orthogonal {
            return Vector2::new(d1, d2);
        }

        let decouple = 1.0 + self.coth * self.coth;
        Vector2::new(
            decouple * (d1 - d2 * self.dot / len1_sq),
            decouple * (d2 - d1 * self.dot / len2_sq),
        )
    }

    /// `a1 * n + a2 * m` for real-valued indices.
    pub fn cartesian(&self, fractional: Vector2<f64>) -> Vector2<f64> {
        self.base_matrix * fractional
    }

    pub fn base_matrix(&self) -> &Matrix2<f64> {
        &self.base_matrix
    }

    pub fn base_vectors(&self) -> [Vector2<f64>; 2] {
        [
            self.base_matrix.column(0).into(),
            self.base_matrix.column(1).into(),
        ]
    }

    pub fn squared_lengths(&self) -> [f64; 2] {
        self.squared_lengths
    }

    pub fn is_orthogonal(&self) -> bool {
        self.orthogonal
    }

    /// Cotangent of the angle between the two vectors (zero when orthogonal).
    pub fn cotangent(&self) -> f64 {
        self.coth
    }

    /// Signed unit-cell area `a1 × a2`.
    pub fn determinant(&self) -> f64 {
        self.base_matrix.determinant()
    }
}
