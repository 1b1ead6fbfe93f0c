// Axis-aligned rectangles: selection regions for enclosure queries and tile bounds

use nalgebra::Vector2;

/// Axis-aligned rectangle given by its lower-left and upper-right corners.
///
/// Carries no unit of its own; the caller decides whether the corners are physical or
/// scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl BoundingBox2D {
    /// Rectangle from already ordered corners.
    ///
    /// # Panics
    /// In debug builds, if `min` exceeds `max` on either axis.
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y,
            "Rectangle corners out of order: min {:?}, max {:?}",
            min,
            max
        );
        Self { min, max }
    }

    /// Rectangle spanned by two opposite corners in any order, e.g. a rubber-band
    /// selection dragged up and to the left.
    pub fn from_corners(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Smallest rectangle holding every point, `None` for no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self { min: first, max: first }, |bbox, p| Self {
            min: bbox.min.inf(&p),
            max: bbox.max.sup(&p),
        }))
    }

    /// Boundary counts as inside.
    pub fn contains(&self, point: Vector2<f64>) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }

    /// The four corners, counter-clockwise from `min`.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        [
            self.min,
            Vector2::new(self.max.x, self.min.y),
            self.max,
            Vector2::new(self.min.x, self.max.y),
        ]
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Both corners multiplied by `factor`, i.e. a change of length unit.
    pub fn scaled(&self, factor: f64) -> BoundingBox2D {
        BoundingBox2D::from_corners(self.min * factor, self.max * factor)
    }
}
