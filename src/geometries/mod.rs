// Geometries module: geometric primitives shared by lattice queries and tile rendering

// ======================== MODULE DECLARATIONS ========================
pub mod geometry2d_bounding_box;

// Test modules
mod _tests_geometry2d_bounding_box;

// ======================== GEOMETRIC UTILITIES ========================
pub use geometry2d_bounding_box::BoundingBox2D; // struct - 2D axis-aligned bounding box
// BoundingBox2D impl methods:
//   new(min: Vector2<f64>, max: Vector2<f64>) -> Self        - creates bounding box from ordered corners
//   from_corners(a: Vector2<f64>, b: Vector2<f64>) -> Self   - creates bounding box from any two opposite corners
//   from_points(points) -> Option<Self>                      - creates bounding box containing all points
//   contains(&self, point: Vector2<f64>) -> bool             - checks if point is inside box (inclusive)
//   corners(&self) -> [Vector2<f64>; 4]                      - returns the four corners
//   width(&self) -> f64                                      - returns box width (x-dimension)
//   height(&self) -> f64                                     - returns box height (y-dimension)
//   scaled(&self, factor: f64) -> BoundingBox2D              - scales box corners about the origin
