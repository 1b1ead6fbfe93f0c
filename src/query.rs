// Query module: spatial queries combining lattice geometry with site occupancy

// ======================== MODULE DECLARATIONS ========================
pub mod spatial_query;


// ======================== QUERY FACADE ========================
pub use spatial_query::SpatialQuery; // struct - borrows a LatticeGeometry and a SiteOccupancy
// SpatialQuery<'a, H> impl methods:
//   new(geometry: &LatticeGeometry, occupancy: &SiteOccupancy<H>) -> Self
//   occupants_at_physical_locations(&self, points: &[Vector2<f64>]) -> Vec<H> - occupied hits only
//   occupant_nearest(&self, point: Vector2<f64>, space: Space) -> Option<(LatticeCoord, &H)>
//   collides_with_site(&self, scene_pos: Vector2<f64>, coord: &LatticeCoord) -> Result<bool>
