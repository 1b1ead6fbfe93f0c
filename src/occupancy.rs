// Occupancy module: bookkeeping of which lattice sites hold a placed feature

// ======================== MODULE DECLARATIONS ========================
pub mod site_occupancy;


// ======================== OCCUPANCY INDEX ========================
pub use site_occupancy::SiteOccupancy; // struct - LatticeCoord -> occupant handle, one occupant per site
// SiteOccupancy<H> impl methods:
//   new() -> Self                                              - creates an empty index
//   set_occupied(&mut self, coord, occupant: H) -> Option<H>   - inserts, returns the replaced handle
//   set_unoccupied(&mut self, coord: &LatticeCoord) -> Option<H> - removes if present
//   is_occupied(&self, coord: &LatticeCoord) -> bool           - membership test
//   occupant_at(&self, coord: &LatticeCoord) -> Option<&H>     - occupant lookup
//   clear(&mut self)                                           - drops all entries (occupants untouched)
//   len(&self) -> usize, is_empty(&self) -> bool               - size
//   iter(&self) -> impl Iterator<Item = (&LatticeCoord, &H)>   - occupied sites
