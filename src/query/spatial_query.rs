use nalgebra::Vector2;

use crate::errors::LatticeError;
use crate::interfaces::Space;
use crate::lattice::{LatticeCoord, LatticeGeometry};
use crate::occupancy::SiteOccupancy;

/// Read-only view combining one geometry snapshot with the occupancy recorded against it.
///
/// Borrowing both keeps the occupancy from being mutated while a query against the same
/// geometry is in flight.
#[derive(Debug, Clone, Copy)]
pub struct SpatialQuery<'a, H> {
    geometry: &'a LatticeGeometry,
    occupancy: &'a SiteOccupancy<H>,
}

impl<'a, H> SpatialQuery<'a, H> {
    pub fn new(geometry: &'a LatticeGeometry, occupancy: &'a SiteOccupancy<H>) -> Self {
        SpatialQuery {
            geometry,
            occupancy,
        }
    }

    pub fn geometry(&self) -> &'a LatticeGeometry {
        self.geometry
    }

    /// Occupants at the sites nearest to each physical location.
    ///
    /// Points whose nearest site is free are skipped. Output follows input order, and two
    /// points snapping to the same site report its occupant twice.
    pub fn occupants_at_physical_locations(&self, points: &[Vector2<f64>]) -> Vec<H>
    where
        H: Clone,
    {
        points
            .iter()
            .filter_map(|point| {
                let (coord, _) = self.geometry.nearest_site(*point, Space::Physical);
                self.occupancy.occupant_at(&coord).cloned()
            })
            .collect()
    }

    /// Nearest site to `point` together with its occupant, if the site is occupied.
    pub fn occupant_nearest(&self, point: Vector2<f64>, space: Space) -> Option<(LatticeCoord, &'a H)> {
        let (coord, _) = self.geometry.nearest_site(point, space);
        self.occupancy.occupant_at(&coord).map(|occupant| (coord, occupant))
    }

    /// Whether `scene_pos` lies within the configured site collision radius of `coord`.
    pub fn collides_with_site(&self, scene_pos: Vector2<f64>, coord: &LatticeCoord) -> Result<bool, LatticeError> {
        let site = self.geometry.lattice_to_physical(coord)?;
        let point = self.geometry.scene_to_physical(scene_pos);
        Ok((point - site).norm() <= self.geometry.config().site_collision_radius)
    }
}
