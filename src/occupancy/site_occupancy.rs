use indexmap::IndexMap;
use log::debug;
use rustc_hash::FxBuildHasher;

use crate::lattice::LatticeCoord;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Maps occupied lattice sites to a handle of the feature placed there.
///
/// The index never owns what the handles refer to: `H` is an id or weak handle whose
/// lifecycle belongs to the document layer. Clearing or overwriting an entry only drops
/// the handle. Inserting on an occupied site replaces the previous occupant; callers that
/// must not overwrite check [`SiteOccupancy::is_occupied`] first.
#[derive(Debug, Clone)]
pub struct SiteOccupancy<H> {
    occupied: FxIndexMap<LatticeCoord, H>,
}

impl<H> Default for SiteOccupancy<H> {
    fn default() -> Self {
        SiteOccupancy {
            occupied: FxIndexMap::default(),
        }
    }
}

impl<H> SiteOccupancy<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `occupant` at `coord`, returning the occupant it replaced, if any.
    pub fn set_occupied(&mut self, coord: LatticeCoord, occupant: H) -> Option<H> {
        debug!("set occupied {}, {}, {}", coord.n, coord.m, coord.l);
        self.occupied.insert(coord, occupant)
    }

    /// Mark `coord` as free. No-op when it was not occupied.
    pub fn set_unoccupied(&mut self, coord: &LatticeCoord) -> Option<H> {
        self.occupied.swap_remove(coord)
    }

    pub fn is_occupied(&self, coord: &LatticeCoord) -> bool {
        self.occupied.contains_key(coord)
    }

    pub fn occupant_at(&self, coord: &LatticeCoord) -> Option<&H> {
        self.occupied.get(coord)
    }

    /// Drop every entry. The occupants themselves are untouched.
    pub fn clear(&mut self) {
        debug!("clear occupation ({} site(s))", self.occupied.len());
        self.occupied.clear();
    }

    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Occupied sites with their occupants. Insertion order until the first removal.
    pub fn iter(&self) -> impl Iterator<Item = (&LatticeCoord, &H)> + '_ {
        self.occupied.iter()
    }
}
