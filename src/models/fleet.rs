use std::collections::{BTreeMap, HashMap};
use tracing::info;

use super::errors::{SimError, SimResult};
use super::position::Cell;
use super::vessel::{Vessel, VesselId};

/// Read-only occupancy lookup used by target resolution.
pub trait SpatialIndex {
    /// The vessel standing on `cell`, if any.
    fn occupant_at(&self, cell: Cell) -> Option<VesselId>;
}

/// Occupancy captured at one instant. Later moves do not show up in it.
#[derive(Debug, Clone, Default)]
pub struct OccupancyMap {
    cells: HashMap<Cell, VesselId>,
}

impl OccupancyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` on `cell`. When two vessels share a cell the lower id wins.
    pub fn insert(&mut self, cell: Cell, id: VesselId) {
        self.cells
            .entry(cell)
            .and_modify(|current| *current = (*current).min(id))
            .or_insert(id);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl SpatialIndex for OccupancyMap {
    fn occupant_at(&self, cell: Cell) -> Option<VesselId> {
        self.cells.get(&cell).copied()
    }
}

impl FromIterator<(Cell, VesselId)> for OccupancyMap {
    fn from_iter<I: IntoIterator<Item = (Cell, VesselId)>>(iter: I) -> Self {
        let mut map = OccupancyMap::new();
        for (cell, id) in iter {
            map.insert(cell, id);
        }
        map
    }
}

/// Registry of every vessel in the battle, ordered by id.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    vessels: BTreeMap<VesselId, Vessel>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vessel. Ids must be unique and the cell free.
    pub fn add(&mut self, vessel: Vessel) -> SimResult<()> {
        if self.vessels.contains_key(&vessel.id()) {
            return Err(SimError::InvalidState(format!(
                "vessel {} is already registered",
                vessel.id()
            )));
        }
        if let Some(other) = self.occupancy().occupant_at(vessel.position()) {
            return Err(SimError::InvalidState(format!(
                "cell {} is already held by vessel {other}",
                vessel.position()
            )));
        }

        info!(vessel = %vessel.id(), name = vessel.name(), class = vessel.class().name, cell = %vessel.position(), "vessel joined");
        self.vessels.insert(vessel.id(), vessel);
        Ok(())
    }

    /// Take a vessel out of the battle, discarding its pending move and
    /// projectiles.
    pub fn remove(&mut self, id: VesselId) -> SimResult<Vessel> {
        let mut vessel = self.vessels.remove(&id).ok_or(SimError::UnknownVessel(id))?;
        vessel.cancel_move();
        vessel.clear_projectiles();
        info!(vessel = %id, "vessel left");
        Ok(vessel)
    }

    pub fn get(&self, id: VesselId) -> SimResult<&Vessel> {
        self.vessels.get(&id).ok_or(SimError::UnknownVessel(id))
    }

    pub fn get_mut(&mut self, id: VesselId) -> SimResult<&mut Vessel> {
        self.vessels.get_mut(&id).ok_or(SimError::UnknownVessel(id))
    }

    pub fn contains(&self, id: VesselId) -> bool {
        self.vessels.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vessel> {
        self.vessels.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = VesselId> + '_ {
        self.vessels.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.vessels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }

    /// Snapshot of committed positions.
    pub fn occupancy(&self) -> OccupancyMap {
        self.vessels
            .values()
            .map(|v| (v.position(), v.id()))
            .collect()
    }

    /// Release every held-back shot in the fleet.
    pub fn release_pending(&mut self) {
        for vessel in self.vessels.values_mut() {
            vessel.release_held();
        }
    }

    /// Drop every projectile, e.g. once all of them have landed.
    pub fn retire_all_projectiles(&mut self) {
        for vessel in self.vessels.values_mut() {
            vessel.clear_projectiles();
        }
    }
}
