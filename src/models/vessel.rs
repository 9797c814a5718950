use serde::Serialize;
use std::fmt;
use tracing::debug;

use super::errors::{SimError, SimResult};
use super::fleet::SpatialIndex;
use super::navigation_types::{Heading, MoveKind, ShotCount, Side};
use super::position::Cell;
use super::projectile::{Projectile, ProjectileId};
use super::snapshot::MoveSnapshot;
use super::vessel_class::VesselClass;
use crate::services::combat;
use crate::services::navigation::{self, MoveResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VesselId(pub u32);

impl fmt::Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A move that has been resolved but not yet committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    pub kind: MoveKind,
    pub start: Cell,
    pub heading_before: Heading,
    pub result: MoveResult,
}

/// A vessel's authoritative turn state.
///
/// Position and heading only change through [`Vessel::commit_move`]; the
/// presentation layer reads snapshots and never writes back.
#[derive(Debug, Clone)]
pub struct Vessel {
    id: VesselId,
    name: String,
    class: VesselClass,
    position: Cell,
    heading: Heading,
    pending: Option<PendingMove>,
    projectiles: Vec<Projectile>,
    next_projectile_seq: u32,
    /// Raised by a broadside, cleared by `take_firing_event`.
    firing: bool,
}

impl Vessel {
    pub fn new(
        id: VesselId,
        name: impl Into<String>,
        class: VesselClass,
        position: Cell,
        heading: Heading,
    ) -> Self {
        Vessel {
            id,
            name: name.into(),
            class,
            position,
            heading,
            pending: None,
            projectiles: Vec::new(),
            next_projectile_seq: 0,
            firing: false,
        }
    }

    pub fn id(&self) -> VesselId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> VesselClass {
        self.class
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn pending_move(&self) -> Option<&PendingMove> {
        self.pending.as_ref()
    }

    pub fn is_moving(&self) -> bool {
        self.pending.is_some()
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Resolve `kind` from the current cell and heading and hold it as the
    /// pending move.
    pub fn begin_move(&mut self, kind: MoveKind) -> SimResult<&MoveResult> {
        if let Some(pending) = &self.pending {
            return Err(SimError::InvalidState(format!(
                "vessel {} already has a pending {} move",
                self.id,
                pending.kind.name()
            )));
        }

        let result = navigation::resolve_move(self, kind);
        debug!(
            vessel = %self.id,
            kind = kind.name(),
            destination = %result.destination,
            heading = result.resulting_heading.index(),
            "move resolved"
        );

        let pending = self.pending.insert(PendingMove {
            kind,
            start: self.position,
            heading_before: self.heading,
            result,
        });
        Ok(&pending.result)
    }

    /// Apply the pending move. This is the only place position and heading
    /// change.
    pub fn commit_move(&mut self) -> SimResult<MoveSnapshot> {
        let pending = self.pending.take().ok_or_else(|| {
            SimError::InvalidState(format!("vessel {} has no pending move to commit", self.id))
        })?;

        self.position = pending.result.destination;
        self.heading = pending.result.resulting_heading;
        debug!(vessel = %self.id, cell = %self.position, heading = self.heading.index(), "move committed");

        Ok(MoveSnapshot {
            vessel: self.id,
            kind: pending.kind,
            start: pending.start,
            pass_through: pending.result.pass_through,
            destination: pending.result.destination,
            heading_before: pending.heading_before,
            heading_after: pending.result.resulting_heading,
        })
    }

    /// Drop the pending move without applying it.
    pub fn cancel_move(&mut self) -> Option<PendingMove> {
        self.pending.take()
    }

    /// Fire `shots` cannonballs from one side. Not allowed while a move is
    /// pending, since the firing cell is ambiguous until the commit.
    pub fn fire_broadside(
        &mut self,
        side: Side,
        shots: ShotCount,
        index: &dyn SpatialIndex,
    ) -> SimResult<&[Projectile]> {
        combat::spawn_shots(self, side, shots, index)
    }

    /// Whether a broadside fired since the last call.
    pub fn take_firing_event(&mut self) -> bool {
        std::mem::take(&mut self.firing)
    }

    /// Let a held-back second shot fly.
    pub fn release_projectile(&mut self, id: ProjectileId) -> SimResult<()> {
        let projectile = self
            .projectiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| SimError::InvalidArgument(format!("vessel {} has no projectile {id}", self.id)))?;
        projectile.released = true;
        Ok(())
    }

    /// Release every held-back shot. Returns how many were released.
    pub fn release_held(&mut self) -> usize {
        let mut released = 0;
        for projectile in self.projectiles.iter_mut().filter(|p| !p.released) {
            projectile.released = true;
            released += 1;
        }
        released
    }

    /// Remove a projectile that reached its target or expired.
    pub fn retire_projectile(&mut self, id: ProjectileId) -> SimResult<Projectile> {
        let index = self
            .projectiles
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| SimError::InvalidArgument(format!("vessel {} has no projectile {id}", self.id)))?;
        Ok(self.projectiles.remove(index))
    }

    pub fn clear_projectiles(&mut self) {
        self.projectiles.clear();
    }

    pub(crate) fn next_projectile_id(&mut self) -> ProjectileId {
        let id = ProjectileId {
            owner: self.id,
            seq: self.next_projectile_seq,
        };
        self.next_projectile_seq += 1;
        id
    }

    /// Append freshly spawned projectiles, raise the firing flag and return
    /// the appended records.
    pub(crate) fn push_projectiles(&mut self, batch: Vec<Projectile>) -> &[Projectile] {
        let start = self.projectiles.len();
        self.projectiles.extend(batch);
        self.firing = true;
        &self.projectiles[start..]
    }
}
