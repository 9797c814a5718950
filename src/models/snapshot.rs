//! Immutable records handed to the presentation and transport layers.

use serde::Serialize;

use super::navigation_types::{Heading, MoveKind, ShotCount, Side};
use super::position::Cell;
use super::projectile::{Projectile, ProjectileId};
use super::vessel::VesselId;
use super::vessel_class::CannonSize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveSnapshot {
    pub vessel: VesselId,
    pub kind: MoveKind,
    pub start: Cell,
    pub pass_through: Option<Cell>,
    pub destination: Cell,
    pub heading_before: Heading,
    pub heading_after: Heading,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectileSnapshot {
    pub id: ProjectileId,
    pub owner: VesselId,
    pub origin: Cell,
    pub target: Cell,
    pub side: Side,
    pub size: CannonSize,
    pub explodes_on_reach: bool,
    pub paired_with: Option<ProjectileId>,
    pub released: bool,
}

/// A broadside went off; presentation shows the smoke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiringEvent {
    pub vessel: VesselId,
    pub side: Side,
    pub shots: ShotCount,
    pub target: Cell,
}

impl From<&Projectile> for ProjectileSnapshot {
    fn from(p: &Projectile) -> Self {
        Self {
            id: p.id,
            owner: p.owner(),
            origin: p.origin,
            target: p.target,
            side: p.side,
            size: p.size,
            explodes_on_reach: p.explodes_on_reach,
            paired_with: p.paired_with,
            released: p.released,
        }
    }
}
