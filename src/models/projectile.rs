use serde::Serialize;
use std::fmt;

use super::navigation_types::Side;
use super::position::Cell;
use super::vessel::VesselId;
use super::vessel_class::CannonSize;

/// Identifies a cannonball. Sequence numbers are per owner and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ProjectileId {
    pub owner: VesselId,
    pub seq: u32,
}

impl fmt::Display for ProjectileId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.seq)
    }
}

/// A cannonball in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projectile {
    pub id: ProjectileId,
    pub origin: Cell,
    pub target: Cell,
    pub side: Side,
    pub size: CannonSize,
    /// Set when a vessel occupied the target cell at spawn time.
    pub explodes_on_reach: bool,
    /// Second shot of a double shot, linked from the first.
    pub paired_with: Option<ProjectileId>,
    /// False for a held-back second shot until it is released.
    pub released: bool,
}

impl Projectile {
    pub fn new(id: ProjectileId, origin: Cell, target: Cell, side: Side, size: CannonSize) -> Self {
        Projectile {
            id,
            origin,
            target,
            side,
            size,
            explodes_on_reach: false,
            paired_with: None,
            released: true,
        }
    }

    pub fn owner(&self) -> VesselId {
        self.id.owner
    }
}
