use serde::Serialize;

use super::errors::{SimError, SimResult};
use super::navigation_types::{ShotCount, Side};
use super::position::Cell;
use super::projectile::{Projectile, ProjectileId};

/// Cannonball weight a vessel class fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CannonSize {
    Small,
    Medium,
    Large,
}

impl CannonSize {
    pub fn name(&self) -> &'static str {
        match self {
            CannonSize::Small => "SMALL",
            CannonSize::Medium => "MEDIUM",
            CannonSize::Large => "LARGE",
        }
    }
}

/// Capabilities shared by every vessel of one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VesselClass {
    pub name: &'static str,
    /// Shots the class can load per side in one action.
    pub max_cannons: u8,
    pub cannon: CannonSize,
}

impl VesselClass {
    pub const SLOOP: VesselClass = VesselClass {
        name: "Sloop",
        max_cannons: 1,
        cannon: CannonSize::Small,
    };
    pub const CUTTER: VesselClass = VesselClass {
        name: "Cutter",
        max_cannons: 1,
        cannon: CannonSize::Small,
    };
    pub const WAR_BRIG: VesselClass = VesselClass {
        name: "War Brig",
        max_cannons: 2,
        cannon: CannonSize::Medium,
    };
    pub const XEBEC: VesselClass = VesselClass {
        name: "Xebec",
        max_cannons: 2,
        cannon: CannonSize::Medium,
    };
    pub const WAR_FRIGATE: VesselClass = VesselClass {
        name: "War Frigate",
        max_cannons: 2,
        cannon: CannonSize::Large,
    };

    pub const ALL: [VesselClass; 5] = [
        VesselClass::SLOOP,
        VesselClass::CUTTER,
        VesselClass::WAR_BRIG,
        VesselClass::XEBEC,
        VesselClass::WAR_FRIGATE,
    ];

    /// Look a class up by name, ignoring case and surrounding whitespace.
    pub fn by_name(name: &str) -> SimResult<VesselClass> {
        let wanted = name.trim();
        VesselClass::ALL
            .into_iter()
            .find(|class| class.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SimError::InvalidArgument(format!("unknown vessel class '{wanted}'")))
    }

    /// Reject shot counts this class cannot load.
    pub fn check_shots(&self, shots: ShotCount) -> SimResult<()> {
        if shots.value() > self.max_cannons {
            return Err(SimError::InvalidArgument(format!(
                "{} carries {} cannon(s) per side, {} requested",
                self.name,
                self.max_cannons,
                shots.value()
            )));
        }
        Ok(())
    }

    /// Build a cannonball of this class's size. The result is released and
    /// unpaired; the spawner sets the explode flag and pairing.
    pub fn create_projectile(
        &self,
        id: ProjectileId,
        origin: Cell,
        target: Cell,
        side: Side,
    ) -> Projectile {
        Projectile::new(id, origin, target, side, self.cannon)
    }
}
