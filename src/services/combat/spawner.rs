use tracing::info;

use super::targeting::resolve_broadside_target;
use crate::models::errors::{SimError, SimResult};
use crate::models::fleet::SpatialIndex;
use crate::models::navigation_types::{ShotCount, Side};
use crate::models::projectile::Projectile;
use crate::models::vessel::Vessel;

/// Fire `shots` cannonballs from `side` of `vessel`.
///
/// Both shots of a double aim at the same cell. The first links to the
/// second, and the second starts held back until the caller releases it.
/// The new projectiles are appended to the vessel and returned. A vessel
/// with a pending move cannot fire until the move is committed.
pub fn spawn_shots<'a>(
    vessel: &'a mut Vessel,
    side: Side,
    shots: ShotCount,
    index: &dyn SpatialIndex,
) -> SimResult<&'a [Projectile]> {
    if vessel.is_moving() {
        return Err(SimError::InvalidState(format!(
            "vessel {} cannot fire {} while a move is pending",
            vessel.id(),
            side.name()
        )));
    }
    vessel.class().check_shots(shots)?;
    if shots.is_none() {
        return Ok(&[]);
    }

    let target = resolve_broadside_target(vessel, side, index)?;
    let explodes = target.occupant.is_some();
    let class = vessel.class();
    let origin = vessel.position();

    let mut first = class.create_projectile(vessel.next_projectile_id(), origin, target.cell, side);
    first.explodes_on_reach = explodes;
    let mut batch = vec![first];

    if shots == ShotCount::DOUBLE {
        let mut second = class.create_projectile(vessel.next_projectile_id(), origin, target.cell, side);
        second.explodes_on_reach = explodes;
        second.released = false;
        batch[0].paired_with = Some(second.id);
        batch.push(second);
    }

    info!(
        vessel = %vessel.id(),
        side = side.name(),
        shots = shots.value(),
        target = %target.cell,
        hit = explodes,
        "broadside fired"
    );
    Ok(vessel.push_projectiles(batch))
}
