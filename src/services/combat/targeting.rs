use tracing::debug;

use crate::models::constants::{BROADSIDE_AXES, CANNON_RANGE};
use crate::models::errors::{SimError, SimResult};
use crate::models::fleet::SpatialIndex;
use crate::models::navigation_types::{Heading, Side};
use crate::models::position::Cell;
use crate::models::vessel::{Vessel, VesselId};

/// Where a broadside lands and what it hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BroadsideTarget {
    pub cell: Cell,
    /// Vessel on `cell` when the shot was resolved. `None` means the shot
    /// flies to full range and splashes.
    pub occupant: Option<VesselId>,
}

/// Unit step along which `side` fires at `heading`. Only the four cardinal
/// headings have broadsides.
pub fn broadside_axis(heading: Heading, side: Side) -> SimResult<(i32, i32)> {
    BROADSIDE_AXES
        .iter()
        .find(|(h, _, _)| *h == heading.index())
        .map(|(_, left, right)| match side {
            Side::Left => *left,
            Side::Right => *right,
        })
        .ok_or_else(|| {
            SimError::InvalidState(format!(
                "no {} broadside at non-cardinal heading {}",
                side.name(),
                heading
            ))
        })
}

/// Scan up to `CANNON_RANGE` cells along the broadside axis, nearest first,
/// and stop at the first other vessel.
pub fn resolve_broadside_target(
    vessel: &Vessel,
    side: Side,
    index: &dyn SpatialIndex,
) -> SimResult<BroadsideTarget> {
    let (ax, ay) = broadside_axis(vessel.heading(), side)?;
    let origin = vessel.position();

    for step in 1..=CANNON_RANGE {
        let cell = origin.offset((ax * step, ay * step));
        if let Some(occupant) = index.occupant_at(cell).filter(|id| *id != vessel.id()) {
            debug!(vessel = %vessel.id(), side = side.name(), %cell, target = %occupant, "broadside target acquired");
            return Ok(BroadsideTarget {
                cell,
                occupant: Some(occupant),
            });
        }
    }

    Ok(BroadsideTarget {
        cell: origin.offset((ax * CANNON_RANGE, ay * CANNON_RANGE)),
        occupant: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fleet::OccupancyMap;
    use crate::models::vessel_class::VesselClass;

    fn shooter(heading: Heading) -> Vessel {
        Vessel::new(VesselId(1), "Red Tide", VesselClass::WAR_BRIG, Cell::new(5, 5), heading)
    }

    fn occupied(cells: &[(i32, i32, u32)]) -> OccupancyMap {
        cells
            .iter()
            .map(|&(x, y, id)| (Cell::new(x, y), VesselId(id)))
            .collect()
    }

    #[test]
    fn left_at_heading_two_hits_occupant() {
        let index = occupied(&[(5, 5, 1), (5, 7, 2)]);
        let target = resolve_broadside_target(&shooter(Heading::EAST), Side::Left, &index).unwrap();
        assert_eq!(target.cell, Cell::new(5, 7));
        assert_eq!(target.occupant, Some(VesselId(2)));
    }

    #[test]
    fn left_at_heading_two_misses_to_full_range() {
        let index = occupied(&[(5, 5, 1)]);
        let target = resolve_broadside_target(&shooter(Heading::EAST), Side::Left, &index).unwrap();
        assert_eq!(target.cell, Cell::new(5, 8));
        assert_eq!(target.occupant, None);
    }

    #[test]
    fn nearest_occupant_wins() {
        let index = occupied(&[(6, 5, 2), (7, 5, 3), (8, 5, 4)]);
        // Heading 6 faces south, its left side points to +x.
        let target = resolve_broadside_target(&shooter(Heading::SOUTH), Side::Left, &index).unwrap();
        assert_eq!(target.cell, Cell::new(6, 5));
        assert_eq!(target.occupant, Some(VesselId(2)));
    }

    #[test]
    fn occupant_beyond_range_ignored() {
        let index = occupied(&[(5, 1, 2)]);
        let target = resolve_broadside_target(&shooter(Heading::EAST), Side::Right, &index).unwrap();
        assert_eq!(target.cell, Cell::new(5, 2));
        assert_eq!(target.occupant, None);
    }

    #[test]
    fn right_side_mirrors_left() {
        let cases = [
            (Heading::EAST, (0, 1), (0, -1)),
            (Heading::SOUTH, (1, 0), (-1, 0)),
            (Heading::WEST, (0, -1), (0, 1)),
            (Heading::NORTH, (-1, 0), (1, 0)),
        ];
        for (heading, left, right) in cases {
            assert_eq!(broadside_axis(heading, Side::Left).unwrap(), left);
            assert_eq!(broadside_axis(heading, Side::Right).unwrap(), right);
        }
    }

    #[test]
    fn non_cardinal_heading_rejected() {
        for heading in Heading::all().filter(|h| !h.is_cardinal()) {
            assert!(matches!(
                resolve_broadside_target(&shooter(heading), Side::Left, &OccupancyMap::new()),
                Err(SimError::InvalidState(_))
            ));
        }
    }
}
