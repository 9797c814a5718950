use serde::Serialize;

use super::heading_table::{displacement, forward_vector, next_heading};
use crate::models::navigation_types::{Heading, MoveKind};
use crate::models::position::Cell;
use crate::models::vessel::Vessel;

/// Geometry of one move, computed before anything is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveResult {
    /// The forward cell crossed while turning. Informative only; it does not
    /// take part in collisions.
    pub pass_through: Option<Cell>,
    pub destination: Cell,
    pub resulting_heading: Heading,
}

/// Resolve `kind` for a vessel from its committed cell and heading.
pub fn resolve_move(vessel: &Vessel, kind: MoveKind) -> MoveResult {
    resolve_from(vessel.position(), vessel.heading(), kind)
}

/// Resolve `kind` from an explicit cell and heading.
pub fn resolve_from(start: Cell, heading: Heading, kind: MoveKind) -> MoveResult {
    let pass_through = match kind {
        MoveKind::Forward => None,
        MoveKind::TurnLeft | MoveKind::TurnRight => Some(start.offset(forward_vector(heading))),
    };

    MoveResult {
        pass_through,
        destination: start.offset(displacement(heading, kind)),
        resulting_heading: next_heading(heading, kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vessel::VesselId;
    use crate::models::vessel_class::VesselClass;

    #[test]
    fn forward_at_heading_two() {
        let result = resolve_from(Cell::new(5, 5), Heading::EAST, MoveKind::Forward);
        assert_eq!(result.destination, Cell::new(6, 5));
        assert_eq!(result.pass_through, None);
        assert_eq!(result.resulting_heading, Heading::EAST);
    }

    #[test]
    fn turn_right_at_heading_two() {
        let result = resolve_from(Cell::new(5, 5), Heading::EAST, MoveKind::TurnRight);
        assert_eq!(result.pass_through, Some(Cell::new(6, 5)));
        assert_eq!(result.destination, Cell::new(6, 4));
        assert_eq!(result.resulting_heading, next_heading(Heading::EAST, MoveKind::TurnRight));
        assert_eq!(result.resulting_heading, Heading::SOUTH);
    }

    #[test]
    fn turn_left_passes_through_forward_cell() {
        let result = resolve_from(Cell::new(0, 0), Heading::NORTH, MoveKind::TurnLeft);
        assert_eq!(result.pass_through, Some(Cell::new(0, 1)));
        assert_eq!(result.destination, Cell::new(-1, 1));
        assert_eq!(result.resulting_heading, Heading::WEST);
    }

    #[test]
    fn pass_through_only_for_turns() {
        for heading in Heading::all() {
            for kind in MoveKind::ALL {
                let result = resolve_from(Cell::new(0, 0), heading, kind);
                assert_eq!(result.pass_through.is_some(), kind.is_turn());
            }
        }
    }

    #[test]
    fn vessel_resolution_does_not_mutate() {
        let vessel = Vessel::new(VesselId(1), "Grey Gull", VesselClass::CUTTER, Cell::new(2, 3), Heading::WEST);
        let result = resolve_move(&vessel, MoveKind::Forward);
        assert_eq!(result.destination, Cell::new(1, 3));
        assert_eq!(vessel.position(), Cell::new(2, 3));
        assert!(!vessel.is_moving());
    }
}
