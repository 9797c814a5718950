use crate::models::constants::{HEADING_VECTORS, TURN_STEPS};
use crate::models::navigation_types::{Heading, MoveKind};

/// Unit step a vessel takes when moving forward at `heading`.
pub fn forward_vector(heading: Heading) -> (i32, i32) {
    HEADING_VECTORS[heading.index() as usize]
}

/// Heading after completing `kind`. Forward keeps the heading.
pub fn next_heading(heading: Heading, kind: MoveKind) -> Heading {
    match kind {
        MoveKind::Forward => heading,
        MoveKind::TurnLeft => heading.rotated(-TURN_STEPS),
        MoveKind::TurnRight => heading.rotated(TURN_STEPS),
    }
}

/// Total grid displacement of `kind` started at `heading`.
/// A turn is one cell forward followed by one cell toward the new heading.
pub fn displacement(heading: Heading, kind: MoveKind) -> (i32, i32) {
    let (fx, fy) = forward_vector(heading);
    match kind {
        MoveKind::Forward => (fx, fy),
        MoveKind::TurnLeft | MoveKind::TurnRight => {
            let (sx, sy) = forward_vector(next_heading(heading, kind));
            (fx + sx, fy + sy)
        }
    }
}
