use serde::Serialize;
use std::fmt;

/// A cell on the battle grid.
/// X increases left-to-right, Y increases bottom-to-top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// The cell reached by stepping `(dx, dy)` from this one.
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Chebyshev distance, the number of grid steps including diagonals.
    pub fn distance(self, other: Cell) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
