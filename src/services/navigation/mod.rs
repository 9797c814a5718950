//! Navigation system
//!
//! Heading tables and move geometry. Everything here is pure; vessels apply
//! the results themselves.

mod heading_table;
mod movement;

pub use heading_table::{displacement, forward_vector, next_heading};
pub use movement::{resolve_from, resolve_move, MoveResult};
