//! Broadside Combat Engine
//!
//! Turn-based naval combat on a discrete grid.
//!
//! # Overview
//!
//! Vessels occupy integer cells and face one of sixteen headings. Each turn
//! is split into phases; in every phase a vessel makes at most one move and
//! then fires any number of broadsides. Cannon targets are found by a short
//! raycast perpendicular to the vessel's heading.
//!
//! # Modules
//!
//! - [`game_engine`] - Phase and turn sequencing
//! - [`models`] - Domain models (Vessel, Fleet, Projectile, etc.)
//! - [`services`] - Move geometry and broadside resolution
//! - [`io`] - Output abstraction for testing
//! - [`ui`] - Report formatting
//! - [`cli`] - Command-line configuration and skirmish runner
//!
//! # Example
//!
//! ```rust
//! use broadside::models::fleet::OccupancyMap;
//! use broadside::models::navigation_types::{Heading, MoveKind, ShotCount, Side};
//! use broadside::models::position::Cell;
//! use broadside::models::vessel::{Vessel, VesselId};
//! use broadside::models::vessel_class::VesselClass;
//!
//! let mut vessel = Vessel::new(VesselId(1), "Sea Dog", VesselClass::WAR_BRIG, Cell::new(5, 5), Heading::EAST);
//! vessel.begin_move(MoveKind::Forward)?;
//! vessel.commit_move()?;
//! let shots = vessel.fire_broadside(Side::Left, ShotCount::SINGLE, &OccupancyMap::new())?;
//! assert_eq!(shots[0].target, Cell::new(6, 8));
//! # Ok::<(), broadside::SimError>(())
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{GameEngine, PhaseReport, TurnReport};
pub use models::errors::{SimError, SimResult};
