//! Domain models
//!
//! This module contains all domain models representing battle entities
//! and concepts. Models are plain data with the state transitions that keep
//! them consistent.

pub mod constants;
pub mod errors;
pub mod fleet;
pub mod navigation_types;
pub mod position;
pub mod projectile;
pub mod skirmish;
pub mod snapshot;
pub mod turn_plan;
pub mod vessel;
pub mod vessel_class;
