//! Combat system
//!
//! Broadside target acquisition and cannonball spawning.

mod spawner;
mod targeting;

pub use spawner::spawn_shots;
pub use targeting::{broadside_axis, resolve_broadside_target, BroadsideTarget};
