//! Engine services
//!
//! Movement geometry and broadside resolution operating on the domain
//! models.

pub mod combat;
pub mod navigation;
