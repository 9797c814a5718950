//! Presentation
//!
//! Presenters format engine reports for the terminal, keeping formatting
//! out of the simulation.

pub mod presenters;
