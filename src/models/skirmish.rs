//! Seeded skirmish setup
//!
//! Places a fleet on a square arena and draws random turn plans. The same
//! seed always yields the same skirmish.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, BTreeSet};

use super::constants::{CARDINAL_HEADINGS, PHASES_PER_TURN};
use super::errors::{SimError, SimResult};
use super::fleet::Fleet;
use super::navigation_types::{Heading, MoveKind};
use super::position::Cell;
use super::turn_plan::{PhaseAction, TurnPlan};
use super::vessel::{Vessel, VesselId};
use super::vessel_class::VesselClass;

const VESSEL_NAMES: [&str; 8] = [
    "Sea Dog",
    "Grey Gull",
    "Red Tide",
    "Salt Wind",
    "Iron Reef",
    "Black Swell",
    "Cold Harbor",
    "Drift Star",
];

pub struct Skirmish {
    arena_size: i32,
    rng: StdRng,
}

impl Skirmish {
    pub fn new(seed: u64, arena_size: i32) -> Self {
        Skirmish {
            arena_size,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn arena_size(&self) -> i32 {
        self.arena_size
    }

    /// Place `vessel_count` vessels on distinct cells of the arena, each at a
    /// cardinal heading.
    pub fn generate_fleet(&mut self, vessel_count: usize) -> SimResult<Fleet> {
        if self.arena_size <= 0 {
            return Err(SimError::InvalidArgument(format!(
                "arena size must be positive, got {}",
                self.arena_size
            )));
        }
        let cells = (self.arena_size as usize).pow(2);
        if vessel_count > cells {
            return Err(SimError::InvalidArgument(format!(
                "{vessel_count} vessels do not fit on {cells} cells"
            )));
        }

        let mut taken = BTreeSet::new();
        let mut fleet = Fleet::new();
        for n in 0..vessel_count {
            let cell = loop {
                let candidate = Cell::new(
                    self.rng.gen_range(0..self.arena_size),
                    self.rng.gen_range(0..self.arena_size),
                );
                if taken.insert(candidate) {
                    break candidate;
                }
            };
            let heading = Heading::new(CARDINAL_HEADINGS[self.rng.gen_range(0..CARDINAL_HEADINGS.len())] as i32);
            let class = VesselClass::ALL[self.rng.gen_range(0..VesselClass::ALL.len())];
            let name = format!("{} ({})", VESSEL_NAMES[n % VESSEL_NAMES.len()], class.name);

            fleet.add(Vessel::new(VesselId(n as u32 + 1), name, class, cell, heading))?;
        }
        Ok(fleet)
    }

    /// Draw a full turn for a vessel of `class`. Shot counts never exceed
    /// the class's cannons.
    pub fn random_plan(&mut self, class: VesselClass) -> TurnPlan {
        let phases = (0..PHASES_PER_TURN)
            .map(|_| {
                let movement = if self.rng.gen_bool(0.8) {
                    MoveKind::ALL.choose(&mut self.rng).copied()
                } else {
                    None
                };
                let mut shots = || {
                    if self.rng.gen_bool(0.4) {
                        self.rng.gen_range(1..=class.max_cannons)
                    } else {
                        0
                    }
                };
                let left = shots();
                let right = shots();
                PhaseAction {
                    movement,
                    left_shots: left,
                    right_shots: right,
                }
            })
            .collect();
        TurnPlan { phases }
    }

    /// One random plan per vessel in the fleet.
    pub fn random_plans(&mut self, fleet: &Fleet) -> BTreeMap<VesselId, TurnPlan> {
        fleet
            .iter()
            .map(|v| (v.id(), self.random_plan(v.class())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_fleet() {
        let a = Skirmish::new(7, 10).generate_fleet(5).unwrap();
        let b = Skirmish::new(7, 10).generate_fleet(5).unwrap();
        let cells_a: Vec<_> = a.iter().map(|v| (v.position(), v.heading())).collect();
        let cells_b: Vec<_> = b.iter().map(|v| (v.position(), v.heading())).collect();
        assert_eq!(cells_a, cells_b);
    }

    #[test]
    fn fleet_fits_arena_with_cardinal_headings() {
        let fleet = Skirmish::new(99, 6).generate_fleet(12).unwrap();
        assert_eq!(fleet.len(), 12);
        for v in fleet.iter() {
            assert!(v.heading().is_cardinal());
            assert!((0..6).contains(&v.position().x));
            assert!((0..6).contains(&v.position().y));
        }
        assert_eq!(fleet.occupancy().len(), 12);
    }

    #[test]
    fn overfull_arena_rejected() {
        assert!(matches!(
            Skirmish::new(1, 2).generate_fleet(5),
            Err(SimError::InvalidArgument(_))
        ));
        assert!(Skirmish::new(1, 0).generate_fleet(1).is_err());
    }

    #[test]
    fn random_plans_respect_cannons() {
        let mut skirmish = Skirmish::new(3, 10);
        for _ in 0..50 {
            let plan = skirmish.random_plan(VesselClass::SLOOP);
            assert_eq!(plan.phases().len(), PHASES_PER_TURN);
            for action in plan.phases() {
                assert!(action.left_shots <= 1);
                assert!(action.right_shots <= 1);
            }
        }
    }
}
