//! Phase and turn engine
//!
//! Batches one action per vessel per phase. Moves are resolved for every
//! vessel first and then committed in ascending id order. Broadsides follow,
//! all aimed against one occupancy snapshot taken after the commits, so no
//! vessel sees another's half-finished phase.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::models::constants::PHASES_PER_TURN;
use crate::models::errors::{SimError, SimResult};
use crate::models::fleet::Fleet;
use crate::models::navigation_types::{MoveKind, ShotCount, Side};
use crate::models::snapshot::{FiringEvent, MoveSnapshot, ProjectileSnapshot};
use crate::models::turn_plan::{PhaseAction, TurnPlan};
use crate::models::vessel::{Vessel, VesselId};

/// Everything that happened in one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseReport {
    pub turn: u32,
    pub phase: usize,
    pub moves: Vec<MoveSnapshot>,
    pub firings: Vec<FiringEvent>,
    pub projectiles: Vec<ProjectileSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    pub turn: u32,
    pub phases: Vec<PhaseReport>,
}

/// An action after its shot counts were checked against the vessel.
struct ValidatedAction {
    id: VesselId,
    movement: Option<MoveKind>,
    volleys: Vec<(Side, ShotCount)>,
}

/// Core engine that owns the fleet and sequences phases
pub struct GameEngine {
    fleet: Fleet,
    turn: u32,
}

impl GameEngine {
    pub fn new(fleet: Fleet) -> Self {
        Self { fleet, turn: 0 }
    }

    /// Returns an immutable reference to the fleet
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Returns a mutable reference to the fleet
    pub fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    /// Number of turns run so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn add_vessel(&mut self, vessel: Vessel) -> SimResult<()> {
        self.fleet.add(vessel)
    }

    /// Remove a vessel (e.g. on disconnect). Its pending move and projectiles
    /// are discarded before the next phase.
    pub fn remove_vessel(&mut self, id: VesselId) -> SimResult<Vessel> {
        self.fleet.remove(id)
    }

    /// Resolve one phase.
    ///
    /// # Errors
    ///
    /// Every action is validated before any vessel changes:
    /// - `UnknownVessel` if an action names a vessel not in the fleet
    /// - `InvalidArgument` for shot counts outside 0..=2 or above the class's cannons
    /// - `InvalidState` for a vessel with a pending move, or one asked to fire
    ///   from a non-cardinal heading
    pub fn run_phase(
        &mut self,
        phase: usize,
        actions: &BTreeMap<VesselId, PhaseAction>,
    ) -> SimResult<PhaseReport> {
        let validated = self.validate(actions).inspect_err(|err| {
            warn!(turn = self.turn, phase, error = %err, "phase rejected");
        })?;

        // Resolve every move before committing any of them.
        for action in &validated {
            if let Some(kind) = action.movement {
                self.fleet.get_mut(action.id)?.begin_move(kind)?;
            }
        }
        let mut moves = Vec::new();
        for action in validated.iter().filter(|a| a.movement.is_some()) {
            moves.push(self.fleet.get_mut(action.id)?.commit_move()?);
        }

        let occupancy = self.fleet.occupancy();
        let mut firings = Vec::new();
        let mut projectiles = Vec::new();
        for action in &validated {
            let vessel = self.fleet.get_mut(action.id)?;
            for &(side, shots) in &action.volleys {
                let spawned = vessel.fire_broadside(side, shots, &occupancy)?;
                if let Some(first) = spawned.first() {
                    firings.push(FiringEvent {
                        vessel: action.id,
                        side,
                        shots,
                        target: first.target,
                    });
                }
                projectiles.extend(spawned.iter().map(ProjectileSnapshot::from));
            }
            vessel.take_firing_event();
        }

        info!(
            turn = self.turn,
            phase,
            moves = moves.len(),
            shots = projectiles.len(),
            "phase resolved"
        );
        Ok(PhaseReport {
            turn: self.turn,
            phase,
            moves,
            firings,
            projectiles,
        })
    }

    /// Run every phase of a turn in order.
    ///
    /// Every phase of every plan is validated before the first phase runs,
    /// so a rejected turn leaves the fleet and the turn counter untouched.
    /// Turns rotate by a quarter, so a heading that is cardinal at the start
    /// of the turn stays cardinal for all of its phases.
    pub fn run_turn(&mut self, plans: &BTreeMap<VesselId, TurnPlan>) -> SimResult<TurnReport> {
        for (&id, plan) in plans {
            for phase in 0..PHASES_PER_TURN {
                self.validate_action(id, &plan.phase(phase)).inspect_err(|err| {
                    warn!(turn = self.turn + 1, phase, error = %err, "turn rejected");
                })?;
            }
        }

        self.turn += 1;
        let mut phases = Vec::with_capacity(PHASES_PER_TURN);
        for phase in 0..PHASES_PER_TURN {
            let actions: BTreeMap<VesselId, PhaseAction> = plans
                .iter()
                .map(|(id, plan)| (*id, plan.phase(phase)))
                .collect();
            phases.push(self.run_phase(phase, &actions)?);
        }

        Ok(TurnReport {
            turn: self.turn,
            phases,
        })
    }

    fn validate(&self, actions: &BTreeMap<VesselId, PhaseAction>) -> SimResult<Vec<ValidatedAction>> {
        actions
            .iter()
            .map(|(&id, action)| self.validate_action(id, action))
            .collect()
    }

    fn validate_action(&self, id: VesselId, action: &PhaseAction) -> SimResult<ValidatedAction> {
        let vessel = self.fleet.get(id)?;
        if vessel.is_moving() {
            return Err(SimError::InvalidState(format!(
                "vessel {id} still has an uncommitted move"
            )));
        }

        let mut volleys = Vec::new();
        for (side, count) in [(Side::Left, action.left_shots), (Side::Right, action.right_shots)] {
            let shots = ShotCount::new(count)?;
            vessel.class().check_shots(shots)?;
            if !shots.is_none() {
                volleys.push((side, shots));
            }
        }

        // Turns move the heading by a quarter, so cardinality survives the move.
        if !volleys.is_empty() && !vessel.heading().is_cardinal() {
            return Err(SimError::InvalidState(format!(
                "vessel {id} cannot fire at non-cardinal heading {}",
                vessel.heading()
            )));
        }

        Ok(ValidatedAction {
            id,
            movement: action.movement,
            volleys,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::navigation_types::Heading;
    use crate::models::position::Cell;
    use crate::models::vessel_class::VesselClass;

    fn engine_with(vessels: &[(u32, i32, i32, Heading)]) -> GameEngine {
        let mut fleet = Fleet::new();
        for &(id, x, y, heading) in vessels {
            fleet
                .add(Vessel::new(VesselId(id), format!("Ship {id}"), VesselClass::WAR_BRIG, Cell::new(x, y), heading))
                .unwrap();
        }
        GameEngine::new(fleet)
    }

    #[test]
    fn phase_commits_moves_then_fires() {
        let mut engine = engine_with(&[(1, 0, 0, Heading::EAST), (2, 1, 3, Heading::WEST)]);
        let actions = BTreeMap::from([
            (VesselId(1), PhaseAction::moving(MoveKind::Forward).with_shots(1, 0)),
            (VesselId(2), PhaseAction::moving(MoveKind::Forward)),
        ]);

        let report = engine.run_phase(0, &actions).unwrap();
        assert_eq!(report.moves.len(), 2);
        // Vessel 1 fires from (1,0) after its move; vessel 2 moved to (0,3),
        // so the left scan (1,1),(1,2),(1,3) finds nothing.
        assert_eq!(report.projectiles.len(), 1);
        assert_eq!(report.projectiles[0].origin, Cell::new(1, 0));
        assert_eq!(report.projectiles[0].target, Cell::new(1, 3));
        assert!(!report.projectiles[0].explodes_on_reach);
        assert_eq!(report.firings.len(), 1);
    }

    #[test]
    fn firing_sees_post_move_positions() {
        let mut engine = engine_with(&[(1, 0, 0, Heading::EAST), (2, 5, 2, Heading::WEST)]);
        let actions = BTreeMap::from([
            (VesselId(1), PhaseAction::idle().with_shots(2, 0)),
            (VesselId(2), PhaseAction::moving(MoveKind::Forward)),
        ]);

        let report = engine.run_phase(0, &actions).unwrap();
        // Vessel 2 is at (4,2) now, out of the (0,1..3) line; nothing is hit.
        assert_eq!(report.projectiles.len(), 2);
        assert!(report.projectiles.iter().all(|p| !p.explodes_on_reach));

        let mut engine = engine_with(&[(1, 0, 0, Heading::EAST), (2, 1, 2, Heading::WEST)]);
        let report = engine.run_phase(0, &actions).unwrap();
        // Vessel 2 moved from (1,2) into (0,2), straight into the broadside.
        assert_eq!(report.projectiles[0].target, Cell::new(0, 2));
        assert!(report.projectiles[0].explodes_on_reach);
    }

    #[test]
    fn invalid_action_leaves_fleet_untouched() {
        let mut engine = engine_with(&[(1, 0, 0, Heading::EAST), (2, 5, 5, Heading::NORTH)]);
        let actions = BTreeMap::from([
            (VesselId(1), PhaseAction::moving(MoveKind::Forward)),
            (VesselId(2), PhaseAction::idle().with_shots(3, 0)),
        ]);

        assert!(matches!(
            engine.run_phase(0, &actions),
            Err(SimError::InvalidArgument(_))
        ));
        let v1 = engine.fleet().get(VesselId(1)).unwrap();
        assert_eq!(v1.position(), Cell::new(0, 0));
        assert!(!v1.is_moving());
    }

    #[test]
    fn unknown_vessel_rejected() {
        let mut engine = engine_with(&[(1, 0, 0, Heading::EAST)]);
        let actions = BTreeMap::from([(VesselId(8), PhaseAction::idle())]);
        assert!(matches!(
            engine.run_phase(0, &actions),
            Err(SimError::UnknownVessel(VesselId(8)))
        ));
    }

    #[test]
    fn non_cardinal_shooter_rejected() {
        let mut engine = engine_with(&[(1, 0, 0, Heading::new(5))]);
        let actions = BTreeMap::from([(VesselId(1), PhaseAction::idle().with_shots(0, 1))]);
        assert!(matches!(
            engine.run_phase(0, &actions),
            Err(SimError::InvalidState(_))
        ));
    }

    #[test]
    fn turn_runs_all_phases() {
        let mut engine = engine_with(&[(1, 0, 0, Heading::EAST)]);
        let plan = TurnPlan::new(vec![
            PhaseAction::moving(MoveKind::TurnRight),
            PhaseAction::moving(MoveKind::TurnRight),
            PhaseAction::moving(MoveKind::TurnRight),
            PhaseAction::moving(MoveKind::TurnRight),
        ])
        .unwrap();
        let plans = BTreeMap::from([(VesselId(1), plan)]);

        let report = engine.run_turn(&plans).unwrap();
        assert_eq!(report.turn, 1);
        assert_eq!(report.phases.len(), PHASES_PER_TURN);
        // Four right turns trace a loop back to the start.
        let v = engine.fleet().get(VesselId(1)).unwrap();
        assert_eq!(v.heading(), Heading::EAST);
        assert_eq!(v.position(), Cell::new(0, 0));
        assert_eq!(engine.turn(), 1);
    }

    #[test]
    fn removed_vessel_cannot_act() {
        let mut engine = engine_with(&[(1, 0, 0, Heading::EAST), (2, 0, 2, Heading::EAST)]);
        engine.remove_vessel(VesselId(2)).unwrap();
        let plans = BTreeMap::from([(VesselId(2), TurnPlan::default())]);
        assert!(matches!(
            engine.run_turn(&plans),
            Err(SimError::UnknownVessel(VesselId(2)))
        ));
        assert_eq!(engine.turn(), 0);
    }

    #[test]
    fn bad_later_phase_rejects_whole_turn() {
        let mut engine = engine_with(&[(1, 0, 0, Heading::EAST)]);
        let plan = TurnPlan::new(vec![
            PhaseAction::moving(MoveKind::Forward),
            PhaseAction::moving(MoveKind::Forward),
            PhaseAction::idle().with_shots(3, 0),
        ])
        .unwrap();
        let plans = BTreeMap::from([(VesselId(1), plan)]);

        assert!(matches!(
            engine.run_turn(&plans),
            Err(SimError::InvalidArgument(_))
        ));
        let v = engine.fleet().get(VesselId(1)).unwrap();
        assert_eq!(v.position(), Cell::new(0, 0));
        assert!(!v.is_moving());
        assert_eq!(engine.turn(), 0);
    }

    #[test]
    fn later_phase_over_class_limit_rejects_turn() {
        let mut fleet = Fleet::new();
        fleet
            .add(Vessel::new(VesselId(1), "Salt Wind", VesselClass::SLOOP, Cell::new(0, 0), Heading::NORTH))
            .unwrap();
        let mut engine = GameEngine::new(fleet);
        let plan = TurnPlan::new(vec![
            PhaseAction::moving(MoveKind::TurnRight),
            PhaseAction::idle(),
            PhaseAction::idle(),
            PhaseAction::idle().with_shots(0, 2),
        ])
        .unwrap();

        assert!(engine.run_turn(&BTreeMap::from([(VesselId(1), plan)])).is_err());
        let v = engine.fleet().get(VesselId(1)).unwrap();
        assert_eq!(v.heading(), Heading::NORTH);
        assert_eq!(engine.turn(), 0);
    }
}
