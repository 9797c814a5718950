use serde::Serialize;

use super::constants::PHASES_PER_TURN;
use super::errors::{SimError, SimResult};
use super::navigation_types::MoveKind;

/// What one vessel does in one phase: at most one move, then shots per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PhaseAction {
    pub movement: Option<MoveKind>,
    pub left_shots: u8,
    pub right_shots: u8,
}

impl PhaseAction {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(kind: MoveKind) -> Self {
        PhaseAction {
            movement: Some(kind),
            ..Self::default()
        }
    }

    pub fn with_shots(mut self, left: u8, right: u8) -> Self {
        self.left_shots = left;
        self.right_shots = right;
        self
    }

    pub fn fires(&self) -> bool {
        self.left_shots > 0 || self.right_shots > 0
    }
}

/// The actions a vessel queued for a whole turn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TurnPlan {
    pub(super) phases: Vec<PhaseAction>,
}

impl TurnPlan {
    /// Phases beyond the ones given are idle.
    pub fn new(phases: Vec<PhaseAction>) -> SimResult<Self> {
        if phases.len() > PHASES_PER_TURN {
            return Err(SimError::InvalidArgument(format!(
                "a turn holds at most {PHASES_PER_TURN} phases, {} given",
                phases.len()
            )));
        }
        Ok(TurnPlan { phases })
    }

    pub fn phase(&self, index: usize) -> PhaseAction {
        self.phases.get(index).copied().unwrap_or_default()
    }

    pub fn phases(&self) -> &[PhaseAction] {
        &self.phases
    }

    /// Count of moves queued for the turn
    pub fn number_of_moves(&self) -> usize {
        self.phases.iter().filter(|p| p.movement.is_some()).count()
    }
}
