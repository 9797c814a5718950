use crate::game_engine::{PhaseReport, TurnReport};
use crate::io::OutputWriter;
use crate::models::fleet::Fleet;
use crate::models::snapshot::{FiringEvent, MoveSnapshot, ProjectileSnapshot};

pub struct FleetPresenter;

impl FleetPresenter {
    pub fn show_roster(fleet: &Fleet, output: &mut dyn OutputWriter) {
        output.writeln(&format!("{:<6}{:<28}{:<10}{}", "ID", "VESSEL", "CELL", "HEADING"));
        for vessel in fleet.iter() {
            output.writeln(&format!(
                "{:<6}{:<28}{:<10}{}",
                vessel.id().to_string(),
                vessel.name(),
                vessel.position().to_string(),
                vessel.heading()
            ));
        }
    }
}

pub struct ReportPresenter;

impl ReportPresenter {
    pub fn show_turn(report: &TurnReport, output: &mut dyn OutputWriter) {
        output.writeln(&format!("=== TURN {} ===", report.turn));
        for phase in &report.phases {
            Self::show_phase(phase, output);
        }
    }

    pub fn show_phase(report: &PhaseReport, output: &mut dyn OutputWriter) {
        output.writeln(&format!("-- PHASE {} --", report.phase + 1));
        for mv in &report.moves {
            Self::show_move(mv, output);
        }
        for firing in &report.firings {
            Self::show_firing(firing, output);
        }
        for projectile in &report.projectiles {
            Self::show_projectile(projectile, output);
        }
    }

    fn show_move(mv: &MoveSnapshot, output: &mut dyn OutputWriter) {
        let via = mv
            .pass_through
            .map(|cell| format!(" VIA {cell}"))
            .unwrap_or_default();
        output.writeln(&format!(
            "{} {} {} -> {}{} (HEADING {} -> {})",
            mv.vessel,
            mv.kind.name(),
            mv.start,
            mv.destination,
            via,
            mv.heading_before,
            mv.heading_after
        ));
    }

    fn show_firing(firing: &FiringEvent, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "{} FIRES {} {} SHOT(S) AT {}",
            firing.vessel,
            firing.side.name(),
            firing.shots.value(),
            firing.target
        ));
    }

    fn show_projectile(projectile: &ProjectileSnapshot, output: &mut dyn OutputWriter) {
        let outcome = if projectile.explodes_on_reach { "HIT" } else { "SPLASH" };
        let held = if projectile.released { "" } else { " (HELD)" };
        output.writeln(&format!(
            "   {} BALL {} -> {} {}{}",
            projectile.size.name(),
            projectile.id,
            projectile.target,
            outcome,
            held
        ));
    }

    /// One JSON document per line.
    pub fn show_turn_json(report: &TurnReport, output: &mut dyn OutputWriter) -> serde_json::Result<()> {
        for phase in &report.phases {
            output.writeln(&serde_json::to_string(phase)?);
        }
        Ok(())
    }
}
