//! Command-line configuration and the skirmish runner.

pub mod args;

use rand::Rng;
use tracing::info;

use crate::game_engine::GameEngine;
use crate::io::OutputWriter;
use crate::models::errors::SimError;
use crate::models::skirmish::Skirmish;
use crate::ui::presenters::{FleetPresenter, ReportPresenter};
use args::{Args, OutputFormat};

/// Errors that end a CLI run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Generate a skirmish from `args` and play it, writing reports to `output`.
/// Returns the seed that was used.
pub fn run(args: &Args, output: &mut dyn OutputWriter) -> Result<u64, CliError> {
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, vessels = args.vessels, turns = args.turns, arena = args.arena, "starting skirmish");

    let mut skirmish = Skirmish::new(seed, args.arena);
    let fleet = skirmish.generate_fleet(args.vessels)?;
    if args.format == OutputFormat::Text {
        output.writeln(&format!("SEED {seed}"));
        FleetPresenter::show_roster(&fleet, output);
    }

    let mut engine = GameEngine::new(fleet);
    for _ in 0..args.turns {
        let plans = skirmish.random_plans(engine.fleet());
        let report = engine.run_turn(&plans)?;
        match args.format {
            OutputFormat::Text => ReportPresenter::show_turn(&report, output),
            OutputFormat::Json => ReportPresenter::show_turn_json(&report, output)?,
        }
        // Every ball has landed by the end of the turn.
        engine.fleet_mut().release_pending();
        engine.fleet_mut().retire_all_projectiles();
    }

    Ok(seed)
}
