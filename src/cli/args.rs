use clap::{Parser, ValueEnum};

use crate::models::constants::{DEFAULT_ARENA_SIZE, DEFAULT_TURNS, DEFAULT_VESSEL_COUNT};

/// Output format for turn reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// One JSON phase report per line.
    Json,
}

/// Broadside - run a seeded naval skirmish
#[derive(Parser, Debug)]
#[command(name = "broadside")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Random seed (default: random)
    #[arg(short, long, env = "BROADSIDE_SEED")]
    pub seed: Option<u64>,

    /// Vessels in the skirmish
    #[arg(short, long, env = "BROADSIDE_VESSELS", default_value_t = DEFAULT_VESSEL_COUNT)]
    pub vessels: usize,

    /// Turns to play
    #[arg(short, long, env = "BROADSIDE_TURNS", default_value_t = DEFAULT_TURNS)]
    pub turns: u32,

    /// Side length of the square arena
    #[arg(short, long, env = "BROADSIDE_ARENA", default_value_t = DEFAULT_ARENA_SIZE)]
    pub arena: i32,

    /// Output format: text or json
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let args = Args::try_parse_from(["broadside"]).unwrap();
        assert_eq!(args.vessels, DEFAULT_VESSEL_COUNT);
        assert_eq!(args.turns, DEFAULT_TURNS);
        assert_eq!(args.arena, DEFAULT_ARENA_SIZE);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn explicit_values() {
        let args = Args::try_parse_from(["broadside", "--seed", "42", "-v", "6", "--format", "json"]).unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.vessels, 6);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn bad_seed_rejected() {
        assert!(Args::try_parse_from(["broadside", "--seed", "many"]).is_err());
    }
}
