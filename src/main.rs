use std::process::ExitCode;

use broadside::cli::{self, args::Args};
use broadside::io::TerminalIO;
use clap::Parser;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so JSON reports on stdout stay machine-readable.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = Args::parse();
    match cli::run(&args, &mut TerminalIO) {
        Ok(seed) => {
            tracing::info!(seed, "skirmish finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "skirmish failed");
            ExitCode::FAILURE
        }
    }
}
