//! Strictly Duel - play one game between two player threads.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use strictly_duel::{Cli, run_duel};
use strictly_tictactoe::{ConsoleRenderer, NullRenderer, Renderer};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.duel_config()?;
    info!(?config, "Starting duel");

    let renderer: Arc<dyn Renderer> = if cli.quiet || cli.json {
        Arc::new(NullRenderer)
    } else {
        Arc::new(ConsoleRenderer)
    };

    let summary = run_duel(&config, renderer)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Final result:");
        ConsoleRenderer.render(summary.board());
        println!("{}", summary.headline());
    }

    Ok(())
}
