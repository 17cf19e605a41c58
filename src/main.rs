use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::game::GameEngine;
use connect_four::ui::{run_match, ConsolePresenter, ConsoleSource};

/// Play Connect Four on the console.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four on the console")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Starting order: 0 keeps the listed order, 1 swaps it
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=1))]
    seed: Option<u8>,

    /// Override grid width
    #[arg(long)]
    width: Option<usize>,

    /// Override grid height
    #[arg(long)]
    height: Option<usize>,

    /// Override the number of tokens in a row needed to win
    #[arg(long)]
    run_length: Option<usize>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(seed) = cli.seed {
        config.start.seed = Some(seed);
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(run_length) = cli.run_length {
        config.board.run_length = run_length;
    }
    config.validate().context("invalid settings")?;

    let mut engine = GameEngine::start(
        config.grid(),
        config.players(),
        config.start_order(),
        config.board.run_length,
        &mut StdRng::from_os_rng(),
    );

    let stdin = io::stdin();
    let mut source = ConsoleSource::new(stdin.lock(), io::stdout());
    let mut presenter = ConsolePresenter::new(io::stdout());

    if run_match(&mut engine, &mut source, &mut presenter)?.is_none() {
        println!("\nGame abandoned.");
    }
    Ok(())
}
