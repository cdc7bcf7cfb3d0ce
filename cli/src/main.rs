use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use pairmatch_core::{Dim, MatchEngine, RandomDeckGenerator};

use crate::host::{Host, Output, WallClock};
use crate::settings::Settings;

mod command;
mod host;
mod render;
mod settings;

/// Flip cards two at a time and find every pair.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Grid side length, any even number (the stock sizes are 4, 6 and 8)
    #[arg(short, long)]
    size: Option<Dim>,

    /// 1 for a timed solo game, 2 for alternating turns
    #[arg(short, long)]
    players: Option<u8>,

    /// Seed for the deck shuffle, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// TOML settings file, overridden by the flags above
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print one JSON snapshot per line instead of drawing the board
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings.override_with(cli.size, cli.players, cli.seed);

    let config = settings.game_config().context("invalid game settings")?;
    let catalog = settings.catalog().context("invalid symbol list")?;
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Dealing {:?} with seed {}", config, seed);

    let generator = RandomDeckGenerator::from_seed(seed).with_catalog(catalog);
    let engine = MatchEngine::with_timing(config, generator, settings.timing);
    let output = if cli.json { Output::Json } else { Output::Text };

    let mut host = Host::new(engine, io::stdout().lock(), output, WallClock::new());
    host.run(io::stdin().lock())?;
    log::info!("Leaving after {} game(s)", host.engine().generation());
    Ok(())
}
