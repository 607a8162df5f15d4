//! Footsies in the terminal.

mod cli;
mod console;

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use footsies_logic::{Catalog, Footsies, MatchResult, Player, RandomPlayer, SeededRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, PlayerKind};
use crate::console::ConsolePlayer;

fn main() -> Result<()> {
    // the transcript goes to stderr so stdout carries only the result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    run(&cli, &mut io::stdout().lock())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = cli.game_config()?;
    let seed = cli.seed.unwrap_or_else(clock_seed);
    debug!(?config, seed, "match settings");

    let catalog = Catalog::standard();
    let p1 = build_player(cli.p1, &cli.p1_name, catalog, seed, 1);
    let p2 = build_player(cli.p2, &cli.p2_name, catalog, seed, 2);

    let mut game = Footsies::new(p1, p2, config).context("Failed to set up the match")?;
    let result = game.play().context("Match aborted")?;

    write_result(&result, cli.json, out)
}

fn write_result(result: &MatchResult, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, result)?;
        writeln!(out)?;
    } else {
        match result.winner_side() {
            Some(side) => info!("Player {} wins the match.", side.number()),
            None => info!("No winner."),
        }
        writeln!(out, "{}", result.winner)?;
    }
    Ok(())
}

fn build_player(
    kind: PlayerKind,
    name: &str,
    catalog: &'static Catalog,
    seed: u64,
    stream: u32,
) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(ConsolePlayer::new(name, catalog)),
        PlayerKind::Random => {
            Box::new(RandomPlayer::new(name, catalog, SeededRng::from_u64(seed, stream)))
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
