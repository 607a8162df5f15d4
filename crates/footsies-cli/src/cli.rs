//! Command-line interface for footsies.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use footsies_logic::{GameConfig, Mode, TimeoutScope};

/// Footsies - two players, four moves, one read
#[derive(Parser, Debug)]
#[command(name = "footsies")]
#[command(about = "Play a Footsies match in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with match settings; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Best-of rounds, or a single decisive exchange
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Rounds in best-of mode
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Blocks each player starts with
    #[arg(long)]
    pub blocks: Option<u32>,

    /// Accepted but currently has no effect on the rules
    #[arg(long)]
    pub attacks_to_win: Option<u32>,

    /// Turn limit, 0 disables
    #[arg(long)]
    pub timeout: Option<u32>,

    /// Whether the turn limit covers the whole match or each round
    #[arg(long, value_enum)]
    pub timeout_scope: Option<ScopeArg>,

    /// Restore blocks and clear attack flags at the start of every round;
    /// `--reset-each-round false` turns it off again
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub reset_each_round: Option<bool>,

    /// Who controls player 1
    #[arg(long, value_enum, default_value = "human")]
    pub p1: PlayerKind,

    /// Who controls player 2
    #[arg(long, value_enum, default_value = "random")]
    pub p2: PlayerKind,

    #[arg(long, default_value = "Manuel")]
    pub p1_name: String,

    #[arg(long, default_value = "Random")]
    pub p2_name: String,

    /// Seed for random players; taken from the clock when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the full match record as JSON instead of the winner number
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    BestOf,
    SingleDecisive,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::BestOf => Mode::BestOf,
            ModeArg::SingleDecisive => Mode::SingleDecisive,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    Match,
    Round,
}

impl From<ScopeArg> for TimeoutScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Match => TimeoutScope::Match,
            ScopeArg::Round => TimeoutScope::Round,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    Human,
    Random,
}

impl Cli {
    /// Settings from the config file (or defaults) with flags applied on top
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.validate().context("Invalid match settings")?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut GameConfig) {
        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }
        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        if let Some(blocks) = self.blocks {
            config.blocks = blocks;
        }
        if let Some(attacks) = self.attacks_to_win {
            config.attacks_to_win = attacks;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(scope) = self.timeout_scope {
            config.timeout_scope = scope.into();
        }
        if let Some(reset) = self.reset_each_round {
            config.reset_each_round = reset;
        }
    }
}

pub fn load_config(path: &Path) -> Result<GameConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Failed to parse config file {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<GameConfig> {
    Ok(toml::from_str(text)?)
}
