//! Match Logic for Footsies
//!
//! Core round-resolution engine for a two-player simultaneous-move
//! minigame. Each turn both players pick Attack, Block, Grab or Dragon
//! Punch; the pair of moves decides blocks spent, setup hits and winners.
//! This crate is compiled to:
//! - Native (for the `footsies` command-line game)
//! - WASM (for browser replays)

mod config;
mod error;
mod game;
mod moves;
mod player;
mod random;
mod replay;
mod resolve;
mod state;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{GameConfig, Mode, TimeoutScope};
pub use error::FootsiesError;
pub use game::{Footsies, MatchResult, Phase, TurnRecord};
pub use moves::{Catalog, Move};
pub use player::{Player, RandomPlayer, ScriptedPlayer};
pub use random::SeededRng;
pub use replay::{resolve_keys, simulate_random_match};
pub use resolve::{resolve, resolve_values, Exchange, Outcome};
pub use state::{MatchState, PlayerState, Side};
