//! Match execution engine

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::config::{GameConfig, TimeoutScope};
use crate::error::FootsiesError;
use crate::moves::Move;
use crate::player::Player;
use crate::resolve::{resolve, Exchange};
use crate::state::{MatchState, Side};

/// Where the match loop is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    RoundInProgress,
    RoundWon(Side),
    MatchWon(Side),
    MatchDraw,
    TimedOut,
}

/// One resolved turn, with the state it left behind
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub round: u32,
    pub turn: u32,
    pub p1_move: Move,
    pub p2_move: Move,
    pub exchange: Exchange,
    pub p1_blocks: u32,
    pub p2_blocks: u32,
    pub p1_has_attack: bool,
    pub p2_has_attack: bool,
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0 for a draw or timeout, otherwise the winning player's number
    pub winner: u8,
    pub phase: Phase,
    pub p1_wins: u32,
    pub p2_wins: u32,
    pub rounds_played: u32,
    pub turns: Vec<TurnRecord>,
}

impl MatchResult {
    pub fn winner_side(&self) -> Option<Side> {
        match self.phase {
            Phase::MatchWon(side) => Some(side),
            _ => None,
        }
    }
}

/// A match between two players.
///
/// Both loop shapes (best-of rounds and single decisive exchange) run
/// through the same turn loop; [`crate::Mode`] only changes how many rounds
/// are played.
pub struct Footsies<P1, P2> {
    p1: P1,
    p2: P2,
    config: GameConfig,
    state: MatchState,
}

impl<P1: Player, P2: Player> Footsies<P1, P2> {
    pub fn new(p1: P1, p2: P2, config: GameConfig) -> Result<Self, FootsiesError> {
        config.validate()?;
        let state = MatchState::new(config.blocks, config.timeout_limit());
        Ok(Self { p1, p2, config, state })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// State left by the last match played
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn into_players(self) -> (P1, P2) {
        (self.p1, self.p2)
    }

    /// Play a match and return `0` (draw or timeout), `1` or `2`.
    pub fn start(&mut self) -> Result<u8, FootsiesError> {
        self.play().map(|result| result.winner)
    }

    /// Play a match and return the full record.
    ///
    /// Every call starts from a fresh match state.
    #[instrument(skip(self), fields(p1 = %self.p1.name(), p2 = %self.p2.name(), mode = ?self.config.mode))]
    pub fn play(&mut self) -> Result<MatchResult, FootsiesError> {
        self.state = MatchState::new(self.config.blocks, self.config.timeout_limit());

        let round_limit = self.config.round_limit();
        let mut turns = Vec::new();
        let mut timed_out = false;
        let mut rounds_played = 0;

        for round in 1..=round_limit {
            if self.match_clock_spent() {
                timed_out = true;
                break;
            }
            self.begin_round(round);
            rounds_played = round;

            match self.play_round(&mut turns)? {
                Phase::RoundWon(side) => {
                    info!("Player {} wins the round.", side.number());
                }
                _ => {
                    info!(round, "round timed out");
                    timed_out = true;
                }
            }
        }

        let phase = match self.state.leader() {
            Some(side) => Phase::MatchWon(side),
            None if timed_out => Phase::TimedOut,
            None => Phase::MatchDraw,
        };
        let winner = match phase {
            Phase::MatchWon(side) => side.number(),
            _ => 0,
        };
        info!(winner, p1_wins = self.state.p1_wins, p2_wins = self.state.p2_wins, "match over");

        Ok(MatchResult {
            winner,
            phase,
            p1_wins: self.state.p1_wins,
            p2_wins: self.state.p2_wins,
            rounds_played,
            turns,
        })
    }

    fn begin_round(&mut self, round: u32) {
        self.state.round = round;
        if round > 1 {
            if self.config.reset_each_round {
                self.state.reset_round(self.config.blocks);
            }
            if self.config.timeout_scope == TimeoutScope::Round {
                self.state.turn = 0;
            }
        }
    }

    /// Run turns until the round is won or the clock runs out.
    /// Returns `RoundWon` or `TimedOut`.
    fn play_round(&mut self, turns: &mut Vec<TurnRecord>) -> Result<Phase, FootsiesError> {
        let mut phase = Phase::RoundInProgress;
        while phase == Phase::RoundInProgress {
            if !self.tick() {
                phase = Phase::TimedOut;
                break;
            }
            let record = self.play_turn()?;
            if let Some(side) = record.exchange.winner() {
                phase = Phase::RoundWon(side);
            }
            turns.push(record);
        }
        Ok(phase)
    }

    /// True once a match-wide turn budget has no turns left for another round
    fn match_clock_spent(&self) -> bool {
        self.config.timeout_scope == TimeoutScope::Match
            && self.state.timeout.is_some_and(|limit| self.state.turn >= limit)
    }

    /// Advance the turn counter; false once the timeout is used up
    fn tick(&mut self) -> bool {
        if let Some(limit) = self.state.timeout {
            if self.state.turn >= limit {
                return false;
            }
            self.state.turn += 1;
            info!("Turn {}/{}", self.state.turn, limit);
        } else {
            self.state.turn += 1;
        }
        true
    }

    fn play_turn(&mut self) -> Result<TurnRecord, FootsiesError> {
        debug!(
            "p1: blocks {} attack {} ; p2: blocks {} attack {}",
            self.state.p1_blocks, self.state.p1_has_attack, self.state.p2_blocks, self.state.p2_has_attack
        );

        // Both snapshots are taken before either player acts
        let p1_view = self.state.view(Side::One);
        let p2_view = self.state.view(Side::Two);
        let m1 = self.p1.act(&p1_view)?;
        let m2 = self.p2.act(&p2_view)?;
        self.state.record_moves(m1, m2);

        info!("{} chose {}. {} chose {}.", self.p1.name(), m1, self.p2.name(), m2);

        let outcome = resolve(m1, m2, self.state.p1_has_attack, self.state.p2_has_attack);
        self.state.apply(&outcome);

        info!("{}", outcome.exchange);

        Ok(TurnRecord {
            round: self.state.round,
            turn: self.state.turn,
            p1_move: m1,
            p2_move: m2,
            exchange: outcome.exchange,
            p1_blocks: self.state.p1_blocks,
            p2_blocks: self.state.p2_blocks,
            p1_has_attack: self.state.p1_has_attack,
            p2_has_attack: self.state.p2_has_attack,
        })
    }
}
