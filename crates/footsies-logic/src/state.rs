//! Match state and the per-player snapshots built from it

use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::resolve::Outcome;

/// Which of the two players
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// `1` or `2`, the number reported as a match result
    pub const fn number(self) -> u8 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }

    pub const fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

/// What one player sees before choosing a move.
///
/// Built fresh every turn by [`MatchState::view`]; players never get access
/// to the match state itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub opponent_last_move: Option<Move>,
    pub own_blocks: u32,
    pub opponent_blocks: u32,
    pub own_has_attack: bool,
    pub opponent_has_attack: bool,
    /// Turns remaining before the timeout, `None` when no timeout is set
    pub turns_left: Option<u32>,
}

/// Mutable record of a match in progress, owned by the loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub p1_blocks: u32,
    pub p2_blocks: u32,
    pub p1_has_attack: bool,
    pub p2_has_attack: bool,
    pub p1_wins: u32,
    pub p2_wins: u32,
    pub p1_last_move: Option<Move>,
    pub p2_last_move: Option<Move>,
    /// Current round, 1-based; 0 before the first round starts
    pub round: u32,
    /// Turns counted against the timeout
    pub turn: u32,
    /// Turn limit, `None` when disabled
    pub timeout: Option<u32>,
}

impl MatchState {
    pub fn new(blocks: u32, timeout: Option<u32>) -> Self {
        Self {
            p1_blocks: blocks,
            p2_blocks: blocks,
            p1_has_attack: false,
            p2_has_attack: false,
            p1_wins: 0,
            p2_wins: 0,
            p1_last_move: None,
            p2_last_move: None,
            round: 0,
            turn: 0,
            timeout,
        }
    }

    /// Snapshot of the match from `side`'s point of view
    pub fn view(&self, side: Side) -> PlayerState {
        let turns_left = self.timeout.map(|limit| limit.saturating_sub(self.turn));
        match side {
            Side::One => PlayerState {
                opponent_last_move: self.p2_last_move,
                own_blocks: self.p1_blocks,
                opponent_blocks: self.p2_blocks,
                own_has_attack: self.p1_has_attack,
                opponent_has_attack: self.p2_has_attack,
                turns_left,
            },
            Side::Two => PlayerState {
                opponent_last_move: self.p1_last_move,
                own_blocks: self.p2_blocks,
                opponent_blocks: self.p1_blocks,
                own_has_attack: self.p2_has_attack,
                opponent_has_attack: self.p1_has_attack,
                turns_left,
            },
        }
    }

    pub fn record_moves(&mut self, m1: Move, m2: Move) {
        self.p1_last_move = Some(m1);
        self.p2_last_move = Some(m2);
    }

    /// Apply a resolved exchange.
    ///
    /// Blocks floor at zero. Attack flags are replaced, never OR-ed with the
    /// previous turn. A set win flag credits that side one win.
    pub fn apply(&mut self, outcome: &Outcome) {
        self.p1_blocks = self.p1_blocks.saturating_add_signed(outcome.p1_blocks_delta);
        self.p2_blocks = self.p2_blocks.saturating_add_signed(outcome.p2_blocks_delta);
        self.p1_has_attack = outcome.p1_attack_next;
        self.p2_has_attack = outcome.p2_attack_next;

        match outcome.winner() {
            Some(Side::One) => self.p1_wins += 1,
            Some(Side::Two) => self.p2_wins += 1,
            None => {}
        }
    }

    /// Round wins credited to `side` so far
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::One => self.p1_wins,
            Side::Two => self.p2_wins,
        }
    }

    /// Side with strictly more wins, `None` on a tie
    pub fn leader(&self) -> Option<Side> {
        use std::cmp::Ordering;
        match self.p1_wins.cmp(&self.p2_wins) {
            Ordering::Greater => Some(Side::One),
            Ordering::Less => Some(Side::Two),
            Ordering::Equal => None,
        }
    }

    /// Restore blocks and clear per-round memory (flags, last moves)
    pub fn reset_round(&mut self, blocks: u32) {
        self.p1_blocks = blocks;
        self.p2_blocks = blocks;
        self.p1_has_attack = false;
        self.p2_has_attack = false;
        self.p1_last_move = None;
        self.p2_last_move = None;
    }
}
