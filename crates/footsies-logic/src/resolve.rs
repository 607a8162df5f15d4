//! Resolution rule: what happens when two moves meet

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FootsiesError;
use crate::moves::Move;
use crate::state::Side;

/// Category of a resolved exchange. `by` is always the side that benefits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exchange {
    /// Same move on both sides
    Neutral,
    /// `by` blocked the opponent's Attack and spent a block
    Block { by: Side },
    /// `by` threw a blocking opponent
    Throw { by: Side },
    /// `by` landed an Attack on a grabbing opponent
    Hit { by: Side, lethal: bool },
    /// `by` blocked a Dragon Punch and countered
    Counter { by: Side },
    /// `by` landed a Dragon Punch
    DragonPunch { by: Side },
}

impl Exchange {
    /// Classify a pair of moves (player 1's, player 2's).
    ///
    /// Equivalent to branching on `m1.value() - m2.value()`:
    /// `0` neutral, `±1` block, `±2` throw, `±3` hit, `±6` counter,
    /// `±4`/`±7` Dragon Punch. A positive difference favors player 1 for
    /// block and throw and player 2 for hit and counter.
    pub fn classify(m1: Move, m2: Move, p1_has_attack: bool, p2_has_attack: bool) -> Self {
        use Move::*;
        match (m1, m2) {
            (Attack, Attack) | (Block, Block) | (Grab, Grab) | (DragonPunch, DragonPunch) => {
                Exchange::Neutral
            }
            (Block, Attack) => Exchange::Block { by: Side::One },
            (Attack, Block) => Exchange::Block { by: Side::Two },
            (Grab, Block) => Exchange::Throw { by: Side::One },
            (Block, Grab) => Exchange::Throw { by: Side::Two },
            (Grab, Attack) => Exchange::Hit { by: Side::Two, lethal: p2_has_attack },
            (Attack, Grab) => Exchange::Hit { by: Side::One, lethal: p1_has_attack },
            (DragonPunch, Block) => Exchange::Counter { by: Side::Two },
            (Block, DragonPunch) => Exchange::Counter { by: Side::One },
            (DragonPunch, Attack) | (DragonPunch, Grab) => Exchange::DragonPunch { by: Side::One },
            (Attack, DragonPunch) | (Grab, DragonPunch) => Exchange::DragonPunch { by: Side::Two },
        }
    }

    /// Side that won the round through this exchange, if any
    pub fn winner(self) -> Option<Side> {
        match self {
            Exchange::Neutral | Exchange::Block { .. } => None,
            Exchange::Hit { by, lethal } => lethal.then_some(by),
            Exchange::Throw { by } | Exchange::Counter { by } | Exchange::DragonPunch { by } => {
                Some(by)
            }
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exchange::Neutral => write!(f, "Same option chosen!"),
            Exchange::Block { by } => write!(f, "Player {} blocks a hit!", by.number()),
            Exchange::Throw { by } => {
                write!(f, "Player {} gets thrown!", by.opponent().number())
            }
            Exchange::Hit { by, lethal: false } => {
                write!(f, "Player {} lands a hit!", by.number())
            }
            Exchange::Hit { by, lethal: true } => {
                write!(f, "Player {} lands a second hit!", by.number())
            }
            Exchange::Counter { by } => {
                write!(f, "Player {} blocks the Dragon Punch and counters!", by.number())
            }
            Exchange::DragonPunch { by } => {
                write!(f, "Player {} lands a Dragon Punch!", by.number())
            }
        }
    }
}

/// Effect of one exchange on the match state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub exchange: Exchange,
    pub p1_blocks_delta: i32,
    pub p2_blocks_delta: i32,
    pub p1_win: bool,
    pub p2_win: bool,
    pub p1_attack_next: bool,
    pub p2_attack_next: bool,
}

impl Outcome {
    /// At most one of `p1_win` / `p2_win` is ever set, so this is unambiguous.
    pub fn winner(&self) -> Option<Side> {
        match (self.p1_win, self.p2_win) {
            (true, _) => Some(Side::One),
            (_, true) => Some(Side::Two),
            _ => None,
        }
    }
}

/// Resolve player 1's move against player 2's.
///
/// `p1_has_attack` / `p2_has_attack` are the flags left by the previous
/// turn; a hit landed while the attacker's flag is already up is lethal.
/// Flags not raised by this exchange come back false.
pub fn resolve(m1: Move, m2: Move, p1_has_attack: bool, p2_has_attack: bool) -> Outcome {
    let exchange = Exchange::classify(m1, m2, p1_has_attack, p2_has_attack);
    let winner = exchange.winner();

    let mut outcome = Outcome {
        exchange,
        p1_blocks_delta: 0,
        p2_blocks_delta: 0,
        p1_win: winner == Some(Side::One),
        p2_win: winner == Some(Side::Two),
        p1_attack_next: false,
        p2_attack_next: false,
    };

    match exchange {
        Exchange::Block { by: Side::One } => outcome.p1_blocks_delta = -1,
        Exchange::Block { by: Side::Two } => outcome.p2_blocks_delta = -1,
        Exchange::Hit { by: Side::One, .. } => outcome.p1_attack_next = true,
        Exchange::Hit { by: Side::Two, .. } => outcome.p2_attack_next = true,
        _ => {}
    }

    outcome
}

/// [`resolve`] over raw ranks. Fails with `InvalidMove` for a rank that is
/// not in the catalog instead of falling through to the Dragon Punch branch.
pub fn resolve_values(
    v1: u8,
    v2: u8,
    p1_has_attack: bool,
    p2_has_attack: bool,
) -> Result<Outcome, FootsiesError> {
    let m1 = Move::from_value(v1)?;
    let m2 = Move::from_value(v2)?;
    Ok(resolve(m1, m2, p1_has_attack, p2_has_attack))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diff(m1: Move, m2: Move) -> i8 {
        m1.value() as i8 - m2.value() as i8
    }

    fn all_pairs() -> impl Iterator<Item = (Move, Move)> {
        Move::ALL
            .into_iter()
            .flat_map(|a| Move::ALL.into_iter().map(move |b| (a, b)))
    }

    #[test]
    fn test_classification_follows_rank_difference() {
        for (m1, m2) in all_pairs() {
            let exchange = Exchange::classify(m1, m2, false, false);
            let expected = match diff(m1, m2) {
                0 => Exchange::Neutral,
                1 => Exchange::Block { by: Side::One },
                -1 => Exchange::Block { by: Side::Two },
                2 => Exchange::Throw { by: Side::One },
                -2 => Exchange::Throw { by: Side::Two },
                3 => Exchange::Hit { by: Side::Two, lethal: false },
                -3 => Exchange::Hit { by: Side::One, lethal: false },
                6 => Exchange::Counter { by: Side::Two },
                -6 => Exchange::Counter { by: Side::One },
                d if d > 0 => Exchange::DragonPunch { by: Side::One },
                _ => Exchange::DragonPunch { by: Side::Two },
            };
            assert_eq!(exchange, expected, "{:?} vs {:?}", m1, m2);
        }
    }

    #[test]
    fn test_at_most_one_winner() {
        for (m1, m2) in all_pairs() {
            for (a1, a2) in [(false, false), (true, false), (false, true), (true, true)] {
                let outcome = resolve(m1, m2, a1, a2);
                assert!(
                    !(outcome.p1_win && outcome.p2_win),
                    "{:?} vs {:?} set both win flags",
                    m1,
                    m2
                );
            }
        }
    }

    #[test]
    fn test_same_move_is_noop() {
        for m in Move::ALL {
            let outcome = resolve(m, m, true, true);
            assert_eq!(outcome.exchange, Exchange::Neutral);
            assert_eq!(outcome.p1_blocks_delta, 0);
            assert_eq!(outcome.p2_blocks_delta, 0);
            assert!(!outcome.p1_win && !outcome.p2_win);
            assert!(!outcome.p1_attack_next && !outcome.p2_attack_next);
        }
    }

    #[test]
    fn test_flags_only_survive_fresh_hits() {
        for (m1, m2) in all_pairs() {
            let outcome = resolve(m1, m2, true, true);
            if diff(m1, m2).abs() != 3 {
                assert!(!outcome.p1_attack_next, "{:?} vs {:?}", m1, m2);
                assert!(!outcome.p2_attack_next, "{:?} vs {:?}", m1, m2);
            }
        }
    }

    #[test]
    fn test_block_spends_blocker() {
        let outcome = resolve(Move::Block, Move::Attack, false, false);
        assert_eq!(outcome.exchange, Exchange::Block { by: Side::One });
        assert_eq!(outcome.p1_blocks_delta, -1);
        assert_eq!(outcome.p2_blocks_delta, 0);
        assert_eq!(outcome.winner(), None);

        let outcome = resolve(Move::Attack, Move::Block, false, false);
        assert_eq!(outcome.p1_blocks_delta, 0);
        assert_eq!(outcome.p2_blocks_delta, -1);
    }

    #[test]
    fn test_grab_throws_block() {
        assert_eq!(resolve(Move::Grab, Move::Block, false, false).winner(), Some(Side::One));
        assert_eq!(resolve(Move::Block, Move::Grab, false, false).winner(), Some(Side::Two));
    }

    #[test]
    fn test_first_hit_is_not_lethal() {
        let outcome = resolve(Move::Attack, Move::Grab, false, false);
        assert_eq!(outcome.exchange, Exchange::Hit { by: Side::One, lethal: false });
        assert!(outcome.p1_attack_next);
        assert!(!outcome.p2_attack_next);
        assert_eq!(outcome.winner(), None);
    }

    #[test]
    fn test_second_hit_is_lethal() {
        let outcome = resolve(Move::Attack, Move::Grab, true, false);
        assert_eq!(outcome.exchange, Exchange::Hit { by: Side::One, lethal: true });
        assert_eq!(outcome.winner(), Some(Side::One));

        let outcome = resolve(Move::Grab, Move::Attack, false, true);
        assert_eq!(outcome.winner(), Some(Side::Two));
        assert!(outcome.p2_attack_next);
    }

    #[test]
    fn test_opponent_flag_does_not_make_hit_lethal() {
        let outcome = resolve(Move::Attack, Move::Grab, false, true);
        assert_eq!(outcome.winner(), None);
        assert!(outcome.p1_attack_next);
        assert!(!outcome.p2_attack_next);
    }

    #[test]
    fn test_block_counters_dragon_punch() {
        assert_eq!(resolve(Move::Block, Move::DragonPunch, false, false).winner(), Some(Side::One));
        assert_eq!(resolve(Move::DragonPunch, Move::Block, false, false).winner(), Some(Side::Two));
    }

    #[test]
    fn test_dragon_punch_beats_attack_and_grab() {
        for other in [Move::Attack, Move::Grab] {
            let outcome = resolve(Move::DragonPunch, other, false, false);
            assert_eq!(outcome.exchange, Exchange::DragonPunch { by: Side::One });
            assert_eq!(outcome.winner(), Some(Side::One));

            let outcome = resolve(other, Move::DragonPunch, false, false);
            assert_eq!(outcome.winner(), Some(Side::Two));
        }
    }

    #[test]
    fn test_resolve_values_rejects_unknown_rank() {
        assert!(resolve_values(1, 8, false, false).is_ok());
        assert_eq!(
            resolve_values(1, 5, false, false),
            Err(FootsiesError::InvalidMove { value: 5 })
        );
        assert_eq!(
            resolve_values(9, 1, false, false),
            Err(FootsiesError::InvalidMove { value: 9 })
        );
    }

    #[test]
    fn test_transcript_lines() {
        assert_eq!(Exchange::Neutral.to_string(), "Same option chosen!");
        assert_eq!(Exchange::Throw { by: Side::One }.to_string(), "Player 2 gets thrown!");
        assert_eq!(
            Exchange::Counter { by: Side::Two }.to_string(),
            "Player 2 blocks the Dragon Punch and counters!"
        );
    }
}
