//! Move definitions and the move catalog

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FootsiesError;

/// One of the four selectable moves.
///
/// Ranks are powers of two so that the difference between any two ranks is
/// unique; the resolution table in [`crate::resolve`] depends on these exact
/// values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    /// Fast poke. Beats Grab, loses to Block and Dragon Punch.
    Attack,
    /// Stops Attack (spending a block) and punishes Dragon Punch.
    Block,
    /// Throws a blocking opponent.
    Grab,
    /// Invincible reversal. Beats Attack and Grab, punished by Block.
    DragonPunch,
}

impl Move {
    /// Every move, in rank order
    pub const ALL: [Move; 4] = [Move::Attack, Move::Block, Move::Grab, Move::DragonPunch];

    /// Numeric rank used by the resolution rule
    pub const fn value(self) -> u8 {
        match self {
            Move::Attack => 1,
            Move::Block => 2,
            Move::Grab => 4,
            Move::DragonPunch => 8,
        }
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Move::Attack => "Attack",
            Move::Block => "Block",
            Move::Grab => "Grab",
            Move::DragonPunch => "Dragon Punch",
        }
    }

    /// Short key used to pick this move at a prompt
    pub const fn key(self) -> &'static str {
        match self {
            Move::Attack => "a",
            Move::Block => "b",
            Move::Grab => "g",
            Move::DragonPunch => "dp",
        }
    }

    /// Recover a move from its raw rank.
    ///
    /// Any rank outside the catalog is a programming error upstream and is
    /// reported as [`FootsiesError::InvalidMove`].
    pub fn from_value(value: u8) -> Result<Self, FootsiesError> {
        Move::ALL
            .into_iter()
            .find(|m| m.value() == value)
            .ok_or(FootsiesError::InvalidMove { value })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = FootsiesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Catalog::standard().lookup(s)
    }
}

/// Immutable registry of the moves a player may choose, keyed by short name.
///
/// There is exactly one catalog per process, [`Catalog::standard`]. It is
/// handed to players explicitly instead of being read from ambient state.
#[derive(Debug, PartialEq, Eq)]
pub struct Catalog {
    moves: [Move; 4],
}

static STANDARD: Catalog = Catalog { moves: Move::ALL };

impl Catalog {
    /// The four-move catalog
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Find the move bound to `key` (`a`, `b`, `g`, `dp`).
    pub fn lookup(&self, key: &str) -> Result<Move, FootsiesError> {
        let key = key.trim();
        self.moves
            .iter()
            .copied()
            .find(|m| m.key() == key)
            .ok_or_else(|| FootsiesError::UnknownMoveKey { key: key.to_string() })
    }

    /// All moves, in rank order
    pub fn all(&self) -> &[Move] {
        &self.moves
    }

    /// `(key, move)` pairs, in rank order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Move)> + '_ {
        self.moves.iter().map(|m| (m.key(), *m))
    }

    /// Whether `m` is one of this catalog's moves
    pub fn contains(&self, m: Move) -> bool {
        self.moves.contains(&m)
    }

    /// Human-readable key listing, e.g. `a = Attack, b = Block, ...`
    pub fn describe(&self) -> String {
        self.entries()
            .map(|(key, m)| format!("{} = {}", key, m.name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_are_fixed() {
        assert_eq!(Move::Attack.value(), 1);
        assert_eq!(Move::Block.value(), 2);
        assert_eq!(Move::Grab.value(), 4);
        assert_eq!(Move::DragonPunch.value(), 8);
    }

    #[test]
    fn test_rank_differences_are_unique() {
        let mut diffs = Vec::new();
        for a in Move::ALL {
            for b in Move::ALL {
                if a != b {
                    diffs.push(a.value() as i8 - b.value() as i8);
                }
            }
        }
        let len = diffs.len();
        diffs.sort();
        diffs.dedup();
        assert_eq!(diffs.len(), len, "two move pairs share a rank difference");
    }

    #[test]
    fn test_lookup_known_keys() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.lookup("a").unwrap(), Move::Attack);
        assert_eq!(catalog.lookup("b").unwrap(), Move::Block);
        assert_eq!(catalog.lookup("g").unwrap(), Move::Grab);
        assert_eq!(catalog.lookup("dp").unwrap(), Move::DragonPunch);
        assert_eq!(catalog.lookup(" dp\n").unwrap(), Move::DragonPunch);
    }

    #[test]
    fn test_lookup_unknown_key() {
        let err = Catalog::standard().lookup("x").unwrap_err();
        assert_eq!(err, FootsiesError::UnknownMoveKey { key: "x".to_string() });
        assert!(Catalog::standard().lookup("").is_err());
        assert!(Catalog::standard().lookup("Attack").is_err());
    }

    #[test]
    fn test_all_has_four_moves() {
        let all = Catalog::standard().all();
        assert_eq!(all.len(), 4);
        for m in Move::ALL {
            assert!(Catalog::standard().contains(m));
        }
    }

    #[test]
    fn test_from_value() {
        for m in Move::ALL {
            assert_eq!(Move::from_value(m.value()).unwrap(), m);
        }
        assert_eq!(Move::from_value(3), Err(FootsiesError::InvalidMove { value: 3 }));
        assert_eq!(Move::from_value(0), Err(FootsiesError::InvalidMove { value: 0 }));
        assert_eq!(Move::from_value(16), Err(FootsiesError::InvalidMove { value: 16 }));
    }

    #[test]
    fn test_from_str_uses_keys() {
        assert_eq!("g".parse::<Move>().unwrap(), Move::Grab);
        assert!("grab".parse::<Move>().is_err());
    }

    #[test]
    fn test_display_and_describe() {
        assert_eq!(Move::DragonPunch.to_string(), "Dragon Punch");
        assert_eq!(
            Catalog::standard().describe(),
            "a = Attack, b = Block, g = Grab, dp = Dragon Punch"
        );
    }
}
