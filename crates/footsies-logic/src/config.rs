//! Match configuration

use serde::{Deserialize, Serialize};

use crate::error::FootsiesError;

/// How the loop decides the match is over
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Play `rounds` rounds; the side with strictly more round wins takes it.
    #[default]
    BestOf,
    /// The first decisive exchange ends the whole match.
    SingleDecisive,
}

impl Mode {
    /// Rounds actually played for a configured round count
    pub fn round_limit(self, configured: u32) -> u32 {
        match self {
            Mode::BestOf => configured,
            Mode::SingleDecisive => 1,
        }
    }
}

/// What the timeout counts against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeoutScope {
    /// One turn budget shared by every round
    #[default]
    Match,
    /// The budget restarts at the beginning of each round
    Round,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: Mode,
    /// Rounds in best-of mode. Ignored in single-decisive mode.
    pub rounds: u32,
    /// Blocks each player starts with
    pub blocks: u32,
    /// Accepted for compatibility but not consulted: a hit is lethal as soon
    /// as the attacker already has one landed.
    pub attacks_to_win: u32,
    /// Turn limit, 0 disables
    pub timeout: u32,
    pub timeout_scope: TimeoutScope,
    /// Restore blocks and clear attack flags at the start of every round
    pub reset_each_round: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::BestOf,
            rounds: 3,
            blocks: 3,
            attacks_to_win: 2,
            timeout: 0,
            timeout_scope: TimeoutScope::Match,
            reset_each_round: false,
        }
    }
}

impl GameConfig {
    /// Single-decisive match with the default blocks and no timeout
    pub fn single_decisive() -> Self {
        Self { mode: Mode::SingleDecisive, rounds: 1, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), FootsiesError> {
        if self.mode == Mode::BestOf && self.rounds == 0 {
            return Err(FootsiesError::config("rounds must be at least 1"));
        }
        Ok(())
    }

    /// Timeout as an option, `None` when disabled
    pub fn timeout_limit(&self) -> Option<u32> {
        (self.timeout > 0).then_some(self.timeout)
    }

    pub fn round_limit(&self) -> u32 {
        self.mode.round_limit(self.rounds)
    }

    pub fn from_json(json: &str) -> Result<Self, FootsiesError> {
        let config: GameConfig = serde_json::from_str(json)
            .map_err(|e| FootsiesError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
