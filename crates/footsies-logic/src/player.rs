//! Player contract and the built-in players

use tracing::debug;

use crate::error::FootsiesError;
use crate::moves::{Catalog, Move};
use crate::random::SeededRng;
use crate::state::PlayerState;

/// Something that chooses a move each turn.
///
/// `act` is a plain synchronous call and may block (an interactive player
/// waits for input). The returned move must come from the catalog.
pub trait Player {
    fn name(&self) -> &str;

    fn act(&mut self, state: &PlayerState) -> Result<Move, FootsiesError>;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn act(&mut self, state: &PlayerState) -> Result<Move, FootsiesError> {
        (**self).act(state)
    }
}

impl<P: Player + ?Sized> Player for &mut P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn act(&mut self, state: &PlayerState) -> Result<Move, FootsiesError> {
        (**self).act(state)
    }
}

/// Uniformly random choice over a catalog, reproducible from its seed
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    name: String,
    catalog: &'static Catalog,
    rng: SeededRng,
}

impl RandomPlayer {
    pub fn new(name: impl Into<String>, catalog: &'static Catalog, rng: SeededRng) -> Self {
        Self { name: name.into(), catalog, rng }
    }

    /// Random player over the standard catalog, seeded from `seed` / `stream`
    pub fn seeded(name: impl Into<String>, seed: u64, stream: u32) -> Self {
        Self::new(name, Catalog::standard(), SeededRng::from_u64(seed, stream))
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn act(&mut self, _state: &PlayerState) -> Result<Move, FootsiesError> {
        let chosen = self
            .rng
            .pick(self.catalog.all())
            .copied()
            .ok_or_else(|| FootsiesError::player(&self.name, "catalog is empty"))?;
        debug!(player = %self.name, choice = %chosen, "random pick");
        Ok(chosen)
    }
}

/// Replays a fixed sequence of moves, starting over when it runs out
#[derive(Clone, Debug)]
pub struct ScriptedPlayer {
    name: String,
    script: Vec<Move>,
    next: usize,
}

impl ScriptedPlayer {
    pub fn new(name: impl Into<String>, script: Vec<Move>) -> Self {
        Self { name: name.into(), script, next: 0 }
    }

    /// Always plays `m`
    pub fn repeating(name: impl Into<String>, m: Move) -> Self {
        Self::new(name, vec![m])
    }

    /// Build a script from catalog keys, e.g. `["a", "b", "dp"]`
    pub fn from_keys<S: AsRef<str>>(
        name: impl Into<String>,
        catalog: &Catalog,
        keys: &[S],
    ) -> Result<Self, FootsiesError> {
        let script = keys
            .iter()
            .map(|k| catalog.lookup(k.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(name, script))
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn act(&mut self, _state: &PlayerState) -> Result<Move, FootsiesError> {
        if self.script.is_empty() {
            return Err(FootsiesError::player(&self.name, "script is empty"));
        }
        let m = self.script[self.next % self.script.len()];
        self.next += 1;
        Ok(m)
    }
}
