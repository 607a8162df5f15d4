//! Seeded replays, shared by the WASM bindings and native callers

use crate::config::GameConfig;
use crate::error::FootsiesError;
use crate::game::{Footsies, MatchResult};
use crate::moves::Catalog;
use crate::player::RandomPlayer;
use crate::random::SeededRng;
use crate::resolve::{resolve, Outcome};

/// Play two seeded random players against each other.
///
/// `config_json` may omit fields (defaults apply). Player 1 draws from
/// stream 1 of `seed`, player 2 from stream 2.
pub fn simulate_random_match(
    config_json: &str,
    seed: &[u8],
) -> Result<MatchResult, FootsiesError> {
    let config = GameConfig::from_json(config_json)?;
    let seed: [u8; 32] = seed
        .try_into()
        .map_err(|_| FootsiesError::InvalidSeed { len: seed.len() })?;

    let catalog = Catalog::standard();
    let p1 = RandomPlayer::new("Player 1", catalog, SeededRng::new(&seed, 1));
    let p2 = RandomPlayer::new("Player 2", catalog, SeededRng::new(&seed, 2));

    Footsies::new(p1, p2, config)?.play()
}

/// Resolve one exchange from catalog keys
pub fn resolve_keys(
    p1_key: &str,
    p2_key: &str,
    p1_has_attack: bool,
    p2_has_attack: bool,
) -> Result<Outcome, FootsiesError> {
    let catalog = Catalog::standard();
    let m1 = catalog.lookup(p1_key)?;
    let m2 = catalog.lookup(p2_key)?;
    Ok(resolve(m1, m2, p1_has_attack, p2_has_attack))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::Exchange;
    use crate::state::Side;

    #[test]
    fn test_simulate_is_reproducible() {
        let seed = [42u8; 32];
        let a = simulate_random_match(r#"{"rounds": 5, "timeout": 30}"#, &seed).unwrap();
        let b = simulate_random_match(r#"{"rounds": 5, "timeout": 30}"#, &seed).unwrap();
        assert_eq!(a, b);
        assert!(a.winner <= 2);
    }

    #[test]
    fn test_simulate_defaults_from_empty_object() {
        let result = simulate_random_match("{}", &[7u8; 32]).unwrap();
        assert!(result.rounds_played <= 3);
    }

    #[test]
    fn test_simulate_rejects_short_seed() {
        assert_eq!(
            simulate_random_match("{}", &[1u8; 16]),
            Err(FootsiesError::InvalidSeed { len: 16 })
        );
        assert_eq!(
            simulate_random_match("{}", &[]),
            Err(FootsiesError::InvalidSeed { len: 0 })
        );
    }

    #[test]
    fn test_simulate_rejects_bad_config() {
        assert!(matches!(
            simulate_random_match(r#"{"rounds": 0}"#, &[1u8; 32]),
            Err(FootsiesError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            simulate_random_match("rounds = 3", &[1u8; 32]),
            Err(FootsiesError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_resolve_keys() {
        let outcome = resolve_keys("b", "dp", false, false).unwrap();
        assert_eq!(outcome.exchange, Exchange::Counter { by: Side::One });

        let outcome = resolve_keys("a", "g", true, false).unwrap();
        assert_eq!(outcome.winner(), Some(Side::One));

        assert_eq!(
            resolve_keys("a", "kick", false, false),
            Err(FootsiesError::UnknownMoveKey { key: "kick".into() })
        );
    }
}
