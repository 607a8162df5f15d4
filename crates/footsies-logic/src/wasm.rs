//! WASM bindings for browser replays

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{resolve_keys, simulate_random_match, Catalog};

/// Simulate a match between two seeded random players
///
/// # Arguments
/// * `config_json` - JSON serialized GameConfig (missing fields take defaults)
/// * `seed` - 32-byte seed; player 1 uses stream 1, player 2 stream 2
///
/// # Returns
/// JSON serialized MatchResult
#[wasm_bindgen]
pub fn simulate_match(config_json: &str, seed: &[u8]) -> Result<JsValue, JsError> {
    let result = simulate_random_match(config_json, seed)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Resolve a single exchange given both players' move keys
#[wasm_bindgen]
pub fn resolve_exchange(
    p1_key: &str,
    p2_key: &str,
    p1_has_attack: bool,
    p2_has_attack: bool,
) -> Result<JsValue, JsError> {
    let outcome = resolve_keys(p1_key, p2_key, p1_has_attack, p2_has_attack)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&outcome)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct MoveInfo {
    key: &'static str,
    name: &'static str,
    value: u8,
}

/// List the catalog moves
#[wasm_bindgen]
pub fn get_moves() -> Result<JsValue, JsError> {
    let moves: Vec<MoveInfo> = Catalog::standard()
        .entries()
        .map(|(key, m)| MoveInfo { key, name: m.name(), value: m.value() })
        .collect();

    serde_wasm_bindgen::to_value(&moves)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
