//! WASM bindings for adventure-forge — powers a browser front end.
//!
//! Everything crossing the boundary is JSON text.

use wasm_bindgen::prelude::*;

use adventure_forge::core::generation::WorldGenerationService;
use adventure_forge::core::session::GameSession;
use adventure_forge::schema::direction::Direction;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct MoveResult {
    id: String,
    name: String,
}

#[derive(serde::Serialize)]
struct WorldSummary {
    name: String,
    seed: String,
    locations: usize,
    npcs: usize,
}

// ---------------------------------------------------------------------------
// WasmGame — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct WasmGame {
    session: GameSession,
}

#[wasm_bindgen]
impl WasmGame {
    /// Generate a world and start a session at its start location.
    ///
    /// Seed zero draws a fresh seed; `summary()` reports the one used.
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str, seed: i64) -> Result<WasmGame, JsError> {
        let seed = effective_seed(seed)
            .map_err(|e| JsError::new(&format!("Random source error: {e}")))?;
        let service = WorldGenerationService::builder()
            .build()
            .map_err(|e| JsError::new(&format!("Configuration error: {e}")))?;

        Ok(WasmGame {
            session: GameSession::new(service.generate_world(name, seed)),
        })
    }

    /// The current location as JSON:
    /// ```json
    /// {
    ///   "id": "start",
    ///   "name": "Crossroads",
    ///   "description": "...",
    ///   "exits": ["North", "South", "East"],
    ///   "npcs": [{ "id": "start_npc_1", "name": "Arthur", "race": "human", "description": "..." }]
    /// }
    /// ```
    pub fn current_location(&self) -> Result<String, JsError> {
        let info = self
            .session
            .current_location_info()
            .map_err(|e| JsError::new(&e.to_string()))?;
        serde_json::to_string(&info).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Move through an exit (`"north"`, `"ne"`, ...) and return the new
    /// location's id and name as JSON.
    pub fn move_player(&mut self, direction: &str) -> Result<String, JsError> {
        let direction: Direction = direction
            .parse()
            .map_err(|e: adventure_forge::schema::direction::ParseDirectionError| {
                JsError::new(&e.to_string())
            })?;
        let location = self
            .session
            .move_player(direction)
            .map_err(|e| JsError::new(&e.to_string()))?;
        let result = MoveResult {
            id: location.id.to_string(),
            name: location.name.clone(),
        };
        serde_json::to_string(&result).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// The whole generated world as JSON.
    pub fn world_json(&self) -> Result<String, JsError> {
        serde_json::to_string(self.session.world())
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Name, seed (as a string, to survive JS numbers), and sizes.
    pub fn summary(&self) -> Result<String, JsError> {
        let world = self.session.world();
        let summary = WorldSummary {
            name: world.name().to_string(),
            seed: world.seed().to_string(),
            locations: world.location_count(),
            npcs: world.npc_count(),
        };
        serde_json::to_string(&summary).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// The eight direction names, in satellite order.
    pub fn directions() -> String {
        let names: Vec<&str> = Direction::ORDER.iter().map(|d| d.name()).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn greet(name: &str) -> String {
        format!("Hello {name}, it's show time!")
    }
}

/// Non-zero seeds pass through. Zero is replaced by a non-zero draw from the
/// host's random source, since wasm32 has no `SystemTime`.
fn effective_seed(seed: i64) -> Result<i64, getrandom::Error> {
    if seed != 0 {
        return Ok(seed);
    }
    loop {
        let mut bytes = [0u8; 8];
        getrandom::getrandom(&mut bytes)?;
        let drawn = i64::from_le_bytes(bytes);
        if drawn != 0 {
            return Ok(drawn);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_seed_is_kept() {
        assert_eq!(effective_seed(1987).unwrap(), 1987);
        assert_eq!(effective_seed(-4).unwrap(), -4);
    }

    #[test]
    fn zero_seed_is_substituted_and_replays() {
        let seed = effective_seed(0).unwrap();
        assert_ne!(seed, 0);

        let service = WorldGenerationService::builder().build().unwrap();
        let world = service.generate_world("Browser", seed);
        assert_eq!(world.seed(), seed);
        assert_eq!(service.generate_world("Browser", seed), world);
    }
}
