//! JSON entry point mirroring the library API.
//!
//! A host application supplies both team sheets and a seed in one request
//! and receives the full result set back. Errors come back as `Err(String)`
//! so the boundary never panics across FFI or IPC.

use crate::engine::{MatchInput, MatchSimulator, SimulationOutput, TeamSheet};
use crate::models::{BrownlowFormat, MatchId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported request schema version.
pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub match_id: MatchId,
    /// "3-2-1" or "5-4-3-2-1". Defaults to the traditional format.
    #[serde(default)]
    pub brownlow_format: Option<String>,
    pub home: TeamSheet,
    pub away: TeamSheet,
}

#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub schema_version: u8,
    #[serde(flatten)]
    pub output: SimulationOutput,
}

/// Simulate a match from a JSON request, returning the response as JSON.
pub fn simulate_match_json(request_json: &str) -> Result<String, String> {
    let request: SimulateRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {e}"))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!(
            "Unsupported schema version: {}",
            request.schema_version
        ));
    }

    let brownlow_format = match request.brownlow_format.as_deref() {
        Some(tag) => BrownlowFormat::from_str(tag).map_err(|e| e.to_string())?,
        None => BrownlowFormat::Traditional,
    };

    let input = MatchInput {
        match_id: request.match_id,
        home: request.home,
        away: request.away,
        brownlow_format,
    };
    let output = MatchSimulator::from_seed(request.seed)
        .simulate(&input)
        .map_err(|e| e.to_string())?;

    serde_json::to_string(&SimulateResponse { schema_version: SCHEMA_VERSION, output })
        .map_err(|e| format!("Response serialization failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, Position, TeamLineup};
    use serde_json::json;
    use uuid::Uuid;

    fn sheet() -> TeamSheet {
        let team = Uuid::new_v4();
        let shape = [
            (Position::Kdef, 3),
            (Position::Def, 3),
            (Position::Mid, 5),
            (Position::Ruc, 1),
            (Position::Fwd, 3),
            (Position::Kfwd, 3),
            (Position::Def, 3),
        ];
        let mut roster = Vec::new();
        for (position, count) in shape {
            for _ in 0..count {
                roster.push(Player {
                    id: Uuid::new_v4(),
                    name: format!("{position} {}", roster.len()),
                    position,
                    overall: 70,
                });
            }
        }
        let mut lineup = TeamLineup::empty(team);
        for (slot, player) in lineup.slots.iter_mut().zip(roster.iter()) {
            slot.player = Some(player.id);
        }
        TeamSheet { team, roster, lineup, overall: Some(80) }
    }

    fn request(schema_version: u8, format: Option<&str>) -> String {
        json!({
            "schema_version": schema_version,
            "seed": 99,
            "match_id": Uuid::new_v4(),
            "brownlow_format": format,
            "home": sheet(),
            "away": sheet(),
        })
        .to_string()
    }

    #[test]
    fn round_trips_a_valid_request() {
        let response = simulate_match_json(&request(1, Some("5-4-3-2-1"))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["result"]["status"], "completed");
        assert_eq!(value["player_stats"].as_array().unwrap().len(), 42);
        assert_eq!(value["brownlow_votes"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn format_defaults_to_traditional() {
        let response = simulate_match_json(&request(1, None)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(value["brownlow_votes"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = simulate_match_json(&request(1, Some("4-3-2"))).unwrap_err();
        assert!(err.contains("4-3-2"));
    }

    #[test]
    fn rejects_wrong_schema_version() {
        let err = simulate_match_json(&request(2, None)).unwrap_err();
        assert!(err.contains("schema version"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = simulate_match_json("{not json").unwrap_err();
        assert!(err.contains("Invalid JSON request"));
    }
}
