// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tools over the relational match store.

use std::sync::Arc;

use async_trait::async_trait;
use valocoach_core::CoachError;
use valocoach_storage::MatchStore;

use crate::tool::{Tool, ToolOutput};

fn missing(param: &str) -> ToolOutput {
    ToolOutput::error(format!("missing required parameter `{param}`"))
}

/// Retrieves a player's information by name and tag.
pub struct GetPlayerByNameTagTool {
    store: Arc<MatchStore>,
}

impl GetPlayerByNameTagTool {
    pub fn new(store: Arc<MatchStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetPlayerByNameTagTool {
    fn name(&self) -> &str {
        "valorant-db-get-player-by-name-and-tag"
    }

    fn description(&self) -> &str {
        "Retrieves a tracked player's record by display name and tag"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "In-game display name" },
                "tag": { "type": "string", "description": "Tag line, without the #" }
            },
            "required": ["name", "tag"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, CoachError> {
        let Some(name) = input["name"].as_str() else {
            return Ok(missing("name"));
        };
        let Some(tag) = input["tag"].as_str() else {
            return Ok(missing("tag"));
        };
        match self.store.get_player_by_name_tag(name, tag).await {
            Ok(player) => ToolOutput::json(&player),
            Err(e) => Ok(ToolOutput::error(e.to_string())),
        }
    }
}

/// Retrieves a player's information by puuid.
pub struct GetPlayerByPuuidTool {
    store: Arc<MatchStore>,
}

impl GetPlayerByPuuidTool {
    pub fn new(store: Arc<MatchStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetPlayerByPuuidTool {
    fn name(&self) -> &str {
        "valorant-db-get-player-by-puuid"
    }

    fn description(&self) -> &str {
        "Retrieves a tracked player's record by puuid"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "puuid": { "type": "string", "description": "Platform player id" }
            },
            "required": ["puuid"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, CoachError> {
        let Some(puuid) = input["puuid"].as_str() else {
            return Ok(missing("puuid"));
        };
        match self.store.get_player_by_puuid(puuid).await {
            Ok(player) => ToolOutput::json(&player),
            Err(e) => Ok(ToolOutput::error(e.to_string())),
        }
    }
}

/// Retrieves a recorded match by its external id.
pub struct GetMatchByIdTool {
    store: Arc<MatchStore>,
}

impl GetMatchByIdTool {
    pub fn new(store: Arc<MatchStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetMatchByIdTool {
    fn name(&self) -> &str {
        "valorant-db-get-match-by-id"
    }

    fn description(&self) -> &str {
        "Retrieves a recorded match's information by its id"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "match_id": { "type": "string" }
            },
            "required": ["match_id"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, CoachError> {
        let Some(match_id) = input["match_id"].as_str() else {
            return Ok(missing("match_id"));
        };
        match self.store.get_match(match_id).await {
            Ok(record) => ToolOutput::json(&record),
            Err(e) => Ok(ToolOutput::error(e.to_string())),
        }
    }
}

/// Retrieves all rounds of a recorded match in round order.
pub struct GetMatchRoundsTool {
    store: Arc<MatchStore>,
}

impl GetMatchRoundsTool {
    pub fn new(store: Arc<MatchStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetMatchRoundsTool {
    fn name(&self) -> &str {
        "valorant-db-get-match-rounds-by-match-id"
    }

    fn description(&self) -> &str {
        "Retrieves all rounds for a recorded match, useful for pistol-round analysis"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "match_id": { "type": "string" }
            },
            "required": ["match_id"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, CoachError> {
        let Some(match_id) = input["match_id"].as_str() else {
            return Ok(missing("match_id"));
        };
        match self.store.rounds_for_match(match_id).await {
            Ok(rounds) => ToolOutput::json(&rounds),
            Err(e) => Ok(ToolOutput::error(e.to_string())),
        }
    }
}

/// Retrieves a player's stat row for a specific match.
pub struct GetPlayerMatchStatTool {
    store: Arc<MatchStore>,
}

impl GetPlayerMatchStatTool {
    pub fn new(store: Arc<MatchStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetPlayerMatchStatTool {
    fn name(&self) -> &str {
        "valorant-db-get-player-match-stat"
    }

    fn description(&self) -> &str {
        "Retrieves a player's statistics for a specific match"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "player_id": { "type": "integer", "description": "Internal player id" },
                "match_id": { "type": "string" }
            },
            "required": ["player_id", "match_id"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, CoachError> {
        let Some(player_id) = input["player_id"].as_i64() else {
            return Ok(missing("player_id"));
        };
        let Some(match_id) = input["match_id"].as_str() else {
            return Ok(missing("match_id"));
        };
        match self.store.get_stat(player_id, match_id).await {
            Ok(stat) => ToolOutput::json(&stat),
            Err(e) => Ok(ToolOutput::error(e.to_string())),
        }
    }
}

/// Lists the recorded matches a player has stats in, newest first.
pub struct GetMatchesByPlayerTool {
    store: Arc<MatchStore>,
}

impl GetMatchesByPlayerTool {
    pub fn new(store: Arc<MatchStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetMatchesByPlayerTool {
    fn name(&self) -> &str {
        "valorant-db-get-matches-by-player"
    }

    fn description(&self) -> &str {
        "Lists a player's recorded match history, newest first"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "player_id": { "type": "integer", "description": "Internal player id" }
            },
            "required": ["player_id"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, CoachError> {
        let Some(player_id) = input["player_id"].as_i64() else {
            return Ok(missing("player_id"));
        };
        match self.store.list_matches_for_player(player_id).await {
            Ok(matches) => ToolOutput::json(&matches),
            Err(e) => Ok(ToolOutput::error(e.to_string())),
        }
    }
}
