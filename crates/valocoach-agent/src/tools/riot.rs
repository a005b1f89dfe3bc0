// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tools over the live Valorant stats API.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use valocoach_core::{CoachError, GameMode, Platform, Region};
use valocoach_riot::{MatchesFilter, RiotClient};

use crate::tool::{Tool, ToolOutput};

fn missing(param: &str) -> ToolOutput {
    ToolOutput::error(format!("missing required parameter `{param}`"))
}

fn parse_region(input: &serde_json::Value) -> Region {
    input["region"]
        .as_str()
        .and_then(|s| Region::from_str(s).ok())
        .unwrap_or_default()
}

fn parse_platform(input: &serde_json::Value) -> Platform {
    input["platform"]
        .as_str()
        .and_then(|s| Platform::from_str(s).ok())
        .unwrap_or_default()
}

/// Resolves a live account by name and tag.
pub struct GetAccountTool {
    riot: Arc<RiotClient>,
}

impl GetAccountTool {
    pub fn new(riot: Arc<RiotClient>) -> Self {
        Self { riot }
    }
}

#[async_trait]
impl Tool for GetAccountTool {
    fn name(&self) -> &str {
        "valorant-get-account"
    }

    fn description(&self) -> &str {
        "Resolves a Valorant account (puuid, level, region) by name and tag"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "tag": { "type": "string" }
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
        match self.riot.get_account(name, tag).await {
            Ok(account) => ToolOutput::json(&account),
            Err(e) => Ok(ToolOutput::error(e.to_string())),
        }
    }
}

/// Fetches a page of recent matches for an account.
pub struct GetMatchesTool {
    riot: Arc<RiotClient>,
}

impl GetMatchesTool {
    pub fn new(riot: Arc<RiotClient>) -> Self {
        Self { riot }
    }
}

#[async_trait]
impl Tool for GetMatchesTool {
    fn name(&self) -> &str {
        "valorant-get-matches"
    }

    fn description(&self) -> &str {
        "Fetches a page of recent matches for a player. Keep size small; full match payloads are large"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "tag": { "type": "string" },
                "region": { "type": "string", "enum": ["eu", "na", "ap", "kr"] },
                "platform": { "type": "string", "enum": ["pc", "console"] },
                "mode": { "type": "string", "description": "Queue filter, e.g. competitive" },
                "size": { "type": "integer", "minimum": 1, "maximum": 10 },
                "start": { "type": "integer", "minimum": 0 }
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
        let filter = MatchesFilter {
            mode: input["mode"].as_str().and_then(|s| GameMode::from_str(s).ok()),
            size: input["size"].as_u64().map(|v| v as u32),
            start: input["start"].as_u64().map(|v| v as u32),
        };
        match self
            .riot
            .get_matches(name, tag, parse_region(&input), parse_platform(&input), &filter)
            .await
        {
            Ok(matches) => ToolOutput::json(&matches),
            Err(e) => Ok(ToolOutput::error(e.to_string())),
        }
    }
}

/// Fetches current competitive rating for a puuid.
pub struct GetMmrTool {
    riot: Arc<RiotClient>,
}

impl GetMmrTool {
    pub fn new(riot: Arc<RiotClient>) -> Self {
        Self { riot }
    }
}

#[async_trait]
impl Tool for GetMmrTool {
    fn name(&self) -> &str {
        "valorant-get-mmr"
    }

    fn description(&self) -> &str {
        "Fetches current, peak, and seasonal competitive rating for a puuid"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "puuid": { "type": "string" },
                "region": { "type": "string", "enum": ["eu", "na", "ap", "kr"] },
                "platform": { "type": "string", "enum": ["pc", "console"] }
            },
            "required": ["puuid"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, CoachError> {
        let Some(puuid) = input["puuid"].as_str() else {
            return Ok(missing("puuid"));
        };
        match self
            .riot
            .get_mmr(puuid, parse_region(&input), parse_platform(&input))
            .await
        {
            Ok(mmr) => ToolOutput::json(&mmr),
            Err(e) => Ok(ToolOutput::error(e.to_string())),
        }
    }
}

/// Fetches static game content (agents, maps, modes).
pub struct GetContentTool {
    riot: Arc<RiotClient>,
}

impl GetContentTool {
    pub fn new(riot: Arc<RiotClient>) -> Self {
        Self { riot }
    }
}

#[async_trait]
impl Tool for GetContentTool {
    fn name(&self) -> &str {
        "valorant-get-content"
    }

    fn description(&self) -> &str {
        "Fetches current agents, maps, and game modes for building search terms"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "locale": { "type": "string", "description": "Optional locale, e.g. en-US" }
            }
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, CoachError> {
        match self.riot.get_content(input["locale"].as_str()).await {
            Ok(content) => ToolOutput::json(&content),
            Err(e) => Ok(ToolOutput::error(e.to_string())),
        }
    }
}
