// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tools over the Aim Lab training analytics API.

use std::sync::Arc;

use async_trait::async_trait;
use valocoach_aimlab::AimlabClient;
use valocoach_core::CoachError;

use crate::tool::{Tool, ToolOutput};

fn missing(param: &str) -> ToolOutput {
    ToolOutput::error(format!("missing required parameter `{param}`"))
}

/// Fetches an Aim Lab profile by username.
pub struct GetAimlabProfileTool {
    client: Arc<AimlabClient>,
}

impl GetAimlabProfileTool {
    pub fn new(client: Arc<AimlabClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetAimlabProfileTool {
    fn name(&self) -> &str {
        "aimlab-get-profile"
    }

    fn description(&self) -> &str {
        "Fetches an Aim Lab player profile (ranking and skill scores) by username"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "username": { "type": "string", "description": "Aim Lab username" }
            },
            "required": ["username"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, CoachError> {
        let Some(username) = input["username"].as_str() else {
            return Ok(missing("username"));
        };
        match self.client.get_profile(username).await {
            Ok(profile) => ToolOutput::json(&profile),
            Err(e) => Ok(ToolOutput::error(e.to_string())),
        }
    }
}

/// Fetches per-task aggregate training history for an Aim Lab user.
pub struct GetAimlabPlaysAggTool {
    client: Arc<AimlabClient>,
}

impl GetAimlabPlaysAggTool {
    pub fn new(client: Arc<AimlabClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetAimlabPlaysAggTool {
    fn name(&self) -> &str {
        "aimlab-get-plays-agg"
    }

    fn description(&self) -> &str {
        "Fetches per-task aggregate training history for an Aim Lab user id"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "user_id": { "type": "string", "description": "Aim Lab user id" }
            },
            "required": ["user_id"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, CoachError> {
        let Some(user_id) = input["user_id"].as_str() else {
            return Ok(missing("user_id"));
        };
        match self.client.get_plays_agg(user_id).await {
            Ok(aggs) => ToolOutput::json(&aggs),
            Err(e) => Ok(ToolOutput::error(e.to_string())),
        }
    }
}
