// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GraphQL client for the Aim Lab training analytics API.
//!
//! The Aim Lab API is an unauthenticated GraphQL endpoint. Two operations are
//! exposed: a player profile lookup (ranking + skill scores) and a per-task
//! aggregate of play history, filtered to scored non-practice plays.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use valocoach_core::CoachError;

/// Aim Lab GraphQL endpoint.
const API_ENDPOINT: &str = "https://api.aimlab.gg/graphql";

const GET_PROFILE_QUERY: &str = r#"
query GetProfile($username: String) {
  aimlabProfile(username: $username) {
    username
    user {
      id
    }
    ranking {
      rank {
        displayName
        tier
        level
        minSkill
        maxSkill
      }
      skill
    }
    skillScores {
      name
      score
    }
  }
}
"#;

const GET_PLAYS_AGG_QUERY: &str = r#"
query GetAimlabProfileAgg($where: AimlabPlayWhere!) {
  aimlab {
    plays_agg(where: $where) {
      group_by {
        task_id
        task_name
      }
      aggregate {
        count
        avg {
          score
          accuracy
        }
        max {
          score
          accuracy
          created_at
        }
      }
    }
  }
}
"#;

// --- Response types ---

/// An Aim Lab player profile with ranking and per-skill scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub username: Option<String>,
    pub user: ProfileUser,
    pub ranking: Option<Ranking>,
    #[serde(rename = "skillScores", default)]
    pub skill_scores: Vec<SkillScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUser {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ranking {
    pub rank: Option<Rank>,
    pub skill: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rank {
    pub display_name: String,
    pub tier: Option<String>,
    pub level: Option<i64>,
    pub min_skill: Option<f64>,
    pub max_skill: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillScore {
    pub name: String,
    pub score: f64,
}

/// Per-task aggregate statistics for a player's play history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskAggregate {
    pub group_by: TaskGroup,
    pub aggregate: AggregateStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskGroup {
    pub task_id: String,
    pub task_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateStats {
    pub count: i64,
    pub avg: Option<AvgStats>,
    pub max: Option<MaxStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvgStats {
    pub score: Option<f64>,
    pub accuracy: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxStats {
    pub score: Option<f64>,
    pub accuracy: Option<f64>,
    pub created_at: Option<String>,
}

// --- Internal GraphQL envelope types ---

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ProfileData {
    #[serde(rename = "aimlabProfile")]
    aimlab_profile: Profile,
}

#[derive(Debug, Deserialize)]
struct PlaysAggData {
    aimlab: PlaysAggInner,
}

#[derive(Debug, Deserialize)]
struct PlaysAggInner {
    plays_agg: Vec<TaskAggregate>,
}

/// GraphQL client for the Aim Lab API.
#[derive(Debug, Clone)]
pub struct AimlabClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AimlabClient {
    /// Creates a new client against the public Aim Lab endpoint.
    pub fn new() -> Result<Self, CoachError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CoachError::Api {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoint: API_ENDPOINT.to_string(),
        })
    }

    /// Overrides the endpoint URL (for testing with wiremock).
    pub fn with_endpoint(mut self, url: String) -> Self {
        self.endpoint = url;
        self
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, CoachError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| CoachError::Api {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| CoachError::Api {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        debug!(%status, "aimlab response received");

        if !status.is_success() {
            return Err(CoachError::api(format!(
                "request failed with status {status}: {body}"
            )));
        }

        let envelope: GraphQlResponse<T> =
            serde_json::from_str(&body).map_err(|e| CoachError::Api {
                message: format!("response schema mismatch: {e}"),
                source: Some(Box::new(e)),
            })?;

        if !envelope.errors.is_empty() {
            let messages: Vec<&str> =
                envelope.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(CoachError::api(format!(
                "GraphQL errors: {}",
                messages.join("; ")
            )));
        }

        envelope
            .data
            .ok_or_else(|| CoachError::api("GraphQL response contained no data"))
    }

    /// Look up an Aim Lab profile by username.
    pub async fn get_profile(&self, username: &str) -> Result<Profile, CoachError> {
        let data: ProfileData = self
            .post(GET_PROFILE_QUERY, json!({ "username": username }))
            .await?;
        Ok(data.aimlab_profile)
    }

    /// Fetch per-task aggregates for a user, restricted to scored
    /// non-practice plays.
    pub async fn get_plays_agg(&self, user_id: &str) -> Result<Vec<TaskAggregate>, CoachError> {
        let data: PlaysAggData = self
            .post(
                GET_PLAYS_AGG_QUERY,
                json!({
                    "where": {
                        "is_practice": { "_eq": false },
                        "score": { "_gt": 0 },
                        "user_id": { "_eq": user_id }
                    }
                }),
            )
            .await?;
        Ok(data.aimlab.plays_agg)
    }
}
