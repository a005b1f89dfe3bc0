// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the HenrikDev Valorant stats API.
//!
//! Issues authenticated GETs, checks the upstream response envelope, and
//! deserializes the `data` payload into typed responses. There is no retry,
//! caching, or rate limiting here -- callers are responsible for pacing
//! (the save-all pipeline sleeps a fixed interval between pages).

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use valocoach_core::{CoachError, GameMode, Platform, Region};

use crate::types::{
    Account, Content, EsportsScheduleItem, FeaturedBundle, Leaderboard, Match, MmrHistory,
    MmrSnapshot, PlatformStatus, QueueStatusItem, StoreOffers,
};

/// Base URL for the HenrikDev Valorant API.
const API_BASE_URL: &str = "https://api.henrikdev.xyz";

/// Query parameters for the paged match-history endpoints.
///
/// The upstream caps `size` at 10; `start` is the page offset.
#[derive(Debug, Clone, Default)]
pub struct MatchesFilter {
    pub mode: Option<GameMode>,
    pub size: Option<u32>,
    pub start: Option<u32>,
}

impl MatchesFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(mode) = self.mode {
            query.push(("mode", mode.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size", size.to_string()));
        }
        if let Some(start) = self.start {
            query.push(("start", start.to_string()));
        }
        query
    }
}

/// Query parameters for the leaderboard endpoint.
#[derive(Debug, Clone, Default)]
pub struct LeaderboardQuery {
    pub puuid: Option<String>,
    pub name: Option<String>,
    pub tag: Option<String>,
    pub season_short: Option<String>,
    pub season_id: Option<String>,
    pub size: Option<u32>,
    pub start_index: Option<u32>,
}

impl LeaderboardQuery {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(v) = &self.puuid {
            query.push(("puuid", v.clone()));
        }
        if let Some(v) = &self.name {
            query.push(("name", v.clone()));
        }
        if let Some(v) = &self.tag {
            query.push(("tag", v.clone()));
        }
        if let Some(v) = &self.season_short {
            query.push(("season_short", v.clone()));
        }
        if let Some(v) = &self.season_id {
            query.push(("season_id", v.clone()));
        }
        if let Some(v) = self.size {
            query.push(("size", v.to_string()));
        }
        if let Some(v) = self.start_index {
            query.push(("start_index", v.to_string()));
        }
        query
    }
}

/// HTTP client for the Valorant stats API.
///
/// Construct one per process and pass it into pipelines and tools by value.
#[derive(Debug, Clone)]
pub struct RiotClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl RiotClient {
    /// Creates a new client.
    ///
    /// A missing API key is not an error here -- it surfaces as a
    /// [`CoachError::Config`] on the first call.
    pub fn new(api_key: Option<String>) -> Result<Self, CoachError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CoachError::Api {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Issues an authenticated GET and validates the response.
    ///
    /// Error cases, in order: missing API key, non-2xx HTTP status (message
    /// includes status and body), upstream envelope reporting `status != 200`
    /// (message includes the `errors` array), schema mismatch.
    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CoachError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CoachError::Config("riot.api_key is not set".to_string()))?;

        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header("Authorization", api_key)
            .query(query)
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
        debug!(%status, path, "stats API response received");

        if !status.is_success() {
            return Err(CoachError::api(format!(
                "request failed with status {status}: {body}"
            )));
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| CoachError::Api {
                message: format!("response is not valid JSON: {e}"),
                source: Some(Box::new(e)),
            })?;

        // The upstream wraps payloads in {status, data, errors}. A 2xx HTTP
        // status can still carry an error envelope.
        if let Some(envelope_status) = value.get("status").and_then(|s| s.as_i64())
            && envelope_status != 200
        {
            let errors = value
                .get("errors")
                .cloned()
                .unwrap_or(serde_json::Value::Null);
            return Err(CoachError::api(format!("API returned an error: {errors}")));
        }

        let data = match value.get("data") {
            Some(d) => d.clone(),
            None => value,
        };

        serde_json::from_value(data).map_err(|e| CoachError::Api {
            message: format!("response schema mismatch for {path}: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Resolve an account by in-game name and tag.
    pub async fn get_account(&self, name: &str, tag: &str) -> Result<Account, CoachError> {
        self.fetch(&format!("/valorant/v2/account/{name}/{tag}"), &[])
            .await
    }

    /// Resolve an account by puuid.
    pub async fn get_account_by_puuid(&self, puuid: &str) -> Result<Account, CoachError> {
        self.fetch(&format!("/valorant/v2/by-puuid/account/{puuid}"), &[])
            .await
    }

    /// Fetch a page of v4 match history by name and tag.
    pub async fn get_matches(
        &self,
        name: &str,
        tag: &str,
        region: Region,
        platform: Platform,
        filter: &MatchesFilter,
    ) -> Result<Vec<Match>, CoachError> {
        self.fetch(
            &format!("/valorant/v4/matches/{region}/{platform}/{name}/{tag}"),
            &filter.to_query(),
        )
        .await
    }

    /// Fetch a page of v4 match history by puuid.
    pub async fn get_matches_by_puuid(
        &self,
        puuid: &str,
        region: Region,
        platform: Platform,
        filter: &MatchesFilter,
    ) -> Result<Vec<Match>, CoachError> {
        self.fetch(
            &format!("/valorant/v4/by-puuid/matches/{region}/{platform}/{puuid}"),
            &filter.to_query(),
        )
        .await
    }

    /// Fetch a single v4 match by id.
    pub async fn get_match(&self, region: Region, match_id: &str) -> Result<Match, CoachError> {
        self.fetch(&format!("/valorant/v4/match/{region}/{match_id}"), &[])
            .await
    }

    /// Fetch current/peak/seasonal MMR for a puuid (v3).
    pub async fn get_mmr(
        &self,
        puuid: &str,
        region: Region,
        platform: Platform,
    ) -> Result<MmrSnapshot, CoachError> {
        self.fetch(
            &format!("/valorant/v3/by-puuid/mmr/{region}/{platform}/{puuid}"),
            &[],
        )
        .await
    }

    /// Fetch per-match MMR history for a puuid (v2).
    pub async fn get_mmr_history(
        &self,
        puuid: &str,
        region: Region,
        platform: Platform,
    ) -> Result<MmrHistory, CoachError> {
        self.fetch(
            &format!("/valorant/v2/by-puuid/mmr-history/{region}/{platform}/{puuid}"),
            &[],
        )
        .await
    }

    /// Fetch the competitive leaderboard (v3).
    pub async fn get_leaderboard(
        &self,
        region: Region,
        platform: Platform,
        query: &LeaderboardQuery,
    ) -> Result<Leaderboard, CoachError> {
        self.fetch(
            &format!("/valorant/v3/leaderboard/{region}/{platform}"),
            &query.to_query(),
        )
        .await
    }

    /// Fetch static game content (agents, maps, modes).
    pub async fn get_content(&self, locale: Option<&str>) -> Result<Content, CoachError> {
        let query: Vec<(&str, String)> = locale
            .map(|l| vec![("locale", l.to_string())])
            .unwrap_or_default();
        self.fetch("/valorant/v1/content", &query).await
    }

    /// Fetch platform maintenances and incidents.
    pub async fn get_status(&self, region: Region) -> Result<PlatformStatus, CoachError> {
        self.fetch(&format!("/valorant/v1/status/{region}"), &[])
            .await
    }

    /// Fetch the featured store bundles.
    pub async fn get_store_featured(&self) -> Result<Vec<FeaturedBundle>, CoachError> {
        self.fetch("/valorant/v2/store-featured", &[]).await
    }

    /// Fetch the daily store offers.
    pub async fn get_store_offers(&self) -> Result<StoreOffers, CoachError> {
        self.fetch("/valorant/v2/store-offers", &[]).await
    }

    /// Fetch the esports match schedule.
    pub async fn get_esports_schedule(
        &self,
        region: Option<&str>,
        league: Option<&str>,
    ) -> Result<Vec<EsportsScheduleItem>, CoachError> {
        let mut query = Vec::new();
        if let Some(r) = region {
            query.push(("region", r.to_string()));
        }
        if let Some(l) = league {
            query.push(("league", l.to_string()));
        }
        self.fetch("/valorant/v1/esports/schedule", &query).await
    }

    /// Fetch per-queue matchmaking status.
    pub async fn get_queue_status(
        &self,
        region: Region,
    ) -> Result<Vec<QueueStatusItem>, CoachError> {
        self.fetch(&format!("/valorant/v1/queue-status/{region}"), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> RiotClient {
        RiotClient::new(Some("test-api-key".into()))
            .unwrap()
            .with_base_url(base_url.to_string())
    }

    fn account_body() -> serde_json::Value {
        serde_json::json!({
            "status": 200,
            "data": {
                "puuid": "p-123",
                "region": "ap",
                "account_level": 120,
                "name": "mk2481",
                "tag": "1591",
                "card": "card-id",
                "title": "title-id",
                "platforms": ["PC"],
                "updated_at": "2026-08-01T00:00:00.000Z"
            }
        })
    }

    #[tokio::test]
    async fn get_account_unwraps_data_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/valorant/v2/account/mk2481/1591"))
            .and(header("Authorization", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(account_body()))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let account = client.get_account("mk2481", "1591").await.unwrap();
        assert_eq!(account.puuid, "p-123");
        assert_eq!(account.name.as_deref(), Some("mk2481"));
        assert_eq!(account.account_level, 120);
    }

    #[tokio::test]
    async fn missing_api_key_is_a_config_error() {
        let client = RiotClient::new(None).unwrap();
        let err = client.get_account("a", "b").await.unwrap_err();
        assert!(matches!(err, CoachError::Config(_)), "got: {err:?}");
    }

    #[tokio::test]
    async fn non_2xx_status_includes_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/valorant/v2/account/unknown/0000"))
            .respond_with(ResponseTemplate::new(404).set_body_string("account not found"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.get_account("unknown", "0000").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("404"), "got: {msg}");
        assert!(msg.contains("account not found"), "got: {msg}");
    }

    #[tokio::test]
    async fn error_envelope_with_2xx_status_is_rejected() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "status": 404,
            "errors": [{"message": "Not found", "code": 24}]
        });
        Mock::given(method("GET"))
            .and(path("/valorant/v2/account/ghost/0000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.get_account("ghost", "0000").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("API returned an error"), "got: {msg}");
        assert!(msg.contains("Not found"), "got: {msg}");
    }

    #[tokio::test]
    async fn schema_mismatch_is_an_api_error() {
        let server = MockServer::start().await;

        // Account requires a puuid; this payload lacks one.
        let body = serde_json::json!({
            "status": 200,
            "data": {"region": "ap", "account_level": 1}
        });
        Mock::given(method("GET"))
            .and(path("/valorant/v2/account/bad/schema"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.get_account("bad", "schema").await.unwrap_err();
        assert!(matches!(err, CoachError::Api { .. }), "got: {err:?}");
        assert!(err.to_string().contains("schema mismatch"));
    }

    #[tokio::test]
    async fn get_matches_by_puuid_sends_filter_params() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "status": 200,
            "data": [{"metadata": {"match_id": "m-1"}}]
        });
        Mock::given(method("GET"))
            .and(path("/valorant/v4/by-puuid/matches/ap/pc/p-123"))
            .and(query_param("mode", "competitive"))
            .and(query_param("size", "5"))
            .and(query_param("start", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let filter = MatchesFilter {
            mode: Some(GameMode::Competitive),
            size: Some(5),
            start: Some(10),
        };
        let matches = client
            .get_matches_by_puuid("p-123", Region::Ap, Platform::Pc, &filter)
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches[0]
                .metadata
                .as_ref()
                .unwrap()
                .match_id
                .as_deref(),
            Some("m-1")
        );
    }

    #[tokio::test]
    async fn response_without_envelope_is_used_directly() {
        let server = MockServer::start().await;

        // Some endpoints return the payload without a {status, data} wrapper.
        let body = serde_json::json!({"maintenances": [], "incidents": []});
        Mock::given(method("GET"))
            .and(path("/valorant/v1/status/eu"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let status = client.get_status(Region::Eu).await.unwrap();
        assert!(status.maintenances.is_empty());
        assert!(status.incidents.is_empty());
    }

    #[tokio::test]
    async fn get_mmr_parses_current_rating() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "status": 200,
            "data": {
                "account": {"puuid": "p-123", "name": "mk2481", "tag": "1591"},
                "peak": null,
                "current": {
                    "tier": {"id": 15, "name": "Platinum 1"},
                    "rr": 42,
                    "last_change": 18,
                    "elo": 1542,
                    "games_needed_for_rating": 0,
                    "rank_protection_shields": 1,
                    "leaderboard_placement": null
                },
                "seasonal": []
            }
        });
        Mock::given(method("GET"))
            .and(path("/valorant/v3/by-puuid/mmr/ap/pc/p-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let mmr = client
            .get_mmr("p-123", Region::Ap, Platform::Pc)
            .await
            .unwrap();
        assert_eq!(mmr.current.rr, 42);
        assert_eq!(mmr.current.tier.name.as_deref(), Some("Platinum 1"));
        assert!(mmr.peak.is_none());
    }
}
