// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for pipeline tests: a dependency bundle wired to a
//! wiremock server and canned upstream payloads.

use std::sync::Arc;

use wiremock::{MockServer, Request, Respond, ResponseTemplate};

use valocoach_config::model::{IngestConfig, KnowledgeConfig};
use valocoach_gemini::GeminiClient;
use valocoach_knowledge::KnowledgeStore;
use valocoach_riot::RiotClient;
use valocoach_storage::MatchStore;

use crate::context::PipelineDeps;

/// Embedding dimensionality used throughout the pipeline tests.
pub const TEST_DIM: usize = 3;

/// Build a [`PipelineDeps`] with both HTTP clients pointed at the mock
/// server, in-memory stores, and zero pagination delay.
pub async fn test_deps(server: &MockServer) -> PipelineDeps {
    let riot = RiotClient::new(Some("test-api-key".into()))
        .unwrap()
        .with_base_url(server.uri());
    let gemini = GeminiClient::new(
        Some("test-api-key".into()),
        "gemini-2.5-flash".into(),
        "text-embedding-004".into(),
    )
    .unwrap()
    .with_base_url(server.uri());

    PipelineDeps {
        riot: Arc::new(riot),
        store: Arc::new(MatchStore::open_in_memory().await.unwrap()),
        gemini: Arc::new(gemini),
        knowledge: Arc::new(KnowledgeStore::open_in_memory().await.unwrap()),
        ingest: IngestConfig {
            page_size: 10,
            page_delay_ms: 0,
            chunk_max_chars: 512,
            embed_batch_size: 100,
        },
        knowledge_cfg: KnowledgeConfig {
            database_path: ":memory:".into(),
            index: "valorant_knowledge".into(),
            dimension: TEST_DIM,
        },
    }
}

/// An account response wrapped in the upstream envelope.
pub fn account_envelope(puuid: &str) -> serde_json::Value {
    serde_json::json!({
        "status": 200,
        "data": {
            "puuid": puuid,
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

/// A complete-enough v4 match payload for the given player with
/// `round_count` rounds the player has stats in.
pub fn test_match_payload(
    match_id: &str,
    puuid: &str,
    round_count: usize,
) -> serde_json::Value {
    let rounds: Vec<serde_json::Value> = (0..round_count)
        .map(|i| {
            serde_json::json!({
                "result": "Elimination",
                "winning_team": if i % 2 == 0 { "Red" } else { "Blue" },
                "stats": [{
                    "player": {"puuid": puuid, "name": "mk2481", "tag": "1591", "team": "Red"},
                    "stats": {"kills": 1, "score": 200, "damage": 140},
                    "economy": {"loadout_value": 3900, "remaining": 200}
                }]
            })
        })
        .collect();

    serde_json::json!({
        "metadata": {
            "match_id": match_id,
            "map": {"id": "map-uuid", "name": "Ascent"},
            "queue": {"id": "competitive", "name": "Competitive"},
            "started_at": "2026-08-01T12:00:00.000Z",
            "game_version": "release-11.04",
            "game_length_in_ms": 2400000,
            "is_completed": true
        },
        "players": [
            {
                "puuid": puuid,
                "name": "mk2481",
                "tag": "1591",
                "team_id": "Red",
                "agent": {"id": "agent-uuid", "name": "Jett"},
                "stats": {"score": 4200, "kills": 21, "deaths": 14, "assists": 3},
                "tier": {"id": 15, "name": "Platinum 1"}
            },
            {"puuid": "enemy-1", "name": "rival", "tag": "0001", "team_id": "Blue"}
        ],
        "teams": [
            {"team_id": "Red", "won": true, "rounds": {"won": 13, "lost": 7}},
            {"team_id": "Blue", "won": false, "rounds": {"won": 7, "lost": 13}}
        ],
        "rounds": rounds,
        "kills": [
            {
                "round": 1,
                "time_in_round_in_ms": 12000,
                "killer": {"puuid": puuid, "name": "mk2481", "tag": "1591", "team": "Red"},
                "victim": {"puuid": "enemy-1", "name": "rival", "tag": "0001", "team": "Blue"},
                "weapon": {"id": "w-1", "name": "Vandal", "type": "Rifle"}
            },
            {
                "round": 2,
                "killer": {"puuid": "enemy-1", "name": "rival", "tag": "0001", "team": "Blue"},
                "victim": {"puuid": puuid, "name": "mk2481", "tag": "1591", "team": "Red"}
            }
        ]
    })
}

/// Responds to `batchEmbedContents` with one fixed-dimension vector per
/// requested text, mirroring the real API's order-preserving contract.
pub struct EchoEmbeddings {
    pub dimension: usize,
}

impl Respond for EchoEmbeddings {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: serde_json::Value =
            serde_json::from_slice(&request.body).unwrap_or(serde_json::Value::Null);
        let count = body["requests"].as_array().map(|r| r.len()).unwrap_or(0);
        let embeddings: Vec<serde_json::Value> = (0..count)
            .map(|i| {
                let mut values = vec![0.1_f32; self.dimension];
                values[i % self.dimension] = 1.0;
                serde_json::json!({ "values": values })
            })
            .collect();
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "embeddings": embeddings }))
    }
}
