// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Row types for the match database.
//!
//! `New*`/`*Record` types carry the caller-supplied columns for upserts;
//! the plain types mirror full rows including generated ids.

use serde::{Deserialize, Serialize};

/// A tracked player. `puuid` is the platform's globally unique id;
/// `game_name`/`tag_line` are the mutable display identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub puuid: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
    pub created_at: String,
}

/// Columns for a player upsert. `created_at` is set on first insert only.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub puuid: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

/// A recorded match, keyed by the external match id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub map_name: String,
    pub game_mode: Option<String>,
    pub match_start_at: String,
    pub game_version: Option<String>,
}

/// Columns for a round upsert, unique on (match_id, round_number).
#[derive(Debug, Clone)]
pub struct RoundRecord {
    pub match_id: String,
    pub round_number: i64,
    pub winning_team: Option<String>,
    pub round_result: Option<String>,
}

/// A persisted round row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRound {
    pub id: i64,
    pub match_id: String,
    pub round_number: i64,
    pub winning_team: Option<String>,
    pub round_result: Option<String>,
}

/// Columns for a per-player-per-match stat upsert, unique on
/// (player_id, match_id). `etc_data` holds auxiliary JSON such as the
/// player's kill events.
#[derive(Debug, Clone)]
pub struct StatRecord {
    pub player_id: i64,
    pub match_id: String,
    pub agent_name: String,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub combat_score: Option<i64>,
    pub won: bool,
    pub etc_data: Option<serde_json::Value>,
}

/// A persisted stat row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerMatchStat {
    pub id: i64,
    pub player_id: i64,
    pub match_id: String,
    pub agent_name: String,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub combat_score: Option<i64>,
    pub won: bool,
    pub etc_data: Option<serde_json::Value>,
}
