// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for Valocoach match data.
//!
//! Four tables -- players, matches, match_rounds, player_match_stats --
//! with idempotent upserts keyed by their natural identities (puuid,
//! match id, match+round, player+match). Nothing in the ingestion path
//! hard-deletes rows.

pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;
pub mod store;

pub use database::Database;
pub use models::{MatchRecord, MatchRound, NewPlayer, Player, PlayerMatchStat, RoundRecord, StatRecord};
pub use store::MatchStore;
