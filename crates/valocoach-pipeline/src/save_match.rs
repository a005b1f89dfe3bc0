// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The "save match" ingestion pipeline.
//!
//! Resolves the account, upserts the player, fetches one page of matches,
//! and ingests each match sequentially. The resolved player row is carried
//! by value through the whole run; per-match steps never re-resolve the
//! identity by name/tag, so a concurrent rename cannot race the ingest.
//!
//! Any error -- missing required field, failed lookup, upstream failure --
//! propagates and aborts the entire run. There is no per-match isolation
//! and no checkpointing.

use tracing::{debug, info};
use valocoach_core::{CoachError, GameMode, Platform, Region};
use valocoach_riot::types::Match;
use valocoach_riot::MatchesFilter;
use valocoach_storage::{MatchRecord, MatchStore, NewPlayer, Player, RoundRecord, StatRecord};

use crate::context::PipelineDeps;

/// Inputs for one save-match run.
#[derive(Debug, Clone)]
pub struct SaveMatchParams {
    pub name: String,
    pub tag: String,
    pub region: Region,
    pub platform: Platform,
    pub mode: Option<GameMode>,
    /// Page size, 1..=10. Defaults to 1.
    pub size: Option<u32>,
    /// Page offset. Defaults to 0.
    pub start: Option<u32>,
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveMatchReport {
    /// The page size that was requested.
    pub request_size: u32,
    /// How many matches were actually ingested.
    pub process_size: u32,
}

/// Resolve the account upstream, upsert the player row, and return it.
///
/// The returned [`Player`] carries the internal id needed for stat rows;
/// downstream steps use it instead of re-querying by name/tag.
pub(crate) async fn resolve_player(
    deps: &PipelineDeps,
    name: &str,
    tag: &str,
) -> Result<Player, CoachError> {
    let account = deps.riot.get_account(name, tag).await?;
    deps.store
        .upsert_player(&NewPlayer {
            puuid: account.puuid.clone(),
            game_name: account.name.clone().or_else(|| Some(name.to_string())),
            tag_line: account.tag.clone().or_else(|| Some(tag.to_string())),
        })
        .await?;
    deps.store
        .get_player_by_puuid(&account.puuid)
        .await?
        .ok_or_else(|| CoachError::DataIntegrity("player not found after upsert".to_string()))
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, CoachError> {
    value.ok_or_else(|| CoachError::DataIntegrity(format!("match missing {field}")))
}

/// Ingest a single match for the already-resolved player.
///
/// Validates the required fields, then writes the match row, one round row
/// per source round (numbered 1..N by array position), and one stat row per
/// roster entry matching the player's puuid -- all in one transaction, so a
/// failed validation or write leaves no partial rows for this match.
pub async fn ingest_match(
    store: &MatchStore,
    player: &Player,
    m: &Match,
) -> Result<(), CoachError> {
    let metadata = require(m.metadata.as_ref(), "metadata")?;
    let match_id = require(metadata.match_id.clone(), "metadata.match_id")?;
    let map_name = require(
        metadata.map.as_ref().and_then(|map| map.name.clone()),
        "metadata.map.name",
    )?;
    let queue_id = require(
        metadata.queue.as_ref().and_then(|q| q.id.clone()),
        "metadata.queue.id",
    )?;
    let started_at = require(metadata.started_at.clone(), "metadata.started_at")?;
    let game_version = require(metadata.game_version.clone(), "metadata.game_version")?;
    if m.rounds.is_empty() {
        return Err(CoachError::DataIntegrity("match missing rounds".to_string()));
    }
    if m.players.is_empty() {
        return Err(CoachError::DataIntegrity("match missing players".to_string()));
    }

    let match_record = MatchRecord {
        id: match_id.clone(),
        map_name,
        game_mode: Some(queue_id),
        match_start_at: started_at,
        game_version: Some(game_version),
    };

    let rounds: Vec<RoundRecord> = m
        .rounds
        .iter()
        .enumerate()
        .map(|(index, round)| RoundRecord {
            match_id: match_id.clone(),
            round_number: index as i64 + 1,
            winning_team: round.winning_team.clone(),
            round_result: round.result.clone(),
        })
        .collect();

    // Normally exactly one roster entry matches the resolved puuid.
    let stats: Vec<StatRecord> = m
        .players
        .iter()
        .filter(|p| p.puuid.as_deref() == Some(player.puuid.as_str()))
        .map(|p| {
            let won = p
                .team_id
                .as_ref()
                .and_then(|team_id| {
                    m.teams
                        .iter()
                        .find(|t| t.team_id.as_ref() == Some(team_id))
                })
                .and_then(|t| t.won)
                .unwrap_or(false);

            let kill_events: Vec<_> = m
                .kills
                .iter()
                .filter(|kill| {
                    kill.killer.as_ref().and_then(|k| k.puuid.as_deref())
                        == p.puuid.as_deref()
                })
                .collect();

            StatRecord {
                player_id: player.id,
                match_id: match_id.clone(),
                agent_name: p
                    .agent
                    .as_ref()
                    .and_then(|a| a.name.clone())
                    .unwrap_or_default(),
                kills: p.stats.as_ref().and_then(|s| s.kills).unwrap_or(0),
                deaths: p.stats.as_ref().and_then(|s| s.deaths).unwrap_or(0),
                assists: p.stats.as_ref().and_then(|s| s.assists).unwrap_or(0),
                combat_score: Some(p.stats.as_ref().and_then(|s| s.score).unwrap_or(0)),
                won,
                etc_data: serde_json::to_value(&kill_events)
                    .ok()
                    .map(|kill| serde_json::json!({ "kill": kill })),
            }
        })
        .collect();

    store.save_match_records(match_record, rounds, stats).await?;
    debug!(match_id, "match ingested");
    Ok(())
}

/// Run the save-match pipeline for one page of matches.
pub async fn run_save_match(
    deps: &PipelineDeps,
    params: &SaveMatchParams,
) -> Result<SaveMatchReport, CoachError> {
    let player = resolve_player(deps, &params.name, &params.tag).await?;

    let size = params.size.unwrap_or(1);
    let filter = MatchesFilter {
        mode: params.mode,
        size: Some(size),
        start: Some(params.start.unwrap_or(0)),
    };
    let matches = deps
        .riot
        .get_matches_by_puuid(&player.puuid, params.region, params.platform, &filter)
        .await?;

    let mut processed = 0u32;
    for m in &matches {
        ingest_match(&deps.store, &player, m).await?;
        processed += 1;
    }

    info!(
        name = %params.name,
        tag = %params.tag,
        requested = size,
        processed,
        "save-match run complete"
    );
    Ok(SaveMatchReport {
        request_size: size,
        process_size: processed,
    })
}
