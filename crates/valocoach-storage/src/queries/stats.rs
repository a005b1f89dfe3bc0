// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-player-per-match stat CRUD operations.

use rusqlite::{OptionalExtension, params};
use valocoach_core::CoachError;

use crate::database::{Database, map_tr_err};
use crate::models::{PlayerMatchStat, StatRecord};

/// Upsert SQL shared with the transactional save path.
///
/// `etc_data` is serialized to a JSON string column.
pub(crate) fn upsert_stat_sync(
    conn: &rusqlite::Connection,
    record: &StatRecord,
) -> rusqlite::Result<()> {
    let etc_data = record.etc_data.as_ref().map(|v| v.to_string());
    conn.execute(
        "INSERT INTO player_match_stats
             (player_id, match_id, agent_name, kills, deaths, assists, combat_score, won, etc_data)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(player_id, match_id) DO UPDATE SET
             agent_name = excluded.agent_name,
             kills = excluded.kills,
             deaths = excluded.deaths,
             assists = excluded.assists,
             combat_score = excluded.combat_score,
             won = excluded.won,
             etc_data = excluded.etc_data",
        params![
            record.player_id,
            record.match_id,
            record.agent_name,
            record.kills,
            record.deaths,
            record.assists,
            record.combat_score,
            record.won,
            etc_data,
        ],
    )?;
    Ok(())
}

fn row_to_stat(row: &rusqlite::Row) -> rusqlite::Result<PlayerMatchStat> {
    let etc_data: Option<String> = row.get(9)?;
    Ok(PlayerMatchStat {
        id: row.get(0)?,
        player_id: row.get(1)?,
        match_id: row.get(2)?,
        agent_name: row.get(3)?,
        kills: row.get(4)?,
        deaths: row.get(5)?,
        assists: row.get(6)?,
        combat_score: row.get(7)?,
        won: row.get(8)?,
        etc_data: etc_data.and_then(|s| serde_json::from_str(&s).ok()),
    })
}

/// Insert a stat row or overwrite it if (player_id, match_id) exists.
pub async fn upsert_stat(db: &Database, record: &StatRecord) -> Result<(), CoachError> {
    let record = record.clone();
    db.connection()
        .call(move |conn| {
            upsert_stat_sync(conn, &record)?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Get a player's stat row for a match.
pub async fn get_stat(
    db: &Database,
    player_id: i64,
    match_id: &str,
) -> Result<Option<PlayerMatchStat>, CoachError> {
    let match_id = match_id.to_string();
    db.connection()
        .call(move |conn| {
            let stat = conn
                .query_row(
                    "SELECT id, player_id, match_id, agent_name, kills, deaths, assists,
                            combat_score, won, etc_data
                     FROM player_match_stats WHERE player_id = ?1 AND match_id = ?2",
                    params![player_id, match_id],
                    row_to_stat,
                )
                .optional()?;
            Ok(stat)
        })
        .await
        .map_err(map_tr_err)
}
