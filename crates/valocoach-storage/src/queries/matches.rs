// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Match CRUD operations.

use rusqlite::{OptionalExtension, params};
use valocoach_core::CoachError;

use crate::database::{Database, map_tr_err};
use crate::models::MatchRecord;

/// Upsert SQL shared with the transactional save path.
pub(crate) fn upsert_match_sync(
    conn: &rusqlite::Connection,
    record: &MatchRecord,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO matches (id, map_name, game_mode, match_start_at, game_version)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
             map_name = excluded.map_name,
             game_mode = excluded.game_mode,
             match_start_at = excluded.match_start_at,
             game_version = excluded.game_version",
        params![
            record.id,
            record.map_name,
            record.game_mode,
            record.match_start_at,
            record.game_version,
        ],
    )?;
    Ok(())
}

fn row_to_match(row: &rusqlite::Row) -> rusqlite::Result<MatchRecord> {
    Ok(MatchRecord {
        id: row.get(0)?,
        map_name: row.get(1)?,
        game_mode: row.get(2)?,
        match_start_at: row.get(3)?,
        game_version: row.get(4)?,
    })
}

/// Insert a match or update its columns if the external id already exists.
pub async fn upsert_match(db: &Database, record: &MatchRecord) -> Result<(), CoachError> {
    let record = record.clone();
    db.connection()
        .call(move |conn| {
            upsert_match_sync(conn, &record)?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Get a match by its external id.
pub async fn get_match(db: &Database, id: &str) -> Result<Option<MatchRecord>, CoachError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let record = conn
                .query_row(
                    "SELECT id, map_name, game_mode, match_start_at, game_version
                     FROM matches WHERE id = ?1",
                    params![id],
                    row_to_match,
                )
                .optional()?;
            Ok(record)
        })
        .await
        .map_err(map_tr_err)
}

/// List matches a player has a stat row for, newest first.
pub async fn list_matches_for_player(
    db: &Database,
    player_id: i64,
) -> Result<Vec<MatchRecord>, CoachError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT m.id, m.map_name, m.game_mode, m.match_start_at, m.game_version
                 FROM matches m
                 JOIN player_match_stats s ON s.match_id = m.id
                 WHERE s.player_id = ?1
                 ORDER BY m.match_start_at DESC",
            )?;
            let records = stmt
                .query_map(params![player_id], row_to_match)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(records)
        })
        .await
        .map_err(map_tr_err)
}
