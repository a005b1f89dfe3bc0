// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Player CRUD operations.

use chrono::{SecondsFormat, Utc};
use rusqlite::{OptionalExtension, params};
use valocoach_core::CoachError;

use crate::database::{Database, map_tr_err};
use crate::models::{NewPlayer, Player};

/// Upsert SQL shared with the transactional save path.
pub(crate) fn upsert_player_sync(
    conn: &rusqlite::Connection,
    player: &NewPlayer,
    created_at: &str,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO players (puuid, game_name, tag_line, created_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(puuid) DO UPDATE SET
             game_name = excluded.game_name,
             tag_line = excluded.tag_line",
        params![player.puuid, player.game_name, player.tag_line, created_at],
    )?;
    Ok(())
}

fn row_to_player(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        puuid: row.get(1)?,
        game_name: row.get(2)?,
        tag_line: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Insert a player or, if the puuid already exists, update the display
/// name and tag. `created_at` is preserved on update.
pub async fn upsert_player(db: &Database, player: &NewPlayer) -> Result<(), CoachError> {
    let player = player.clone();
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    db.connection()
        .call(move |conn| {
            upsert_player_sync(conn, &player, &created_at)?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Get a player by puuid.
pub async fn get_player_by_puuid(
    db: &Database,
    puuid: &str,
) -> Result<Option<Player>, CoachError> {
    let puuid = puuid.to_string();
    db.connection()
        .call(move |conn| {
            let player = conn
                .query_row(
                    "SELECT id, puuid, game_name, tag_line, created_at
                     FROM players WHERE puuid = ?1",
                    params![puuid],
                    row_to_player,
                )
                .optional()?;
            Ok(player)
        })
        .await
        .map_err(map_tr_err)
}

/// Get a player by display name and tag.
pub async fn get_player_by_name_tag(
    db: &Database,
    name: &str,
    tag: &str,
) -> Result<Option<Player>, CoachError> {
    let name = name.to_string();
    let tag = tag.to_string();
    db.connection()
        .call(move |conn| {
            let player = conn
                .query_row(
                    "SELECT id, puuid, game_name, tag_line, created_at
                     FROM players WHERE game_name = ?1 AND tag_line = ?2",
                    params![name, tag],
                    row_to_player,
                )
                .optional()?;
            Ok(player)
        })
        .await
        .map_err(map_tr_err)
}
