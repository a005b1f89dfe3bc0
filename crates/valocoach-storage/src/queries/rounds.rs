// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Match-round CRUD operations.

use rusqlite::params;
use valocoach_core::CoachError;

use crate::database::{Database, map_tr_err};
use crate::models::{MatchRound, RoundRecord};

/// Upsert SQL shared with the transactional save path.
pub(crate) fn upsert_round_sync(
    conn: &rusqlite::Connection,
    record: &RoundRecord,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO match_rounds (match_id, round_number, winning_team, round_result)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(match_id, round_number) DO UPDATE SET
             winning_team = excluded.winning_team,
             round_result = excluded.round_result",
        params![
            record.match_id,
            record.round_number,
            record.winning_team,
            record.round_result,
        ],
    )?;
    Ok(())
}

/// Insert a round or update its result columns on conflict.
pub async fn upsert_round(db: &Database, record: &RoundRecord) -> Result<(), CoachError> {
    let record = record.clone();
    db.connection()
        .call(move |conn| {
            upsert_round_sync(conn, &record)?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// All rounds of a match in round order.
pub async fn rounds_for_match(
    db: &Database,
    match_id: &str,
) -> Result<Vec<MatchRound>, CoachError> {
    let match_id = match_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, match_id, round_number, winning_team, round_result
                 FROM match_rounds WHERE match_id = ?1 ORDER BY round_number",
            )?;
            let rounds = stmt
                .query_map(params![match_id], |row| {
                    Ok(MatchRound {
                        id: row.get(0)?,
                        match_id: row.get(1)?,
                        round_number: row.get(2)?,
                        winning_team: row.get(3)?,
                        round_result: row.get(4)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rounds)
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchRecord;
    use crate::queries::matches::upsert_match;

    async fn seed_match(db: &Database, id: &str) {
        upsert_match(
            db,
            &MatchRecord {
                id: id.to_string(),
                map_name: "Ascent".to_string(),
                game_mode: Some("competitive".to_string()),
                match_start_at: "2026-08-01T12:00:00.000Z".to_string(),
                game_version: Some("release-11.04".to_string()),
            },
        )
        .await
        .unwrap();
    }

    fn make_round(match_id: &str, number: i64, winner: &str) -> RoundRecord {
        RoundRecord {
            match_id: match_id.to_string(),
            round_number: number,
            winning_team: Some(winner.to_string()),
            round_result: Some("Elimination".to_string()),
        }
    }

    #[tokio::test]
    async fn rounds_are_returned_in_order() {
        let db = Database::open_in_memory().await.unwrap();
        seed_match(&db, "m-1").await;

        upsert_round(&db, &make_round("m-1", 2, "Blue")).await.unwrap();
        upsert_round(&db, &make_round("m-1", 1, "Red")).await.unwrap();
        upsert_round(&db, &make_round("m-1", 3, "Red")).await.unwrap();

        let rounds = rounds_for_match(&db, "m-1").await.unwrap();
        assert_eq!(rounds.len(), 3);
        assert_eq!(
            rounds.iter().map(|r| r.round_number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[tokio::test]
    async fn reingest_same_round_number_overwrites() {
        let db = Database::open_in_memory().await.unwrap();
        seed_match(&db, "m-1").await;

        upsert_round(&db, &make_round("m-1", 1, "Red")).await.unwrap();
        upsert_round(&db, &make_round("m-1", 1, "Blue")).await.unwrap();

        let rounds = rounds_for_match(&db, "m-1").await.unwrap();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].winning_team.as_deref(), Some("Blue"));
    }

    #[tokio::test]
    async fn rounds_of_other_matches_are_excluded() {
        let db = Database::open_in_memory().await.unwrap();
        seed_match(&db, "m-1").await;
        seed_match(&db, "m-2").await;

        upsert_round(&db, &make_round("m-1", 1, "Red")).await.unwrap();
        upsert_round(&db, &make_round("m-2", 1, "Blue")).await.unwrap();

        let rounds = rounds_for_match(&db, "m-1").await.unwrap();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].match_id, "m-1");
    }
}
