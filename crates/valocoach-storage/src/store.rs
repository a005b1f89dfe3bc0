// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! High-level facade over the match database.
//!
//! [`MatchStore`] wraps a [`Database`] handle and delegates to the typed
//! query modules. Construct one per process and pass it into pipelines and
//! tools explicitly; there are no module-level singletons.

use tracing::debug;
use valocoach_core::CoachError;

use crate::database::{Database, map_tr_err};
use crate::models::{MatchRecord, MatchRound, NewPlayer, Player, PlayerMatchStat, RoundRecord, StatRecord};
use crate::queries;

/// SQLite-backed store for players, matches, rounds, and per-match stats.
pub struct MatchStore {
    db: Database,
}

impl MatchStore {
    /// Open (or create) the store at the given path and run migrations.
    pub async fn open(path: &str) -> Result<Self, CoachError> {
        let db = Database::open(path).await?;
        Ok(Self { db })
    }

    /// Open an in-memory store (tests).
    pub async fn open_in_memory() -> Result<Self, CoachError> {
        let db = Database::open_in_memory().await?;
        Ok(Self { db })
    }

    /// Wrap an already-open database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    // --- Player operations ---

    pub async fn upsert_player(&self, player: &NewPlayer) -> Result<(), CoachError> {
        queries::players::upsert_player(&self.db, player).await
    }

    pub async fn get_player_by_puuid(&self, puuid: &str) -> Result<Option<Player>, CoachError> {
        queries::players::get_player_by_puuid(&self.db, puuid).await
    }

    pub async fn get_player_by_name_tag(
        &self,
        name: &str,
        tag: &str,
    ) -> Result<Option<Player>, CoachError> {
        queries::players::get_player_by_name_tag(&self.db, name, tag).await
    }

    // --- Match operations ---

    pub async fn upsert_match(&self, record: &MatchRecord) -> Result<(), CoachError> {
        queries::matches::upsert_match(&self.db, record).await
    }

    pub async fn get_match(&self, id: &str) -> Result<Option<MatchRecord>, CoachError> {
        queries::matches::get_match(&self.db, id).await
    }

    pub async fn list_matches_for_player(
        &self,
        player_id: i64,
    ) -> Result<Vec<MatchRecord>, CoachError> {
        queries::matches::list_matches_for_player(&self.db, player_id).await
    }

    // --- Round operations ---

    pub async fn upsert_round(&self, record: &RoundRecord) -> Result<(), CoachError> {
        queries::rounds::upsert_round(&self.db, record).await
    }

    pub async fn rounds_for_match(&self, match_id: &str) -> Result<Vec<MatchRound>, CoachError> {
        queries::rounds::rounds_for_match(&self.db, match_id).await
    }

    // --- Stat operations ---

    pub async fn upsert_stat(&self, record: &StatRecord) -> Result<(), CoachError> {
        queries::stats::upsert_stat(&self.db, record).await
    }

    pub async fn get_stat(
        &self,
        player_id: i64,
        match_id: &str,
    ) -> Result<Option<PlayerMatchStat>, CoachError> {
        queries::stats::get_stat(&self.db, player_id, match_id).await
    }

    /// Write one match's rows -- the match, its rounds, and the player's
    /// stat rows -- inside a single transaction.
    ///
    /// A crash mid-match therefore cannot leave a Match row without its
    /// rounds and stats; either everything lands or nothing does.
    pub async fn save_match_records(
        &self,
        match_record: MatchRecord,
        rounds: Vec<RoundRecord>,
        stats: Vec<StatRecord>,
    ) -> Result<(), CoachError> {
        let match_id = match_record.id.clone();
        self.db
            .connection()
            .call(move |conn| {
                let tx = conn.transaction()?;
                queries::matches::upsert_match_sync(&tx, &match_record)?;
                for round in &rounds {
                    queries::rounds::upsert_round_sync(&tx, round)?;
                }
                for stat in &stats {
                    queries::stats::upsert_stat_sync(&tx, stat)?;
                }
                tx.commit()?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!(match_id, "match records saved");
        Ok(())
    }

    /// Checkpoint and release the database.
    pub async fn close(&self) -> Result<(), CoachError> {
        self.db.close().await
    }
}
