// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All access is serialized through tokio-rusqlite's single background
//! thread. Do NOT create additional Connection instances for writes.

use std::path::Path;

use tokio_rusqlite::Connection;
use tracing::debug;
use valocoach_core::CoachError;

use crate::migrations;

/// Helper to convert tokio_rusqlite errors into CoachError::Storage.
pub fn map_tr_err(e: tokio_rusqlite::Error) -> CoachError {
    CoachError::Storage {
        source: Box::new(e),
    }
}

/// Like [`map_tr_err`] but for closures whose error is boxed (e.g. mixing
/// rusqlite and refinery errors in a single `call`).
fn map_boxed_err(
    e: tokio_rusqlite::Error<Box<dyn std::error::Error + Send + Sync>>,
) -> CoachError {
    let source: Box<dyn std::error::Error + Send + Sync> = match e {
        tokio_rusqlite::Error::Error(inner) => inner,
        other => other.to_string().into(),
    };
    CoachError::Storage { source }
}

/// Handle to the SQLite match database.
///
/// Opening runs the embedded migrations and configures WAL mode and
/// foreign-key enforcement.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at the given path.
    pub async fn open(path: &str) -> Result<Self, CoachError> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| CoachError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = Connection::open(path.to_owned())
            .await
            .map_err(|e| map_tr_err(tokio_rusqlite::Error::from(e)))?;
        Self::configure(&conn).await?;
        debug!(path, "match database opened");
        Ok(Self { conn })
    }

    /// Open an in-memory database (tests).
    pub async fn open_in_memory() -> Result<Self, CoachError> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| map_tr_err(tokio_rusqlite::Error::from(e)))?;
        Self::configure(&conn).await?;
        Ok(Self { conn })
    }

    async fn configure(conn: &Connection) -> Result<(), CoachError> {
        conn.call(|conn| -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            conn.execute_batch(
                "PRAGMA journal_mode = WAL;
                 PRAGMA foreign_keys = ON;
                 PRAGMA busy_timeout = 5000;",
            )?;
            migrations::runner().run(conn)?;
            Ok(())
        })
        .await
        .map_err(map_boxed_err)
    }

    /// Returns the underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Checkpoint the WAL before shutdown.
    pub async fn close(&self) -> Result<(), CoachError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_creates_database_file_and_schema() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        assert!(db_path.exists(), "database file should be created");

        // Migrations created all four tables.
        let tables: Vec<String> = db
            .connection()
            .call(|conn| -> rusqlite::Result<Vec<String>> {
                let mut stmt = conn.prepare(
                    "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
                )?;
                let names = stmt
                    .query_map([], |row| row.get::<_, String>(0))?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(names)
            })
            .await
            .unwrap();
        for table in ["players", "matches", "match_rounds", "player_match_stats"] {
            assert!(tables.iter().any(|t| t == table), "missing table {table}");
        }

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_is_idempotent_across_restarts() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("reopen.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        db.close().await.unwrap();
        drop(db);

        // Second open must not fail on already-applied migrations.
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = Database::open_in_memory().await.unwrap();
        let result = db
            .connection()
            .call(|conn| -> rusqlite::Result<()> {
                conn.execute(
                    "INSERT INTO match_rounds (match_id, round_number) VALUES ('no-such-match', 1)",
                    [],
                )?;
                Ok(())
            })
            .await;
        assert!(result.is_err(), "orphan round insert should be rejected");
    }
}
