// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite-backed vector store for embedded knowledge chunks.
//!
//! One named index per knowledge domain, each with a fixed embedding
//! dimensionality recorded in a registry table. Search is brute-force
//! cosine similarity over the index's stored vectors.

use std::path::Path;

use tokio_rusqlite::Connection;
use tracing::debug;
use valocoach_core::CoachError;

use crate::types::{ChunkEntry, ScoredChunk, blob_to_vec, cosine_similarity, vec_to_blob};

/// Helper to convert tokio_rusqlite errors into CoachError::Storage.
fn storage_err(e: tokio_rusqlite::Error) -> CoachError {
    CoachError::Storage {
        source: Box::new(e),
    }
}

/// Index names become table names, so restrict them to safe identifiers.
fn validate_index_name(name: &str) -> Result<(), CoachError> {
    let valid = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(CoachError::Internal(format!(
            "invalid knowledge index name `{name}`"
        )))
    }
}

/// Persistent store for metadata-tagged embedding chunks.
pub struct KnowledgeStore {
    conn: Connection,
}

impl KnowledgeStore {
    /// Open (or create) the knowledge database at the given path.
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
            .map_err(|e| storage_err(tokio_rusqlite::Error::from(e)))?;
        Self::init(&conn).await?;
        debug!(path, "knowledge database opened");
        Ok(Self { conn })
    }

    /// Open an in-memory store (tests).
    pub async fn open_in_memory() -> Result<Self, CoachError> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| storage_err(tokio_rusqlite::Error::from(e)))?;
        Self::init(&conn).await?;
        Ok(Self { conn })
    }

    async fn init(conn: &Connection) -> Result<(), CoachError> {
        conn.call(|conn| {
            conn.execute_batch(
                "PRAGMA journal_mode = WAL;
                 CREATE TABLE IF NOT EXISTS knowledge_indexes (
                     name TEXT PRIMARY KEY NOT NULL,
                     dimension INTEGER NOT NULL
                 );",
            )?;
            Ok(())
        })
        .await
        .map_err(storage_err)
    }

    /// Create the named index if it does not exist yet.
    ///
    /// Idempotent. Re-creating an existing index with a different
    /// dimensionality is an error -- an index's dimension is fixed for life.
    pub async fn ensure_index(&self, index: &str, dimension: usize) -> Result<(), CoachError> {
        validate_index_name(index)?;
        let index = index.to_string();
        let existing: Option<i64> = self
            .conn
            .call({
                let index = index.clone();
                move |conn| {
                    let mut stmt = conn
                        .prepare("SELECT dimension FROM knowledge_indexes WHERE name = ?1")?;
                    let mut rows = stmt.query(rusqlite::params![index])?;
                    match rows.next()? {
                        Some(row) => Ok(Some(row.get(0)?)),
                        None => Ok(None),
                    }
                }
            })
            .await
            .map_err(storage_err)?;

        if let Some(existing_dim) = existing {
            if existing_dim as usize != dimension {
                return Err(CoachError::Internal(format!(
                    "index `{index}` exists with dimension {existing_dim}, requested {dimension}"
                )));
            }
            return Ok(());
        }

        self.conn
            .call({
                let index = index.clone();
                move |conn| {
                    conn.execute(
                        "INSERT INTO knowledge_indexes (name, dimension) VALUES (?1, ?2)",
                        rusqlite::params![index, dimension as i64],
                    )?;
                    conn.execute_batch(&format!(
                        "CREATE TABLE IF NOT EXISTS {index}_chunks (
                             id INTEGER PRIMARY KEY,
                             text TEXT NOT NULL,
                             embedding BLOB NOT NULL,
                             metadata TEXT NOT NULL,
                             created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
                         );"
                    ))?;
                    Ok(())
                }
            })
            .await
            .map_err(storage_err)?;
        debug!(index = %index, dimension, "knowledge index created");
        Ok(())
    }

    /// Returns the registered dimensionality of an index, if it exists.
    pub async fn index_dimension(&self, index: &str) -> Result<Option<usize>, CoachError> {
        validate_index_name(index)?;
        let index = index.to_string();
        self.conn
            .call(move |conn| {
                let mut stmt =
                    conn.prepare("SELECT dimension FROM knowledge_indexes WHERE name = ?1")?;
                let mut rows = stmt.query(rusqlite::params![index])?;
                match rows.next()? {
                    Some(row) => Ok(Some(row.get::<_, i64>(0)? as usize)),
                    None => Ok(None),
                }
            })
            .await
            .map_err(storage_err)
    }

    /// Insert embedded chunks into the named index.
    ///
    /// Every vector must match the index's registered dimensionality.
    /// Returns the number of rows written.
    pub async fn upsert(&self, index: &str, entries: Vec<ChunkEntry>) -> Result<usize, CoachError> {
        validate_index_name(index)?;
        let dimension = self
            .index_dimension(index)
            .await?
            .ok_or_else(|| CoachError::Internal(format!("unknown knowledge index `{index}`")))?;

        for entry in &entries {
            if entry.embedding.len() != dimension {
                return Err(CoachError::Internal(format!(
                    "embedding has {} dimensions, index `{index}` expects {dimension}",
                    entry.embedding.len()
                )));
            }
        }

        let index = index.to_string();
        let count = entries.len();
        self.conn
            .call({
                let index = index.clone();
                move |conn| {
                    let tx = conn.transaction()?;
                    {
                        let mut stmt = tx.prepare(&format!(
                            "INSERT INTO {index}_chunks (text, embedding, metadata) VALUES (?1, ?2, ?3)"
                        ))?;
                        for entry in &entries {
                            stmt.execute(rusqlite::params![
                                entry.text,
                                vec_to_blob(&entry.embedding),
                                entry.metadata.to_string(),
                            ])?;
                        }
                    }
                    tx.commit()?;
                    Ok(())
                }
            })
            .await
            .map_err(storage_err)?;
        debug!(index = %index, count, "knowledge chunks upserted");
        Ok(count)
    }

    /// Top-`limit` chunks by cosine similarity to the query embedding.
    pub async fn search(
        &self,
        index: &str,
        query: &[f32],
        limit: usize,
    ) -> Result<Vec<ScoredChunk>, CoachError> {
        validate_index_name(index)?;
        let dimension = self
            .index_dimension(index)
            .await?
            .ok_or_else(|| CoachError::Internal(format!("unknown knowledge index `{index}`")))?;
        if query.len() != dimension {
            return Err(CoachError::Internal(format!(
                "query has {} dimensions, index `{index}` expects {dimension}",
                query.len()
            )));
        }

        let index = index.to_string();
        let query = query.to_vec();
        let mut scored: Vec<ScoredChunk> = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&format!(
                    "SELECT text, embedding, metadata FROM {index}_chunks"
                ))?;
                let rows = stmt
                    .query_map([], |row| {
                        let text: String = row.get(0)?;
                        let blob: Vec<u8> = row.get(1)?;
                        let metadata: String = row.get(2)?;
                        Ok((text, blob, metadata))
                    })?
                    .collect::<Result<Vec<_>, _>>()?;

                let scored = rows
                    .into_iter()
                    .map(|(text, blob, metadata)| {
                        let embedding = blob_to_vec(&blob);
                        let score = cosine_similarity(&query, &embedding);
                        ScoredChunk {
                            text,
                            metadata: serde_json::from_str(&metadata)
                                .unwrap_or(serde_json::Value::Null),
                            score,
                        }
                    })
                    .collect::<Vec<_>>();
                Ok(scored)
            })
            .await
            .map_err(storage_err)?;

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);
        Ok(scored)
    }
}
