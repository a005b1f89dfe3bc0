// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Valocoach coaching backend.

use thiserror::Error;

/// The primary error type used across all Valocoach crates.
#[derive(Debug, Error)]
pub enum CoachError {
    /// Configuration errors (missing secret, invalid TOML, bad field values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Upstream stats-API errors (non-2xx status, error envelope, schema mismatch).
    #[error("api error: {message}")]
    Api {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Storage backend errors (database connection, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// LLM provider errors (generation failure, embedding failure).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Data-integrity errors (missing required match fields, player not found).
    /// Aborts the current pipeline run.
    #[error("data integrity error: {0}")]
    DataIntegrity(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoachError {
    /// Shorthand for an [`CoachError::Api`] error without an underlying source.
    pub fn api(message: impl Into<String>) -> Self {
        CoachError::Api {
            message: message.into(),
            source: None,
        }
    }

    /// Shorthand for a [`CoachError::Provider`] error without an underlying source.
    pub fn provider(message: impl Into<String>) -> Self {
        CoachError::Provider {
            message: message.into(),
            source: None,
        }
    }
}
