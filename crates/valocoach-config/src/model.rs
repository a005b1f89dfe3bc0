// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Valocoach coaching backend.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use valocoach_core::{Platform, Region};

/// Top-level Valocoach configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ValocoachConfig {
    /// Agent identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Valorant stats API settings.
    #[serde(default)]
    pub riot: RiotConfig,

    /// Google Generative Language API settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Relational match store settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Vector knowledge store settings.
    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    /// Match ingestion pacing and chunking settings.
    #[serde(default)]
    pub ingest: IngestConfig,
}

/// Agent identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the coaching agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Inline system prompt string. Overridden by `system_prompt_file` if both set.
    #[serde(default)]
    pub system_prompt: Option<String>,

    /// Path to a markdown file containing the system prompt.
    /// Takes precedence over `system_prompt` if both are set.
    #[serde(default)]
    pub system_prompt_file: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            system_prompt: None,
            system_prompt_file: None,
        }
    }
}

fn default_agent_name() -> String {
    "valocoach".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Valorant stats API configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RiotConfig {
    /// HenrikDev API key. `None` fails on the first API call, not at startup.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Default account region.
    #[serde(default)]
    pub region: Region,

    /// Default platform.
    #[serde(default)]
    pub platform: Platform,
}

/// Google Generative Language API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// API key. `None` fails on the first provider call.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model used for coaching narrative generation.
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Model used for text embeddings.
    #[serde(default = "default_embed_model")]
    pub embed_model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            embed_model: default_embed_model(),
        }
    }
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_embed_model() -> String {
    "text-embedding-004".to_string()
}

/// Relational match store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file holding match data.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("valocoach").join("valocoach.db"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "valocoach.db".to_string())
}

/// Vector knowledge store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeConfig {
    /// Path to the SQLite database file holding embedded knowledge.
    #[serde(default = "default_knowledge_path")]
    pub database_path: String,

    /// Name of the knowledge index.
    #[serde(default = "default_index")]
    pub index: String,

    /// Embedding dimensionality. Must match the embedding model's output
    /// (768 for text-embedding-004).
    #[serde(default = "default_dimension")]
    pub dimension: usize,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            database_path: default_knowledge_path(),
            index: default_index(),
            dimension: default_dimension(),
        }
    }
}

fn default_knowledge_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("valocoach").join("knowledge.db"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "knowledge.db".to_string())
}

fn default_index() -> String {
    "valorant_knowledge".to_string()
}

fn default_dimension() -> usize {
    768
}

/// Match ingestion pacing and chunking configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IngestConfig {
    /// Matches fetched per API page. Upstream caps this at 10.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Delay between page fetches in the save-all loop, in milliseconds.
    /// The upstream budget is roughly 30 requests per minute.
    #[serde(default = "default_page_delay_ms")]
    pub page_delay_ms: u64,

    /// Maximum chunk size in characters for knowledge documents.
    #[serde(default = "default_chunk_max_chars")]
    pub chunk_max_chars: usize,

    /// Number of chunk texts embedded per provider request.
    #[serde(default = "default_embed_batch_size")]
    pub embed_batch_size: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_delay_ms: default_page_delay_ms(),
            chunk_max_chars: default_chunk_max_chars(),
            embed_batch_size: default_embed_batch_size(),
        }
    }
}

fn default_page_size() -> u32 {
    5
}

fn default_page_delay_ms() -> u64 {
    5000
}

fn default_chunk_max_chars() -> usize {
    512
}

fn default_embed_batch_size() -> usize {
    100
}
