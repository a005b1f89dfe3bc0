// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared dependencies for pipeline runs.
//!
//! All clients and stores are constructed once at process start and passed
//! in here explicitly. Pipelines never construct or cache connections of
//! their own.

use std::sync::Arc;

use valocoach_config::model::{IngestConfig, KnowledgeConfig};
use valocoach_gemini::GeminiClient;
use valocoach_knowledge::KnowledgeStore;
use valocoach_riot::RiotClient;
use valocoach_storage::MatchStore;

/// Dependency bundle handed to every pipeline function.
#[derive(Clone)]
pub struct PipelineDeps {
    pub riot: Arc<RiotClient>,
    pub store: Arc<MatchStore>,
    pub gemini: Arc<GeminiClient>,
    pub knowledge: Arc<KnowledgeStore>,
    pub ingest: IngestConfig,
    pub knowledge_cfg: KnowledgeConfig,
}
