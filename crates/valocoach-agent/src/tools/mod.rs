// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in tools for the coach agent, grouped by backing service.

pub mod aimlab;
pub mod db;
pub mod knowledge;
pub mod riot;

use std::sync::Arc;

use valocoach_aimlab::AimlabClient;
use valocoach_gemini::GeminiClient;
use valocoach_knowledge::KnowledgeStore;
use valocoach_riot::RiotClient;
use valocoach_storage::MatchStore;

use crate::tool::ToolRegistry;

/// Build the full registry the coach agent is constructed with.
///
/// All clients and stores are injected; the registry owns shared handles
/// to them for the lifetime of the agent.
pub fn build_coach_registry(
    store: Arc<MatchStore>,
    riot: Arc<RiotClient>,
    aimlab: Arc<AimlabClient>,
    gemini: Arc<GeminiClient>,
    knowledge: Arc<KnowledgeStore>,
    knowledge_index: &str,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(db::GetPlayerByNameTagTool::new(store.clone())));
    registry.register(Arc::new(db::GetPlayerByPuuidTool::new(store.clone())));
    registry.register(Arc::new(db::GetMatchByIdTool::new(store.clone())));
    registry.register(Arc::new(db::GetMatchRoundsTool::new(store.clone())));
    registry.register(Arc::new(db::GetPlayerMatchStatTool::new(store.clone())));
    registry.register(Arc::new(db::GetMatchesByPlayerTool::new(store)));

    registry.register(Arc::new(riot::GetAccountTool::new(riot.clone())));
    registry.register(Arc::new(riot::GetMatchesTool::new(riot.clone())));
    registry.register(Arc::new(riot::GetMmrTool::new(riot.clone())));
    registry.register(Arc::new(riot::GetContentTool::new(riot)));

    registry.register(Arc::new(aimlab::GetAimlabProfileTool::new(aimlab.clone())));
    registry.register(Arc::new(aimlab::GetAimlabPlaysAggTool::new(aimlab)));

    registry.register(Arc::new(knowledge::SearchKnowledgeTool::new(
        gemini,
        knowledge,
        knowledge_index.to_string(),
    )));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn registry_contains_all_coach_operations() {
        let registry = build_coach_registry(
            Arc::new(MatchStore::open_in_memory().await.unwrap()),
            Arc::new(RiotClient::new(None).unwrap()),
            Arc::new(AimlabClient::new().unwrap()),
            Arc::new(GeminiClient::new(None, "m".into(), "e".into()).unwrap()),
            Arc::new(KnowledgeStore::open_in_memory().await.unwrap()),
            "valorant_knowledge",
        );

        assert_eq!(registry.len(), 13);
        for name in [
            "valorant-db-get-player-by-name-and-tag",
            "valorant-db-get-player-by-puuid",
            "valorant-db-get-match-by-id",
            "valorant-db-get-match-rounds-by-match-id",
            "valorant-db-get-player-match-stat",
            "valorant-db-get-matches-by-player",
            "valorant-get-account",
            "valorant-get-matches",
            "valorant-get-mmr",
            "valorant-get-content",
            "aimlab-get-profile",
            "aimlab-get-plays-agg",
            "search-valorant-knowledge",
        ] {
            assert!(registry.get(name).is_some(), "missing tool {name}");
        }
    }
}
