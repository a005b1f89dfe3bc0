// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic search over the embedded knowledge index.

use std::sync::Arc;

use async_trait::async_trait;
use valocoach_core::CoachError;
use valocoach_gemini::GeminiClient;
use valocoach_knowledge::KnowledgeStore;

use crate::tool::{Tool, ToolOutput};

const DEFAULT_LIMIT: usize = 5;

/// Embeds a query via the provider and searches the knowledge index.
pub struct SearchKnowledgeTool {
    gemini: Arc<GeminiClient>,
    knowledge: Arc<KnowledgeStore>,
    index: String,
}

impl SearchKnowledgeTool {
    pub fn new(gemini: Arc<GeminiClient>, knowledge: Arc<KnowledgeStore>, index: String) -> Self {
        Self {
            gemini,
            knowledge,
            index,
        }
    }
}

#[async_trait]
impl Tool for SearchKnowledgeTool {
    fn name(&self) -> &str {
        "search-valorant-knowledge"
    }

    fn description(&self) -> &str {
        "Searches stored match analyses and strategy research by semantic similarity"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": { "type": "string", "description": "What to look for" },
                "limit": { "type": "integer", "minimum": 1, "maximum": 20 }
            },
            "required": ["query"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, CoachError> {
        let Some(query) = input["query"].as_str() else {
            return Ok(ToolOutput::error("missing required parameter `query`"));
        };
        let limit = input["limit"]
            .as_u64()
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT);

        let embeddings = match self.gemini.embed_batch(&[query.to_string()]).await {
            Ok(e) => e,
            Err(e) => return Ok(ToolOutput::error(e.to_string())),
        };
        let Some(query_embedding) = embeddings.into_iter().next() else {
            return Ok(ToolOutput::error("query embedding came back empty"));
        };

        match self
            .knowledge
            .search(&self.index, &query_embedding, limit)
            .await
        {
            Ok(chunks) => ToolOutput::json(&chunks),
            Err(e) => Ok(ToolOutput::error(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valocoach_knowledge::ChunkEntry;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn search_embeds_query_and_returns_ranked_chunks() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/text-embedding-004:batchEmbedContents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"embeddings": [{"values": [1.0, 0.0, 0.0]}]}),
            ))
            .mount(&server)
            .await;

        let gemini = Arc::new(
            GeminiClient::new(
                Some("key".into()),
                "gemini-2.5-flash".into(),
                "text-embedding-004".into(),
            )
            .unwrap()
            .with_base_url(server.uri()),
        );

        let knowledge = Arc::new(KnowledgeStore::open_in_memory().await.unwrap());
        knowledge.ensure_index("valorant_knowledge", 3).await.unwrap();
        knowledge
            .upsert(
                "valorant_knowledge",
                vec![
                    ChunkEntry {
                        text: "mid control on Ascent".to_string(),
                        embedding: vec![0.9, 0.1, 0.0],
                        metadata: serde_json::json!({"type": "research"}),
                    },
                    ChunkEntry {
                        text: "unrelated note".to_string(),
                        embedding: vec![0.0, 0.0, 1.0],
                        metadata: serde_json::json!({"type": "research"}),
                    },
                ],
            )
            .await
            .unwrap();

        let tool = SearchKnowledgeTool::new(gemini, knowledge, "valorant_knowledge".to_string());
        let output = tool
            .invoke(serde_json::json!({"query": "how to take mid", "limit": 1}))
            .await
            .unwrap();
        assert!(!output.is_error);

        let chunks: serde_json::Value = serde_json::from_str(&output.content).unwrap();
        assert_eq!(chunks.as_array().unwrap().len(), 1);
        assert_eq!(chunks[0]["text"], "mid control on Ascent");
    }

    #[tokio::test]
    async fn missing_query_is_a_tool_level_error() {
        let gemini = Arc::new(
            GeminiClient::new(None, "m".into(), "e".into()).unwrap(),
        );
        let knowledge = Arc::new(KnowledgeStore::open_in_memory().await.unwrap());
        let tool = SearchKnowledgeTool::new(gemini, knowledge, "idx".to_string());

        let output = tool.invoke(serde_json::json!({})).await.unwrap();
        assert!(output.is_error);
        assert!(output.content.contains("query"));
    }
}
