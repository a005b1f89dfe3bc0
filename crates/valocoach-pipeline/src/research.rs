// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The research variant of the knowledge pipeline.
//!
//! Runs the same chunk -> embed -> upsert sequence directly on free-text
//! documents (search results, strategy write-ups), with no match data
//! involved. Used to populate general strategic knowledge.

use chrono::{SecondsFormat, Utc};
use tracing::info;
use valocoach_core::CoachError;
use valocoach_knowledge::{DocMetadata, DocType, KnowledgeDoc};

use crate::context::PipelineDeps;
use crate::save_knowledge::embed_and_store;

/// Embed free-text research documents into the knowledge index under the
/// given topic. Returns the number of chunks written.
pub async fn run_save_research(
    deps: &PipelineDeps,
    topic: &str,
    documents: &[String],
) -> Result<u32, CoachError> {
    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    let docs: Vec<KnowledgeDoc> = documents
        .iter()
        .map(|text| {
            let mut metadata = DocMetadata::new(DocType::Research, generated_at.clone());
            metadata.topic = Some(topic.to_string());
            KnowledgeDoc {
                text: text.clone(),
                metadata,
            }
        })
        .collect();

    let chunks_written = embed_and_store(deps, &docs).await?;
    info!(topic, chunks_written, "research knowledge saved");
    Ok(chunks_written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{EchoEmbeddings, TEST_DIM, test_deps};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer};

    #[tokio::test]
    async fn research_documents_land_in_the_index_with_topic_tag() {
        let server = MockServer::start().await;
        let deps = test_deps(&server).await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/text-embedding-004:batchEmbedContents"))
            .respond_with(EchoEmbeddings { dimension: TEST_DIM })
            .mount(&server)
            .await;

        let documents = vec![
            "On Ascent, mid control unlocks both A and B splits.".to_string(),
            "Pistol rounds favor utility-heavy buys on defense.".to_string(),
        ];
        let written = run_save_research(&deps, "map strategy", &documents)
            .await
            .unwrap();
        assert_eq!(written, 2);

        let results = deps
            .knowledge
            .search("valorant_knowledge", &vec![1.0; TEST_DIM], 10)
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
        for chunk in &results {
            assert_eq!(chunk.metadata["type"], "research");
            assert_eq!(chunk.metadata["topic"], "map strategy");
            assert!(chunk.metadata.get("match_id").is_none());
        }
    }

    #[tokio::test]
    async fn empty_document_list_writes_nothing() {
        let server = MockServer::start().await;
        let deps = test_deps(&server).await;

        // No embedding mock mounted: zero chunks must mean zero requests.
        let written = run_save_research(&deps, "nothing", &[]).await.unwrap();
        assert_eq!(written, 0);
    }
}
