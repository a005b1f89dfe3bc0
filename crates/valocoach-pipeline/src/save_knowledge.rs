// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The "save knowledge" pipeline.
//!
//! For each match in a page: extract the player's view, have the provider
//! write a coaching narrative from it, split view and narrative into
//! metadata-tagged documents, chunk, embed in fixed-size batches, and
//! upsert everything into the knowledge index.

use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};
use valocoach_core::{CoachError, GameMode, Platform, Region};
use valocoach_knowledge::{ChunkEntry, DocMetadata, DocType, KnowledgeDoc, batch, chunk_text};
use valocoach_riot::MatchesFilter;

use crate::context::PipelineDeps;
use crate::extract::{PlayerView, extract_player_view};

/// Instructions for the narrative generator.
const COACHING_INSTRUCTIONS: &str = "\
You are an experienced Valorant coaching analyst. Based on the match data \
provided, produce coaching advice covering the player's strengths, \
weaknesses, and concrete improvements. Focus on: \
1. Overall performance: KDA, combat score, damage, and economy usage \
(credits spent versus loadout value). \
2. Round-by-round summary: kills, deaths, spike plant/defuse involvement, \
economy state, and ability usage per round. \
3. Kill and death events: which weapons secured kills, who killed the \
player, and the circumstances of key duels. \
4. Ability usage: cast counts and their timing. \
5. Actionable advice: specific changes to buy decisions, ability usage in \
concrete situations, and positioning in engagements. \
Address the player directly in a friendly, constructive tone, and keep \
every observation grounded in the data rather than speculation.";

/// Inputs for a save-knowledge run.
#[derive(Debug, Clone)]
pub struct SaveKnowledgeParams {
    pub name: String,
    pub tag: String,
    pub region: Region,
    pub platform: Platform,
    pub mode: GameMode,
    /// Matches to fetch, 1..=10. Defaults to 5.
    pub size: Option<u32>,
}

/// Counts reported at the end of a save-knowledge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveKnowledgeReport {
    pub matches_processed: u32,
    pub chunks_written: u32,
}

/// Build the generation prompt for one player view.
pub fn build_narrative_prompt(view: &PlayerView) -> Result<String, CoachError> {
    let payload = serde_json::to_string(view).map_err(|e| {
        CoachError::Internal(format!("failed to serialize player view: {e}"))
    })?;
    let name = view.player_summary.name.as_deref().unwrap_or("unknown");
    let tag = view.player_summary.tag.as_deref().unwrap_or("");
    Ok(format!(
        "{COACHING_INSTRUCTIONS}\n\n\
         The following JSON is the performance detail of player \"{name}#{tag}\" \
         in one match.\n\n---\nMatch data (JSON):\n{payload}\n---"
    ))
}

/// Build the document set for one match: the player summary, one document
/// per relevant kill, one per round view, and the generated narrative.
pub fn build_match_documents(
    view: &PlayerView,
    narrative: &str,
    generated_at: &str,
) -> Result<Vec<KnowledgeDoc>, CoachError> {
    fn to_json<T: serde::Serialize>(value: &T) -> Result<String, CoachError> {
        serde_json::to_string(value)
            .map_err(|e| CoachError::Internal(format!("failed to serialize document: {e}")))
    }

    let base_meta = |doc_type: DocType| {
        let mut meta = DocMetadata::new(doc_type, generated_at);
        meta.player_puuid = view.player_summary.puuid.clone();
        meta.match_id = view.match_summary.match_id.clone();
        meta.map_name = view.match_summary.map_name.clone();
        meta.queue_name = view.match_summary.queue_name.clone();
        meta.started_at = view.match_summary.started_at.clone();
        meta
    };

    let mut docs = Vec::new();

    docs.push(KnowledgeDoc {
        text: to_json(&view.player_summary)?,
        metadata: base_meta(DocType::PlayerSummary),
    });

    for kill in &view.relevant_kills {
        let mut meta = base_meta(DocType::PlayerRelevantKills);
        meta.round = kill.round;
        docs.push(KnowledgeDoc {
            text: to_json(kill)?,
            metadata: meta,
        });
    }

    for round in &view.rounds {
        let mut meta = base_meta(DocType::PlayerRounds);
        meta.round = Some(round.round_number);
        docs.push(KnowledgeDoc {
            text: to_json(round)?,
            metadata: meta,
        });
    }

    docs.push(KnowledgeDoc {
        text: narrative.to_string(),
        metadata: base_meta(DocType::PlayerCoachingAdvice),
    });

    Ok(docs)
}

/// Chunk documents, embed the chunk texts in fixed-size batches, and upsert
/// the vectors with their metadata into the configured index.
///
/// Shared by the match-knowledge and research pipelines. Returns the number
/// of chunks written.
pub(crate) async fn embed_and_store(
    deps: &PipelineDeps,
    docs: &[KnowledgeDoc],
) -> Result<u32, CoachError> {
    let mut chunk_texts = Vec::new();
    let mut chunk_metadata = Vec::new();
    for doc in docs {
        for chunk in chunk_text(&doc.text, deps.ingest.chunk_max_chars) {
            chunk_texts.push(chunk);
            chunk_metadata.push(doc.metadata.clone());
        }
    }

    let mut embeddings: Vec<Vec<f32>> = Vec::with_capacity(chunk_texts.len());
    for texts in batch(&chunk_texts, deps.ingest.embed_batch_size) {
        embeddings.extend(deps.gemini.embed_batch(&texts).await?);
    }

    deps.knowledge
        .ensure_index(&deps.knowledge_cfg.index, deps.knowledge_cfg.dimension)
        .await?;

    let entries: Vec<ChunkEntry> = chunk_texts
        .into_iter()
        .zip(embeddings)
        .zip(chunk_metadata)
        .map(|((text, embedding), metadata)| {
            Ok(ChunkEntry {
                text,
                embedding,
                metadata: serde_json::to_value(&metadata).map_err(|e| {
                    CoachError::Internal(format!("failed to serialize chunk metadata: {e}"))
                })?,
            })
        })
        .collect::<Result<_, CoachError>>()?;

    let written = deps
        .knowledge
        .upsert(&deps.knowledge_cfg.index, entries)
        .await?;
    Ok(written as u32)
}

/// Run the save-knowledge pipeline for one page of matches.
pub async fn run_save_knowledge(
    deps: &PipelineDeps,
    params: &SaveKnowledgeParams,
) -> Result<SaveKnowledgeReport, CoachError> {
    let account = deps.riot.get_account(&params.name, &params.tag).await?;
    let filter = MatchesFilter {
        mode: Some(params.mode),
        size: Some(params.size.unwrap_or(5)),
        start: None,
    };
    let matches = deps
        .riot
        .get_matches_by_puuid(&account.puuid, params.region, params.platform, &filter)
        .await?;

    let mut matches_processed = 0u32;
    let mut chunks_written = 0u32;

    for m in &matches {
        let view = extract_player_view(m, &account.puuid).ok_or_else(|| {
            CoachError::DataIntegrity(format!(
                "player {} absent from fetched match roster",
                account.puuid
            ))
        })?;

        let narrative = deps.gemini.generate(&build_narrative_prompt(&view)?).await?;
        debug!(
            match_id = view.match_summary.match_id.as_deref().unwrap_or(""),
            narrative_chars = narrative.len(),
            "coaching narrative generated"
        );

        let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let docs = build_match_documents(&view, &narrative, &generated_at)?;
        chunks_written += embed_and_store(deps, &docs).await?;
        matches_processed += 1;
    }

    info!(
        name = %params.name,
        tag = %params.tag,
        matches_processed,
        chunks_written,
        "save-knowledge run complete"
    );
    Ok(SaveKnowledgeReport {
        matches_processed,
        chunks_written,
    })
}
