// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Knowledge document types and their metadata tags.

use serde::{Deserialize, Serialize};

/// What kind of content a knowledge document carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    /// A player's aggregate summary for one match (JSON).
    PlayerSummary,
    /// One kill event the player was part of (JSON).
    PlayerRelevantKills,
    /// One per-round breakdown for the player (JSON).
    PlayerRounds,
    /// The generated coaching narrative (free text).
    PlayerCoachingAdvice,
    /// General strategic knowledge from research (free text).
    Research,
}

impl DocType {
    /// Stable string form used in metadata tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::PlayerSummary => "player_summary",
            DocType::PlayerRelevantKills => "player_relevant_kills",
            DocType::PlayerRounds => "player_rounds",
            DocType::PlayerCoachingAdvice => "player_coaching_advice",
            DocType::Research => "research",
        }
    }
}

/// Metadata attached to every chunk derived from a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocMetadata {
    #[serde(rename = "type")]
    pub doc_type: DocType,
    /// The player this document is about, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_puuid: Option<String>,
    /// Round number, for per-round and per-kill documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<i64>,
    /// RFC 3339 timestamp of document generation.
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    /// Research topic, for research documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl DocMetadata {
    /// Metadata with only the required tags set.
    pub fn new(doc_type: DocType, generated_at: impl Into<String>) -> Self {
        Self {
            doc_type,
            player_puuid: None,
            round: None,
            generated_at: generated_at.into(),
            match_id: None,
            map_name: None,
            queue_name: None,
            started_at: None,
            topic: None,
        }
    }
}

/// A document queued for chunking and embedding.
#[derive(Debug, Clone)]
pub struct KnowledgeDoc {
    pub text: String,
    pub metadata: DocMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_type_serializes_to_snake_case_tag() {
        let json = serde_json::to_string(&DocType::PlayerRelevantKills).unwrap();
        assert_eq!(json, "\"player_relevant_kills\"");
        assert_eq!(DocType::PlayerRelevantKills.as_str(), "player_relevant_kills");
    }

    #[test]
    fn metadata_omits_unset_optional_tags() {
        let meta = DocMetadata::new(DocType::Research, "2026-08-07T00:00:00Z");
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["type"], "research");
        assert_eq!(value["generated_at"], "2026-08-07T00:00:00Z");
        assert!(value.get("round").is_none());
        assert!(value.get("match_id").is_none());
    }

    #[test]
    fn metadata_round_trips() {
        let mut meta = DocMetadata::new(DocType::PlayerRounds, "2026-08-07T00:00:00Z");
        meta.player_puuid = Some("p-1".to_string());
        meta.round = Some(7);
        meta.match_id = Some("m-1".to_string());

        let json = serde_json::to_string(&meta).unwrap();
        let back: DocMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back.doc_type, DocType::PlayerRounds);
        assert_eq!(back.round, Some(7));
        assert_eq!(back.player_puuid.as_deref(), Some("p-1"));
    }
}
