// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Google Generative Language API.
//!
//! Provides [`GeminiClient`] with two operations: coaching-narrative
//! generation via `generateContent` and batch text embedding via
//! `batchEmbedContents`. Errors are not retried; ingestion pipelines
//! propagate them and abort.

use std::time::Duration;

use tracing::debug;
use valocoach_core::CoachError;

use crate::types::{
    ApiErrorResponse, BatchEmbedRequest, BatchEmbedResponse, EmbedRequest,
    GenerateContentRequest, GenerateContentResponse, Part, RequestContent,
};

/// Base URL for the Google Generative Language API.
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Embedding dimensionality of text-embedding-004.
pub const EMBEDDING_DIM: usize = 768;

/// HTTP client for Gemini generation and embedding.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    embed_model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `api_key` - API key; `None` fails on the first call, not here
    /// * `model` - generation model identifier (e.g. "gemini-2.5-flash")
    /// * `embed_model` - embedding model identifier (e.g. "text-embedding-004")
    pub fn new(
        api_key: Option<String>,
        model: String,
        embed_model: String,
    ) -> Result<Self, CoachError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| CoachError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            api_key,
            model,
            embed_model,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Returns the generation model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Overrides the base URL (for testing with wiremock).
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    fn api_key(&self) -> Result<&str, CoachError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| CoachError::Config("gemini.api_key is not set".to_string()))
    }

    async fn post<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, CoachError> {
        let api_key = self.api_key()?;
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| CoachError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| CoachError::Provider {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        debug!(%status, path, "provider response received");

        if !status.is_success() {
            let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&text) {
                format!(
                    "Gemini API error ({}): {}",
                    api_err.error.status.as_deref().unwrap_or("unknown"),
                    api_err.error.message
                )
            } else {
                format!("API returned {status}: {text}")
            };
            return Err(CoachError::provider(message));
        }

        serde_json::from_str(&text).map_err(|e| CoachError::Provider {
            message: format!("failed to parse API response: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Generates text from a single prompt and returns the first candidate's
    /// concatenated text parts.
    pub async fn generate(&self, prompt: &str) -> Result<String, CoachError> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let path = format!("/v1beta/models/{}:generateContent", self.model);
        let response: GenerateContentResponse = self.post(&path, &request).await?;

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| CoachError::provider("generation returned no candidates"))?;

        let text = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(CoachError::provider("generation returned empty content"));
        }
        Ok(text)
    }

    /// Embeds a batch of texts, returning one vector per input in order.
    ///
    /// The caller controls batch sizing; this issues exactly one request.
    pub async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, CoachError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let model_ref = format!("models/{}", self.embed_model);
        let request = BatchEmbedRequest {
            requests: texts
                .iter()
                .map(|text| EmbedRequest {
                    model: model_ref.clone(),
                    content: RequestContent {
                        parts: vec![Part { text: text.clone() }],
                    },
                })
                .collect(),
        };

        let path = format!("/v1beta/models/{}:batchEmbedContents", self.embed_model);
        let response: BatchEmbedResponse = self.post(&path, &request).await?;

        if response.embeddings.len() != texts.len() {
            return Err(CoachError::provider(format!(
                "embedding count mismatch: sent {} texts, received {} vectors",
                texts.len(),
                response.embeddings.len()
            )));
        }

        Ok(response.embeddings.into_iter().map(|e| e.values).collect())
    }
}
