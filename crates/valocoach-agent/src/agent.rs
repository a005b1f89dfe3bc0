// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The conversational coach agent.
//!
//! A [`CoachAgent`] is an LLM-backed entity constructed with an explicit
//! [`ToolRegistry`]; the registry is fixed at construction and dispatched
//! by operation name.

use std::sync::Arc;

use tracing::debug;
use valocoach_core::CoachError;
use valocoach_gemini::GeminiClient;

use crate::tool::{ToolOutput, ToolRegistry};

/// Default persona for the coach agent. Callers usually override this from
/// `agent.system_prompt` in the configuration.
pub const DEFAULT_COACH_INSTRUCTIONS: &str = "\
You are a professional Valorant analyst and personal strategy coach. \
Ground every statement in data obtained from your available operations or \
the knowledge base -- never in speculation. Identify the player's issue, \
gather the relevant data, then respond with: a factual assessment of the \
current performance, a data-backed hypothesis for its cause, a concrete \
and measurable action plan, and the improvement you expect from it. \
When a question is too vague to analyze, ask what map, agent, or metric \
the player wants to focus on instead of guessing.";

/// LLM-backed coaching agent with a named set of callable operations.
pub struct CoachAgent {
    name: String,
    instructions: String,
    gemini: Arc<GeminiClient>,
    tools: ToolRegistry,
}

impl CoachAgent {
    /// Create an agent. The registry passed here is the complete set of
    /// operations the agent can ever invoke.
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        gemini: Arc<GeminiClient>,
        tools: ToolRegistry,
    ) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            gemini,
            tools,
        }
    }

    /// The agent's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The agent's operation registry.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Invoke a named operation with JSON input.
    pub async fn invoke_tool(
        &self,
        name: &str,
        input: serde_json::Value,
    ) -> Result<ToolOutput, CoachError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| CoachError::Internal(format!("unknown operation `{name}`")))?;
        debug!(agent = %self.name, tool = name, "invoking operation");
        tool.invoke(input).await
    }

    /// Generate a coaching reply to a user message.
    ///
    /// The prompt carries the persona and the operation inventory so the
    /// model knows what data it can ask for.
    pub async fn generate(&self, user_message: &str) -> Result<String, CoachError> {
        let inventory = self
            .tools
            .list()
            .into_iter()
            .map(|(name, description)| format!("- {name}: {description}"))
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = format!(
            "{}\n\nAvailable operations:\n{}\n\nPlayer: {}",
            self.instructions, inventory, user_message
        );
        self.gemini.generate(&prompt).await
    }
}
