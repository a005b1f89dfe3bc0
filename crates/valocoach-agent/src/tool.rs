// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait and registry for the coach agent's callable operations.
//!
//! The [`Tool`] trait defines the unified interface every callable
//! operation implements -- database lookups, stats-API fetches, knowledge
//! search. The [`ToolRegistry`] maps operation names to typed handlers and
//! is passed into the agent at construction; there is no dynamic
//! capability registration after that point.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use valocoach_core::CoachError;

/// Output from a tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The content returned by the tool (usually JSON).
    pub content: String,
    /// Whether the invocation resulted in an error.
    pub is_error: bool,
}

impl ToolOutput {
    /// Successful output carrying a JSON-serialized value.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, CoachError> {
        Ok(Self {
            content: serde_json::to_string(value).map_err(|e| {
                CoachError::Internal(format!("failed to serialize tool output: {e}"))
            })?,
            is_error: false,
        })
    }

    /// Error output with a message for the model.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: message.into(),
            is_error: true,
        }
    }
}

/// Unified trait for the agent's callable operations.
///
/// Every tool provides a name, description, JSON Schema for its parameters,
/// and an async `invoke` taking the parsed JSON input.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for lookup and serialization).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// JSON Schema describing the tool's input parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Invoke the tool with the given JSON input.
    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, CoachError>;
}

/// Registry of available tools, indexed by name.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registers a tool. The tool is indexed by its `name()`.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Returns (name, description) pairs for all registered tools, sorted.
    pub fn list(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .tools
            .values()
            .map(|t| (t.name(), t.description()))
            .collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }

    /// Returns provider-format tool definitions, sorted by name.
    ///
    /// Each definition has the shape
    /// `{"name": ..., "description": ..., "input_schema": {...}}`.
    pub fn tool_definitions(&self) -> Vec<serde_json::Value> {
        let mut defs: Vec<serde_json::Value> = self
            .tools
            .values()
            .map(|t| {
                serde_json::json!({
                    "name": t.name(),
                    "description": t.description(),
                    "input_schema": t.parameters_schema(),
                })
            })
            .collect();
        defs.sort_by(|a, b| {
            a["name"]
                .as_str()
                .unwrap_or("")
                .cmp(b["name"].as_str().unwrap_or(""))
        });
        defs
    }

    /// Returns the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MapPoolTool;

    #[async_trait]
    impl Tool for MapPoolTool {
        fn name(&self) -> &str {
            "map-pool"
        }

        fn description(&self) -> &str {
            "Lists the current competitive map pool"
        }

        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({"type": "object", "properties": {}})
        }

        async fn invoke(&self, _input: serde_json::Value) -> Result<ToolOutput, CoachError> {
            ToolOutput::json(&vec!["Ascent", "Bind", "Haven"])
        }
    }

    struct KdaTool;

    #[async_trait]
    impl Tool for KdaTool {
        fn name(&self) -> &str {
            "kda"
        }

        fn description(&self) -> &str {
            "Computes (kills + assists) / deaths"
        }

        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "kills": { "type": "number" },
                    "deaths": { "type": "number" },
                    "assists": { "type": "number" }
                },
                "required": ["kills", "deaths", "assists"]
            })
        }

        async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, CoachError> {
            let kills = input["kills"].as_f64().unwrap_or(0.0);
            let deaths = input["deaths"].as_f64().unwrap_or(0.0);
            let assists = input["assists"].as_f64().unwrap_or(0.0);
            if deaths == 0.0 {
                return Ok(ToolOutput::error("deaths must be non-zero"));
            }
            ToolOutput::json(&((kills + assists) / deaths))
        }
    }

    #[test]
    fn registry_registers_and_retrieves_tools() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(MapPoolTool));

        let tool = registry.get("map-pool");
        assert!(tool.is_some());
        assert_eq!(tool.unwrap().name(), "map-pool");
    }

    #[test]
    fn registry_returns_none_for_unknown_tools() {
        let registry = ToolRegistry::new();
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn list_is_sorted_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(MapPoolTool));
        registry.register(Arc::new(KdaTool));

        let list = registry.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].0, "kda");
        assert_eq!(list[1].0, "map-pool");
    }

    #[test]
    fn tool_definitions_produce_provider_format() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(KdaTool));

        let defs = registry.tool_definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0]["name"], "kda");
        assert_eq!(defs[0]["input_schema"]["type"], "object");
        assert!(defs[0]["input_schema"]["properties"]["kills"].is_object());
    }

    #[test]
    fn len_and_is_empty() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());
        registry.register(Arc::new(MapPoolTool));
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[tokio::test]
    async fn invoke_returns_json_content() {
        let output = KdaTool
            .invoke(serde_json::json!({"kills": 20.0, "deaths": 10.0, "assists": 10.0}))
            .await
            .unwrap();
        assert!(!output.is_error);
        assert_eq!(output.content, "3.0");
    }

    #[tokio::test]
    async fn invoke_surfaces_tool_level_errors() {
        let output = KdaTool
            .invoke(serde_json::json!({"kills": 1.0, "deaths": 0.0, "assists": 0.0}))
            .await
            .unwrap();
        assert!(output.is_error);
        assert!(output.content.contains("deaths"));
    }
}
