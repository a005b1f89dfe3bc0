// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool registry and conversational coach agent for Valocoach.
//!
//! The [`Tool`] trait and [`ToolRegistry`] define the agent's callable
//! operations: relational-store lookups, live stats-API fetches, Aim Lab
//! queries, and semantic knowledge search. A [`CoachAgent`] is constructed
//! with an explicit registry and a provider client.

pub mod agent;
pub mod tool;
pub mod tools;

pub use agent::{CoachAgent, DEFAULT_COACH_INSTRUCTIONS};
pub use tool::{Tool, ToolOutput, ToolRegistry};
pub use tools::build_coach_registry;
