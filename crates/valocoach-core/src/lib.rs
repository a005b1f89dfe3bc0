// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Valocoach coaching backend.
//!
//! This crate provides the error taxonomy and the shared domain types
//! (region, platform, game mode) used throughout the Valocoach workspace.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::CoachError;
pub use types::{GameMode, Platform, Region};
