// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Generative Language API client for Valocoach.
//!
//! Two operations back the knowledge pipeline: [`GeminiClient::generate`]
//! produces coaching narratives from match JSON, and
//! [`GeminiClient::embed_batch`] turns chunk texts into 768-dimensional
//! vectors for the knowledge store.

pub mod client;
pub mod types;

pub use client::{EMBEDDING_DIM, GeminiClient};
