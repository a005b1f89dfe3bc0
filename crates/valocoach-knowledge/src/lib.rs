// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vector knowledge store for Valocoach.
//!
//! Documents are chunked to a bounded size, embedded in fixed-size batches
//! by the provider, and upserted with metadata tags into a named index.
//! Retrieval is cosine-similarity search over the index.

pub mod chunk;
pub mod document;
pub mod store;
pub mod types;

pub use chunk::{batch, chunk_text};
pub use document::{DocMetadata, DocType, KnowledgeDoc};
pub use store::KnowledgeStore;
pub use types::{ChunkEntry, ScoredChunk};
