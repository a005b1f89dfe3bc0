// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The "save all matches" variant of the ingestion pipeline.
//!
//! Repeats the page fetch in a loop, advancing the start offset by the
//! number of matches each page returned, and stops on the first empty
//! page. A fixed delay between pages keeps the run under the upstream's
//! ~30 requests/minute budget; this delay is the only timing control in
//! the system and is not error-driven.

use std::time::Duration;

use tracing::{debug, info};
use valocoach_core::{CoachError, GameMode, Platform, Region};
use valocoach_riot::MatchesFilter;

use crate::context::PipelineDeps;
use crate::save_match::{ingest_match, resolve_player};

/// Inputs for a save-all run.
#[derive(Debug, Clone)]
pub struct SaveAllParams {
    pub name: String,
    pub tag: String,
    pub region: Region,
    pub platform: Platform,
    pub mode: Option<GameMode>,
}

/// Counts reported at the end of a save-all run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveAllReport {
    /// Total matches ingested across all pages.
    pub total_processed: u32,
    /// Pages fetched, including the final empty one.
    pub pages_fetched: u32,
}

/// Ingest the player's entire match history, page by page.
pub async fn run_save_all(
    deps: &PipelineDeps,
    params: &SaveAllParams,
) -> Result<SaveAllReport, CoachError> {
    let player = resolve_player(deps, &params.name, &params.tag).await?;

    let page_size = deps.ingest.page_size;
    let page_delay = Duration::from_millis(deps.ingest.page_delay_ms);
    let mut start = 0u32;
    let mut total_processed = 0u32;
    let mut pages_fetched = 0u32;

    loop {
        let filter = MatchesFilter {
            mode: params.mode,
            size: Some(page_size),
            start: Some(start),
        };
        let page = deps
            .riot
            .get_matches_by_puuid(&player.puuid, params.region, params.platform, &filter)
            .await?;
        pages_fetched += 1;
        debug!(start, page_len = page.len(), "fetched match page");

        if page.is_empty() {
            break;
        }

        for m in &page {
            ingest_match(&deps.store, &player, m).await?;
            total_processed += 1;
        }
        start += page.len() as u32;

        tokio::time::sleep(page_delay).await;
    }

    info!(
        name = %params.name,
        tag = %params.tag,
        total_processed,
        pages_fetched,
        "save-all run complete"
    );
    Ok(SaveAllReport {
        total_processed,
        pages_fetched,
    })
}
