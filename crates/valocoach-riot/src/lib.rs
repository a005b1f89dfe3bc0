// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed client for the HenrikDev Valorant stats API.
//!
//! Provides [`RiotClient`] for account, match, MMR, leaderboard, content,
//! status, store, esports, and queue-status endpoints. Responses are
//! validated against the declared types; the error envelope and non-2xx
//! statuses surface as [`valocoach_core::CoachError::Api`] errors.

pub mod client;
pub mod types;

pub use client::{LeaderboardQuery, MatchesFilter, RiotClient};
pub use types::{Account, Match, MatchKill, MatchPlayer, MatchRoundData, MatchTeam};
