// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common domain types shared across the Valocoach workspace.
//!
//! The enum string forms match the upstream API's URL path and query
//! parameter values exactly (lowercase).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Valorant shard the player's account lives on.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Eu,
    Na,
    #[default]
    Ap,
    Kr,
}

/// Platform the matches were played on.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Pc,
    Console,
}

/// Queue the match was played in. Values mirror the upstream `mode` filter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Competitive,
    Custom,
    Deathmatch,
    Ggteam,
    Hurm,
    Newmap,
    Onefa,
    Snowball,
    Spikerush,
    Swiftplay,
    Unrated,
}
