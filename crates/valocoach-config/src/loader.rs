// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./valocoach.toml` > `~/.config/valocoach/valocoach.toml`
//! > `/etc/valocoach/valocoach.toml` with environment variable overrides via
//! `VALOCOACH_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::ValocoachConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/valocoach/valocoach.toml` (system-wide)
/// 3. `~/.config/valocoach/valocoach.toml` (user XDG config)
/// 4. `./valocoach.toml` (local directory)
/// 5. `VALOCOACH_*` environment variables
pub fn load_config() -> Result<ValocoachConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ValocoachConfig::default()))
        .merge(Toml::file("/etc/valocoach/valocoach.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("valocoach/valocoach.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("valocoach.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<ValocoachConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ValocoachConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ValocoachConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ValocoachConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `VALOCOACH_RIOT_API_KEY`
/// must map to `riot.api_key`, not `riot.api.key`.
fn env_provider() -> Env {
    Env::prefixed("VALOCOACH_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: VALOCOACH_RIOT_API_KEY -> "riot_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("riot_", "riot.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("knowledge_", "knowledge.", 1)
            .replacen("ingest_", "ingest.", 1);
        mapped.into()
    })
}
