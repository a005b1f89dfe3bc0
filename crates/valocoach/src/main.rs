// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Valocoach - an AI coaching backend for Valorant.
//!
//! This binary wires configuration into one client/store instance per
//! process and drives the pipelines and the coach agent from the command
//! line.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::warn;

use valocoach_agent::{CoachAgent, DEFAULT_COACH_INSTRUCTIONS, build_coach_registry};
use valocoach_aimlab::AimlabClient;
use valocoach_config::ValocoachConfig;
use valocoach_core::{CoachError, GameMode, Platform, Region};
use valocoach_gemini::GeminiClient;
use valocoach_knowledge::KnowledgeStore;
use valocoach_pipeline::{
    PipelineDeps, SaveAllParams, SaveKnowledgeParams, SaveMatchParams, run_save_all,
    run_save_knowledge, run_save_match, run_save_research,
};
use valocoach_riot::RiotClient;
use valocoach_storage::MatchStore;

/// Valocoach - an AI coaching backend for Valorant.
#[derive(Parser, Debug)]
#[command(name = "valocoach", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Ingest a page of recent matches into the relational store.
    SaveMatch {
        #[arg(long)]
        name: String,
        #[arg(long)]
        tag: String,
        #[arg(long)]
        region: Option<Region>,
        #[arg(long)]
        platform: Option<Platform>,
        #[arg(long)]
        mode: Option<GameMode>,
        /// Matches per page, 1..=10.
        #[arg(long)]
        size: Option<u32>,
        /// Page offset.
        #[arg(long)]
        start: Option<u32>,
    },
    /// Ingest the entire match history, page by page.
    SaveAll {
        #[arg(long)]
        name: String,
        #[arg(long)]
        tag: String,
        #[arg(long)]
        region: Option<Region>,
        #[arg(long)]
        platform: Option<Platform>,
        #[arg(long)]
        mode: Option<GameMode>,
    },
    /// Generate coaching narratives for recent matches and embed them
    /// into the knowledge index.
    SaveKnowledge {
        #[arg(long)]
        name: String,
        #[arg(long)]
        tag: String,
        #[arg(long)]
        region: Option<Region>,
        #[arg(long)]
        platform: Option<Platform>,
        #[arg(long)]
        mode: Option<GameMode>,
        /// Matches to analyze, 1..=10.
        #[arg(long)]
        size: Option<u32>,
    },
    /// Embed free-text research documents into the knowledge index.
    Research {
        /// Topic tag stored with every chunk.
        #[arg(long)]
        topic: String,
        /// Text files to embed.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Ask the coach agent a question.
    Ask {
        /// The question or request for the coach.
        message: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match valocoach_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            valocoach_config::render_errors(&errors);
            std::process::exit(1);
        }
    };
    init_tracing(&config.agent.log_level);

    if let Err(err) = run(cli, config).await {
        eprintln!("valocoach: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn build_deps(config: &ValocoachConfig) -> Result<PipelineDeps, CoachError> {
    Ok(PipelineDeps {
        riot: Arc::new(RiotClient::new(config.riot.api_key.clone())?),
        store: Arc::new(MatchStore::open(&config.storage.database_path).await?),
        gemini: Arc::new(GeminiClient::new(
            config.gemini.api_key.clone(),
            config.gemini.model.clone(),
            config.gemini.embed_model.clone(),
        )?),
        knowledge: Arc::new(KnowledgeStore::open(&config.knowledge.database_path).await?),
        ingest: config.ingest.clone(),
        knowledge_cfg: config.knowledge.clone(),
    })
}

/// Resolve the agent persona: file takes precedence over the inline
/// string, which takes precedence over the built-in default.
fn resolve_instructions(config: &ValocoachConfig) -> String {
    if let Some(path) = &config.agent.system_prompt_file {
        match std::fs::read_to_string(path) {
            Ok(contents) => return contents,
            Err(e) => warn!(path = %path, error = %e, "failed to read system prompt file, falling back"),
        }
    }
    config
        .agent
        .system_prompt
        .clone()
        .unwrap_or_else(|| DEFAULT_COACH_INSTRUCTIONS.to_string())
}

async fn run(cli: Cli, config: ValocoachConfig) -> Result<(), CoachError> {
    let deps = build_deps(&config).await?;

    match cli.command {
        Commands::SaveMatch {
            name,
            tag,
            region,
            platform,
            mode,
            size,
            start,
        } => {
            let report = run_save_match(
                &deps,
                &SaveMatchParams {
                    name,
                    tag,
                    region: region.unwrap_or(config.riot.region),
                    platform: platform.unwrap_or(config.riot.platform),
                    mode,
                    size,
                    start,
                },
            )
            .await?;
            println!(
                "requested {} match(es), processed {}",
                report.request_size, report.process_size
            );
        }
        Commands::SaveAll {
            name,
            tag,
            region,
            platform,
            mode,
        } => {
            let report = run_save_all(
                &deps,
                &SaveAllParams {
                    name,
                    tag,
                    region: region.unwrap_or(config.riot.region),
                    platform: platform.unwrap_or(config.riot.platform),
                    mode,
                },
            )
            .await?;
            println!(
                "processed {} match(es) across {} page(s)",
                report.total_processed, report.pages_fetched
            );
        }
        Commands::SaveKnowledge {
            name,
            tag,
            region,
            platform,
            mode,
            size,
        } => {
            let report = run_save_knowledge(
                &deps,
                &SaveKnowledgeParams {
                    name,
                    tag,
                    region: region.unwrap_or(config.riot.region),
                    platform: platform.unwrap_or(config.riot.platform),
                    mode: mode.unwrap_or_default(),
                    size,
                },
            )
            .await?;
            println!(
                "analyzed {} match(es), embedded {} chunk(s)",
                report.matches_processed, report.chunks_written
            );
        }
        Commands::Research { topic, files } => {
            let mut documents = Vec::with_capacity(files.len());
            for file in &files {
                let text = std::fs::read_to_string(file).map_err(|e| {
                    CoachError::Config(format!("cannot read {}: {e}", file.display()))
                })?;
                documents.push(text);
            }
            let written = run_save_research(&deps, &topic, &documents).await?;
            println!("embedded {written} chunk(s) under topic `{topic}`");
        }
        Commands::Ask { message } => {
            let registry = build_coach_registry(
                deps.store.clone(),
                deps.riot.clone(),
                Arc::new(AimlabClient::new()?),
                deps.gemini.clone(),
                deps.knowledge.clone(),
                &config.knowledge.index,
            );
            let agent = CoachAgent::new(
                config.agent.name.clone(),
                resolve_instructions(&config),
                deps.gemini.clone(),
                registry,
            );
            let reply = agent.generate(&message).await?;
            println!("{reply}");
        }
    }

    deps.store.close().await?;
    Ok(())
}
