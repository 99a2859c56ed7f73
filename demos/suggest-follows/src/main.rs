//! Loads a roster, its memories and its follow edges, then prints follow suggestions.

use std::path::PathBuf;
use std::sync::Arc;

use agent_memory::{LocalMemoryStore, MemorySnapshot};
use agent_primitives::{Agent, AgentRoster};
use agent_social::{CandidateRanker, RankerConfig, SimilarityScorer, SocialNetwork};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "suggest-follows", about = "Suggest agents to follow by memory similarity")]
struct Args {
    /// Roster of agent names, in ranking tie-break order.
    #[arg(
        long,
        env = "SUGGEST_AGENTS",
        value_delimiter = ',',
        default_value = "Alice,Bob,Carol,Dave,Eve"
    )]
    agents: Vec<String>,

    /// JSON memory snapshot with `short_term` and `long_term` record lists.
    #[arg(long, env = "SUGGEST_MEMORY")]
    memory: Option<PathBuf>,

    /// CSV file with `Agent` and `Followed Agent` columns.
    #[arg(long, env = "SUGGEST_FOLLOWS")]
    follows: Option<PathBuf>,

    /// Only print suggestions for this agent.
    #[arg(long)]
    agent: Option<String>,

    /// What to do with unscored candidates: `keep-last` or `drop`.
    #[arg(long, default_value = "keep-last")]
    nan_policy: String,

    /// Maximum suggestions per agent; 0 means unlimited.
    #[arg(long, default_value_t = 0)]
    limit: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();

    let roster = AgentRoster::from_names(args.agents.iter().map(|name| name.trim().to_owned()))
        .context("invalid roster")?;
    let config = RankerConfig::from_parts(&args.nan_policy, args.limit)?;

    let store = match &args.memory {
        Some(path) => {
            let snapshot = MemorySnapshot::load(path)
                .await
                .with_context(|| format!("cannot load memory snapshot {}", path.display()))?;
            LocalMemoryStore::from_snapshot(snapshot)
        }
        None => {
            warn!("no memory snapshot given; every score will be NaN");
            LocalMemoryStore::new()
        }
    };

    let ranker = CandidateRanker::with_config(SimilarityScorer::new(Arc::new(store)), config);
    let mut network = SocialNetwork::new(roster, ranker);

    if let Some(path) = &args.follows {
        let report = network
            .import_follows_from_path(path)
            .with_context(|| format!("cannot import follows from {}", path.display()))?;
        if !report.is_clean() {
            warn!(skipped = report.skipped.len(), "some follow rows were skipped");
        }
    }

    info!("--- Follow graph ---");
    for line in network.graph().describe().lines() {
        info!("{line}");
    }

    let targets: Vec<Agent> = match &args.agent {
        Some(name) => vec![network.lookup(name)?.clone()],
        None => network.roster().iter().cloned().collect(),
    };

    for agent in &targets {
        info!("--- Suggestions for {} ---", agent.name());
        let suggestions = network.suggestions_for(agent).await?;
        if suggestions.is_empty() {
            info!("(none)");
        }
        for (rank, candidate) in suggestions.iter().enumerate() {
            info!(
                "{}. {} ({:.3})",
                rank + 1,
                candidate.agent().name(),
                candidate.similarity()
            );
        }
    }

    Ok(())
}
