use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;

use tabtrail_lib::{
    aggregate_resources_across_sessions, annotate_session, detect_candidates, group_activity_threads,
    search_by_keywords, search_semantic, EngineConfig, PageEvent, Session, SettingsStore,
};

#[derive(Parser)]
#[command(name = "tabtrail")]
#[command(version, about = "Search and project detection over exported browsing sessions")]
struct Args {
    /// Engine settings (JSON); defaults apply when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a query through the keyword and semantic layers
    Search {
        sessions: PathBuf,
        query: String,
        /// Overrides search.minScore
        #[arg(long)]
        min_score: Option<f64>,
    },
    /// Title, context and metrics per session
    Annotate { sessions: PathBuf },
    /// Aggregated resource identities
    Resources { sessions: PathBuf },
    /// Project candidates
    Candidates { sessions: PathBuf },
    /// Activity threads per session
    Threads { sessions: PathBuf },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchOutput<'a> {
    keyword: Vec<tabtrail_lib::KeywordMatchResult<'a>>,
    semantic: Vec<tabtrail_lib::SemanticMatchResult<'a>>,
}

fn main() -> Result<()> {
    tabtrail_lib::init_logging();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SettingsStore::new(path.clone())?.config()?,
        None => EngineConfig::default(),
    };

    match args.command {
        Command::Search {
            sessions,
            query,
            min_score,
        } => {
            let sessions = load_sessions(&sessions)?;
            let pages: Vec<PageEvent> = sessions.into_iter().flat_map(|s| s.pages).collect();
            let min_score = min_score.unwrap_or(config.search.min_score);
            print_json(&SearchOutput {
                keyword: search_by_keywords(&query, &pages),
                semantic: search_semantic(&query, &pages, min_score),
            })
        }
        Command::Annotate { sessions } => {
            let sessions = load_sessions(&sessions)?;
            let annotations: Vec<_> = sessions.iter().map(|s| annotate_session(s, &config)).collect();
            print_json(&annotations)
        }
        Command::Resources { sessions } => {
            let sessions = load_sessions(&sessions)?;
            print_json(&aggregate_resources_across_sessions(&sessions))
        }
        Command::Candidates { sessions } => {
            let sessions = load_sessions(&sessions)?;
            print_json(&detect_candidates(
                &sessions,
                Utc::now(),
                &config.resources,
                &config.candidates,
            ))
        }
        Command::Threads { sessions } => {
            let sessions = load_sessions(&sessions)?;
            let threads: Vec<_> = sessions
                .iter()
                .map(|s| {
                    (
                        s.id.as_str(),
                        group_activity_threads(s, &config.context, &config.threads, config.metrics.max_dwell_ms),
                    )
                })
                .collect();
            print_json(&threads)
        }
    }
}

fn load_sessions(path: &Path) -> Result<Vec<Session>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read sessions from {}", path.display()))?;
    let sessions: Vec<Session> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse sessions in {}", path.display()))?;
    log::info!("loaded {} sessions from {}", sessions.len(), path.display());
    Ok(sessions)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
