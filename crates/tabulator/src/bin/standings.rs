use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scoring::{
    JsonFileSource, SnapshotSource, compute_leaderboard,
    dto::leaderboard::LeaderboardResponse,
    models::{Category, Snapshot},
};
use tabulator::{SnapshotValidator, render_standings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "standings")]
#[command(about = "Team competition leaderboard calculator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a snapshot and print the standings
    Show {
        #[arg(env = "STANDINGS_FILE")]
        file: PathBuf,

        #[arg(short, long)]
        category: Option<Category>,

        #[arg(long)]
        json: bool,
    },
    /// Check a snapshot for data-entry problems
    Validate {
        #[arg(env = "STANDINGS_FILE")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "standings={},tabulator={},scoring={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Show {
            file,
            category,
            json,
        } => {
            handle_show(file, category, json).await?;
        }
        Commands::Validate { file } => {
            handle_validate(file).await?;
        }
    }

    Ok(())
}

async fn load_snapshot(file: PathBuf) -> Result<Snapshot, Box<dyn std::error::Error>> {
    tracing::info!("Loading snapshot from: {}", file.display());

    let source = JsonFileSource::new(file);
    let snapshot = source.snapshot().await?;

    tracing::info!(
        "Loaded {} teams and {} results",
        snapshot.teams.len(),
        snapshot.results.len()
    );
    Ok(snapshot)
}

async fn handle_show(
    file: PathBuf,
    category: Option<Category>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = load_snapshot(file).await?;

    let report = SnapshotValidator::inspect(&snapshot);
    for error in &report.errors {
        tracing::warn!("{}", error);
    }
    report.log_warnings();

    let mut standings = compute_leaderboard(&snapshot.teams, &snapshot.results);

    if json {
        if let Some(wanted) = category {
            standings.retain(|category, _| *category == wanted);
        }
        let response = LeaderboardResponse::from_standings(snapshot.version, &standings);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_standings(&standings, category));
    }

    Ok(())
}

async fn handle_validate(file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = load_snapshot(file).await?;

    tracing::info!("Validating snapshot...");
    let report = SnapshotValidator::validate(&snapshot)?;
    report.log_warnings();

    tracing::info!(
        "✓ Validation successful ({} warning(s))",
        report.warnings.len()
    );

    Ok(())
}
