//! Main entry point for the mars-stats report tool
//!
//! Loads a match history JSON document, replays it through the rating
//! engine, runs the aggregation pass over the (optionally filtered) list
//! and prints the summary tables.

use anyhow::Result;
use clap::Parser;
use mars_stats::config::AppConfig;
use mars_stats::rating::{PairwiseEloEngine, RatingOutcome};
use mars_stats::source::{
    convert_legacy_games, FileMatchSource, LegacyGameExport, MatchSource,
};
use mars_stats::stats::{aggregate, filter_matches, sorted_entries, AggregateReport, SortKey};
use mars_stats::types::MatchRecord;
use mars_stats::utils::{format_duration, format_percent, format_timestamp};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{info, warn};

/// Mars Stats - match history ratings and aggregate statistics
#[derive(Parser)]
#[command(
    name = "mars-stats",
    version,
    about = "Derive Elo-style ratings and aggregate statistics from a match history",
    long_about = "Replays a history of completed multiplayer board-game matches to derive \
                 comparative skill ratings per player, plus win rates, pick rates and average \
                 game length per corporation, card, milestone and award."
)]
struct Args {
    /// Path to the match history JSON document
    #[arg(value_name = "HISTORY", help = "Match history JSON file")]
    history: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (TOML format)")]
    config: Option<PathBuf>,

    /// Legacy-format export array to append after conversion
    #[arg(long, value_name = "FILE", help = "Legacy game export JSON array")]
    legacy: Option<PathBuf>,

    /// Restrict aggregation to matches including these players (repeatable)
    #[arg(short, long = "player", value_name = "NAME")]
    players: Vec<String>,

    /// Sort key for the aggregate tables
    #[arg(short, long, value_name = "KEY", default_value = "played")]
    sort: SortKey,

    /// Number of rows to show per table
    #[arg(short, long, value_name = "N", default_value_t = 20)]
    top: usize,

    /// Log level override
    #[arg(short, long, value_name = "LEVEL", help = "Override log level")]
    log_level: Option<String>,

    /// Validate configuration and exit without producing a report
    #[arg(long)]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file, environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if let Some(history) = &args.history {
        config.source.history_path = Some(history.clone());
    }
    if let Some(legacy) = &args.legacy {
        config.source.legacy_path = Some(legacy.clone());
    }

    Ok(config)
}

/// Read and convert an optional legacy export file.
async fn load_legacy_matches(path: &std::path::Path) -> Result<Vec<MatchRecord>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let exports: Vec<LegacyGameExport> = serde_json::from_str(&raw)?;
    let converted = convert_legacy_games(&exports);
    info!(
        count = converted.len(),
        path = %path.display(),
        "converted legacy games"
    );
    Ok(converted)
}

fn print_games(outcome: &RatingOutcome) {
    println!("\nGames");
    println!(
        "{:<17} {:>8} {:<10} {:>4}  Result",
        "Time", "Duration", "Map", "Gens"
    );
    // Newest first for display; the replay itself ran oldest first
    for rated in outcome.matches.iter().rev() {
        let record = &rated.record;
        let result = rated
            .seats
            .iter()
            .zip(record.players.iter())
            .map(|(seat, player)| {
                format!(
                    "{} [{}] {} ({:+.1})",
                    seat.name,
                    player.corp,
                    player.score,
                    seat.delta
                )
            })
            .collect::<Vec<_>>()
            .join("  vs  ");

        println!(
            "{:<17} {:>8} {:<10} {:>4}  {}",
            format_timestamp(record.created_time_ms),
            format_duration(record.duration_ms),
            record.map,
            record.generations,
            result
        );
    }
}

fn print_ratings(outcome: &RatingOutcome, report: &AggregateReport) {
    println!("\nRatings");
    println!("{:<20} {:>7} {:>6} {:>5}", "Player", "Rating", "Games", "Wins");
    for (name, rating) in outcome.standings() {
        let (games, wins) = report
            .players
            .get(name)
            .map(|b| (b.games, b.wins))
            .unwrap_or((0, 0));
        // Display-time rounding; the engine itself never rounds
        println!("{:<20} {:>7.0} {:>6} {:>5}", name, rating.round(), games, wins);
    }
}

fn print_table(
    title: &str,
    table: &mars_stats::stats::TallyTable,
    sort: SortKey,
    top: usize,
    total_matches: usize,
) {
    println!("\n{}", title);
    println!(
        "{:<30} {:>6} {:>7} {:>7} {:>9}",
        "Name", "Played", "Win%", "Pick%", "Avg gens"
    );
    for (name, tally) in sorted_entries(table, sort).into_iter().take(top) {
        println!(
            "{:<30} {:>6} {:>7} {:>7} {:>9}",
            name,
            tally.played,
            format_percent(tally.win_rate()),
            format_percent(tally.pick_rate(total_matches)),
            tally
                .average_generations()
                .map(|g| format!("{:.1}", g))
                .unwrap_or_else(|| "-".to_string()),
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("Configuration validation successful");
        return Ok(());
    }

    let history_path = match &config.source.history_path {
        Some(path) => path.clone(),
        None => {
            eprintln!("No match history given; pass a file path or set HISTORY_PATH");
            std::process::exit(2);
        }
    };

    // The source is awaited exactly once; everything after this is a pure
    // in-memory computation.
    let source = FileMatchSource::new(&history_path);
    let mut history = source.fetch_matches().await?;

    if let Some(legacy_path) = &config.source.legacy_path {
        match load_legacy_matches(legacy_path).await {
            // Legacy games predate everything else, so they go at the
            // newest-first list's tail
            Ok(mut converted) => history.append(&mut converted),
            Err(e) => warn!(error = %e, "ignoring unreadable legacy export"),
        }
    }

    // Ratings are a global historical quantity: always the full history
    let engine = PairwiseEloEngine::new(config.rating.clone().into())?;
    let outcome = engine.replay(&history);

    // Aggregation respects the player filter
    let selected: HashSet<String> = args.players.iter().map(|p| p.trim().to_string()).collect();
    let filtered = filter_matches(&history, &selected);
    let report = aggregate(&filtered);

    info!(
        matches = history.len(),
        filtered = filtered.len(),
        players = outcome.ratings.len(),
        "report ready"
    );

    print_games(&outcome);
    print_ratings(&outcome, &report);
    print_table("Corps", &report.corps, args.sort, args.top, report.total_matches);
    print_table("Cards", &report.cards, args.sort, args.top, report.total_matches);
    print_table(
        "Milestones",
        &report.milestones,
        args.sort,
        args.top,
        report.total_matches,
    );
    print_table("Awards", &report.awards, args.sort, args.top, report.total_matches);

    Ok(())
}
