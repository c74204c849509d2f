use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use matchplay::config::AppConfig;
use matchplay::stats::{compute_all_player_stats, compute_h2h_records, h2h_for_pair};
use matchplay::storage::{HistoryStore, StorageConfig};

#[derive(Parser)]
#[command(name = "matchplay")]
#[command(about = "Pairwise match-play golf scorer with handicaps and turbo holes")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List completed rounds
    History {
        /// Show at most this many rounds (most recent first)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Lifetime player leaderboard
    Stats,

    /// Head-to-head records
    H2h {
        /// First player name (shows all pairs when omitted)
        player_a: Option<String>,

        /// Second player name
        player_b: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let config_path = PathBuf::from(&cli.config);
    let config = if config_path.exists() {
        AppConfig::from_file(&config_path)?
    } else {
        AppConfig::default()
    };

    let data_dir = cli
        .data_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data_dir.clone());
    let store = HistoryStore::from_config(&StorageConfig::new(data_dir));

    match cli.command {
        Commands::History { limit } => {
            let mut records = store.read_all()?;
            records.sort_by_key(|r| std::cmp::Reverse(r.completed_at));
            if let Some(limit) = limit {
                records.truncate(limit);
            }

            if records.is_empty() {
                println!("No completed rounds yet.");
                return Ok(());
            }

            for record in &records {
                let standings: Vec<String> = record
                    .rankings
                    .iter()
                    .map(|r| format!("{} {:+}", r.player_name, r.total_score))
                    .collect();
                println!(
                    "{}  {} holes  winner: {}  [{}]",
                    record.completed_at.format("%Y-%m-%d %H:%M"),
                    record.number_of_holes,
                    record.winner_name,
                    standings.join(", ")
                );
            }
        }

        Commands::Stats => {
            let records = store.read_all()?;
            let stats = compute_all_player_stats(&records);

            if stats.is_empty() {
                println!("No completed rounds yet.");
                return Ok(());
            }

            println!(
                "{:<20} {:>6} {:>6} {:>9} {:>10}",
                "Player", "Games", "Wins", "Win rate", "Avg score"
            );
            for s in &stats {
                println!(
                    "{:<20} {:>6} {:>6} {:>8.0}% {:>10.1}",
                    s.display_name,
                    s.games_played,
                    s.wins,
                    s.win_rate * 100.0,
                    s.avg_score
                );
            }
        }

        Commands::H2h { player_a, player_b } => {
            let records = store.read_all()?;
            let h2h = compute_h2h_records(&records);

            match (player_a, player_b) {
                (Some(a), Some(b)) => match h2h_for_pair(&h2h, &a, &b) {
                    Some(rec) => println!(
                        "{} {}-{}-{} {} ({} games)",
                        rec.player_a_name,
                        rec.player_a_wins,
                        rec.ties,
                        rec.player_b_wins,
                        rec.player_b_name,
                        rec.games_played
                    ),
                    None => println!("No shared rounds between {} and {}.", a, b),
                },
                _ => {
                    if h2h.is_empty() {
                        println!("No completed rounds yet.");
                        return Ok(());
                    }
                    for rec in &h2h {
                        println!(
                            "{} {}-{}-{} {} ({} games)",
                            rec.player_a_name,
                            rec.player_a_wins,
                            rec.ties,
                            rec.player_b_wins,
                            rec.player_b_name,
                            rec.games_played
                        );
                    }
                }
            }
        }
    }

    Ok(())
}
