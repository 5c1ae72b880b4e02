use anyhow::Result;
use clap::{Parser, Subcommand};
use queueboard::{analyze, init_logging, serve, AnalysisOptions, AppState, TierStrategy};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "queueboard")]
#[command(about = "Queue position analytics API server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        #[arg(short, long, default_value = "50001")]
        port: u16,

        #[arg(short = 'b', long, default_value = "127.0.0.1")]
        host: String,

        /// Path to the position snapshot file
        #[arg(short, long, default_value = "snapshots/positions.json")]
        snapshot: PathBuf,
    },
    /// Analyze one event from a snapshot and print the result as JSON
    Analyze {
        /// Path to the position snapshot file
        #[arg(short, long, default_value = "snapshots/positions.json")]
        snapshot: PathBuf,

        /// Event id to analyze
        #[arg(short, long)]
        event: String,

        /// Tier detection strategy: gap or jenks
        #[arg(long, default_value = "gap")]
        strategy: TierStrategy,

        #[arg(long)]
        max_tiers: Option<usize>,

        #[arg(long)]
        bucket_count: Option<usize>,

        #[arg(long)]
        max_points: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse command line arguments
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    match cli.command {
        Commands::Serve {
            port,
            host,
            snapshot,
        } => {
            let state = AppState::load(&snapshot)
                .map_err(|e| anyhow::anyhow!("Failed to load snapshot: {}", e))?;

            info!("Starting API server using snapshot {:?}", snapshot);
            serve(host, port, state).await?;
        }
        Commands::Analyze {
            snapshot,
            event,
            strategy,
            max_tiers,
            bucket_count,
            max_points,
        } => {
            let state = AppState::load(&snapshot)
                .map_err(|e| anyhow::anyhow!("Failed to load snapshot: {}", e))?;

            let event = state
                .event(&event)
                .ok_or_else(|| anyhow::anyhow!("Unknown event id: {}", event))?;

            let defaults = AnalysisOptions::default();
            let options = AnalysisOptions {
                strategy,
                max_tiers: max_tiers.unwrap_or(defaults.max_tiers),
                bucket_count: bucket_count.unwrap_or(defaults.bucket_count),
                max_points: max_points.unwrap_or(defaults.max_points),
            };

            info!(
                "Analyzing event {} with {} strategy",
                event.event_id, options.strategy
            );

            let result = analyze(&event.positions, &event.excluded_positions, &options);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
