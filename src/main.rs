//! Cohort server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Loaded from `config.toml` (or `--config <path>`) with environment
//! variable overrides:
//! - `COHORT_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `COHORT_API_PORT`: Port to listen on (default: 8090)
//! - `COHORT_NOTIFICATION_TTL_MS`: Notification lifetime (default: 4000)
//! - `COHORT_SEED_DEMO_DATA`: Seed demo roster on startup (default: true)
//! - `COHORT_LOG_LEVEL` / `COHORT_LOG_FORMAT`: Logging overrides

use clap::{Parser, Subcommand};
use cohort::api::{serve, AppState};
use cohort::config::{generate_default_config, Config};
use cohort::notify::NotificationQueue;
use cohort::seed;
use cohort::store::RosterStore;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cohort")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Participant enrollment management service")]
pub struct Cli {
    /// Path to a config file (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the API server (default)
    Serve,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Commands::Config { output }) = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => std::fs::write(path, content)?,
            None => print!("{}", content),
        }
        return Ok(());
    }

    // Load configuration before logging so the log settings apply
    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_tracing(&config);

    tracing::info!("Starting Cohort server v{}", env!("CARGO_PKG_VERSION"));

    // Assemble the core components
    let roster = if config.seed.demo_data {
        tracing::info!("Seeding demo roster");
        RosterStore::with_records(seed::initial_participants())
    } else {
        RosterStore::new()
    };

    let notifications = Arc::new(NotificationQueue::with_ttl(Duration::from_millis(
        config.notifications.ttl_ms,
    )));

    let activities = if config.seed.demo_data {
        seed::initial_activities()
    } else {
        Vec::new()
    };

    tracing::info!(
        participants = roster.len().await,
        notification_ttl_ms = config.notifications.ttl_ms,
        "Core components initialized"
    );

    let state = AppState::new(
        roster,
        notifications,
        activities,
        seed::admin_profile(),
        config.api.clone(),
    );

    // Run server
    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Cohort server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "cohort={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
