mod diff;
mod engine;
mod live;
mod model;
mod render;

use appsync::{AppSync, AppSyncConfig, Credentials};
use clap::Parser;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::{error, info};

/// Terminal dashboard following the DeviceStatus table: full snapshots come
/// in through a signed live query, recently changed rows are flagged for a
/// few seconds.
#[derive(Debug, Parser)]
struct Args {
    /// AppSync GraphQL endpoint URL
    #[arg(long, env = "APPSYNC_ENDPOINT")]
    endpoint: String,

    /// AWS region the API lives in
    #[arg(long, env = "REGION", default_value = appsync::config::DEFAULT_REGION)]
    region: String,

    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    access_key_id: String,

    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    secret_access_key: String,

    #[arg(long, env = "AWS_SESSION_TOKEN", hide_env_values = true)]
    session_token: Option<String>,

    /// Live query poll interval in milliseconds
    #[arg(long, env = "POLL_INTERVAL_MS", default_value = "1000")]
    poll_interval_ms: u64,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting device status dashboard");

    let credentials = Credentials {
        access_key_id: args.access_key_id,
        secret_access_key: args.secret_access_key,
        session_token: args.session_token,
    };
    let config = match AppSyncConfig::new(&args.endpoint, args.region, credentials) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let (snapshot_tx, snapshot_rx) = mpsc::channel(16);
    let (view_tx, mut view_rx) = watch::channel(engine::ViewState::default());

    let live_handle = tokio::spawn(live::run_live_query(
        AppSync::new(config),
        Duration::from_millis(args.poll_interval_ms),
        snapshot_tx,
    ));
    let engine_handle = tokio::spawn(engine::run_engine(
        snapshot_rx,
        view_tx,
        engine::HIGHLIGHT_TTL,
    ));

    let render_handle = tokio::spawn(async move {
        while view_rx.changed().await.is_ok() {
            let view = view_rx.borrow().clone();
            // Clear the screen and redraw from the top.
            print!("\x1b[2J\x1b[H{}", render::format_table(&view));
        }
    });

    tokio::select! {
        _ = live_handle => error!("Live query task terminated"),
        _ = engine_handle => error!("Engine task terminated"),
        _ = render_handle => error!("Render task terminated"),
        _ = tokio::signal::ctrl_c() => info!("Received shutdown signal"),
    }

    info!("Shutting down");
}
