mod errors;
mod graphql;
mod handler;
mod reading;
mod validate;

use clap::Parser;
use std::time::Duration;
use tracing::{error, info};

/// Pushes one randomized DeviceStatus reading into the AppSync API per
/// invocation. Scheduling is the caller's job; with --interval-ms set the
/// process stands in for the scheduler and fires independent invocations on
/// a fixed cadence.
#[derive(Debug, Parser)]
struct Args {
    /// AppSync GraphQL endpoint URL
    #[arg(long, env = "APPSYNC_ENDPOINT")]
    endpoint: Option<String>,

    /// AWS region the API lives in
    #[arg(long, env = "REGION", default_value = appsync::config::DEFAULT_REGION)]
    region: String,

    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    access_key_id: Option<String>,

    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    secret_access_key: Option<String>,

    #[arg(long, env = "AWS_SESSION_TOKEN", hide_env_values = true)]
    session_token: Option<String>,

    /// Report repeatedly on this interval instead of once
    #[arg(long, env = "INTERVAL_MS")]
    interval_ms: Option<u64>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let ctx = handler::Context {
        endpoint: args.endpoint,
        region: args.region,
        access_key_id: args.access_key_id,
        secret_access_key: args.secret_access_key,
        session_token: args.session_token,
    };

    match args.interval_ms {
        None => {
            emit(&handler::handle(&ctx).await);
        }
        Some(interval_ms) => {
            info!("Starting device reporter, one reading every {}ms", interval_ms);

            let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms));
            loop {
                ticker.tick().await;
                emit(&handler::handle(&ctx).await);
            }
        }
    }
}

fn emit(response: &handler::Response) {
    match serde_json::to_string(response) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialize response: {}", e),
    }
}
