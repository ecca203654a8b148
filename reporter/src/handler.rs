use crate::errors::{Error, Result};
use crate::graphql;
use crate::reading::DeviceReading;
use crate::validate::validate;
use appsync::{AppSync, AppSyncConfig, Credentials};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info};

/// Configuration handed to the handler by the caller. Endpoint and
/// credentials stay optional here so a missing value surfaces as a
/// structured failure response, not a startup panic.
#[derive(Debug, Clone)]
pub struct Context {
    pub endpoint: Option<String>,
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
}

/// Response envelope returned for every invocation.
#[derive(Debug, Serialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: Value,
}

/// Generates one synthetic reading and submits it through a signed
/// mutation. Every failure collapses into a 500 envelope carrying the error
/// message; nothing is re-thrown and nothing is retried.
pub async fn handle(ctx: &Context) -> Response {
    match submit(ctx).await {
        Ok(body) => Response {
            status_code: 200,
            body,
        },
        Err(e) => {
            error!("Report failed: {}", e);
            Response {
                status_code: 500,
                body: json!({ "error": e.to_string() }),
            }
        }
    }
}

async fn submit(ctx: &Context) -> Result<Value> {
    let endpoint = ctx.endpoint.as_deref().ok_or_else(|| {
        Error::Config("APPSYNC_ENDPOINT environment variable is not set".to_string())
    })?;
    let credentials = Credentials::from_parts(
        ctx.access_key_id.clone(),
        ctx.secret_access_key.clone(),
        ctx.session_token.clone(),
    )?;
    let config = AppSyncConfig::new(endpoint, ctx.region.clone(), credentials)?;

    let reading = DeviceReading::random(&mut rand::thread_rng());
    validate(&reading)?;

    info!(
        "Submitting reading for {}: {}C {}% {}V",
        reading.device_id, reading.temperature, reading.humidity, reading.voltage
    );

    let client = AppSync::new(config);
    let body = client
        .post(graphql::CREATE_DEVICE_STATUS, json!({ "input": reading }))
        .await?;

    Ok(body)
}
