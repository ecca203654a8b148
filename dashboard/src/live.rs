use crate::model::DeviceStatus;
use appsync::AppSync;
use serde_json::json;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// Query used to emulate the live-query channel: the complete current
/// result set is fetched each cycle and forwarded wholesale when it
/// changed. Deltas are never delivered.
const LIST_DEVICE_STATUSES: &str = r#"
  query ListDeviceStatuses($limit: Int) {
    listDeviceStatuses(limit: $limit) {
      items {
        id
        device_Id
        humidity
        temperature
        voltage
        last_updated
        status_code
        status_description
        status_state
        createdAt
        updatedAt
      }
    }
  }
"#;

const PAGE_LIMIT: u32 = 1000;

/// Polls the API on a fixed cadence and pushes full snapshots downstream.
/// Poll failures are logged and the next cycle tries again; there is no
/// separate reconnect path.
pub async fn run_live_query(
    client: AppSync,
    poll_interval: Duration,
    snapshots: mpsc::Sender<Vec<DeviceStatus>>,
) {
    info!("Starting live query, polling every {:?}", poll_interval);

    let mut ticker = tokio::time::interval(poll_interval);
    let mut last: Option<Vec<DeviceStatus>> = None;

    loop {
        ticker.tick().await;

        let items = match fetch(&client).await {
            Ok(items) => items,
            Err(e) => {
                error!("Live query poll failed: {}", e);
                continue;
            }
        };

        if last.as_ref() == Some(&items) {
            continue;
        }

        debug!("Delivering snapshot with {} records", items.len());
        last = Some(items.clone());
        if snapshots.send(items).await.is_err() {
            info!("Snapshot consumer gone, stopping live query");
            break;
        }
    }
}

async fn fetch(client: &AppSync) -> appsync::Result<Vec<DeviceStatus>> {
    let response = client
        .post(LIST_DEVICE_STATUSES, json!({ "limit": PAGE_LIMIT }))
        .await?;

    let items = response["data"]["listDeviceStatuses"]["items"].clone();
    Ok(serde_json::from_value(items)?)
}
