use crate::diff::diff;
use crate::model::DeviceStatus;
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

/// How long changed rows stay flagged after a snapshot lands.
pub const HIGHLIGHT_TTL: Duration = Duration::from_millis(3000);

/// What the renderer reads: current row order plus the ids to flag.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub rows: Vec<DeviceStatus>,
    pub highlighted: HashSet<String>,
}

/// Consumes the ordered snapshot stream and publishes the derived view.
///
/// Snapshots are processed one at a time. The highlight-clear timer is a
/// single owned deadline: arming it for a new snapshot replaces any pending
/// one, so a stale clear can never fire early. Stops when the snapshot
/// channel closes; no state survives teardown.
pub async fn run_engine(
    mut snapshots: mpsc::Receiver<Vec<DeviceStatus>>,
    view: watch::Sender<ViewState>,
    ttl: Duration,
) {
    let mut previous: Vec<DeviceStatus> = Vec::new();
    let mut armed = false;

    let clear = sleep(ttl);
    tokio::pin!(clear);

    loop {
        tokio::select! {
            snapshot = snapshots.recv() => {
                let Some(snapshot) = snapshot else {
                    info!("Snapshot stream closed, stopping engine");
                    break;
                };

                let (rows, highlighted) = diff(&previous, snapshot);
                debug!("Snapshot: {} rows, {} highlighted", rows.len(), highlighted.len());

                previous = rows.clone();
                let _ = view.send(ViewState { rows, highlighted });

                clear.as_mut().reset(Instant::now() + ttl);
                armed = true;
            }
            _ = &mut clear, if armed => {
                armed = false;
                view.send_modify(|state| state.highlighted.clear());
            }
        }
    }
}
