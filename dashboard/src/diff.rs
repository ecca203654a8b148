use crate::model::DeviceStatus;
use std::collections::HashSet;

/// Computes the next table state from a freshly delivered full snapshot.
///
/// Returns the snapshot sorted newest-first together with the set of row
/// ids to flag: every row on the very first snapshot (cold start), and
/// afterwards exactly the rows that are new or whose watched fields differ
/// from the last known values. Rows that vanished from the snapshot simply
/// disappear.
pub fn diff(
    previous: &[DeviceStatus],
    mut incoming: Vec<DeviceStatus>,
) -> (Vec<DeviceStatus>, HashSet<String>) {
    // Stable sort keeps arrival order for equal timestamps.
    incoming.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let highlighted = if previous.is_empty() {
        incoming.iter().map(|row| row.id.clone()).collect()
    } else {
        incoming
            .iter()
            .filter(|row| {
                !previous
                    .iter()
                    .any(|prev| prev.id == row.id && watched_fields_equal(prev, row))
            })
            .map(|row| row.id.clone())
            .collect()
    };

    (incoming, highlighted)
}

/// The watched set: temperature, humidity, status_state. Changes to any
/// other field never trigger a highlight.
fn watched_fields_equal(prev: &DeviceStatus, next: &DeviceStatus) -> bool {
    prev.temperature == next.temperature
        && prev.humidity == next.humidity
        && prev.status_state == next.status_state
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn status(id: &str, created_at: &str, temperature: f64, state: &str) -> DeviceStatus {
        let created_at: DateTime<Utc> = created_at.parse().unwrap();
        DeviceStatus {
            id: id.to_string(),
            device_id: Some(format!("device_{}", id)),
            status_code: Some("200".to_string()),
            status_description: Some("Normal operation".to_string()),
            status_state: Some(state.to_string()),
            temperature: Some(temperature),
            humidity: Some(50.0),
            voltage: Some("12.0".to_string()),
            last_updated: Some(created_at.to_rfc3339()),
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_first_snapshot_highlights_everything() {
        let snapshot = vec![
            status("1", "2024-05-01T00:00:01Z", 20.0, "NORMAL"),
            status("2", "2024-05-01T00:00:02Z", 21.0, "NORMAL"),
        ];

        let (rows, highlighted) = diff(&[], snapshot);

        assert_eq!(rows.len(), 2);
        assert_eq!(
            highlighted,
            HashSet::from(["1".to_string(), "2".to_string()])
        );
    }

    #[test]
    fn test_unchanged_watched_fields_highlight_nothing() {
        let previous = vec![status("1", "2024-05-01T00:00:01Z", 20.0, "NORMAL")];
        let incoming = vec![status("1", "2024-05-01T00:00:01Z", 20.0, "NORMAL")];

        let (_, highlighted) = diff(&previous, incoming);

        assert!(highlighted.is_empty());
    }

    #[test]
    fn test_changed_temperature_highlights_the_row() {
        let previous = vec![status("1", "2024-05-01T00:00:01Z", 20.0, "NORMAL")];
        let incoming = vec![status("1", "2024-05-01T00:00:01Z", 21.0, "NORMAL")];

        let (_, highlighted) = diff(&previous, incoming);

        assert_eq!(highlighted, HashSet::from(["1".to_string()]));
    }

    #[test]
    fn test_changed_status_state_highlights_the_row() {
        let previous = vec![status("1", "2024-05-01T00:00:01Z", 20.0, "NORMAL")];
        let incoming = vec![status("1", "2024-05-01T00:00:01Z", 20.0, "DEGRADED")];

        let (_, highlighted) = diff(&previous, incoming);

        assert_eq!(highlighted, HashSet::from(["1".to_string()]));
    }

    #[test]
    fn test_unwatched_fields_never_highlight() {
        let previous = vec![status("1", "2024-05-01T00:00:01Z", 20.0, "NORMAL")];
        let mut row = status("1", "2024-05-01T00:00:01Z", 20.0, "NORMAL");
        row.voltage = Some("11.2".to_string());
        row.status_description = Some("Different text".to_string());

        let (_, highlighted) = diff(&previous, vec![row]);

        assert!(highlighted.is_empty());
    }

    #[test]
    fn test_new_record_is_highlighted() {
        let previous = vec![status("1", "2024-05-01T00:00:01Z", 20.0, "NORMAL")];
        let incoming = vec![
            status("1", "2024-05-01T00:00:01Z", 20.0, "NORMAL"),
            status("2", "2024-05-01T00:00:02Z", 25.0, "NORMAL"),
        ];

        let (_, highlighted) = diff(&previous, incoming);

        assert_eq!(highlighted, HashSet::from(["2".to_string()]));
    }

    #[test]
    fn test_removed_record_leaves_no_trace() {
        let previous = vec![
            status("1", "2024-05-01T00:00:01Z", 20.0, "NORMAL"),
            status("2", "2024-05-01T00:00:02Z", 25.0, "NORMAL"),
        ];
        let incoming = vec![status("1", "2024-05-01T00:00:01Z", 20.0, "NORMAL")];

        let (rows, highlighted) = diff(&previous, incoming);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "1");
        assert!(highlighted.is_empty());
    }

    #[test]
    fn test_rows_sort_newest_first_regardless_of_arrival_order() {
        let incoming = vec![
            status("old", "2024-05-01T00:00:01Z", 20.0, "NORMAL"),
            status("new", "2024-05-01T00:00:09Z", 21.0, "NORMAL"),
            status("mid", "2024-05-01T00:00:05Z", 22.0, "NORMAL"),
        ];

        let (rows, _) = diff(&[], incoming);

        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
        assert!(rows.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }
}
