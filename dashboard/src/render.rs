use crate::engine::ViewState;

const HIGHLIGHT: &str = "\x1b[30;43m";
const RESET: &str = "\x1b[0m";

/// Formats the current view as a fixed-width table, newest row first, with
/// recently changed rows rendered on a highlight background.
pub fn format_table(view: &ViewState) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<20}  {:<11}  {:<8}  {:<26}  {:>7}  {:>7}  {:>6}\n",
        "Timestamp", "Device ID", "State", "Status", "Temp", "Hum", "Volt"
    ));

    for row in &view.rows {
        let status = format!(
            "{} - {}",
            row.status_code.as_deref().unwrap_or("-"),
            row.status_description.as_deref().unwrap_or("-"),
        );
        let line = format!(
            "{:<20}  {:<11}  {:<8}  {:<26}  {:>7}  {:>7}  {:>6}",
            row.created_at.format("%Y-%m-%d %H:%M:%S"),
            row.device_id.as_deref().unwrap_or("-"),
            row.status_state.as_deref().unwrap_or("-"),
            status,
            row.temperature
                .map(|t| format!("{:.1}C", t))
                .unwrap_or_else(|| "-".to_string()),
            row.humidity
                .map(|h| format!("{:.1}%", h))
                .unwrap_or_else(|| "-".to_string()),
            row.voltage
                .as_deref()
                .map(|v| format!("{}V", v))
                .unwrap_or_else(|| "-".to_string()),
        );

        if view.highlighted.contains(&row.id) {
            out.push_str(HIGHLIGHT);
            out.push_str(&line);
            out.push_str(RESET);
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }

    out
}
