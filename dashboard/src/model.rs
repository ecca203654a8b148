use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One persisted device status row as returned by the API, including the
/// server-assigned identifier and timestamps. Reading fields are nullable
/// in the schema, so they stay optional here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceStatus {
    pub id: String,
    #[serde(rename = "device_Id", default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub status_code: Option<String>,
    #[serde(default)]
    pub status_description: Option<String>,
    #[serde(default)]
    pub status_state: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub voltage: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
