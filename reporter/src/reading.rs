use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One synthetic device reading as submitted to the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceReading {
    #[serde(rename = "device_Id")]
    pub device_id: String,
    pub status_code: String,
    pub status_description: String,
    pub status_state: String,
    pub temperature: f64,
    pub humidity: f64,
    pub voltage: String,
    pub last_updated: DateTime<Utc>,
}

impl DeviceReading {
    /// Draws one reading. Numeric fields are uniform over the device
    /// operating ranges, rounded to one fractional digit; the device id is
    /// uniform over device_000..device_099.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            device_id: format!("device_{:03}", rng.gen_range(0..100)),
            status_code: "200".to_string(),
            status_description: "Normal operation".to_string(),
            status_state: "NORMAL".to_string(),
            temperature: round1(rng.gen_range(15.0..35.0)),
            humidity: round1(rng.gen_range(30.0..80.0)),
            voltage: format!("{:.1}", rng.gen_range(11.0..13.0)),
            last_updated: Utc::now(),
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
