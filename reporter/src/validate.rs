use crate::errors::{Error, Result};
use crate::reading::DeviceReading;

const TEMP_MIN: f64 = 15.0;
const TEMP_MAX: f64 = 35.0;
const HUMIDITY_MIN: f64 = 30.0;
const HUMIDITY_MAX: f64 = 80.0;
const VOLTAGE_MIN: f64 = 11.0;
const VOLTAGE_MAX: f64 = 13.0;

/// Checks a generated reading against the device operating ranges before it
/// leaves the process.
pub fn validate(reading: &DeviceReading) -> Result<()> {
    // Validate temperature
    if reading.temperature < TEMP_MIN || reading.temperature > TEMP_MAX {
        return Err(Error::Validation(format!(
            "Temperature {} out of range [{}, {}]",
            reading.temperature, TEMP_MIN, TEMP_MAX
        )));
    }

    // Validate humidity
    if reading.humidity < HUMIDITY_MIN || reading.humidity > HUMIDITY_MAX {
        return Err(Error::Validation(format!(
            "Humidity {} out of range [{}, {}]",
            reading.humidity, HUMIDITY_MIN, HUMIDITY_MAX
        )));
    }

    // Validate voltage (decimal carried as a string on the wire)
    let voltage: f64 = reading
        .voltage
        .parse()
        .map_err(|_| Error::Validation(format!("Voltage {:?} is not numeric", reading.voltage)))?;
    if voltage < VOLTAGE_MIN || voltage > VOLTAGE_MAX {
        return Err(Error::Validation(format!(
            "Voltage {} out of range [{}, {}]",
            voltage, VOLTAGE_MIN, VOLTAGE_MAX
        )));
    }

    // Validate device_Id shape: device_000 .. device_099
    let well_formed = reading
        .device_id
        .strip_prefix("device_")
        .map(|n| n.len() == 3 && n.parse::<u32>().map(|v| v < 100).unwrap_or(false))
        .unwrap_or(false);
    if !well_formed {
        return Err(Error::Validation(format!(
            "Device ID {:?} is malformed",
            reading.device_id
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reading() -> DeviceReading {
        DeviceReading {
            device_id: "device_042".to_string(),
            status_code: "200".to_string(),
            status_description: "Normal operation".to_string(),
            status_state: "NORMAL".to_string(),
            temperature: 25.0,
            humidity: 60.0,
            voltage: "12.0".to_string(),
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_valid_reading() {
        assert!(validate(&reading()).is_ok());
    }

    #[test]
    fn test_invalid_temperature() {
        let mut reading = reading();
        reading.temperature = 150.0; // Out of range

        assert!(validate(&reading).is_err());
    }

    #[test]
    fn test_invalid_humidity() {
        let mut reading = reading();
        reading.humidity = 10.0; // Out of range

        assert!(validate(&reading).is_err());
    }

    #[test]
    fn test_invalid_voltage() {
        let mut reading = reading();
        reading.voltage = "9.9".to_string(); // Out of range

        assert!(validate(&reading).is_err());

        reading.voltage = "twelve".to_string();
        assert!(validate(&reading).is_err());
    }

    #[test]
    fn test_malformed_device_id() {
        let mut reading = reading();

        reading.device_id = "device_1".to_string();
        assert!(validate(&reading).is_err());

        reading.device_id = "device_100".to_string();
        assert!(validate(&reading).is_err());

        reading.device_id = "sensor_001".to_string();
        assert!(validate(&reading).is_err());
    }
}
