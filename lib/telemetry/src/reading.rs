use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};

/// The latest value set reported by the environmental sensor.
///
/// A `Reading` is a plain value. The sensor publishes a complete record
/// on every interval, so it is always replaced wholesale and never
/// patched field by field. Field names on the wire match the sensor
/// firmware exactly.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reading {
    pub timestamp: String,
    pub error_flag: f64,
    pub wind_velocity: f64,
    pub wind_direction: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub air_pressure: f64,
    pub illuminance: f64,
    pub rain_level: f64,
    pub ultra_violet_a: f64,
    pub ultra_violet_b: f64,
    pub acceleration_x: f64,
    pub acceleration_y: f64,
    pub acceleration_z: f64,
    #[serde(rename = "inclinationXZ")]
    pub inclination_xz: f64,
    #[serde(rename = "inclinationYZ")]
    pub inclination_yz: f64,
    pub max_wind_velocity: f64,
    pub direct_max_wind_velocity: f64,
    pub max_inst_wind_velocity: f64,
    pub direct_max_inst_wind_velocity: f64,
}

impl Reading {
    /// Value served before the first delivery arrives: every measurement
    /// zeroed and the timestamp set to the current wall-clock time, so a
    /// client polling early still gets a well-formed record.
    pub fn initial() -> Reading {
        Reading {
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            ..Reading::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let reading = Reading {
            timestamp: "2017-10-22T14:00:00+09:00".to_string(),
            inclination_xz: 1.5,
            inclination_yz: -0.5,
            direct_max_inst_wind_velocity: 270.0,
            ..Reading::default()
        };

        let json: serde_json::Value = serde_json::to_value(&reading).unwrap();

        assert_eq!(json["timestamp"], "2017-10-22T14:00:00+09:00");
        assert_eq!(json["inclinationXZ"], 1.5);
        assert_eq!(json["inclinationYZ"], -0.5);
        assert_eq!(json["directMaxInstWindVelocity"], 270.0);
        assert_eq!(json["errorFlag"], 0.0);
        assert_eq!(json["ultraVioletA"], 0.0);
        assert_eq!(json.as_object().unwrap().len(), 20);
    }

    #[test]
    fn test_initial_reading() {
        let reading = Reading::initial();

        assert!(chrono::DateTime::parse_from_rfc3339(&reading.timestamp).is_ok());
        assert_eq!(reading.temperature, 0.0);
        assert_eq!(reading.humidity, 0.0);
        assert_eq!(reading.wind_velocity, 0.0);
        assert_eq!(reading.error_flag, 0.0);
    }
}
