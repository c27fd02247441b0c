use std::fmt;

use crate::Reading;

/// A delivered payload does not map onto the `Reading` schema.
#[derive(Debug)]
pub struct DecodeError(serde_json::Error);

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed sensor payload: {}", self.0)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Parses a raw broker payload into a `Reading`.
///
/// Fields absent from the payload take their zero value, unknown fields
/// are ignored. A structurally broken payload or a type mismatch is
/// rejected with the position serde_json reports.
pub fn decode(payload: &[u8]) -> Result<Reading, DecodeError> {
    serde_json::from_slice(payload).map_err(DecodeError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_payload() {
        let payload = br#"{
            "timestamp": "2017-10-22T14:00:00+09:00",
            "errorFlag": 0,
            "windVelocity": 3.2,
            "windDirection": 182.5,
            "temperature": 21.4,
            "humidity": 58,
            "airPressure": 1013,
            "illuminance": 32000,
            "rainLevel": 0,
            "ultraVioletA": 1.2,
            "ultraVioletB": 0.4,
            "accelerationX": 0.0,
            "accelerationY": 0.1,
            "accelerationZ": 1.0,
            "inclinationXZ": 0.3,
            "inclinationYZ": -0.2,
            "maxWindVelocity": 7.8,
            "directMaxWindVelocity": 190.0,
            "maxInstWindVelocity": 9.1,
            "directMaxInstWindVelocity": 171.0
        }"#;

        let reading = decode(payload).unwrap();

        assert_eq!(reading.timestamp, "2017-10-22T14:00:00+09:00");
        assert_eq!(reading.temperature, 21.4);
        assert_eq!(reading.humidity, 58.0);
        assert_eq!(reading.inclination_yz, -0.2);
        assert_eq!(reading.direct_max_inst_wind_velocity, 171.0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let payload = br#"{"timestamp": "2017-10-22T14:00:00+09:00", "temperature": 21.4}"#;

        let reading = decode(payload).unwrap();

        assert_eq!(reading.temperature, 21.4);
        assert_eq!(reading.humidity, 0.0);
        assert_eq!(reading.air_pressure, 0.0);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let payload = br#"{"temperature": 21.4, "batteryLevel": 87}"#;

        let reading = decode(payload).unwrap();

        assert_eq!(reading.temperature, 21.4);
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let payload = br#"{"temperature": "warm"}"#;

        let err = decode(payload).unwrap_err();

        assert!(err.to_string().contains("malformed sensor payload"));
    }

    #[test]
    fn test_broken_payload_is_rejected() {
        assert!(decode(b"{\"temperature\":").is_err());
        assert!(decode(b"not json at all").is_err());
        assert!(decode(b"[1, 2, 3]").is_err());
    }
}
