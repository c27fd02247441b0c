use std::sync::Mutex;

use log::debug;
use telemetry::{decode, DecodeError, Reading};

/// Owner of the single most recent `Reading`.
///
/// One writer (the broker delivery callback) and any number of HTTP
/// handlers share an `Arc<SensorState>`. The lock covers only the value
/// copy in or out and is never held across an await point, so a reading
/// is always observed whole and neither side waits on the other's I/O.
pub struct SensorState {
    current: Mutex<Reading>,
}

impl SensorState {
    pub fn new() -> SensorState {
        SensorState {
            current: Mutex::new(Reading::initial()),
        }
    }

    /// Replaces the current reading wholesale. A concurrent `snapshot`
    /// sees either the previous value or `reading`, never a mix.
    pub fn update(&self, reading: Reading) {
        let mut current = self.current.lock().unwrap_or_else(|err| err.into_inner());
        *current = reading;
    }

    /// Copies the current reading out, safe for the caller to serialize
    /// without further synchronization.
    pub fn snapshot(&self) -> Reading {
        let current = self.current.lock().unwrap_or_else(|err| err.into_inner());
        current.clone()
    }
}

impl Default for SensorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes a delivery and installs it as the current reading. A payload
/// that fails to decode leaves the store untouched.
pub fn ingest(payload: &[u8], state: &SensorState) -> Result<(), DecodeError> {
    let reading = decode(payload)?;
    debug!("new reading {}", reading.timestamp);

    state.update(reading);

    Ok(())
}
