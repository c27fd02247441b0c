use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Result};
use log::trace;

use super::auth::validate_authorization;
use super::{AppState, ServiceError};

/// Serves the latest reading as JSON. The value changes behind the
/// client's back, so caching is disabled outright.
pub async fn sensor(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    validate_authorization(&headers, &state.credentials, "sensor")?;

    let reading = state.sensor.snapshot();
    trace!("serving reading {}", reading.timestamp);

    let body = serde_json::to_vec(&reading).map_err(ServiceError::from)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        body,
    ))
}
