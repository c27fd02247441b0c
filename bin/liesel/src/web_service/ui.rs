use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Result};

use super::auth::validate_authorization;
use super::AppState;

static INDEX_HTML: &str = include_str!("./index.html");
static MAIN_JS: &str = include_str!("./main.js");

pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    validate_authorization(&headers, &state.credentials, "index")?;

    Ok(asset("text/html; charset=utf-8", INDEX_HTML))
}

pub async fn main_js(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    validate_authorization(&headers, &state.credentials, "main_js")?;

    Ok(asset("text/javascript", MAIN_JS))
}

fn asset(content_type: &'static str, body: &'static str) -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "no-store"),
        ],
        body,
    )
}
