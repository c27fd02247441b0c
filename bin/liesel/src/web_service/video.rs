use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response, Result};
use log::debug;

use super::auth::validate_authorization;
use super::{AppState, ServiceError};

/// Serves one HLS artifact (`index.m3u8` or a numbered `.ts` segment)
/// out of the camera's output directory.
pub async fn video(
    State(state): State<AppState>,
    Path(file): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    validate_authorization(&headers, &state.credentials, "video")?;

    // the camera writes a flat directory; anything that is not a plain
    // file name is not ours to serve
    if !is_plain_file_name(&file) {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    let path = state.video_dir.join(&file);
    let content = match tokio::fs::read(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!("no video file {}", path.display());
            return Ok(StatusCode::NOT_FOUND.into_response());
        }
        Err(err) => return Err(ServiceError::from(err).into()),
    };

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type_for(&file)),
            (header::CACHE_CONTROL, "no-store"),
        ],
        content,
    )
        .into_response())
}

fn is_plain_file_name(file: &str) -> bool {
    !file.is_empty() && !file.contains(['/', '\\']) && !file.contains("..")
}

fn content_type_for(file: &str) -> &'static str {
    match file.rsplit_once('.').map(|(_, ext)| ext) {
        Some("m3u8") => "application/vnd.apple.mpegurl",
        Some("ts") => "video/mp2t",
        _ => "application/octet-stream",
    }
}
