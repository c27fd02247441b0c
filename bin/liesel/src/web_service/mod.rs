mod auth;
mod sensor;
mod ui;
mod video;

pub use auth::Credentials;

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use log::error;

use crate::store::SensorState;
use crate::Error;

#[derive(Clone)]
pub struct AppState {
    pub sensor: Arc<SensorState>,
    pub credentials: Arc<Credentials>,
    pub video_dir: Arc<PathBuf>,
}

pub struct ServiceError(Error, uuid::Uuid);

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response<Body> {
        error!("ServiceError[{}]: {}", self.1, self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

impl From<Error> for ServiceError {
    fn from(value: Error) -> Self {
        ServiceError(value, uuid::Uuid::new_v4())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(value: serde_json::Error) -> Self {
        ServiceError(Error::Json(value), uuid::Uuid::new_v4())
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(value: std::io::Error) -> Self {
        ServiceError(Error::Io(value), uuid::Uuid::new_v4())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index))
        .route("/index.html", get(ui::index))
        .route("/static/main.js", get(ui::main_js))
        .route("/api/sensor", get(sensor::sensor))
        .route("/video/{file}", get(video::video))
        .with_state(state)
}
