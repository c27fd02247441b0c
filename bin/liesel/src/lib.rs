mod error;
mod store;
mod web_service;

pub use error::Error;
pub use store::{ingest, SensorState};
pub use web_service::{router, AppState, Credentials};

pub type ErasedError = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, ErasedError>;
