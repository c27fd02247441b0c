use axum::body::Body;
use axum::http::{HeaderMap, Response, StatusCode};
use axum::response::IntoResponse;
use base64::prelude::*;
use log::{error, trace};

/// Basic auth pair, captured once at startup and immutable afterwards.
pub struct Credentials {
    pub user: String,
    pub password: String,
}

pub enum ValidationError {
    NoCredentials,
    WrongCredentials,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response<Body> {
        // the challenge is identical in every case; the client is not
        // told which part of the pair failed to match
        let mut headers = HeaderMap::new();
        headers.insert("WWW-Authenticate", "Basic realm=\"SECRET AREA\"".parse().unwrap());

        (StatusCode::UNAUTHORIZED, headers, "Unauthorized").into_response()
    }
}

pub fn validate_authorization(
    headers: &HeaderMap,
    credentials: &Credentials,
    request_name: &'static str,
) -> Result<(), ValidationError> {
    match extract_credentials_from_headers(headers) {
        Some((user, password))
            if credentials.user == user && credentials.password == password =>
        {
            trace!(target: request_name, "received valid credentials");
            Ok(())
        }
        Some((user, _)) => {
            error!(target: request_name, "credentials for {user} do not match");

            Err(ValidationError::WrongCredentials)
        }
        None => Err(ValidationError::NoCredentials),
    }
}

const BASIC: &str = "Basic ";

fn extract_credentials_from_headers(headers: &HeaderMap) -> Option<(String, String)> {
    let authorization = headers.get("Authorization")?;
    let authorization = std::str::from_utf8(authorization.as_bytes()).ok()?;
    let encoded = authorization.strip_prefix(BASIC)?;

    let decoded = BASE64_STANDARD.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;

    let (user, password) = decoded.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}
