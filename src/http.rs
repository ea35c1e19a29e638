use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;

use crate::error::BindingsError;

pub(crate) fn build_client(
    timeout: Duration,
    map_err: fn(String) -> BindingsError,
) -> Result<Client, BindingsError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&format!("kira-boltz/{}", env!("CARGO_PKG_VERSION")))
            .map_err(|err| map_err(err.to_string()))?,
    );
    Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(|err| map_err(err.to_string()))
}

pub(crate) fn handle_status(
    response: Response,
    fallback: &str,
    map_err: fn(u16, String) -> BindingsError,
) -> Result<Response, BindingsError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let message = response
        .text()
        .unwrap_or_else(|_| fallback.to_string());
    Err(map_err(status, message))
}

pub(crate) fn decode_json(response: Response, service: &'static str) -> Result<Value, BindingsError> {
    let body = response.text().map_err(|err| BindingsError::JsonDecode {
        service,
        message: err.to_string(),
    })?;
    serde_json::from_str(&body).map_err(|err| BindingsError::JsonDecode {
        service,
        message: err.to_string(),
    })
}
