//! Shared HTTP response helpers.
//!
//! Centralizes the status check (non-success -> [`ApiError::Api`]) and body
//! decoding (-> [`ApiError::Decode`]) so endpoint modules stay focused on
//! request construction.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. There is no retry and no
/// special casing of 429: every non-2xx status is a failed call.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if !resp.status().is_success() {
        return Err(ApiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a JSON object body.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// List endpoints return a bare array. A `{"data": [...]}` envelope is
/// accepted as well.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

/// Decode a list body.
pub async fn decode_list<T: DeserializeOwned>(resp: reqwest::Response) -> Result<Vec<T>, ApiError> {
    let body = resp.text().await?;
    parse_list(&body)
}

fn parse_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    match serde_json::from_str::<ListPayload<T>>(body) {
        Ok(ListPayload::Bare(items) | ListPayload::Wrapped { data: items }) => Ok(items),
        Err(e) => Err(ApiError::Decode(format!("expected a JSON array: {e}"))),
    }
}
