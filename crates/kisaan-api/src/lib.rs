//! # kisaan-api
//!
//! HTTP client for the Kisaan Academy farmer API.
//!
//! One method per endpoint, grouped by resource:
//! - courses (learning hub)
//! - market prices and price forecasts
//! - weather and pest alerts
//! - sustainable-practices wiki
//! - chat (Agri-Bot)
//! - users
//!
//! Every call is a single request: no retry, no backoff, no caching. Callers
//! decide how a failure is presented. Page views depend on the [`FarmApi`]
//! trait rather than on [`ApiClient`] directly.

pub mod alerts;
pub mod chat;
pub mod courses;
pub mod market;
pub mod users;
pub mod wiki;

mod error;
mod http;
mod query;
mod source;

pub use error::ApiError;
pub use query::QueryParams;
pub use source::FarmApi;

use kisaan_config::ApiConfig;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// The transport timeout is only overridden when `timeout_secs` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("kisaan/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    /// Build a client for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        Self::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path (which must start with `/`).
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        http::check_response(self.http.get(&url).send().await?).await
    }

    async fn post<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        http::check_response(self.http.post(&url).json(body).send().await?).await
    }
}
