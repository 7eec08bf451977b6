use serde::Serialize;
use serde_json::Value;

use crate::{
    config::{ApaConfig, KeyMode},
    error::ApaError,
    transform,
    types::ApiResult,
};

/// REST client for the league API
///
/// The base URL is resolved once from an [`ApaConfig`] at construction and
/// held immutably for the life of the client. Endpoints are appended to it
/// verbatim, so callers control the separator discipline.
///
/// Each call performs exactly one round trip: there is no retry, backoff,
/// or caching layer.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    key_mode: KeyMode,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ApaConfig::new())
    }

    /// Creates a client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: ApaConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("reqwest client"),
            base_url: config.base_url(),
            key_mode: config.key_mode(),
        }
    }

    /// Replaces the HTTP client with a custom one
    ///
    /// Useful for setting custom timeouts, proxies, or other HTTP
    /// configuration.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns the resolved base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET request against `endpoint`
    pub async fn get(&self, endpoint: &str) -> Result<ApiResult, ApaError> {
        let request = self.http.get(self.url(endpoint));
        self.execute(request).await
    }

    /// Issues a GET request with query parameters appended
    pub async fn get_with_query<Q>(&self, endpoint: &str, query: &Q) -> Result<ApiResult, ApaError>
    where
        Q: Serialize + Sync + ?Sized,
    {
        let request = self.http.get(self.url(endpoint)).query(query);
        self.execute(request).await
    }

    /// Issues a POST request with a JSON body
    pub async fn post<B>(&self, endpoint: &str, body: &B) -> Result<ApiResult, ApaError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let request = self.http.post(self.url(endpoint)).json(body);
        self.execute(request).await
    }

    /// Issues a POST request with query parameters and a JSON body
    pub async fn post_with_query<Q, B>(
        &self,
        endpoint: &str,
        query: &Q,
        body: &B,
    ) -> Result<ApiResult, ApaError>
    where
        Q: Serialize + Sync + ?Sized,
        B: Serialize + Sync + ?Sized,
    {
        let request = self.http.post(self.url(endpoint)).query(query).json(body);
        self.execute(request).await
    }

    // Verbatim concatenation; no path normalization.
    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<ApiResult, ApaError> {
        let request = request.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "dispatching request");

        let response = self.http.execute(request).await.map_err(|e| {
            tracing::error!(error = %e, "transport failure");
            ApaError::RequestFailed(e)
        })?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_owned();
        let url = response.url().clone();
        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, %url, "failed reading response body");
            ApaError::RequestFailed(e)
        })?;

        // Decode before classification: an error-status response with an
        // undecodable body reports as a decode failure, not as its class.
        let payload: Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(error = %e, %url, "bad JSON in response");
            crate::error::map_deser(&e, &bytes)
        })?;

        match status.as_u16() {
            code @ 200..=299 => {
                tracing::debug!(
                    success = true,
                    status_code = code,
                    message = %reason,
                    %url,
                    "request succeeded"
                );
                let payload = match self.key_mode {
                    KeyMode::Preserve => payload,
                    KeyMode::Lowercase => transform::normalize_payload(payload),
                };
                Ok(ApiResult::with_payload(code, reason, payload))
            }
            code @ 400..=499 => {
                tracing::error!(
                    success = false,
                    status_code = code,
                    message = %reason,
                    %url,
                    "invalid request"
                );
                // Client errors are results, not errors; the decoded body
                // is discarded and only status/message retained.
                Ok(ApiResult::new(code, reason))
            }
            code @ 500..=599 => {
                tracing::error!(
                    success = false,
                    status_code = code,
                    message = %reason,
                    %url,
                    "internal error occurred"
                );
                Err(ApaError::Server {
                    status: code,
                    reason,
                })
            }
            code => Err(ApaError::Server {
                status: code,
                reason,
            }),
        }
    }
}
