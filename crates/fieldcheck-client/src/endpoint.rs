//! HTTP implementation of the validation endpoint contract.
//!
//! Speaks `GET <endpoint>?code=<value>` with the
//! `X-Requested-With: XMLHttpRequest` marker header and expects the JSON
//! shape `{ "valid": bool, "normalized": string|null, "exists": bool }`.
//!
//! ## Timeout & Retry
//!
//! Each request carries a transport timeout (configurable, default 30s).
//! There are no retries: every failure degrades to the `Unreachable`
//! field state and validation is re-run at submit time, so retrying here
//! would only delay the user's feedback.

use std::future::Future;
use std::time::Duration;

use fieldcheck_core::{CheckEndpoint, CheckError, ValidationResult};
use url::Url;

/// Longest response body excerpt carried in an error.
const BODY_EXCERPT_LEN: usize = 256;

/// Configuration for the HTTP check endpoint.
#[derive(Debug, Clone)]
pub struct HttpCheckConfig {
    /// URL of the validation endpoint (e.g. `https://crm.example/api/barcode/validate`).
    /// The candidate value is appended as the `code` query parameter.
    pub endpoint: Url,
    /// Request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl HttpCheckConfig {
    /// Create a new configuration with the default timeout.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout_secs: 30,
        }
    }
}

/// `reqwest`-backed [`CheckEndpoint`].
///
/// Cheap to share: the inner client is an `Arc` internally, and `check`
/// futures own everything they need, so dropping one mid-flight (the
/// validator's cancellation mechanism) aborts the request cleanly.
#[derive(Debug, Clone)]
pub struct HttpCheckEndpoint {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpCheckEndpoint {
    /// Build the endpoint client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`](crate::ClientError::Build) if the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: HttpCheckConfig) -> Result<Self, crate::ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::HeaderName::from_static("x-requested-with"),
                    reqwest::header::HeaderValue::from_static("XMLHttpRequest"),
                );
                headers
            })
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }
}

impl CheckEndpoint for HttpCheckEndpoint {
    fn check(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<ValidationResult, CheckError>> + Send {
        let client = self.client.clone();
        let label = self.endpoint.to_string();
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("code", code);

        async move {
            let response =
                client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| CheckError::Transport {
                        endpoint: label.clone(),
                        detail: e.to_string(),
                    })?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(CheckError::Api {
                    endpoint: label,
                    status: status.as_u16(),
                    body: excerpt(&body),
                });
            }

            response
                .json::<ValidationResult>()
                .await
                .map_err(|e| CheckError::Deserialization {
                    endpoint: label,
                    detail: e.to_string(),
                })
        }
    }
}

/// Truncate a response body for error diagnostics.
fn excerpt(body: &str) -> String {
    if body.len() <= BODY_EXCERPT_LEN {
        return body.to_string();
    }
    let mut end = BODY_EXCERPT_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}
