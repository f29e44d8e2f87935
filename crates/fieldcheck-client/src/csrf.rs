//! CSRF header injection as an explicit client wrapper.
//!
//! The original page monkey-patched the global `fetch` to stamp
//! `X-CSRFToken` onto every mutating request. Here the interception is a
//! value you construct and pass around: [`CsrfClient`] wraps a
//! `reqwest::Client` and injects the token at send time, only for
//! mutating methods on the configured page origin, and never over a
//! header the caller set explicitly.

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Method, Request, RequestBuilder, Response, Url};
use zeroize::Zeroizing;

/// Header carrying the anti-CSRF token.
pub const CSRF_HEADER: HeaderName = HeaderName::from_static("x-csrftoken");

/// HTTP client wrapper that stamps `X-CSRFToken` onto mutating
/// same-origin requests.
///
/// The token is sourced once at construction (the page embeds it in a
/// meta tag or hidden field) and held zeroized.
pub struct CsrfClient {
    client: reqwest::Client,
    origin: url::Origin,
    token: Zeroizing<String>,
}

impl CsrfClient {
    /// Wrap `client` with token injection scoped to `page_url`'s origin.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidToken`](crate::ClientError::InvalidToken)
    /// if the token cannot be carried in an HTTP header.
    pub fn new(
        client: reqwest::Client,
        page_url: &Url,
        token: impl Into<String>,
    ) -> Result<Self, crate::ClientError> {
        let token = Zeroizing::new(token.into());
        if HeaderValue::from_str(&token).is_err() {
            return Err(crate::ClientError::InvalidToken);
        }
        Ok(Self {
            client,
            origin: page_url.origin(),
            token,
        })
    }

    /// Start building a request on the wrapped client.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Inject the CSRF header into `request` when it qualifies.
    ///
    /// Injection requires all of: a mutating method (POST/PUT/DELETE/
    /// PATCH), a URL on the page origin, and no caller-set `X-CSRFToken`.
    pub fn prepare(&self, request: &mut Request) {
        if !is_mutating(request.method()) {
            return;
        }
        if request.url().origin() != self.origin {
            tracing::debug!(url = %request.url(), "cross-origin request; CSRF token withheld");
            return;
        }
        if request.headers().contains_key(&CSRF_HEADER) {
            return;
        }
        // Validated at construction; a token that fit then still fits.
        if let Ok(value) = HeaderValue::from_str(&self.token) {
            request.headers_mut().insert(CSRF_HEADER, value);
        }
    }

    /// Prepare and send a built request.
    pub async fn execute(&self, mut request: Request) -> Result<Response, reqwest::Error> {
        self.prepare(&mut request);
        self.client.execute(request).await
    }
}

fn is_mutating(method: &Method) -> bool {
    method == Method::POST
        || method == Method::PUT
        || method == Method::DELETE
        || method == Method::PATCH
}
