//! # fieldcheck-client — HTTP Bindings
//!
//! `reqwest`-backed transport for the field validator:
//!
//! - **Validation Endpoint** ([`endpoint`]): [`HttpCheckEndpoint`], the
//!   [`CheckEndpoint`](fieldcheck_core::CheckEndpoint) implementation for
//!   the `GET <endpoint>?code=<value>` contract. Marks requests with
//!   `X-Requested-With: XMLHttpRequest`.
//!
//! - **CSRF Interceptor** ([`csrf`]): [`CsrfClient`], an explicit wrapper
//!   that injects `X-CSRFToken` into mutating same-origin requests at send
//!   time. Replaces the global fetch override the original page shipped —
//!   interception is layered at construction, never process-wide.
//!
//! ## Error Handling
//!
//! Check failures map onto [`CheckError`](fieldcheck_core::CheckError)
//! with the endpoint URL, HTTP status, and a response body excerpt for
//! diagnostics. Construction failures use [`ClientError`].

pub mod csrf;
pub mod endpoint;
mod error;

pub use csrf::{CsrfClient, CSRF_HEADER};
pub use endpoint::{HttpCheckConfig, HttpCheckEndpoint};
pub use error::ClientError;
