//! The check-endpoint seam between the validator and its transport.
//!
//! The validator only ever sees [`CheckEndpoint`]: hand it a candidate
//! value, get back a [`ValidationResult`] or a [`CheckError`]. The HTTP
//! binding lives in `fieldcheck-client`; tests script the trait directly.
//!
//! Cancellation is by drop — the validator holds the returned future in a
//! single-owner slot and replaces it when a newer check supersedes it.
//! Implementations must therefore be safe to abandon at any await point.

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Verdict returned by the remote validation service.
///
/// Deserialization is forward-compatible: unknown fields are ignored, and
/// absent `normalized`/`exists` fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the submitted value is well-formed.
    pub valid: bool,
    /// Canonical form of the value, when the service normalizes it.
    #[serde(default)]
    pub normalized: Option<String>,
    /// Whether the value is already taken in the target domain.
    #[serde(default)]
    pub exists: bool,
}

/// Errors from a validation check.
///
/// All variants are non-fatal to the caller: the validator maps every one
/// of them to the `Unreachable` field state and defers validation to
/// submit time. Details are strings so this crate stays transport-free.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The transport failed before a response arrived (connection,
    /// timeout, TLS).
    #[error("transport error calling {endpoint}: {detail}")]
    Transport { endpoint: String, detail: String },
    /// The service answered with a non-2xx status.
    #[error("validation endpoint {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// The response body could not be deserialized.
    #[error("failed to deserialize response from {endpoint}: {detail}")]
    Deserialization { endpoint: String, detail: String },
}

/// A remote validation check for one candidate value.
///
/// Implementations are shared behind an `Arc` across the validator task,
/// hence the `Send + Sync + 'static` bounds; the returned future must be
/// `Send` so the validator can poll it from a spawned task.
pub trait CheckEndpoint: Send + Sync + 'static {
    /// Check `code` against the target domain.
    fn check(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<ValidationResult, CheckError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_deserializes_full_shape() {
        let r: ValidationResult =
            serde_json::from_str(r#"{"valid":true,"normalized":"0123456789012","exists":false}"#)
                .unwrap();
        assert!(r.valid);
        assert_eq!(r.normalized.as_deref(), Some("0123456789012"));
        assert!(!r.exists);
    }

    #[test]
    fn result_defaults_absent_fields() {
        let r: ValidationResult = serde_json::from_str(r#"{"valid":false}"#).unwrap();
        assert!(!r.valid);
        assert_eq!(r.normalized, None);
        assert!(!r.exists);
    }

    #[test]
    fn result_tolerates_null_normalized_and_unknown_fields() {
        let r: ValidationResult = serde_json::from_str(
            r#"{"valid":true,"normalized":null,"exists":true,"futureField":"ignored"}"#,
        )
        .unwrap();
        assert!(r.valid);
        assert_eq!(r.normalized, None);
        assert!(r.exists);
    }

    #[test]
    fn check_error_display_carries_endpoint_context() {
        let err = CheckError::Api {
            endpoint: "/api/barcode/validate".into(),
            status: 503,
            body: "maintenance".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/api/barcode/validate"));
        assert!(msg.contains("503"));
    }
}
