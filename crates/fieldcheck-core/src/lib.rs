//! # fieldcheck-core — Field Validation Foundations
//!
//! Pure, I/O-free building blocks for the async field validator:
//!
//! - **Sanitization** ([`sanitize`]): digits-only filtering and
//!   truncation, applied synchronously before any asynchronous work is
//!   scheduled.
//!
//! - **Field State** ([`state`]): the explicit [`FieldState`] enum the
//!   validator drives. The state machine is the observable surface — a
//!   view layer renders states, it never owns them.
//!
//! - **Endpoint Seam** ([`endpoint`]): the [`CheckEndpoint`] trait and
//!   the [`ValidationResult`] / [`CheckError`] types it speaks. Transport
//!   crates implement the trait; this crate stays transport-free.
//!
//! - **Configuration** ([`config`]): [`ValidatorConfig`] with the
//!   length and debounce knobs, validated at construction.

pub mod config;
pub mod endpoint;
pub mod sanitize;
pub mod state;

pub use config::{ConfigError, ValidatorConfig};
pub use endpoint::{CheckEndpoint, CheckError, ValidationResult};
pub use sanitize::sanitize;
pub use state::FieldState;
