//! # fieldcheck-validator — Debounced Remote Field Validation
//!
//! Keeps a text field's validity state consistent with the most recent
//! remote check of its current value, while minimizing redundant network
//! calls and tolerating out-of-order responses.
//!
//! - **Validator** ([`validator`]): [`FieldValidator`], an actor task
//!   owning the debounce deadline and a single-slot in-flight check.
//!   Results apply in last-input-wins order: a response whose snapshot no
//!   longer matches the current value is discarded, whenever it arrives.
//!
//! - **View Seam** ([`view`]): the [`FieldView`] trait — the only channel
//!   through which the validator touches presentation. State in, pixels
//!   out; the validator never learns what a CSS class is.
//!
//! - **Help Text** ([`messages`]): [`Messages`], the per-state help text
//!   table, overridable for localization.
//!
//! ## Failure Semantics
//!
//! Network failures are non-fatal: the field degrades to
//! [`FieldState::Unreachable`](fieldcheck_core::FieldState) and validation
//! is deferred to submit time ([`FieldValidator::revalidate`]). A check
//! superseded by newer input is dropped silently — cancellation is normal
//! control flow here, never an error.

pub mod messages;
pub mod validator;
pub mod view;

pub use messages::Messages;
pub use validator::FieldValidator;
pub use view::FieldView;
