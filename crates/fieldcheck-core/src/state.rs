//! The field validity state machine vocabulary.
//!
//! [`FieldState`] replaces the CSS-class encoding the original UI used:
//! the validator owns an explicit state, and a single view seam translates
//! state into presentation. That keeps the state machine testable without
//! a DOM-equivalent in the loop.

use std::fmt;

/// Visual validity state of a bound input field.
///
/// Derived from the latest non-discarded check result (or failure); a
/// stale result never transitions the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldState {
    /// No verdict: the field is empty, below the check threshold, or the
    /// value changed since the last verdict.
    Neutral,
    /// A check for the current value is in flight.
    Pending,
    /// The remote service rejected the value's format.
    Invalid,
    /// The value is well-formed but already taken.
    Duplicate,
    /// The value is well-formed and available.
    Valid,
    /// The check could not reach the service; validation is deferred to
    /// submit time. Never blocks submission.
    Unreachable,
}

impl FieldState {
    /// Whether this state represents a settled verdict for the current
    /// value (as opposed to no verdict or work in progress).
    pub fn is_settled(self) -> bool {
        !matches!(self, Self::Neutral | Self::Pending)
    }
}

impl fmt::Display for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => write!(f, "Neutral"),
            Self::Pending => write!(f, "Pending"),
            Self::Invalid => write!(f, "Invalid"),
            Self::Duplicate => write!(f, "Duplicate"),
            Self::Valid => write!(f, "Valid"),
            Self::Unreachable => write!(f, "Unreachable"),
        }
    }
}
