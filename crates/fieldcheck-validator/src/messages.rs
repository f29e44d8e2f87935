//! Per-state help text.

use fieldcheck_core::FieldState;

/// Help text shown next to the field for each settled or pending state.
///
/// The defaults are the English strings from the service-management UI;
/// override the fields for localization. Neutral always maps to the
/// empty string.
#[derive(Debug, Clone)]
pub struct Messages {
    /// Shown while a check is in flight.
    pub pending: String,
    /// The service rejected the value's format.
    pub invalid: String,
    /// The value is already in use.
    pub duplicate: String,
    /// The value is well-formed and available.
    pub valid: String,
    /// The service could not be reached; validation happens at submit time.
    pub unreachable: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            pending: "checking code".into(),
            invalid: "invalid code".into(),
            duplicate: "code already in use".into(),
            valid: "code is valid".into(),
            unreachable: "could not verify code; it will be checked when the form is submitted"
                .into(),
        }
    }
}

impl Messages {
    /// Help text for `state`.
    pub fn for_state(&self, state: FieldState) -> &str {
        match state {
            FieldState::Neutral => "",
            FieldState::Pending => &self.pending,
            FieldState::Invalid => &self.invalid,
            FieldState::Duplicate => &self.duplicate,
            FieldState::Valid => &self.valid,
            FieldState::Unreachable => &self.unreachable,
        }
    }
}
