//! The view seam: how the validator reaches presentation.

use fieldcheck_core::FieldState;

/// Presentation-side contract for one validated field.
///
/// Implementations translate states into whatever the surface offers
/// (styling classes, help-text nodes, terminal cells). The validator
/// calls these from its own task, so implementations must be `Send`.
pub trait FieldView: Send + 'static {
    /// The field's validity state changed. `message` is the help text for
    /// the new state; empty for [`FieldState::Neutral`].
    fn state_changed(&mut self, state: FieldState, message: &str);

    /// Replace the field's displayed value (sanitization write-back or a
    /// normalized form from the service). Must not be fed back to the
    /// validator as an input event.
    fn overwrite_value(&mut self, value: &str);

    /// A commit keystroke (Enter) arrived: move focus to the next
    /// focusable control in the form, if one exists; otherwise leave
    /// focus unchanged. Never submit the form.
    fn advance_focus(&mut self);
}
