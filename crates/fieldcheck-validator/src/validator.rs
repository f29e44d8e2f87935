//! The validator actor.
//!
//! One task owns everything: the current sanitized value, the debounce
//! deadline, and a single-owner slot holding the in-flight check. Input
//! events re-arm the deadline; a firing deadline replaces the slot, which
//! drops (and thereby cancels) any superseded check. A completed check is
//! applied only if its snapshot still equals the current value — the
//! staleness guard that makes result application last-input-wins instead
//! of network-order.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use fieldcheck_core::{
    sanitize, CheckEndpoint, CheckError, ConfigError, FieldState, ValidationResult,
    ValidatorConfig,
};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::{FieldView, Messages};

/// Events from the bound input to the actor.
enum Event {
    /// Raw text after a keystroke (or paste, or scanner burst).
    Input(String),
    /// The commit key (Enter).
    Commit,
    /// Submit-time re-check: fire immediately, skipping the debounce.
    Revalidate,
}

type CheckFuture = Pin<Box<dyn Future<Output = Result<ValidationResult, CheckError>> + Send>>;

/// The single in-flight check: the value it was issued for, and the
/// future resolving it. Dropping this cancels the request.
struct InFlight {
    snapshot: String,
    future: CheckFuture,
}

/// Handle to a spawned field validator.
///
/// Attach one per input element for the lifetime of the page or view.
/// Event methods never block; if the actor is gone they log and drop.
/// Dropping the handle closes the event channel and winds the actor down
/// after any in-progress reconciliation.
pub struct FieldValidator {
    events: mpsc::UnboundedSender<Event>,
    task: tokio::task::JoinHandle<()>,
}

impl FieldValidator {
    /// Spawn a validator for one field with the default help text.
    ///
    /// Must be called within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `config` is inconsistent.
    pub fn spawn<E, V>(endpoint: E, view: V, config: ValidatorConfig) -> Result<Self, ConfigError>
    where
        E: CheckEndpoint,
        V: FieldView,
    {
        Self::spawn_with_messages(endpoint, view, config, Messages::default())
    }

    /// Spawn a validator with custom help text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `config` is inconsistent.
    pub fn spawn_with_messages<E, V>(
        endpoint: E,
        view: V,
        config: ValidatorConfig,
        messages: Messages,
    ) -> Result<Self, ConfigError>
    where
        E: CheckEndpoint,
        V: FieldView,
    {
        config.validate()?;
        let (events, inbox) = mpsc::unbounded_channel();
        let actor = Actor {
            endpoint: Arc::new(endpoint),
            view,
            config,
            messages,
            inbox,
            value: String::new(),
            deadline: None,
            in_flight: None,
        };
        let task = tokio::spawn(actor.run());
        Ok(Self { events, task })
    }

    /// Feed the field's raw text after an input event.
    pub fn input(&self, raw: &str) {
        self.send(Event::Input(raw.to_string()));
    }

    /// The commit key (Enter) was pressed inside the field.
    pub fn commit(&self) {
        self.send(Event::Commit);
    }

    /// Re-check the current value immediately (submit-time backstop for
    /// the `Unreachable` state). No-op below the minimum length.
    pub fn revalidate(&self) {
        self.send(Event::Revalidate);
    }

    /// Close the event channel and wait for the actor to finish.
    pub async fn join(self) {
        drop(self.events);
        if self.task.await.is_err() {
            tracing::warn!("field validator task panicked");
        }
    }

    fn send(&self, event: Event) {
        if self.events.send(event).is_err() {
            tracing::warn!("field validator task is gone; event dropped");
        }
    }
}

struct Actor<E, V> {
    endpoint: Arc<E>,
    view: V,
    config: ValidatorConfig,
    messages: Messages,
    inbox: mpsc::UnboundedReceiver<Event>,
    /// Current sanitized field value.
    value: String,
    /// Pending debounce deadline, if armed.
    deadline: Option<Instant>,
    /// The single in-flight check slot.
    in_flight: Option<InFlight>,
}

impl<E, V> Actor<E, V>
where
    E: CheckEndpoint,
    V: FieldView,
{
    async fn run(mut self) {
        loop {
            tokio::select! {
                event = self.inbox.recv() => match event {
                    Some(Event::Input(raw)) => self.on_input(&raw),
                    Some(Event::Commit) => self.view.advance_focus(),
                    Some(Event::Revalidate) => self.fire(),
                    None => break,
                },
                () = wait_deadline(self.deadline) => {
                    self.fire();
                }
                outcome = wait_in_flight(&mut self.in_flight) => {
                    // Only reachable while a check occupies the slot.
                    if let Some(check) = self.in_flight.take() {
                        self.reconcile(&check.snapshot, outcome);
                    }
                }
            }
        }
    }

    /// Synchronous per-keystroke path: sanitize, write back, reset, and
    /// re-arm the debounce. Runs before any asynchronous work is
    /// scheduled.
    fn on_input(&mut self, raw: &str) {
        let sanitized = sanitize(raw, self.config.max_length);
        if sanitized != raw {
            self.view.overwrite_value(&sanitized);
        }
        if sanitized == self.value {
            // Every typed character was rejected; the pending timer and
            // any in-flight check still describe the current value.
            return;
        }

        self.value = sanitized;
        self.deadline = None;
        self.set_state(FieldState::Neutral);
        if self.value.len() >= self.config.min_length {
            self.deadline = Some(Instant::now() + self.config.debounce);
            tracing::debug!(len = self.value.len(), "debounce armed");
        }
    }

    /// Issue a check for the current value, superseding any in-flight
    /// one. Replacing the slot drops the old future, which cancels it.
    fn fire(&mut self) {
        self.deadline = None;
        if self.value.len() < self.config.min_length {
            return;
        }

        let snapshot = self.value.clone();
        let endpoint = Arc::clone(&self.endpoint);
        let code = snapshot.clone();
        let future: CheckFuture = Box::pin(async move { endpoint.check(&code).await });
        if self.in_flight.replace(InFlight { snapshot, future }).is_some() {
            tracing::debug!("superseded in-flight check dropped");
        }
        self.set_state(FieldState::Pending);
    }

    /// Apply a completed check, unless newer input made it stale.
    fn reconcile(&mut self, snapshot: &str, outcome: Result<ValidationResult, CheckError>) {
        if self.value != snapshot {
            tracing::debug!("stale check result discarded");
            return;
        }

        match outcome {
            Ok(result) if !result.valid => self.set_state(FieldState::Invalid),
            Ok(result) => {
                if let Some(normalized) = result.normalized.as_deref() {
                    if normalized != self.value {
                        // The canonical form replaces the typed value
                        // without re-triggering a check; the verdict below
                        // is the service's verdict for the submitted value.
                        self.value = normalized.to_string();
                        self.view.overwrite_value(normalized);
                    }
                }
                if result.exists {
                    self.set_state(FieldState::Duplicate);
                } else {
                    self.set_state(FieldState::Valid);
                }
            }
            Err(error) => {
                tracing::warn!(%error, "check failed; validation deferred to submit time");
                self.set_state(FieldState::Unreachable);
            }
        }
    }

    fn set_state(&mut self, state: FieldState) {
        self.view.state_changed(state, self.messages.for_state(state));
    }
}

/// Resolve at the debounce deadline, or never when none is armed.
async fn wait_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}

/// Drive the in-flight check, or park forever when the slot is empty.
/// The future lives in the slot, so progress survives re-entry into the
/// select loop.
async fn wait_in_flight(slot: &mut Option<InFlight>) -> Result<ValidationResult, CheckError> {
    match slot {
        Some(check) => check.future.as_mut().await,
        None => std::future::pending().await,
    }
}
