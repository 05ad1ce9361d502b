use crate::domain::{ContactRecord, RawContactInput};
use crate::form::{FieldErrors, ValidationResult, active_fields, validate};

/// Where a submission currently stands. `Succeeded` and `Failed` are
/// resubmittable; only `Submitting` blocks a new trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// The injected collaborator representing "send this data somewhere". The
/// core never constructs requests itself.
pub trait SubmitAction {
    fn start(&mut self, record: ContactRecord) -> Box<dyn PendingSubmit>;
}

/// Handle for one in-flight submission, observed by polling from the event
/// loop. Returns `None` until resolved; once it yields an outcome it is
/// dropped and never polled again.
pub trait PendingSubmit {
    fn poll(&mut self) -> Option<Result<(), String>>;
}

/// Outcome of a single trigger call.
#[derive(Debug)]
pub enum SubmitAttempt {
    /// Validation passed and the submit action was started.
    Started,
    /// Validation failed; no state transition, the errors are data for the
    /// presentation layer.
    Rejected(FieldErrors),
    /// A submission is already in flight; the trigger was dropped, not
    /// queued.
    Ignored,
}

/// Raised at most once per completed submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitEvent {
    /// Carries the normalized record for the external success collaborator.
    Succeeded(ContactRecord),
    Failed(String),
}

struct InFlight {
    handle: Box<dyn PendingSubmit>,
    record: ContactRecord,
}

/// Sequences validation, the asynchronous submit action, and the outcome.
/// At most one submit action is in flight per controller instance; there is
/// no cancellation and no timeout, a started submit always runs to
/// resolution.
pub struct SubmitController {
    state: SubmissionState,
    in_flight: Option<InFlight>,
}

impl Default for SubmitController {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitController {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    /// Validate the candidate over its active fields and, if valid, start the
    /// submit action exactly once. Re-entrant triggers while `Submitting` are
    /// no-ops.
    pub fn trigger(
        &mut self,
        candidate: &RawContactInput,
        action: &mut dyn SubmitAction,
    ) -> SubmitAttempt {
        if self.state.is_submitting() {
            return SubmitAttempt::Ignored;
        }
        let active = active_fields(candidate);
        match validate(candidate, &active) {
            ValidationResult::Valid(record) => {
                let handle = action.start(record.clone());
                self.in_flight = Some(InFlight { handle, record });
                self.state = SubmissionState::Submitting;
                SubmitAttempt::Started
            }
            ValidationResult::Invalid(errors) => SubmitAttempt::Rejected(errors),
        }
    }

    /// Advance an in-flight submission. Yields the terminal event exactly
    /// once; all later calls return `None` until the next trigger.
    pub fn poll(&mut self) -> Option<SubmitEvent> {
        let in_flight = self.in_flight.as_mut()?;
        let outcome = in_flight.handle.poll()?;
        let record = self.in_flight.take()?.record;
        Some(match outcome {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                SubmitEvent::Succeeded(record)
            }
            Err(reason) => {
                self.state = SubmissionState::Failed(reason.clone());
                SubmitEvent::Failed(reason)
            }
        })
    }

    /// Return a settled controller to `Idle`. No-op while a submission is in
    /// flight; a started submit always runs to resolution.
    pub fn reset(&mut self) {
        if !self.state.is_submitting() {
            self.state = SubmissionState::Idle;
        }
    }
}
