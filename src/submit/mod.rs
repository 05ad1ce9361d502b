mod controller;
mod simulate;

pub use controller::{
    PendingSubmit, SubmissionState, SubmitAction, SubmitAttempt, SubmitController, SubmitEvent,
};
pub use simulate::DelayedSubmit;
