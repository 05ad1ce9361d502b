#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod form;
mod presentation;
mod submit;

pub use app::{ContactForm, UiOptions};
pub use domain::{ContactRecord, FieldName, RawContactInput};
pub use form::{FieldErrors, FormState, ValidationResult, active_fields, validate};
pub use submit::{
    DelayedSubmit, PendingSubmit, SubmissionState, SubmitAction, SubmitAttempt, SubmitController,
    SubmitEvent,
};

pub mod prelude {
    pub use super::{
        ContactForm, ContactRecord, DelayedSubmit, FieldName, RawContactInput, SubmissionState,
        SubmitController, UiOptions,
    };
}
