use anyhow::Result;

use crate::domain::ContactRecord;
use crate::form::FormState;
use crate::submit::{SubmitAction, SubmitController};

use super::{options::UiOptions, runtime::App};

/// Callback handed the accepted record exactly once per successful send.
pub type SuccessSink = Box<dyn FnMut(ContactRecord)>;

/// Entry point for embedding the contact form. Builder-style configuration,
/// then `run` takes over the terminal until the user quits.
pub struct ContactForm {
    action: Box<dyn SubmitAction>,
    title: Option<String>,
    options: UiOptions,
    on_success: Option<SuccessSink>,
}

impl ContactForm {
    pub fn new(action: impl SubmitAction + 'static) -> Self {
        Self {
            action: Box::new(action),
            title: None,
            options: UiOptions::default(),
            on_success: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Register the external success-notification collaborator. Invoked with
    /// the normalized record; how it is surfaced is the caller's business.
    pub fn on_success(mut self, sink: impl FnMut(ContactRecord) + 'static) -> Self {
        self.on_success = Some(Box::new(sink));
        self
    }

    /// Run the form until the user quits. Returns the most recently accepted
    /// record, or `None` when nothing was sent.
    pub fn run(self) -> Result<Option<ContactRecord>> {
        let ContactForm {
            action,
            title,
            options,
            on_success,
        } = self;

        let mut app = App::new(
            FormState::new(),
            SubmitController::new(),
            action,
            on_success,
            title,
            options,
        );
        app.run()
    }
}
