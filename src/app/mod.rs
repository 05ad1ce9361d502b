mod contact_form;
mod options;
mod runtime;
mod status;
mod terminal;

pub use contact_form::ContactForm;
pub use options::UiOptions;
