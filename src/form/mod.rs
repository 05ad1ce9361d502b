mod rules;
mod state;
mod visibility;

pub use rules::{FieldErrors, ValidationResult, validate};
pub use state::FormState;
pub use visibility::active_fields;
