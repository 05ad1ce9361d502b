use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use indexmap::IndexSet;

use crate::domain::{FieldName, RawContactInput};

use super::{FieldErrors, active_fields};

/// Editable state for one form instance: the live input snapshot, the active
/// field set derived from it, field-level error display state, and focus.
#[derive(Debug, Clone)]
pub struct FormState {
    input: RawContactInput,
    active: IndexSet<FieldName>,
    errors: FieldErrors,
    focus: usize,
    dirty: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        let input = RawContactInput::default();
        let active = active_fields(&input);
        Self {
            input,
            active,
            errors: FieldErrors::new(),
            focus: 0,
            dirty: false,
        }
    }

    pub fn input(&self) -> &RawContactInput {
        &self.input
    }

    pub fn active(&self) -> &IndexSet<FieldName> {
        &self.active
    }

    /// The focused field. The active set always holds at least the required
    /// fields plus `company`, so focus is never dangling.
    pub fn focused(&self) -> FieldName {
        self.active
            .get_index(self.focus)
            .copied()
            .unwrap_or(FieldName::FirstName)
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.active.len();
    }

    pub fn focus_prev(&mut self) {
        if self.focus == 0 {
            self.focus = self.active.len() - 1;
        } else {
            self.focus -= 1;
        }
    }

    /// Apply an edit key to the focused field. Returns whether the input
    /// changed. Enter inserts a newline only in fields that accept them.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let field = self.focused();
        let changed = match key.code {
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                self.input.get_mut(field).push(ch);
                true
            }
            KeyCode::Backspace => self.input.get_mut(field).pop().is_some(),
            KeyCode::Delete => {
                let buffer = self.input.get_mut(field);
                let was_empty = buffer.is_empty();
                buffer.clear();
                !was_empty
            }
            KeyCode::Enter if field.accepts_newlines() => {
                self.input.get_mut(field).push('\n');
                true
            }
            _ => false,
        };
        if changed {
            self.dirty = true;
            // Stale messages disappear as soon as the field is touched again.
            self.errors.shift_remove(&field);
            self.refresh_visibility();
        }
        changed
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Reset the form to its pristine state, e.g. after a successful send.
    pub fn clear(&mut self) {
        self.input = RawContactInput::default();
        self.errors.clear();
        self.focus = 0;
        self.dirty = false;
        self.refresh_visibility();
    }

    /// Recompute the active set from the current input. A `website` value
    /// whose field just became inactive is discarded, not parked in a hidden
    /// slot, so it can never leak into a later submission.
    fn refresh_visibility(&mut self) {
        let active = active_fields(&self.input);
        if !active.contains(&FieldName::Website) && !self.input.website.is_empty() {
            self.input.website.clear();
            self.errors.shift_remove(&FieldName::Website);
        }
        self.active = active;
        if self.focus >= self.active.len() {
            self.focus = self.active.len() - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: &mut FormState, code: KeyCode) -> bool {
        state.handle_key(&KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(state: &mut FormState, text: &str) {
        for ch in text.chars() {
            press(state, KeyCode::Char(ch));
        }
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut state = FormState::new();
        type_text(&mut state, "Jane");
        assert_eq!(state.input().first_name, "Jane");
        assert!(state.is_dirty());
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.input().first_name, "Jan");
    }

    #[test]
    fn control_chords_are_not_text_input() {
        let mut state = FormState::new();
        let chord = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(!state.handle_key(&chord));
        assert_eq!(state.input().first_name, "");
    }

    #[test]
    fn enter_inserts_newlines_only_in_the_message() {
        let mut state = FormState::new();
        assert!(!press(&mut state, KeyCode::Enter));
        while state.focused() != FieldName::Message {
            state.focus_next();
        }
        assert!(press(&mut state, KeyCode::Enter));
        assert_eq!(state.input().message, "\n");
    }

    #[test]
    fn focus_wraps_over_the_active_set() {
        let mut state = FormState::new();
        // website hidden: five active fields
        assert_eq!(state.active().len(), 5);
        for _ in 0..5 {
            state.focus_next();
        }
        assert_eq!(state.focused(), FieldName::FirstName);
        state.focus_prev();
        assert_eq!(state.focused(), FieldName::Message);
    }

    #[test]
    fn clearing_company_discards_the_website_value() {
        let mut state = FormState::new();
        while state.focused() != FieldName::Company {
            state.focus_next();
        }
        type_text(&mut state, "Acme");
        assert!(state.active().contains(&FieldName::Website));

        state.focus_next();
        assert_eq!(state.focused(), FieldName::Website);
        type_text(&mut state, "https://acme.io");

        while state.focused() != FieldName::Company {
            state.focus_prev();
        }
        press(&mut state, KeyCode::Delete);
        assert!(!state.active().contains(&FieldName::Website));
        assert_eq!(state.input().website, "");
    }

    #[test]
    fn editing_a_field_drops_its_stale_error() {
        let mut state = FormState::new();
        let mut errors = FieldErrors::new();
        errors.insert(FieldName::FirstName, "too short".to_string());
        errors.insert(FieldName::Email, "invalid".to_string());
        state.set_errors(errors);
        press(&mut state, KeyCode::Char('J'));
        assert!(state.error(FieldName::FirstName).is_none());
        assert!(state.error(FieldName::Email).is_some());
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = FormState::new();
        type_text(&mut state, "Jane");
        state.clear();
        assert_eq!(state.input(), &RawContactInput::default());
        assert!(!state.is_dirty());
        assert_eq!(state.focused(), FieldName::FirstName);
    }
}
