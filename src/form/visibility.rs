use indexmap::IndexSet;

use crate::domain::{FieldName, RawContactInput};

/// Derive which fields are currently rendered and validated, in display
/// order. `website` is active only while `company` holds a non-blank value.
///
/// Pure and cheap; the presentation layer recomputes it on every edit rather
/// than subscribing to changes.
pub fn active_fields(candidate: &RawContactInput) -> IndexSet<FieldName> {
    let mut active = IndexSet::new();
    for field in FieldName::ALL {
        if field == FieldName::Website && candidate.company.trim().is_empty() {
            continue;
        }
        active.insert(field);
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn website_is_hidden_while_company_is_blank() {
        let mut input = RawContactInput::default();
        assert!(!active_fields(&input).contains(&FieldName::Website));
        input.company = "   ".to_string();
        assert!(!active_fields(&input).contains(&FieldName::Website));
    }

    #[test]
    fn website_appears_once_company_is_set() {
        let input = RawContactInput {
            company: "Acme".to_string(),
            ..RawContactInput::default()
        };
        let active = active_fields(&input);
        assert!(active.contains(&FieldName::Website));
        let order: Vec<FieldName> = active.iter().copied().collect();
        assert_eq!(order, FieldName::ALL.to_vec());
    }

    #[test]
    fn required_fields_are_always_active() {
        let active = active_fields(&RawContactInput::default());
        for field in FieldName::REQUIRED {
            assert!(active.contains(&field), "{field} must always be active");
        }
        assert!(active.contains(&FieldName::Company));
    }
}
