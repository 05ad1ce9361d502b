use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};
use regex::Regex;

use crate::domain::{ContactRecord, FieldName, RawContactInput};

/// Field-keyed error messages, in rule evaluation order.
pub type FieldErrors = IndexMap<FieldName, String>;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid(ContactRecord),
    Invalid(FieldErrors),
}

struct Rule {
    field: FieldName,
    message: &'static str,
    check: fn(&str) -> bool,
}

/// Evaluation order is fixed; every rule runs and every failing field is
/// reported together. A field carries at most one message because the
/// minimum-length checks subsume plain presence.
static RULES: &[Rule] = &[
    Rule {
        field: FieldName::FirstName,
        message: "First name must be at least 2 characters",
        check: at_least_two_chars,
    },
    Rule {
        field: FieldName::LastName,
        message: "Last name must be at least 2 characters",
        check: at_least_two_chars,
    },
    Rule {
        field: FieldName::Email,
        message: "Enter a valid email address",
        check: is_email,
    },
    Rule {
        field: FieldName::Message,
        message: "Message must be at least 10 characters",
        check: at_least_ten_chars,
    },
    Rule {
        field: FieldName::Website,
        message: "Enter a valid absolute URL, e.g. https://example.com",
        check: is_absolute_url,
    },
];

/// Validate a candidate against the rule set, checking `website` only when it
/// is in the active set. Pure: identical inputs yield identical results.
///
/// An `active` set missing a required field is a caller bug, not user input,
/// and fails fast.
pub fn validate(candidate: &RawContactInput, active: &IndexSet<FieldName>) -> ValidationResult {
    for field in FieldName::REQUIRED {
        assert!(
            active.contains(&field),
            "active field set is missing required field `{}`",
            field.key()
        );
    }

    let company = normalize_optional(&candidate.company);
    let website = normalize_optional(&candidate.website);

    let mut errors = FieldErrors::new();
    for rule in RULES {
        let value = if rule.field == FieldName::Website {
            // Only validated when visible and present after normalization.
            if !active.contains(&FieldName::Website) {
                continue;
            }
            match website.as_deref() {
                Some(value) => value,
                None => continue,
            }
        } else {
            candidate.get(rule.field)
        };
        if !(rule.check)(value) {
            errors.insert(rule.field, rule.message.to_string());
        }
    }

    if !errors.is_empty() {
        return ValidationResult::Invalid(errors);
    }

    ValidationResult::Valid(ContactRecord {
        first_name: candidate.first_name.clone(),
        last_name: candidate.last_name.clone(),
        company,
        website: if active.contains(&FieldName::Website) {
            website
        } else {
            None
        },
        email: candidate.email.clone(),
        message: candidate.message.clone(),
    })
}

/// Empty and whitespace-only values become absent. Applied to `company` and
/// `website` only; required fields stay as typed so an empty value fails its
/// length rule instead of silently disappearing.
fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn at_least_two_chars(value: &str) -> bool {
    value.chars().count() >= 2
}

fn at_least_ten_chars(value: &str) -> bool {
    value.chars().count() >= 10
}

static EMAIL_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern compiles")
});

fn is_email(value: &str) -> bool {
    EMAIL_SYNTAX.is_match(value)
}

/// Absolute URL: a valid scheme, "://", and a non-empty remainder with no
/// whitespace. Deliberately syntactic, no resolution or reachability check.
fn is_absolute_url(value: &str) -> bool {
    let Some((scheme, rest)) = value.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'))
        && !rest.is_empty()
        && !rest.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::active_fields;

    fn valid_input() -> RawContactInput {
        RawContactInput {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            company: String::new(),
            website: String::new(),
            email: "jane@example.com".to_string(),
            message: "more than ten chars".to_string(),
        }
    }

    fn validate_with_policy(candidate: &RawContactInput) -> ValidationResult {
        validate(candidate, &active_fields(candidate))
    }

    #[test]
    fn empty_required_fields_all_fail_together() {
        let input = RawContactInput::default();
        let ValidationResult::Invalid(errors) = validate_with_policy(&input) else {
            panic!("empty input must be invalid");
        };
        let fields: Vec<FieldName> = errors.keys().copied().collect();
        assert_eq!(
            fields,
            vec![
                FieldName::FirstName,
                FieldName::LastName,
                FieldName::Email,
                FieldName::Message,
            ]
        );
        assert!(!errors.contains_key(&FieldName::Website));
    }

    #[test]
    fn satisfied_fields_carry_no_error() {
        let mut input = valid_input();
        input.first_name = "J".to_string();
        let ValidationResult::Invalid(errors) = validate_with_policy(&input) else {
            panic!("short first name must be invalid");
        };
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&FieldName::FirstName));
    }

    #[test]
    fn malformed_website_is_the_only_error_when_company_is_set() {
        let mut input = valid_input();
        input.first_name = "John".to_string();
        input.last_name = "Doe".to_string();
        input.company = "Acme".to_string();
        input.website = "not-a-url".to_string();
        input.email = "j@x.com".to_string();
        input.message = "0123456789".to_string();
        let ValidationResult::Invalid(errors) = validate_with_policy(&input) else {
            panic!("malformed website must be invalid");
        };
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&FieldName::Website));
    }

    #[test]
    fn valid_website_survives_into_the_record() {
        let mut input = valid_input();
        input.company = "Acme".to_string();
        input.website = "https://acme.io".to_string();
        let ValidationResult::Valid(record) = validate_with_policy(&input) else {
            panic!("well-formed input must be valid");
        };
        assert_eq!(record.company.as_deref(), Some("Acme"));
        assert_eq!(record.website.as_deref(), Some("https://acme.io"));
    }

    #[test]
    fn hidden_website_is_not_checked_even_when_malformed() {
        let mut input = valid_input();
        input.company = "   ".to_string();
        input.website = "definitely not a url".to_string();
        let ValidationResult::Valid(record) = validate_with_policy(&input) else {
            panic!("hidden website must not be validated");
        };
        assert_eq!(record.company, None);
        assert_eq!(record.website, None);
    }

    #[test]
    fn whitespace_company_normalizes_to_absent() {
        let mut input = valid_input();
        input.company = "   ".to_string();
        let ValidationResult::Valid(record) = validate_with_policy(&input) else {
            panic!("whitespace company must normalize away");
        };
        assert_eq!(record.company, None);
        let json = serde_json::to_value(&record).unwrap();
        assert!(!json.as_object().unwrap().contains_key("company"));
    }

    #[test]
    fn validation_is_idempotent() {
        let mut input = valid_input();
        input.email = "broken".to_string();
        let active = active_fields(&input);
        assert_eq!(validate(&input, &active), validate(&input, &active));
    }

    #[test]
    #[should_panic(expected = "missing required field")]
    fn malformed_active_set_fails_fast() {
        let input = valid_input();
        let mut active = active_fields(&input);
        active.shift_remove(&FieldName::Email);
        validate(&input, &active);
    }

    #[test]
    fn email_syntax_accepts_short_domains() {
        assert!(is_email("j@x.com"));
        assert!(is_email("jane.smith+tag@mail.example.org"));
        assert!(!is_email("jane@"));
        assert!(!is_email("jane example@mail.com"));
        assert!(!is_email("jane@nodot"));
    }

    #[test]
    fn absolute_url_requires_a_scheme() {
        assert!(is_absolute_url("https://acme.io"));
        assert!(is_absolute_url("http://acme.io/path?q=1"));
        assert!(!is_absolute_url("not-a-url"));
        assert!(!is_absolute_url("acme.io"));
        assert!(!is_absolute_url("://acme.io"));
        assert!(!is_absolute_url("https://with space"));
    }
}
