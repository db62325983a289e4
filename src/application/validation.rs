//! Pure field classification. Nothing in here touches the DOM; the modal
//! projects the verdicts onto CSS classes and notifications.

use crate::i18n::{self, Lang};

/// Validation verdict for a single field. Fields start `Untouched` and
/// return to it whenever the form is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldValidity {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

/// A point-in-time view of one input, detached from any DOM node.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSnapshot {
    pub name: String,
    pub value: String,
    pub required: bool,
}

impl FieldSnapshot {
    pub fn new(name: &str, value: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            required,
        }
    }
}

/// Classify a field. Never returns `Untouched`.
pub fn validate_field(field: &FieldSnapshot) -> FieldValidity {
    let value = field.value.trim();
    if value.is_empty() {
        return if field.required {
            FieldValidity::Invalid
        } else {
            FieldValidity::Valid
        };
    }
    let ok = match field.name.as_str() {
        "email" => is_valid_email(value),
        "phone" => is_valid_phone(value),
        _ => true,
    };
    if ok {
        FieldValidity::Valid
    } else {
        FieldValidity::Invalid
    }
}

/// `local@domain.tld` shape: one `@`, non-empty local part, and a domain
/// with at least one dot separating non-empty labels.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !host.ends_with('.') && !tld.is_empty(),
        None => false,
    }
}

/// Indian mobile numbers: exactly 10 digits, first digit 6-9.
fn is_valid_phone(value: &str) -> bool {
    value.len() == 10
        && value.bytes().all(|b| b.is_ascii_digit())
        && matches!(value.as_bytes()[0], b'6'..=b'9')
}

/// Aggregate verdict over the whole form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Validate every required field and collect one human-readable message
/// per failure. Display names come from the translation table; a field
/// with no registered name falls back to its raw identifier.
pub fn validate_form(lang: Lang, fields: &[FieldSnapshot]) -> FormReport {
    let mut errors = Vec::new();
    for field in fields.iter().filter(|f| f.required) {
        if validate_field(field) == FieldValidity::Invalid {
            errors.push(format!(
                "{} {}",
                display_name(lang, &field.name),
                i18n::t(lang, "validation.suffix")
            ));
        }
    }
    FormReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn display_name(lang: Lang, field_name: &str) -> String {
    let key = format!("field.{field_name}");
    let name = i18n::t(lang, &key);
    if name == key {
        field_name.to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(value: &str) -> FieldSnapshot {
        FieldSnapshot::new("email", value, true)
    }

    fn phone(value: &str) -> FieldSnapshot {
        FieldSnapshot::new("phone", value, true)
    }

    #[test]
    fn empty_required_field_is_invalid() {
        assert_eq!(validate_field(&email("")), FieldValidity::Invalid);
        assert_eq!(
            validate_field(&FieldSnapshot::new("name", "   ", true)),
            FieldValidity::Invalid
        );
    }

    #[test]
    fn empty_optional_field_is_valid() {
        assert_eq!(
            validate_field(&FieldSnapshot::new("message", "", false)),
            FieldValidity::Valid
        );
    }

    #[test]
    fn plain_field_accepts_any_text() {
        assert_eq!(
            validate_field(&FieldSnapshot::new("name", "Asha Kumari", true)),
            FieldValidity::Valid
        );
    }

    #[test]
    fn email_shapes() {
        assert_eq!(validate_field(&email("a@b.c")), FieldValidity::Valid);
        assert_eq!(
            validate_field(&email("user@example.co.in")),
            FieldValidity::Valid
        );
        assert_eq!(validate_field(&email("a@b")), FieldValidity::Invalid);
        assert_eq!(validate_field(&email("notanemail")), FieldValidity::Invalid);
        assert_eq!(validate_field(&email("@b.c")), FieldValidity::Invalid);
        assert_eq!(validate_field(&email("a@.c")), FieldValidity::Invalid);
        assert_eq!(validate_field(&email("a@b.")), FieldValidity::Invalid);
        assert_eq!(validate_field(&email("a@b@c.d")), FieldValidity::Invalid);
        assert_eq!(validate_field(&email("a b@c.d")), FieldValidity::Invalid);
    }

    #[test]
    fn phone_prefix_rule() {
        for first in ["6", "7", "8", "9"] {
            let number = format!("{first}123456789");
            assert_eq!(validate_field(&phone(&number)), FieldValidity::Valid);
        }
        for first in ["0", "1", "2", "3", "4", "5"] {
            let number = format!("{first}123456789");
            assert_eq!(validate_field(&phone(&number)), FieldValidity::Invalid);
        }
    }

    #[test]
    fn phone_length_and_digit_rules() {
        assert_eq!(validate_field(&phone("987654321")), FieldValidity::Invalid);
        assert_eq!(
            validate_field(&phone("98765432100")),
            FieldValidity::Invalid
        );
        assert_eq!(validate_field(&phone("98765abc10")), FieldValidity::Invalid);
        assert_eq!(validate_field(&phone("9876543210")), FieldValidity::Valid);
    }

    #[test]
    fn form_with_all_valid_fields_passes() {
        let fields = vec![
            FieldSnapshot::new("name", "Asha", true),
            FieldSnapshot::new("email", "asha@example.com", true),
            FieldSnapshot::new("phone", "9876543210", true),
            FieldSnapshot::new("message", "", false),
        ];
        let report = validate_form(Lang::En, &fields);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn blank_email_yields_exactly_one_named_error() {
        let fields = vec![
            FieldSnapshot::new("name", "Asha", true),
            FieldSnapshot::new("email", "", true),
        ];
        let report = validate_form(Lang::En, &fields);
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec!["Email Address is required or invalid.".to_string()]
        );
    }

    #[test]
    fn unregistered_field_uses_raw_identifier() {
        let fields = vec![FieldSnapshot::new("guardian", "", true)];
        let report = validate_form(Lang::En, &fields);
        assert_eq!(
            report.errors,
            vec!["guardian is required or invalid.".to_string()]
        );
    }

    #[test]
    fn optional_fields_never_contribute_errors() {
        let fields = vec![FieldSnapshot::new("message", "", false)];
        assert!(validate_form(Lang::En, &fields).is_valid);
    }

    #[test]
    fn hindi_messages_use_hindi_display_names() {
        let fields = vec![FieldSnapshot::new("phone", "12345", true)];
        let report = validate_form(Lang::Hi, &fields);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("फ़ोन नंबर"));
    }
}
