//! Synchronous field validation.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use crate::email::is_valid_email;
use crate::fields::{FieldMap, FormData, FormErrors};
use crate::schema::{FormSchema, Rule};

/// Compute a full error map for `data`. Every schema field gets an entry;
/// `""` marks a passing field. Pure and idempotent.
#[must_use]
pub fn validate(schema: &FormSchema, data: &FormData) -> FormErrors {
    let mut errors = FieldMap::empty(schema);
    for field in schema.fields {
        let value = data.get(field.name).unwrap_or_default();
        if let Some(message) = check(field.rule, value, data) {
            errors.set(field.name, message);
        }
    }
    errors
}

/// `true` when no entry of `errors` carries a message.
#[must_use]
pub fn is_valid(errors: &FormErrors) -> bool {
    errors.all_empty()
}

fn check(rule: Rule, value: &str, data: &FormData) -> Option<&'static str> {
    let blank = value.trim_matches(is_form_whitespace).is_empty();
    match rule {
        Rule::Required { message } => blank.then_some(message),
        Rule::Email { required, invalid } => {
            if blank {
                Some(required)
            } else if !is_valid_email(value) {
                Some(invalid)
            } else {
                None
            }
        }
        Rule::Confirms { field, required, mismatch } => {
            if blank {
                Some(required)
            } else if data.get(field).unwrap_or_default() != value {
                Some(mismatch)
            } else {
                None
            }
        }
    }
}

/// Whitespace as the legacy web form trimmed it: Unicode `White_Space` minus
/// NEL (U+0085), plus the byte-order mark (U+FEFF).
fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}
