//! Email shape check used by the `Email` field rule.
//!
//! COMPATIBILITY
//! =============
//! Accepts exactly what the legacy web form accepted:
//!
//! ```text
//! ^([a-zA-Z0-9\.-_]+)@([a-zA-Z0-9-_]+)\.([a-zA-Z]{2,10})$
//! ```
//!
//! Inside the first class `\.-_` is a range from `.` (0x2E) to `_` (0x5F), so
//! the local part also admits digits, `/ : ; < = > ? @ [ \ ] ^` and uppercase
//! letters. The domain label admits letters, digits, `-` and `_`. Neither the
//! domain label nor the top-level label can hold `.` or `@`, so splitting on
//! the last `.` and then on the last `@` before it is equivalent to the
//! backtracking match.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

const TLD_MIN: usize = 2;
const TLD_MAX: usize = 10;

/// Returns `true` when `email` has the accepted `local@domain.tld` shape.
///
/// The value is checked as given; callers trim before the emptiness check
/// but not before this one.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((head, tld)) = email.rsplit_once('.') else {
        return false;
    };
    let Some((local, domain)) = head.rsplit_once('@') else {
        return false;
    };
    is_tld(tld)
        && !domain.is_empty()
        && domain.chars().all(is_domain_char)
        && !local.is_empty()
        && local.chars().all(is_local_char)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('.'..='_').contains(&c)
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn is_tld(label: &str) -> bool {
    (TLD_MIN..=TLD_MAX).contains(&label.len()) && label.chars().all(|c| c.is_ascii_alphabetic())
}
