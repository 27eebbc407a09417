use super::*;

// =============================================================
// Accepted shapes
// =============================================================

#[test]
fn accepts_plain_address() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("jane.doe@example.org"));
}

#[test]
fn accepts_hyphen_and_underscore_in_domain() {
    assert!(is_valid_email("user@my-blog_site.io"));
}

#[test]
fn accepts_range_characters_in_local_part() {
    // `.`..=`_` spans digits, punctuation and uppercase letters.
    assert!(is_valid_email("a/b:c;d<e>f?g[h]i^j@host.net"));
    assert!(is_valid_email("a@b@host.net"));
}

#[test]
fn accepts_tld_length_bounds() {
    assert!(is_valid_email("x@y.ab"));
    assert!(is_valid_email("x@y.abcdefghij"));
}

// =============================================================
// Rejected shapes
// =============================================================

#[test]
fn rejects_missing_at_sign() {
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("host.com"));
}

#[test]
fn rejects_dotted_domain_before_tld() {
    assert!(!is_valid_email("a@mail.example.com"));
}

#[test]
fn rejects_tld_out_of_bounds() {
    assert!(!is_valid_email("x@y.a"));
    assert!(!is_valid_email("x@y.abcdefghijk"));
    assert!(!is_valid_email("x@y.c0m"));
}

#[test]
fn rejects_empty_parts() {
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email(""));
}

#[test]
fn rejects_chars_outside_classes() {
    assert!(!is_valid_email("a+b@c.com"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@b c.com"));
    assert!(!is_valid_email(" a@b.com"));
    assert!(!is_valid_email("a@b.com "));
}

#[test]
fn rejects_lowercase_range_gap_chars() {
    // Backtick and braces sit above `_` and are not letters.
    assert!(!is_valid_email("a`b@c.com"));
    assert!(!is_valid_email("a{b}@c.com"));
}
