use super::*;

#[test]
fn sign_in_fields_in_order() {
    let names: Vec<_> = SIGN_IN.field_names().collect();
    assert_eq!(names, vec!["Email", "Password"]);
}

#[test]
fn sign_up_fields_in_order() {
    let names: Vec<_> = SIGN_UP.field_names().collect();
    assert_eq!(names, vec!["userName", "Email", "Password", "correctPassword"]);
}

#[test]
fn endpoints_and_routes() {
    assert_eq!(SIGN_IN.endpoint, "/signin");
    assert_eq!(SIGN_IN.success_route, "/");
    assert_eq!(SIGN_IN.alternate.route, "/signup");
    assert_eq!(SIGN_UP.endpoint, "/signup");
    assert_eq!(SIGN_UP.success_route, "/signin");
    assert_eq!(SIGN_UP.alternate.route, "/signin");
}

#[test]
fn only_sign_in_persists_token() {
    assert_eq!(SIGN_IN.token_field, Some("token"));
    assert_eq!(SIGN_UP.token_field, None);
}

#[test]
fn confirm_field_points_at_existing_field() {
    let confirm = SIGN_UP.field("correctPassword").map(|f| f.rule);
    let Some(Rule::Confirms { field, .. }) = confirm else {
        panic!("correctPassword should carry a Confirms rule, got {confirm:?}");
    };
    assert!(SIGN_UP.field(field).is_some());
}

#[test]
fn field_lookup_misses_unknown_key() {
    assert!(SIGN_IN.field("userName").is_none());
}

#[test]
fn input_kind_html_types() {
    assert_eq!(InputKind::Text.as_html(), "text");
    assert_eq!(InputKind::Email.as_html(), "email");
    assert_eq!(InputKind::Password.as_html(), "password");
}
