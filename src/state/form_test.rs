use super::*;
use forms::SIGN_IN;

#[test]
fn with_form_mutates_signal_value() {
    let signal = RwSignal::new(FormController::new(&SIGN_IN));
    let host = SignalHost(signal);

    host.with_form(|form| form.change("Email", "a@b.com"));

    assert_eq!(signal.with_untracked(|form| form.value("Email").to_owned()), "a@b.com");
}

#[test]
fn with_form_returns_closure_result() {
    let host = SignalHost(RwSignal::new(FormController::new(&SIGN_IN)));
    assert_eq!(host.with_form(|form| form.validate()), Some(false));
}

#[test]
fn disposed_signal_yields_none() {
    let signal = RwSignal::new(FormController::new(&SIGN_IN));
    let host = SignalHost(signal);
    signal.dispose();
    assert_eq!(host.with_form(|form| form.validate()), None);
}
