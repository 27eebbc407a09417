use super::*;

#[test]
fn alert_class_slides_in_when_visible() {
    assert_eq!(alert_class(true), "alert-card slide-in");
}

#[test]
fn alert_class_slides_out_when_hidden() {
    assert_eq!(alert_class(false), "alert-card slide-out");
}
