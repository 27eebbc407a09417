use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[test]
fn navigate_forwards_route_with_default_options() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let navigator = RouterNavigator::new(move |route: &str, opts: NavigateOptions| {
        sink.borrow_mut().push((route.to_owned(), opts.replace));
    });

    navigator.navigate("/signin");
    navigator.clone().navigate("/");

    assert_eq!(*seen.borrow(), vec![("/signin".to_owned(), false), ("/".to_owned(), false)]);
}
