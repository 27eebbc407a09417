use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::fakes::ManualScheduler;

fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
    let hits = Rc::new(Cell::new(0));
    let task_hits = Rc::clone(&hits);
    (hits, move || task_hits.set(task_hits.get() + 1))
}

#[test]
fn task_runs_after_delay() {
    let scheduler = ManualScheduler::default();
    let scope = TimerScope::new();
    let (hits, task) = counter();
    scope.schedule(&scheduler, Duration::from_millis(1000), task);

    scheduler.advance_ms(999);
    assert_eq!(hits.get(), 0);
    scheduler.advance_ms(1);
    assert_eq!(hits.get(), 1);
}

#[test]
fn cancelled_handle_skips_task() {
    let scheduler = ManualScheduler::default();
    let scope = TimerScope::new();
    let (hits, task) = counter();
    let handle = scope.schedule(&scheduler, Duration::from_millis(10), task);
    handle.cancel();

    scheduler.advance_ms(10);
    assert!(handle.is_cancelled());
    assert_eq!(hits.get(), 0);
}

#[test]
fn disposed_scope_skips_all_tasks() {
    let scheduler = ManualScheduler::default();
    let scope = TimerScope::new();
    let (first, task_a) = counter();
    let (second, task_b) = counter();
    scope.schedule(&scheduler, Duration::from_millis(10), task_a);
    scope.schedule(&scheduler, Duration::from_millis(20), task_b);
    scope.dispose();

    scheduler.advance_ms(50);
    assert!(scope.is_disposed());
    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 0);
}

#[test]
fn cloned_scope_shares_disposal() {
    let scheduler = ManualScheduler::default();
    let scope = TimerScope::new();
    let (hits, task) = counter();
    scope.schedule(&scheduler, Duration::from_millis(5), task);
    scope.clone().dispose();

    scheduler.advance_ms(5);
    assert_eq!(hits.get(), 0);
}

#[test]
fn cancelling_one_handle_leaves_others() {
    let scheduler = ManualScheduler::default();
    let scope = TimerScope::new();
    let (first, task_a) = counter();
    let (second, task_b) = counter();
    let handle = scope.schedule(&scheduler, Duration::from_millis(10), task_a);
    scope.schedule(&scheduler, Duration::from_millis(10), task_b);
    handle.cancel();

    scheduler.advance_ms(10);
    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);
}
