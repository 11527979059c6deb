use std::collections::HashSet;
use std::thread;

use scope_tour::singleton::Coordinator;

#[test]
fn shared_references_are_identical() {
    let first = Coordinator::shared();
    let second = Coordinator::shared();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn mutation_is_visible_through_every_reference() {
    let before = Coordinator::shared();
    before.set_value(42);

    let after = Coordinator::shared();
    assert_eq!(after.value(), 42);
    assert_eq!(before.value(), 42);
}

#[test]
fn concurrent_first_access_initializes_once() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| Coordinator::shared() as *const Coordinator as usize))
        .collect();

    let addresses: HashSet<usize> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread"))
        .collect();

    assert_eq!(addresses.len(), 1);
}

#[test]
fn announce_reports_activity() {
    assert!(Coordinator::shared().announce().contains("doing something"));
}
