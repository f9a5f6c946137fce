// Listener registry behavior

use hostwatch::observe::Listeners;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_emit_reaches_every_subscriber() {
    let listeners: Listeners<u32> = Listeners::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    for tag in ["a", "b"] {
        let seen = seen.clone();
        listeners.subscribe(move |event| seen.borrow_mut().push((tag, *event)));
    }

    listeners.emit(&7);
    assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
}

#[test]
fn test_unsubscribe_detaches_exactly_one() {
    let listeners: Listeners<u32> = Listeners::new();
    let count = Rc::new(RefCell::new(0));
    let id = listeners.subscribe({
        let count = count.clone();
        move |_| *count.borrow_mut() += 1
    });
    listeners.subscribe({
        let count = count.clone();
        move |_| *count.borrow_mut() += 1
    });

    assert_eq!(listeners.len(), 2);
    assert!(listeners.unsubscribe(id));
    assert!(!listeners.unsubscribe(id));
    listeners.emit(&0);
    assert_eq!(*count.borrow(), 1);
    assert_eq!(listeners.len(), 1);
}

#[test]
fn test_subscribe_during_emit_misses_current_event() {
    let listeners: Rc<Listeners<u32>> = Rc::new(Listeners::new());
    let late_calls = Rc::new(RefCell::new(0));

    listeners.subscribe({
        let listeners = listeners.clone();
        let late_calls = late_calls.clone();
        move |_| {
            let late_calls = late_calls.clone();
            listeners.subscribe(move |_| *late_calls.borrow_mut() += 1);
        }
    });

    listeners.emit(&1);
    assert_eq!(*late_calls.borrow(), 0);
    listeners.emit(&2);
    assert_eq!(*late_calls.borrow(), 1);
}

#[test]
fn test_empty_registry_emit_is_a_no_op() {
    let listeners: Listeners<u32> = Listeners::new();
    assert!(listeners.is_empty());
    listeners.emit(&1);
}
