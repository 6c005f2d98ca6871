use crate::types::Thunk;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

#[test]
fn lazy_thunk_runs_its_initializer_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let thunk = Thunk::lazy(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        vec!["a".to_string()]
    });

    assert!(!thunk.is_evaluated());
    assert_eq!(thunk.get(), &vec!["a".to_string()]);
    assert_eq!(thunk.get().len(), 1);
    assert!(thunk.is_evaluated());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn into_value_forces_an_unevaluated_thunk() {
    let thunk = Thunk::lazy(|| 41 + 1);

    assert_eq!(thunk.into_value(), 42);
}

#[test]
fn ready_thunk_is_already_evaluated() {
    let thunk = Thunk::ready(3_usize);

    assert!(thunk.is_evaluated());
    assert_eq!(format!("{thunk:?}"), "3");
    assert_eq!(format!("{:?}", Thunk::<usize>::lazy(|| 1)), "<unevaluated>");
}
