//! First-use race on the null-type registrar.
//!
//! Runs as its own process, so `get_null_type` really is called for the
//! first time here, concurrently, with nothing else registered.

use std::sync::{Arc, Barrier};
use std::thread;
use wren_bridge::{get_null_type, registry, NULL_TYPE_NAME};

const THREADS: usize = 8;

#[test]
fn test_concurrent_first_use_registers_exactly_once() {
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                get_null_type()
            })
        })
        .collect();

    let ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let first = ids[0];
    assert!(
        ids.iter().all(|&id| id == first),
        "every thread must observe the same TypeId, got {:?}",
        ids
    );

    // A second registration of the name would have panicked in the losing
    // thread; the registry holding exactly one entry proves the one-time-init
    // body ran once.
    let reg = registry::global();
    assert_eq!(reg.lookup(NULL_TYPE_NAME), Some(first));
    assert_eq!(reg.len(), 1, "exactly one registration must have occurred");
}
