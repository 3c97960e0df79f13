//! End-to-end scenario: null type across threads, then handle resolution
//! with an untouched refcount.

use std::ffi::c_void;
use std::thread;
use wren_bridge::{get_null_type, resolve_handle, ObjRef, TypeFlags, Value};

#[test]
fn test_null_type_then_handle_resolution() {
    // Tests in this binary may race on subscriber installation; losing is fine.
    let _ = wren_bridge::init_dev_logging();

    // (1) + (2): same identifier from different threads.
    let t1 = get_null_type();
    let t2 = thread::spawn(get_null_type).join().unwrap();
    assert_eq!(t1, t2);
    assert!(wren_bridge::registry::global()
        .flags(t1)
        .unwrap()
        .contains(TypeFlags::DERIVABLE));

    // (3): a double-indirection slot resolves to the exact reference, with
    // the refcount unchanged before and after.
    let x = ObjRef::new(t1);
    let refcount_before = x.refcount();

    let handle = &x as *const ObjRef as *const c_void;
    let resolved = unsafe { resolve_handle(handle) };

    assert_eq!(resolved, x.as_ptr());
    assert_eq!(x.refcount(), refcount_before);
    assert_eq!(unsafe { &*resolved }.type_id(), t1);
}

#[test]
fn test_null_values_round_trip_through_generic_machinery() {
    let t = get_null_type();

    let v = Value::new(t).unwrap();
    let clones: Vec<Value> = (0..32).map(|_| v.clone()).collect();

    for c in &clones {
        assert_eq!(c.type_id(), t);
        assert_eq!(*c.data(), [0, 0]);
    }
    drop(clones);
    assert_eq!(*v.data(), [0, 0]);
}
