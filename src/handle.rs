//! Indirect object-handle resolution
//!
//! The embedding layer sometimes holds a double-indirection handle: a pointer
//! to a slot that itself holds an object pointer. `resolve_handle` is the
//! type-erased primitive that reads the slot. It is the crate's only public
//! unsafe operation; everything above it stays in safe code.

use crate::core::object::Obj;
use std::ffi::c_void;

/// Resolve a double-indirection handle to the object pointer it stores.
///
/// The slot is read exactly once and returned verbatim: no refcount is
/// touched, no ownership transfers, and a null slot resolves to null.
///
/// # Safety
///
/// `slot` must be non-null, aligned for a pointer, and address a live memory
/// location holding a single object pointer (an `ObjRef` slot qualifies, via
/// its transparent repr). The caller is responsible for the lifetime of the
/// target object and for ensuring the slot is not concurrently mutated while
/// this call reads it. No validation is performed; violating the contract is
/// undefined behavior.
pub unsafe fn resolve_handle(slot: *const c_void) -> *mut Obj {
    unsafe { *slot.cast::<*mut Obj>() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::object::ObjRef;
    use crate::null_type::get_null_type;
    use proptest::prelude::*;
    use std::ptr;

    #[test]
    fn test_resolves_stored_pointer() {
        let x = ObjRef::new(get_null_type());
        let handle = &x as *const ObjRef as *const c_void;

        let resolved = unsafe { resolve_handle(handle) };
        assert_eq!(resolved, x.as_ptr());
    }

    #[test]
    fn test_null_slot_resolves_to_null() {
        let slot: *mut Obj = ptr::null_mut();
        let handle = &slot as *const *mut Obj as *const c_void;

        assert!(unsafe { resolve_handle(handle) }.is_null());
    }

    #[test]
    fn test_repeated_resolution_leaves_slot_and_refcount_alone() {
        let x = ObjRef::new(get_null_type());
        let slot = x.as_ptr();
        let handle = &slot as *const *mut Obj as *const c_void;
        let bits_before = slot as usize;

        for _ in 0..64 {
            assert_eq!(unsafe { resolve_handle(handle) }, slot);
        }
        assert_eq!(slot as usize, bits_before);
        assert_eq!(x.refcount(), 1, "transfer none");
    }

    proptest! {
        // The slot contents are returned bit-for-bit, whatever they are.
        #[test]
        fn test_resolution_is_bit_exact(addr in any::<usize>()) {
            let slot = addr as *mut Obj;
            let handle = &slot as *const *mut Obj as *const c_void;

            let resolved = unsafe { resolve_handle(handle) };
            prop_assert_eq!(resolved as usize, addr);
            prop_assert_eq!(slot as usize, addr);
        }
    }
}
