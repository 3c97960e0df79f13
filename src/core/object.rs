//! Minimal host object handles
//!
//! `ObjRef` is an owning, atomically refcounted reference to a heap `Obj`
//! header. It is `#[repr(transparent)]` over the object pointer, so a slot
//! holding an `ObjRef` is layout-compatible with a slot holding `*mut Obj`;
//! the indirect-handle resolver relies on that.

use crate::core::registry::TypeId;
use std::ptr::NonNull;
use std::sync::atomic::{fence, AtomicUsize, Ordering};

/// Heap header of a host object
pub struct Obj {
    strong: AtomicUsize,
    type_id: TypeId,
}

impl Obj {
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }
}

/// Owning reference to an `Obj`; clone increments, drop decrements
#[repr(transparent)]
pub struct ObjRef(NonNull<Obj>);

impl ObjRef {
    /// Allocate a new object of the given registered type, refcount 1
    pub fn new(type_id: TypeId) -> ObjRef {
        let obj = Box::new(Obj {
            strong: AtomicUsize::new(1),
            type_id,
        });
        ObjRef(NonNull::from(Box::leak(obj)))
    }

    /// Raw pointer to the underlying object; no ownership transfer
    pub fn as_ptr(&self) -> *mut Obj {
        self.0.as_ptr()
    }

    pub fn type_id(&self) -> TypeId {
        unsafe { self.0.as_ref() }.type_id
    }

    /// Current strong count
    pub fn refcount(&self) -> usize {
        unsafe { self.0.as_ref() }.strong.load(Ordering::Acquire)
    }
}

impl Clone for ObjRef {
    fn clone(&self) -> Self {
        unsafe { self.0.as_ref() }.strong.fetch_add(1, Ordering::Relaxed);
        ObjRef(self.0)
    }
}

impl Drop for ObjRef {
    fn drop(&mut self) {
        let obj = unsafe { self.0.as_ref() };
        if obj.strong.fetch_sub(1, Ordering::Release) == 1 {
            fence(Ordering::Acquire);
            drop(unsafe { Box::from_raw(self.0.as_ptr()) });
        }
    }
}

unsafe impl Send for ObjRef {}
unsafe impl Sync for ObjRef {}
