//! Value-table descriptors
//!
//! A `ValueTable` tells the generic value machinery how values of one
//! registered type are initialized, copied, finalized, and marshaled through
//! the variadic-call path. Payload-free types install all-no-op tables.

use std::ffi::c_void;

/// Number of inline payload words in a tagged value
pub const VALUE_DATA_WORDS: usize = 2;

/// Fixed inline payload area of a tagged value
pub type ValueData = [usize; VALUE_DATA_WORDS];

/// One cell of a variadic-call argument list.
///
/// The variants correspond to the `"i"` (integer-like), `"d"` (double-like),
/// and `"p"` (pointer-like) format characters of a table's marshaling tags.
#[derive(Clone, Copy, Debug)]
pub enum CollectArg {
    Int(i64),
    Double(f64),
    Ptr(*mut c_void),
}

/// Initialize a freshly-allocated payload
pub type InitFn = fn(&mut ValueData);
/// Release whatever the payload holds
pub type FinalizeFn = fn(&mut ValueData);
/// Copy `src` into an already-initialized `dst`
pub type CopyFn = fn(&ValueData, &mut ValueData);
/// Fill the payload from collected variadic-call arguments
pub type CollectFn = fn(&mut ValueData, &[CollectArg]) -> Result<(), String>;
/// Copy the payload out into caller-provided output cells
pub type LcopyFn = fn(&ValueData, &mut [CollectArg]) -> Result<(), String>;

/// How values of one registered type behave when stored, copied, or marshaled.
///
/// Exactly five callback slots plus the two marshaling-format tags consumed
/// by the variadic-call machinery.
#[derive(Clone, Copy, Debug)]
pub struct ValueTable {
    pub init: InitFn,
    pub finalize: FinalizeFn,
    pub copy: CopyFn,
    pub collect: CollectFn,
    pub lcopy: LcopyFn,
    /// Calling-convention shape consumed by `collect`
    pub collect_format: &'static str,
    /// Calling-convention shape consumed by `lcopy`
    pub lcopy_format: &'static str,
}
