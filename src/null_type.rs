//! The interpreter's null as a host fundamental type
//!
//! A value of this type carries no payload; the `TypeId` itself represents
//! the interpreter's null. Every value-table slot is a deliberate no-op, and
//! the marshaling-format tags are kept only so the variadic-call machinery
//! accepts the type.

use crate::core::registry::{self, TypeFlags, TypeId};
use crate::core::value_table::{CollectArg, ValueData, ValueTable};
use once_cell::sync::Lazy;

/// Registered name of the null fundamental type
pub const NULL_TYPE_NAME: &str = "wren-null";

static NULL_TYPE: Lazy<TypeId> = Lazy::new(|| {
    registry::global().register_fundamental(NULL_TYPE_NAME, TypeFlags::DERIVABLE, NULL_VALUE_TABLE)
});

static NULL_VALUE_TABLE: ValueTable = ValueTable {
    init: value_nop,
    finalize: value_nop,
    copy: value_copy_nop,
    collect: value_collect_nop,
    lcopy: value_lcopy_nop,
    collect_format: "i",
    lcopy_format: "p",
};

fn value_nop(_data: &mut ValueData) {}

fn value_copy_nop(_src: &ValueData, _dst: &mut ValueData) {}

fn value_collect_nop(_data: &mut ValueData, _args: &[CollectArg]) -> Result<(), String> {
    Ok(())
}

fn value_lcopy_nop(_data: &ValueData, _args: &mut [CollectArg]) -> Result<(), String> {
    Ok(())
}

/// Get the process-wide null `TypeId`.
///
/// The first call registers the type; every later call, from any thread,
/// returns the cached identifier. Safe to race: concurrent first calls still
/// produce exactly one registration, and all callers observe the same id.
pub fn get_null_type() -> TypeId {
    *NULL_TYPE
}
