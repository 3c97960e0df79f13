//! Tagged values
//!
//! A `Value` pairs a registered `TypeId` with the fixed inline payload area.
//! Every lifecycle transition (create, clone, drop) and both marshaling paths
//! dispatch through the type's registered `ValueTable`.

use crate::core::registry::{self, TypeId};
use crate::core::value_table::{CollectArg, ValueData, ValueTable, VALUE_DATA_WORDS};
use std::fmt;

/// A value tagged with a registered type
pub struct Value {
    type_id: TypeId,
    data: ValueData,
}

impl Value {
    /// Create a value of the given type with a zeroed, then initialized,
    /// payload. Returns None if the type was never registered.
    pub fn new(type_id: TypeId) -> Option<Value> {
        let table = registry::global().value_table(type_id)?;
        let mut data: ValueData = [0; VALUE_DATA_WORDS];
        (table.init)(&mut data);
        Some(Value { type_id, data })
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Raw payload words, for inspection only
    pub fn data(&self) -> &ValueData {
        &self.data
    }

    /// Fill the payload from collected variadic-call arguments
    pub fn collect(&mut self, args: &[CollectArg]) -> Result<(), String> {
        let table = self.table();
        (table.collect)(&mut self.data, args)
    }

    /// Copy the payload out into caller-provided output cells
    pub fn lcopy(&self, args: &mut [CollectArg]) -> Result<(), String> {
        (self.table().lcopy)(&self.data, args)
    }

    fn table(&self) -> ValueTable {
        // A Value only exists for a registered type, and types are never
        // unregistered, so this lookup cannot fail.
        registry::global()
            .value_table(self.type_id)
            .expect("value of unregistered type")
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        let table = self.table();
        let mut data: ValueData = [0; VALUE_DATA_WORDS];
        (table.init)(&mut data);
        (table.copy)(&self.data, &mut data);
        Value {
            type_id: self.type_id,
            data,
        }
    }
}

impl Drop for Value {
    fn drop(&mut self) {
        (self.table().finalize)(&mut self.data);
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("type_id", &self.type_id)
            .field("data", &self.data)
            .finish()
    }
}
