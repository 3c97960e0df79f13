//! Host type-system core
//!
//! This module contains the fundamental-type registry, value-table
//! descriptors, the generic tagged-value machinery, and object handles.

pub mod object;
pub mod registry;
pub mod value;
pub mod value_table;

pub use object::{Obj, ObjRef};
pub use registry::{TypeFlags, TypeId, TypeRegistry};
pub use value::Value;
pub use value_table::{CollectArg, ValueData, ValueTable};
