//! wren-bridge: core glue for embedding a Wren-style interpreter in a host
//! dynamic type system.
//!
//! Two responsibilities live here:
//!
//! - representing the interpreter's null as a first-class fundamental type of
//!   the host registry ([`get_null_type`]), and
//! - resolving a double-indirection object handle to the object pointer it
//!   stores ([`handle::resolve_handle`]).
//!
//! The crate also carries the minimal host substrate those two need: the
//! fundamental-type registry, value-table descriptors, the generic
//! tagged-value machinery, and refcounted object handles. The interpreter
//! itself, its garbage collector, and its calling convention are out of
//! scope; they belong to the embedding layer above.

pub mod core;
pub mod handle;
pub mod logging;
pub mod null_type;

// Re-export commonly used items
pub use crate::core::object::{Obj, ObjRef};
pub use crate::core::registry::{self, TypeFlags, TypeId, TypeRegistry};
pub use crate::core::value::Value;
pub use crate::core::value_table::{CollectArg, ValueData, ValueTable};
pub use crate::handle::resolve_handle;
pub use crate::logging::{init_dev_logging, init_logging, LogConfig, LogFormat, LogOutput};
pub use crate::null_type::{get_null_type, NULL_TYPE_NAME};
