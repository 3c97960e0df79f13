//! Fundamental-type registry for the host value system
//!
//! Allocates compact, process-wide `TypeId`s for fundamental types and keeps
//! the per-type `ValueTable` used by the generic value machinery. Backed by
//! concurrent hash maps so registration and lookup are safe from any thread.

use crate::core::value_table::ValueTable;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global type registry, initialized on first use
static REGISTRY: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::new);

/// Upper bound on fundamental type slots. Running out is unrecoverable.
const MAX_FUNDAMENTAL_TYPES: u64 = 255;

/// Opaque process-wide identifier for a registered type.
///
/// Ids are allocated once, never reused, and remain valid for the lifetime
/// of the process. Id 0 is reserved and never allocated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TypeId(u64);

impl TypeId {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        TypeId(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registration flags for a fundamental type
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct TypeFlags(u32);

impl TypeFlags {
    pub const NONE: TypeFlags = TypeFlags(0);
    /// Future variant types may specialize this type
    pub const DERIVABLE: TypeFlags = TypeFlags(1 << 0);

    pub fn contains(self, other: TypeFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for TypeFlags {
    type Output = TypeFlags;

    fn bitor(self, rhs: TypeFlags) -> TypeFlags {
        TypeFlags(self.0 | rhs.0)
    }
}

struct TypeInfo {
    name: &'static str,
    flags: TypeFlags,
    table: ValueTable,
}

/// Thread-safe fundamental-type registry
pub struct TypeRegistry {
    /// TypeId → registered type info
    types: DashMap<TypeId, TypeInfo>,
    /// Type name → TypeId
    by_name: DashMap<&'static str, TypeId>,
    /// Next fundamental slot (0 is reserved)
    next_id: AtomicU64,
}

impl TypeRegistry {
    fn new() -> Self {
        Self {
            types: DashMap::new(),
            by_name: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a new fundamental type and return its identifier.
    ///
    /// Panics if the fundamental slot space is exhausted or `name` is already
    /// registered; both are unrecoverable misconfigurations of the host
    /// process, not runtime errors.
    pub fn register_fundamental(
        &self,
        name: &'static str,
        flags: TypeFlags,
        table: ValueTable,
    ) -> TypeId {
        match self.by_name.entry(name) {
            Entry::Occupied(_) => {
                panic!("fundamental type {:?} is already registered", name)
            }
            Entry::Vacant(slot) => {
                let raw = self.next_id.fetch_add(1, Ordering::SeqCst);
                if raw > MAX_FUNDAMENTAL_TYPES {
                    panic!(
                        "fundamental type registry exhausted ({} slots)",
                        MAX_FUNDAMENTAL_TYPES
                    );
                }
                let id = TypeId(raw);
                self.types.insert(id, TypeInfo { name, flags, table });
                slot.insert(id);
                tracing::debug!(name, id = raw, "registered fundamental type");
                id
            }
        }
    }

    /// Get the TypeId registered under `name` (returns None if unknown)
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).map(|id| *id)
    }

    /// Get the registered name for a TypeId
    pub fn name(&self, id: TypeId) -> Option<&'static str> {
        self.types.get(&id).map(|info| info.name)
    }

    /// Get the registration flags for a TypeId
    pub fn flags(&self, id: TypeId) -> Option<TypeFlags> {
        self.types.get(&id).map(|info| info.flags)
    }

    /// Get the value table installed for a TypeId
    pub fn value_table(&self, id: TypeId) -> Option<ValueTable> {
        self.types.get(&id).map(|info| info.table)
    }

    /// Check whether a TypeId is registered
    pub fn contains(&self, id: TypeId) -> bool {
        self.types.contains_key(&id)
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Access the process-wide registry
pub fn global() -> &'static TypeRegistry {
    &REGISTRY
}
