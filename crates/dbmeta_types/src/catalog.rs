//! Type catalog storage.

use core::any::{Any, TypeId};
use hashbrown::HashMap;
use parking_lot::RwLock;
use std::sync::Arc;

// ─────────────────────────────────────────────────────────────────────────────
// TypeEntry
// ─────────────────────────────────────────────────────────────────────────────

struct EntryInner {
    name: Arc<str>,
    base_id: TypeId,
    base_name: &'static str,
    factory: Box<dyn Any + Send + Sync>,
}

/// A type registered in a [`TypeCatalog`], not yet checked against any base.
///
/// Cloning is cheap; all clones share the same registration.
#[derive(Clone)]
pub struct TypeEntry {
    inner: Arc<EntryInner>,
}

impl core::fmt::Debug for TypeEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeEntry")
            .field("name", &self.inner.name)
            .field("base", &self.inner.base_name)
            .finish()
    }
}

impl TypeEntry {
    fn new<F>(name: Arc<str>, factory: F) -> Self
    where
        F: Any + Send + Sync + Copy,
    {
        Self {
            inner: Arc::new(EntryInner {
                name,
                base_id: TypeId::of::<F>(),
                base_name: core::any::type_name::<F>(),
                factory: Box::new(factory),
            }),
        }
    }

    /// Returns the name the entry was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the Rust type name of the base this entry was registered as.
    #[must_use]
    pub fn base_name(&self) -> &'static str {
        self.inner.base_name
    }

    /// Checks whether this entry can be constructed as the base `F`.
    #[must_use]
    pub fn is_subtype_of<F: Any>(&self) -> bool {
        self.inner.base_id == TypeId::of::<F>()
    }

    /// Narrows the entry to a typed handle for base `F`.
    ///
    /// Returns `None` if the entry was registered under a different base.
    #[must_use]
    pub fn downcast<F>(&self) -> Option<TypeHandle<F>>
    where
        F: Any + Send + Sync + Copy,
    {
        let factory = *self.inner.factory.downcast_ref::<F>()?;
        Some(TypeHandle {
            name: Arc::clone(&self.inner.name),
            factory,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TypeHandle
// ─────────────────────────────────────────────────────────────────────────────

/// A resolved type known to be constructible as base `F`.
#[derive(Debug, Clone)]
pub struct TypeHandle<F> {
    name: Arc<str>,
    factory: F,
}

impl<F: Copy> TypeHandle<F> {
    /// Returns the registered type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the factory used to construct instances of this type.
    #[must_use]
    pub fn factory(&self) -> F {
        self.factory
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TypeCatalog
// ─────────────────────────────────────────────────────────────────────────────

/// Shared map from type name to factory.
///
/// The catalog is internally synchronized: entries may be registered at any
/// time, including after [`TypeReference`](crate::TypeReference)s that point at
/// them were created. A name that is not yet registered simply fails to
/// resolve until it is.
#[derive(Default)]
pub struct TypeCatalog {
    entries: RwLock<HashMap<String, TypeEntry>>,
}

impl core::fmt::Debug for TypeCatalog {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeCatalog")
            .field("types", &self.names())
            .finish()
    }
}

impl TypeCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Registers `factory` under `name` with `F` as its base.
    ///
    /// Re-registering a name replaces the previous entry, which is returned.
    /// References that already cached the old entry keep it.
    pub fn register<F>(&self, name: impl Into<String>, factory: F) -> Option<TypeEntry>
    where
        F: Any + Send + Sync + Copy,
    {
        let name = name.into();
        let entry = TypeEntry::new(Arc::from(name.as_str()), factory);
        tracing::debug!(
            type_name = %name,
            base = entry.base_name(),
            "registered type"
        );
        self.entries.write().insert(name, entry)
    }

    /// Looks up the entry registered under `name`.
    #[must_use]
    pub fn load_type(&self, name: &str) -> Option<TypeEntry> {
        self.entries.read().get(name).cloned()
    }

    /// Looks up `name` and narrows it to base `F` in one step.
    #[must_use]
    pub fn resolve<F>(&self, name: &str) -> Option<TypeHandle<F>>
    where
        F: Any + Send + Sync + Copy,
    {
        self.load_type(name)?.downcast::<F>()
    }

    /// Checks if a type is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Lists registered type names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
