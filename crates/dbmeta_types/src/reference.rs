//! Declared type names and their cached resolution.

use crate::catalog::{TypeCatalog, TypeEntry, TypeHandle};
use core::any::Any;
use std::sync::OnceLock;

/// A type name as declared in configuration, resolved against a
/// [`TypeCatalog`] on first use.
///
/// The first successful resolution is cached; later calls skip the catalog.
/// Only an entry that passed the base check is cached. An unknown name or a
/// name registered under another base caches nothing, so a type registered
/// (or re-registered) later is still found.
#[derive(Debug)]
pub struct TypeReference {
    declared_name: String,
    resolved: OnceLock<TypeEntry>,
}

impl TypeReference {
    /// Creates an unresolved reference to `declared_name`.
    #[must_use]
    pub fn new(declared_name: impl Into<String>) -> Self {
        Self {
            declared_name: declared_name.into(),
            resolved: OnceLock::new(),
        }
    }

    /// Returns the name as declared.
    #[must_use]
    pub fn declared_name(&self) -> &str {
        &self.declared_name
    }

    /// Returns `true` if a resolution already succeeded.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Loads the declared type without checking its base.
    ///
    /// Returns the cached entry once a resolution succeeded, otherwise the
    /// catalog's current entry. Nothing is cached here.
    #[must_use]
    pub fn load(&self, catalog: &TypeCatalog) -> Option<TypeEntry> {
        match self.resolved.get() {
            Some(entry) => Some(entry.clone()),
            None => catalog.load_type(&self.declared_name),
        }
    }

    /// Resolves the declared type as a subtype of `F`.
    ///
    /// Returns `None` if the name is unknown to `catalog` or was registered
    /// under a different base.
    #[must_use]
    pub fn resolve<F>(&self, catalog: &TypeCatalog) -> Option<TypeHandle<F>>
    where
        F: Any + Send + Sync + Copy,
    {
        if let Some(handle) = self.resolved.get().and_then(TypeEntry::downcast::<F>) {
            return Some(handle);
        }

        let entry = catalog.load_type(&self.declared_name)?;
        let Some(handle) = entry.downcast::<F>() else {
            tracing::debug!(
                type_name = %self.declared_name,
                registered_as = entry.base_name(),
                expected = core::any::type_name::<F>(),
                "type is not a subtype of the expected base"
            );
            return None;
        };
        // A racing caller may have cached first; both entries passed the check.
        let _ = self.resolved.set(entry);
        Some(handle)
    }
}
