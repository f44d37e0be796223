//! Compile-time registration of meta model types.
//!
//! Meta model crates register their types with [`register_meta_model!`],
//! which submits a [`MetaModelRegistration`] through `inventory`. The
//! [`global_catalog`] collects every submitted registration the first time it
//! is used, so descriptors can refer to implementations by name without the
//! generic layer depending on them.
//!
//! ## Usage
//!
//! ```ignore
//! use dbmeta_model::{BoxError, MetaModel, MetaModelBinding, register_meta_model};
//!
//! struct MySqlMetaModel { binding: MetaModelBinding }
//!
//! impl MetaModel for MySqlMetaModel {
//!     fn binding(&self) -> &MetaModelBinding { &self.binding }
//! }
//!
//! fn create(binding: MetaModelBinding) -> Result<Box<dyn MetaModel>, BoxError> {
//!     Ok(Box::new(MySqlMetaModel { binding }))
//! }
//!
//! register_meta_model!("vendor.mysql.MySqlMetaModel", "MySQL metadata", create);
//! ```

use crate::model::MetaModelFactory;
use dbmeta_types::{TypeCatalog, TypeEntry};
use std::sync::{Arc, OnceLock};

/// Registry entry for a meta model type.
///
/// Submitted with [`register_meta_model!`]; collected by
/// [`catalog_from_registrations`].
pub struct MetaModelRegistration {
    /// Type name referenced by the `class` attribute of descriptor records.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Constructor for the type.
    pub factory: MetaModelFactory,
}

inventory::collect!(MetaModelRegistration);

/// Registers a meta model type for discovery by name.
///
/// Arguments are the type name, a description, and a
/// [`MetaModelFactory`](crate::MetaModelFactory).
#[macro_export]
macro_rules! register_meta_model {
    ($name:expr, $description:expr, $factory:expr $(,)?) => {
        $crate::inventory::submit! {
            $crate::MetaModelRegistration {
                name: $name,
                description: $description,
                factory: $factory,
            }
        }
    };
}

/// Registers `factory` in `catalog` as a [`MetaModel`](crate::MetaModel) type.
///
/// Prefer this over [`TypeCatalog::register`] for meta models: the factory
/// parameter pins the base type, so a closure or function item is stored as
/// a [`MetaModelFactory`] and resolves as one.
pub fn register_factory(
    catalog: &TypeCatalog,
    name: impl Into<String>,
    factory: MetaModelFactory,
) -> Option<TypeEntry> {
    catalog.register::<MetaModelFactory>(name, factory)
}

/// Builds a fresh catalog holding every submitted [`MetaModelRegistration`].
#[must_use]
pub fn catalog_from_registrations() -> TypeCatalog {
    let catalog = TypeCatalog::new();
    for registration in inventory::iter::<MetaModelRegistration> {
        if register_factory(&catalog, registration.name, registration.factory).is_some() {
            tracing::warn!(
                type_name = registration.name,
                "meta model type registered more than once"
            );
        }
    }
    catalog
}

/// Returns the process-wide catalog of registered meta model types.
///
/// Built from [`catalog_from_registrations`] on first call. Types may still be
/// added later through [`register_factory`].
#[must_use]
pub fn global_catalog() -> Arc<TypeCatalog> {
    static CATALOG: OnceLock<Arc<TypeCatalog>> = OnceLock::new();
    Arc::clone(CATALOG.get_or_init(|| {
        let catalog = catalog_from_registrations();
        tracing::debug!(types = catalog.len(), "meta model catalog initialized");
        Arc::new(catalog)
    }))
}

/// Lists all submitted meta model registrations as `(name, description)`.
#[must_use]
pub fn list_meta_models() -> Vec<(&'static str, &'static str)> {
    let mut models: Vec<_> = inventory::iter::<MetaModelRegistration>
        .into_iter()
        .map(|registration| (registration.name, registration.description))
        .collect();
    models.sort_unstable();
    models
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GenericMetaModel, MetaModel};

    #[test]
    fn generic_model_is_registered() {
        let models = list_meta_models();
        assert!(
            models
                .iter()
                .any(|(name, _)| *name == GenericMetaModel::TYPE_NAME),
            "available: {models:?}"
        );
        assert!(global_catalog().contains(GenericMetaModel::TYPE_NAME));
    }

    #[test]
    fn registrations_have_descriptions() {
        for (name, description) in list_meta_models() {
            assert!(!name.is_empty());
            assert!(!description.is_empty(), "{name} has no description");
        }
    }

    #[test]
    fn fresh_catalog_is_independent_of_global() {
        let catalog = catalog_from_registrations();
        assert!(catalog.contains(GenericMetaModel::TYPE_NAME));

        fn factory(
            binding: crate::MetaModelBinding,
        ) -> Result<Box<dyn MetaModel>, dbmeta_types::BoxError> {
            Ok(Box::new(GenericMetaModel::new(binding)))
        }
        register_factory(&catalog, "local.only", factory);
        assert!(catalog.contains("local.only"));
        assert!(!global_catalog().contains("local.only"));
    }
}
