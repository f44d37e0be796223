//! Meta model registry.

use crate::error::RegistryError;
use dbmeta_config::{ConfigElement, Element};
use dbmeta_model::{MalformedConfig, MetaModel, MetaModelDescriptor};
use dbmeta_types::TypeCatalog;
use indexmap::IndexMap;
use std::sync::Arc;

/// Child record kind holding one meta model declaration.
pub const META_ELEMENT: &str = "meta";

/// Registry of [`MetaModelDescriptor`]s.
///
/// Descriptors are keyed by id and kept in load order. Each is fully built
/// before it is inserted and shared as an `Arc` afterwards, so readers only
/// ever see complete descriptors.
///
/// A generic default descriptor is always present and answers for drivers no
/// loaded descriptor declares.
pub struct MetaModelRegistry {
    catalog: Arc<TypeCatalog>,
    descriptors: IndexMap<String, Arc<MetaModelDescriptor>>,
    default: Arc<MetaModelDescriptor>,
}

impl core::fmt::Debug for MetaModelRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MetaModelRegistry")
            .field("descriptors", &self.ids())
            .field("catalog", &self.catalog)
            .finish()
    }
}

impl MetaModelRegistry {
    /// Creates a registry with only the generic default descriptor.
    #[must_use]
    pub fn new(catalog: Arc<TypeCatalog>) -> Self {
        Self {
            catalog,
            descriptors: IndexMap::new(),
            default: Arc::new(MetaModelDescriptor::generic()),
        }
    }

    /// Builds a registry from the `meta` children of `root`.
    ///
    /// Malformed records are skipped with a warning; loading itself never
    /// fails.
    #[must_use]
    pub fn load<E: ConfigElement>(root: &E, catalog: Arc<TypeCatalog>) -> Self {
        let mut registry = Self::new(catalog);
        let mut skipped = 0_usize;

        for record in root.children(META_ELEMENT) {
            if let Err(err) = registry.add_element(record) {
                skipped += 1;
                tracing::warn!(
                    contributor = record.contributor().unwrap_or("<unknown>"),
                    error = %err,
                    "skipping meta model record"
                );
            }
        }

        tracing::info!(
            loaded = registry.len(),
            skipped,
            "meta model registry loaded"
        );
        registry
    }

    /// Parses `source` as a JSON record tree and loads it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Config`] if `source` is not a valid record.
    pub fn from_json(source: &str, catalog: Arc<TypeCatalog>) -> Result<Self, RegistryError> {
        let root = Element::from_json(source)?;
        Ok(Self::load(&root, catalog))
    }

    /// Builds a descriptor from one `meta` record and registers it.
    ///
    /// A descriptor with the same id replaces the existing one.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedConfig`] if the record has no id or no class.
    pub fn add_element<E: ConfigElement>(
        &mut self,
        element: &E,
    ) -> Result<Arc<MetaModelDescriptor>, MalformedConfig> {
        let descriptor = MetaModelDescriptor::from_element(element, Arc::clone(&self.catalog));
        descriptor.validate()?;
        Ok(self.insert(descriptor))
    }

    /// Registers a prepared descriptor, replacing one with the same id.
    pub fn insert(&mut self, descriptor: MetaModelDescriptor) -> Arc<MetaModelDescriptor> {
        let descriptor = Arc::new(descriptor);
        let id = descriptor.id().to_string();
        if self
            .descriptors
            .insert(id, Arc::clone(&descriptor))
            .is_some()
        {
            tracing::warn!(id = descriptor.id(), "meta model descriptor redefined");
        }
        descriptor
    }

    /// Returns the descriptor registered under `id`.
    #[must_use]
    pub fn descriptor(&self, id: &str) -> Option<Arc<MetaModelDescriptor>> {
        self.descriptors.get(id).cloned()
    }

    /// Returns all loaded descriptors in load order, excluding the default.
    pub fn descriptors(&self) -> impl Iterator<Item = &Arc<MetaModelDescriptor>> {
        self.descriptors.values()
    }

    /// Returns the generic default descriptor.
    #[must_use]
    pub fn default_descriptor(&self) -> Arc<MetaModelDescriptor> {
        Arc::clone(&self.default)
    }

    /// Returns the first descriptor, in load order, declaring `driver_class`,
    /// or the default descriptor if none does.
    #[must_use]
    pub fn descriptor_for_driver(&self, driver_class: &str) -> Arc<MetaModelDescriptor> {
        self.descriptors
            .values()
            .find(|descriptor| descriptor.applies_to(driver_class))
            .cloned()
            .unwrap_or_else(|| {
                tracing::debug!(driver_class, "no meta model declared, using default");
                self.default_descriptor()
            })
    }

    /// Returns the meta model for `driver_class`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Instantiation`] if the selected descriptor's
    /// meta model cannot be created.
    pub fn meta_model_for_driver(
        &self,
        driver_class: &str,
    ) -> Result<Arc<dyn MetaModel>, RegistryError> {
        Ok(self.descriptor_for_driver(driver_class).instance()?)
    }

    /// Returns the meta model of the descriptor registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownMetaModel`] if no such descriptor
    /// exists, or [`RegistryError::Instantiation`] if its meta model cannot be
    /// created.
    pub fn meta_model(&self, id: &str) -> Result<Arc<dyn MetaModel>, RegistryError> {
        let descriptor = self
            .descriptor(id)
            .ok_or_else(|| RegistryError::UnknownMetaModel(id.to_string()))?;
        Ok(descriptor.instance()?)
    }

    /// Returns the catalog descriptors resolve their types against.
    #[must_use]
    pub fn catalog(&self) -> &Arc<TypeCatalog> {
        &self.catalog
    }

    /// Lists loaded descriptor ids in load order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.descriptors.keys().map(String::as_str).collect()
    }

    /// Returns the number of loaded descriptors, excluding the default.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` if no descriptors were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for MetaModelRegistry {
    fn default() -> Self {
        Self::new(dbmeta_model::global_catalog())
    }
}
