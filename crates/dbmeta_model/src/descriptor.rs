//! Meta model descriptors.
//!
//! A [`MetaModelDescriptor`] is built from one `meta` record:
//!
//! | Attribute/Child | Meaning |
//! |-----------------|---------|
//! | `id` | descriptor identifier |
//! | `class` | registered meta model type name |
//! | `driverClass` | comma-separated driver classes, split without trimming |
//! | child `object` | one [`MetaObject`] override per child, keyed by its `type` |
//!
//! Construction never fails; absent attributes become empty values. The meta
//! model itself is created on the first [`instance`](MetaModelDescriptor::instance)
//! call and cached for the descriptor's lifetime.
//!
//! # Concurrency
//!
//! First-time instantiation is serialized by a per-descriptor lock. At most
//! one instance is ever cached and every caller observes that same instance.
//! Once cached, `instance()` is a lock-free read. A failed attempt caches
//! nothing and releases the lock, so the next caller retries.

use crate::binding::MetaModelBinding;
use crate::error::{InstantiationError, MalformedConfig};
use crate::model::{GenericMetaModel, MetaModel, MetaModelFactory};
use crate::object::{MetaObject, ObjectOverrides};
use dbmeta_config::{ConfigElement, attrs};
use dbmeta_types::{TypeCatalog, TypeReference};
use parking_lot::Mutex;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, OnceLock};

/// Child record kind holding object overrides.
pub const OBJECT_ELEMENT: &str = "object";

/// Binding between a set of drivers and the meta model that interprets their
/// metadata.
pub struct MetaModelDescriptor {
    binding: MetaModelBinding,
    type_ref: TypeReference,
    catalog: Arc<TypeCatalog>,
    instance: OnceLock<Arc<dyn MetaModel>>,
    init_lock: Mutex<()>,
}

impl core::fmt::Debug for MetaModelDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MetaModelDescriptor")
            .field("id", &self.id())
            .field("class", &self.type_name())
            .field("driver_classes", &self.driver_classes())
            .field("objects", &self.binding.objects().kinds())
            .field("instantiated", &self.is_instantiated())
            .finish()
    }
}

impl MetaModelDescriptor {
    /// Identifier of the default descriptor.
    pub const DEFAULT_ID: &'static str = "generic";

    /// Contributor recorded on the default descriptor.
    pub const DEFAULT_CONTRIBUTOR: &'static str = "dbmeta.generic";

    /// Creates the default descriptor.
    ///
    /// Bound to [`GenericMetaModel`] with no drivers and no overrides. The
    /// instance is created eagerly, so [`instance`](Self::instance) never
    /// resolves anything and the descriptor's catalog stays empty.
    #[must_use]
    pub fn generic() -> Self {
        let binding = MetaModelBinding::new(
            Self::DEFAULT_ID.to_string(),
            Some(Self::DEFAULT_CONTRIBUTOR.to_string()),
            Vec::new(),
            ObjectOverrides::new(),
        );
        let instance: Arc<dyn MetaModel> = Arc::new(GenericMetaModel::new(binding.clone()));

        Self {
            binding,
            type_ref: TypeReference::new(GenericMetaModel::TYPE_NAME),
            catalog: Arc::new(TypeCatalog::new()),
            instance: OnceLock::from(instance),
            init_lock: Mutex::new(()),
        }
    }

    /// Creates a descriptor from a `meta` record, resolving its `class`
    /// against `catalog` when first instantiated.
    #[must_use]
    pub fn from_element<E: ConfigElement>(element: &E, catalog: Arc<TypeCatalog>) -> Self {
        let id = element.attribute(attrs::ID).unwrap_or_default().to_string();
        let objects = ObjectOverrides::from_elements(element.children(OBJECT_ELEMENT));
        let driver_classes = parse_driver_classes(element.attribute(attrs::DRIVER_CLASS));
        let class = element.attribute(attrs::CLASS).unwrap_or_default();

        tracing::debug!(
            id = %id,
            class,
            drivers = driver_classes.len(),
            objects = objects.len(),
            "meta model descriptor parsed"
        );

        Self {
            binding: MetaModelBinding::new(
                id,
                element.contributor().map(str::to_string),
                driver_classes,
                objects,
            ),
            type_ref: TypeReference::new(class),
            catalog,
            instance: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Checks the record-level requirements a registry enforces on top of
    /// construction: a non-blank `id` and `class`.
    ///
    /// # Errors
    ///
    /// Returns the first unmet requirement.
    pub fn validate(&self) -> Result<(), MalformedConfig> {
        if self.id().trim().is_empty() {
            return Err(MalformedConfig::MissingId);
        }
        if self.type_name().trim().is_empty() {
            return Err(MalformedConfig::BlankClass {
                id: self.id().to_string(),
            });
        }
        Ok(())
    }

    /// Returns the descriptor identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.binding.id()
    }

    /// Returns the bundle that contributed the record, if known.
    #[must_use]
    pub fn contributor(&self) -> Option<&str> {
        self.binding.contributor()
    }

    /// Returns the driver classes this descriptor applies to.
    ///
    /// Empty when the record declares none.
    #[must_use]
    pub fn driver_classes(&self) -> &[String] {
        self.binding.driver_classes()
    }

    /// Returns `true` if `driver_class` is one of this descriptor's drivers.
    #[must_use]
    pub fn applies_to(&self, driver_class: &str) -> bool {
        self.driver_classes().iter().any(|d| d == driver_class)
    }

    /// Returns the override for an object kind.
    #[must_use]
    pub fn object(&self, kind: &str) -> Option<&MetaObject> {
        self.binding.object(kind)
    }

    /// Returns the declared meta model type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.type_ref.declared_name()
    }

    /// Returns the catalog the declared type is resolved against.
    #[must_use]
    pub fn catalog(&self) -> &Arc<TypeCatalog> {
        &self.catalog
    }

    /// Returns the binding handed to this descriptor's meta model.
    #[must_use]
    pub fn binding(&self) -> &MetaModelBinding {
        &self.binding
    }

    /// Returns `true` once a meta model instance is cached.
    #[must_use]
    pub fn is_instantiated(&self) -> bool {
        self.instance.get().is_some()
    }

    /// Returns the meta model, creating it on first call.
    ///
    /// # Errors
    ///
    /// Returns [`InstantiationError`] if the declared type is not registered
    /// as a meta model or its constructor fails. Nothing is cached on error.
    pub fn instance(&self) -> Result<Arc<dyn MetaModel>, InstantiationError> {
        if let Some(instance) = self.instance.get() {
            return Ok(Arc::clone(instance));
        }

        let _guard = self.init_lock.lock();
        if let Some(instance) = self.instance.get() {
            return Ok(Arc::clone(instance));
        }

        let created = self.create_instance().inspect_err(|err| {
            tracing::warn!(id = %self.id(), error = %err, "meta model instantiation failed");
        })?;
        Ok(Arc::clone(self.instance.get_or_init(|| created)))
    }

    fn create_instance(&self) -> Result<Arc<dyn MetaModel>, InstantiationError> {
        let type_name = self.type_name();
        let handle = self
            .type_ref
            .resolve::<MetaModelFactory>(&self.catalog)
            .ok_or_else(|| InstantiationError::UnresolvedType {
                type_name: type_name.to_string(),
            })?;

        let factory = handle.factory();
        let binding = self.binding.clone();
        let model = panic::catch_unwind(AssertUnwindSafe(|| factory(binding)))
            .map_err(|payload| InstantiationError::Panicked {
                type_name: type_name.to_string(),
                message: panic_message(payload.as_ref()),
            })?
            .map_err(|source| InstantiationError::Construction {
                type_name: type_name.to_string(),
                source,
            })?;

        tracing::debug!(id = %self.id(), class = type_name, "meta model instantiated");
        Ok(Arc::from(model))
    }
}

impl Default for MetaModelDescriptor {
    fn default() -> Self {
        Self::generic()
    }
}

/// Splits a `driverClass` attribute on `,`.
///
/// Segments are kept exactly as written, including empty ones. An absent or
/// empty attribute yields no drivers.
fn parse_driver_classes(value: Option<&str>) -> Vec<String> {
    match value {
        None | Some("") => Vec::new(),
        Some(list) => list.split(',').map(str::to_string).collect(),
    }
}

fn panic_message(payload: &(dyn core::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbmeta_config::Element;

    #[test]
    fn driver_classes_split_without_trimming() {
        assert_eq!(parse_driver_classes(Some("a,b,c")), vec!["a", "b", "c"]);
        assert_eq!(parse_driver_classes(Some("a,,b")), vec!["a", "", "b"]);
        assert_eq!(parse_driver_classes(Some(" a , b")), vec![" a ", " b"]);
        assert_eq!(parse_driver_classes(Some("a,")), vec!["a", ""]);
        assert!(parse_driver_classes(Some("")).is_empty());
        assert!(parse_driver_classes(None).is_empty());
    }

    #[test]
    fn missing_attributes_degrade_to_empty() {
        let descriptor =
            MetaModelDescriptor::from_element(&Element::new("meta"), Arc::new(TypeCatalog::new()));

        assert_eq!(descriptor.id(), "");
        assert_eq!(descriptor.type_name(), "");
        assert!(descriptor.driver_classes().is_empty());
        assert!(descriptor.object("TABLE").is_none());
        assert_eq!(descriptor.contributor(), None);
        assert!(!descriptor.is_instantiated());
    }

    #[test]
    fn validate_reports_missing_id_then_blank_class() {
        let catalog = Arc::new(TypeCatalog::new());

        let no_id = MetaModelDescriptor::from_element(
            &Element::new("meta").with_attribute("class", "x.Model"),
            Arc::clone(&catalog),
        );
        assert_eq!(no_id.validate(), Err(MalformedConfig::MissingId));

        let blank_class = MetaModelDescriptor::from_element(
            &Element::new("meta")
                .with_attribute("id", "pg")
                .with_attribute("class", "  "),
            Arc::clone(&catalog),
        );
        assert_eq!(
            blank_class.validate(),
            Err(MalformedConfig::BlankClass { id: "pg".into() })
        );

        let ok = MetaModelDescriptor::from_element(
            &Element::new("meta")
                .with_attribute("id", "pg")
                .with_attribute("class", "x.Model"),
            catalog,
        );
        assert_eq!(ok.validate(), Ok(()));
    }

    #[test]
    fn applies_to_matches_exact_driver_class() {
        let descriptor = MetaModelDescriptor::from_element(
            &Element::new("meta")
                .with_attribute("driverClass", "org.h2.Driver,org.hsqldb.jdbc.JDBCDriver"),
            Arc::new(TypeCatalog::new()),
        );
        assert!(descriptor.applies_to("org.h2.Driver"));
        assert!(!descriptor.applies_to("org.h2"));
    }

    #[test]
    fn panic_message_extracts_strings() {
        let payload: Box<dyn core::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");

        let payload: Box<dyn core::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");

        let payload: Box<dyn core::any::Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(payload.as_ref()), "non-string panic payload");
    }
}
