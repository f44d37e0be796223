//! Meta model descriptors for dbmeta.
//!
//! A *meta model* is the strategy a generic database layer uses to interpret
//! driver metadata (which result-set columns hold table names, which object
//! kinds a driver exposes, and so on). Concrete meta models are chosen per
//! driver at runtime from declarative records; the generic layer never names
//! them.
//!
//! # Overview
//!
//! - [`MetaModelDescriptor`] - one declarative binding: identifier, driver
//!   classes, per-object overrides, and the lazily created [`MetaModel`].
//! - [`MetaObject`] / [`ObjectOverrides`] - per-object-kind overrides.
//! - [`MetaModel`] - the strategy trait; [`GenericMetaModel`] is the built-in
//!   base implementation.
//! - [`MetaModelBinding`] - the handle a strategy uses to read its descriptor.
//! - [`register_meta_model!`] - compile-time registration of strategies into
//!   the [`global_catalog`].
//!
//! # Example
//!
//! ```
//! use dbmeta_config::Element;
//! use dbmeta_model::{MetaModelDescriptor, GenericMetaModel, global_catalog};
//!
//! let element = Element::new("meta")
//!     .with_attribute("id", "acme")
//!     .with_attribute("class", GenericMetaModel::TYPE_NAME)
//!     .with_attribute("driverClass", "com.acme.Driver,com.acme.XaDriver");
//!
//! let descriptor = MetaModelDescriptor::from_element(&element, global_catalog());
//! assert_eq!(descriptor.driver_classes(), ["com.acme.Driver", "com.acme.XaDriver"]);
//!
//! let model = descriptor.instance().unwrap();
//! assert_eq!(model.binding().id(), "acme");
//! ```

pub mod binding;
pub mod descriptor;
pub mod error;
pub mod model;
pub mod object;
pub mod registration;

pub use binding::MetaModelBinding;
pub use descriptor::MetaModelDescriptor;
pub use error::{InstantiationError, MalformedConfig};
pub use model::{GenericMetaModel, MetaModel, MetaModelFactory};
pub use object::{MetaObject, ObjectOverrides};
pub use registration::{
    MetaModelRegistration, catalog_from_registrations, global_catalog, list_meta_models,
    register_factory,
};

// Re-exported for `register_meta_model!` expansions in downstream crates.
#[doc(hidden)]
pub use inventory;

pub use dbmeta_types::BoxError;
