//! Registry of meta model descriptors.
//!
//! Decouples database-access code from concrete meta models: callers ask for
//! the meta model of a driver class, and the registry picks the descriptor
//! that declares it (or the generic default) and instantiates its model.
//!
//! # Example
//!
//! ```
//! use dbmeta_model::{GenericMetaModel, MetaModel, global_catalog};
//! use dbmeta_registry::MetaModelRegistry;
//!
//! let registry = MetaModelRegistry::from_json(
//!     r#"{
//!         "name": "meta-models",
//!         "children": [{
//!             "name": "meta",
//!             "attributes": {
//!                 "id": "h2",
//!                 "class": "dbmeta.generic.GenericMetaModel",
//!                 "driverClass": "org.h2.Driver"
//!             }
//!         }]
//!     }"#,
//!     global_catalog(),
//! )
//! .unwrap();
//!
//! let model = registry.meta_model_for_driver("org.h2.Driver").unwrap();
//! assert_eq!(model.binding().id(), "h2");
//!
//! // Unknown drivers fall back to the generic descriptor.
//! let fallback = registry.meta_model_for_driver("com.example.Unknown").unwrap();
//! assert!(fallback.is::<GenericMetaModel>());
//! ```

pub mod error;
mod registry;

pub use error::RegistryError;
pub use registry::{META_ELEMENT, MetaModelRegistry};
