//! # dbmeta Internal Library
//!
//! Re-exports the core dbmeta crates for convenience.

/// Declarative configuration records.
pub use dbmeta_config;

/// Tracing setup.
pub use dbmeta_core;

/// Meta model descriptors and strategies.
pub use dbmeta_model;

/// Descriptor registry with driver dispatch.
pub use dbmeta_registry;

/// Name-based type catalog.
pub use dbmeta_types;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use dbmeta_config::{ConfigElement, Element};
    pub use dbmeta_core::{TracingConfig, TracingFormat};
    pub use dbmeta_model::{
        GenericMetaModel, InstantiationError, MetaModel, MetaModelBinding, MetaModelDescriptor,
        MetaObject, global_catalog, register_factory, register_meta_model,
    };
    pub use dbmeta_registry::{MetaModelRegistry, RegistryError};
    pub use dbmeta_types::{TypeCatalog, TypeReference};
}
