//! The meta model strategy trait and its built-in base implementation.

use crate::binding::MetaModelBinding;
use dbmeta_types::BoxError;
use downcast_rs::{DowncastSync, impl_downcast};

/// Constructor registered for a meta model type.
///
/// The only input is the binding to the descriptor that requested the
/// instance; meta models take no other configuration.
pub type MetaModelFactory = fn(MetaModelBinding) -> Result<Box<dyn MetaModel>, BoxError>;

/// Driver-specific interpretation of database metadata.
///
/// Implementations are registered by name (see
/// [`register_meta_model!`](crate::register_meta_model)) and created by a
/// [`MetaModelDescriptor`](crate::MetaModelDescriptor) on first use. The
/// provided methods consult the descriptor's object overrides; implementations
/// override them where a driver needs more than a column rename.
///
/// Trait objects support `is`, `downcast_ref` and `downcast_arc` to reach the
/// concrete type.
pub trait MetaModel: DowncastSync {
    /// Returns the binding to the owning descriptor.
    fn binding(&self) -> &MetaModelBinding;

    /// Returns the result-set column holding `column` for objects of `kind`.
    fn column_name<'a>(&'a self, kind: &str, column: &'a str) -> &'a str {
        match self.binding().object(kind) {
            Some(object) => object.column_name(column),
            None => column,
        }
    }

    /// Returns an override property for objects of `kind`.
    fn object_property(&self, kind: &str, name: &str) -> Option<&str> {
        self.binding().object(kind)?.property(name)
    }

    /// Returns whether objects of `kind` are exposed by the driver.
    ///
    /// Reads the boolean `supported` property of the override, defaulting to
    /// `true` when absent or unparsable.
    fn supports(&self, kind: &str) -> bool {
        self.object_property(kind, "supported")
            .and_then(|value| value.parse::<bool>().ok())
            .unwrap_or(true)
    }
}

impl_downcast!(sync MetaModel);

impl core::fmt::Debug for dyn MetaModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MetaModel")
            .field("descriptor", &self.binding().id())
            .finish()
    }
}

/// Built-in base meta model.
///
/// Applies only the descriptor's overrides. Used by the default descriptor and
/// by any driver without a dedicated meta model.
#[derive(Debug, Clone)]
pub struct GenericMetaModel {
    binding: MetaModelBinding,
}

impl GenericMetaModel {
    /// Registered type name.
    pub const TYPE_NAME: &'static str = "dbmeta.generic.GenericMetaModel";

    /// Creates a generic meta model bound to a descriptor.
    #[must_use]
    pub fn new(binding: MetaModelBinding) -> Self {
        Self { binding }
    }

    fn factory(binding: MetaModelBinding) -> Result<Box<dyn MetaModel>, BoxError> {
        Ok(Box::new(Self::new(binding)))
    }
}

impl MetaModel for GenericMetaModel {
    fn binding(&self) -> &MetaModelBinding {
        &self.binding
    }
}

crate::register_meta_model!(
    GenericMetaModel::TYPE_NAME,
    "Generic metadata interpretation with descriptor overrides only",
    GenericMetaModel::factory,
);
