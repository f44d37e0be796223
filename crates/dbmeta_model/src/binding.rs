//! Read-only handle from a meta model back to its descriptor.

use crate::object::{MetaObject, ObjectOverrides};
use std::sync::Arc;

#[derive(Debug)]
struct DescriptorData {
    id: String,
    contributor: Option<String>,
    driver_classes: Vec<String>,
    objects: ObjectOverrides,
}

/// Shared view of a descriptor's immutable data.
///
/// A [`MetaModelDescriptor`](crate::MetaModelDescriptor) owns its meta model;
/// the model in turn receives a binding when constructed so it can read the
/// descriptor's overrides without a reference cycle. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct MetaModelBinding {
    data: Arc<DescriptorData>,
}

impl MetaModelBinding {
    pub(crate) fn new(
        id: String,
        contributor: Option<String>,
        driver_classes: Vec<String>,
        objects: ObjectOverrides,
    ) -> Self {
        Self {
            data: Arc::new(DescriptorData {
                id,
                contributor,
                driver_classes,
                objects,
            }),
        }
    }

    /// Returns the descriptor identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.data.id
    }

    /// Returns the bundle that contributed the descriptor, if known.
    #[must_use]
    pub fn contributor(&self) -> Option<&str> {
        self.data.contributor.as_deref()
    }

    /// Returns the driver classes the descriptor applies to.
    #[must_use]
    pub fn driver_classes(&self) -> &[String] {
        &self.data.driver_classes
    }

    /// Returns the override for an object kind.
    #[must_use]
    pub fn object(&self, kind: &str) -> Option<&MetaObject> {
        self.data.objects.get(kind)
    }

    /// Returns the full override table.
    #[must_use]
    pub fn objects(&self) -> &ObjectOverrides {
        &self.data.objects
    }

    /// Returns `true` if both handles view the same descriptor.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}
