//! Error types for meta model descriptors.

use dbmeta_types::BoxError;

/// Error creating the meta model bound by a descriptor.
///
/// Fails only the call that produced it. The descriptor keeps no record of
/// the failure, so a later call retries from scratch.
#[derive(Debug, thiserror::Error)]
pub enum InstantiationError {
    /// No type is registered under the declared name, or it is registered
    /// under a different base.
    #[error("can't create meta model instance '{type_name}': type not found or not a valid subtype")]
    UnresolvedType {
        /// Declared implementation type name.
        type_name: String,
    },

    /// The registered constructor returned an error.
    #[error("can't instantiate meta model '{type_name}'")]
    Construction {
        /// Declared implementation type name.
        type_name: String,
        /// Error reported by the constructor.
        #[source]
        source: BoxError,
    },

    /// The registered constructor panicked.
    #[error("can't instantiate meta model '{type_name}': constructor panicked: {message}")]
    Panicked {
        /// Declared implementation type name.
        type_name: String,
        /// Panic payload, if it was a string.
        message: String,
    },
}

impl InstantiationError {
    /// Returns the declared type name the failure refers to.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::UnresolvedType { type_name }
            | Self::Construction { type_name, .. }
            | Self::Panicked { type_name, .. } => type_name,
        }
    }
}

/// A declarative record that cannot form a usable descriptor.
///
/// Descriptor construction itself tolerates these (missing attributes become
/// empty values); registries report them as load-time warnings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedConfig {
    /// The record has no `id` attribute, or it is blank.
    #[error("meta model record has no id")]
    MissingId,

    /// The record's `class` attribute is missing or blank.
    #[error("meta model '{id}' declares no implementation class")]
    BlankClass {
        /// Identifier of the offending record.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::error::Error as _;

    #[test]
    fn construction_error_keeps_cause() {
        let err = InstantiationError::Construction {
            type_name: "x.Model".into(),
            source: "no connection".into(),
        };

        assert_eq!(err.type_name(), "x.Model");
        assert_eq!(err.to_string(), "can't instantiate meta model 'x.Model'");
        assert_eq!(err.source().unwrap().to_string(), "no connection");
    }

    #[test]
    fn unresolved_message_names_type() {
        let err = InstantiationError::UnresolvedType {
            type_name: "x.Missing".into(),
        };
        let message = err.to_string();
        assert!(message.contains("'x.Missing'"));
        assert!(message.contains("type not found or not a valid subtype"));
    }
}
