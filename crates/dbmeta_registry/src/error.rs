//! Error types for the meta model registry.

use dbmeta_config::ConfigError;
use dbmeta_model::InstantiationError;

/// Error obtaining a meta model from the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No descriptor is registered under the requested id.
    #[error("unknown meta model: {0}")]
    UnknownMetaModel(String),

    /// The descriptor's meta model could not be created.
    #[error(transparent)]
    Instantiation(#[from] InstantiationError),

    /// The registry source could not be parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
