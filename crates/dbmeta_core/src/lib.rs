//! Core infrastructure for dbmeta applications.
//!
//! dbmeta libraries only emit `tracing` events; installing a subscriber is
//! left to the application. [`TracingConfig`] is the standard way to do so.
//!
//! # Example
//!
//! ```
//! use dbmeta_core::{TracingConfig, TracingFormat};
//! use tracing::Level;
//!
//! TracingConfig::default()
//!     .with_level(Level::DEBUG)
//!     .with_format(TracingFormat::Compact)
//!     .with_env_filter("dbmeta_model=debug,dbmeta_registry=info")
//!     .init()
//!     .ok();
//! ```

mod tracing_config;

pub use tracing_config::{LOG_ENV_VAR, TracingConfig, TracingFormat};
