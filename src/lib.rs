//! Driver-specific database metadata strategies, bound by declarative
//! descriptors and instantiated on demand.
//!

pub use dbmeta_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use dbmeta_internal::prelude::*;
}
