//! Name-based type resolution for dbmeta.
//!
//! Rust has no class loader, so "construct the type called `x.y.Z`" is modeled
//! as a lookup in a [`TypeCatalog`]: a map from type name to a factory value.
//! The factory's own Rust type plays the role of the base type, so a lookup
//! only succeeds when the entry was registered under the base the caller asks
//! for.
//!
//! # Overview
//!
//! - [`TypeCatalog`] - shared, internally synchronized name → factory map.
//! - [`TypeEntry`] - an untyped catalog entry (the "loaded type").
//! - [`TypeHandle`] - an entry proven to be a subtype of a given base.
//! - [`TypeReference`] - a declared name that resolves against a catalog once.
//!
//! # Example
//!
//! ```
//! use dbmeta_types::{TypeCatalog, TypeReference};
//!
//! type Greeter = fn() -> String;
//!
//! fn hello() -> String {
//!     "hello".to_string()
//! }
//!
//! let catalog = TypeCatalog::new();
//! catalog.register::<Greeter>("demo.Hello", hello);
//!
//! let type_ref = TypeReference::new("demo.Hello");
//! let handle = type_ref.resolve::<Greeter>(&catalog).unwrap();
//! assert_eq!((handle.factory())(), "hello");
//!
//! // Registered, but not under the requested base.
//! assert!(type_ref.resolve::<fn() -> u32>(&catalog).is_none());
//! ```

mod catalog;
mod reference;

pub use catalog::{TypeCatalog, TypeEntry, TypeHandle};
pub use reference::TypeReference;

/// Boxed error used for construction failures reported by factories.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;
