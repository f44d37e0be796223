//! Declarative configuration records for dbmeta.
//!
//! Descriptors are built from a tree of named records carrying string
//! attributes and child records, in the manner of an extension-point
//! manifest:
//!
//! ```text
//! meta-models
//! └── meta  id="mysql"  class="vendor.MySqlMetaModel"  driverClass="com.mysql.Driver"
//!     ├── object  type="TABLE"
//!     │   └── column  id="TABLE_NAME"  name="TABLE_NAME"
//!     └── object  type="COLUMN"
//! ```
//!
//! Consumers only depend on the [`ConfigElement`] trait. [`Element`] is the
//! bundled implementation, built in code or deserialized from JSON.
//!
//! # Example
//!
//! ```
//! use dbmeta_config::{ConfigElement, Element};
//!
//! let element = Element::from_json(r#"{
//!     "name": "meta",
//!     "attributes": { "id": "mysql", "driverClass": "com.mysql.Driver" },
//!     "children": [ { "name": "object", "attributes": { "type": "TABLE" } } ]
//! }"#).unwrap();
//!
//! assert_eq!(element.attribute("id"), Some("mysql"));
//! assert_eq!(element.children("object").len(), 1);
//! ```

pub mod element;
pub mod error;

pub use element::{ConfigElement, Element};
pub use error::ConfigError;

/// Attribute names shared by dbmeta records.
pub mod attrs {
    /// Record identifier.
    pub const ID: &str = "id";
    /// Implementation type name.
    pub const CLASS: &str = "class";
    /// Comma-separated driver identifiers.
    pub const DRIVER_CLASS: &str = "driverClass";
    /// Object kind of an override record.
    pub const TYPE: &str = "type";
    /// Display or mapped name.
    pub const NAME: &str = "name";
}
