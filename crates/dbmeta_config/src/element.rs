//! Configuration record reader and the bundled [`Element`] tree.

use crate::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Read access to a declarative configuration record.
///
/// Implementors provide attribute lookup by name, the list of attribute names
/// and child lookup by kind. Attributes not listed by
/// [`attribute_names`](Self::attribute_names) are invisible to consumers that
/// enumerate a record, such as object override properties.
pub trait ConfigElement {
    /// Returns the record's own kind (e.g. `"meta"` or `"object"`).
    fn name(&self) -> &str;

    /// Returns an attribute value, or `None` if the attribute is absent.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Returns the names of all attributes present on the record, in
    /// declaration order.
    fn attribute_names(&self) -> Vec<&str>;

    /// Returns the child records of the given kind, in declaration order.
    fn children(&self, kind: &str) -> Vec<&Self>;

    /// Returns the bundle that contributed this record, if known.
    fn contributor(&self) -> Option<&str> {
        None
    }
}

/// An owned configuration record.
///
/// Attributes keep declaration order. Serializes as:
///
/// ```json
/// { "name": "object", "attributes": { "type": "TABLE" }, "children": [] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Record kind.
    pub name: String,
    /// Bundle that contributed the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributor: Option<String>,
    /// Attribute values by name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,
    /// Nested records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// Creates a record of the given kind with no attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parses a record tree from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `source` is not a valid record.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a record tree from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `value` does not have record shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Sets an attribute, replacing any previous value.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Appends a child record.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the contributing bundle.
    #[must_use]
    pub fn with_contributor(mut self, contributor: impl Into<String>) -> Self {
        self.contributor = Some(contributor.into());
        self
    }
}

impl ConfigElement for Element {
    fn name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn attribute_names(&self) -> Vec<&str> {
        self.attributes.keys().map(String::as_str).collect()
    }

    fn children(&self, kind: &str) -> Vec<&Self> {
        self.children
            .iter()
            .filter(|child| child.name == kind)
            .collect()
    }

    fn contributor(&self) -> Option<&str> {
        self.contributor.as_deref()
    }
}
