//! Per-object-kind metadata overrides.
//!
//! A descriptor may override how a driver's metadata is read for individual
//! object kinds (`TABLE`, `COLUMN`, `PROCEDURE`, ...). Each override is one
//! `object` child record:
//!
//! ```text
//! object  type="TABLE"  catalogSupported="false"
//! ├── column  id="TABLE_NAME"  name="NAME"
//! └── column  id="REMARKS"     name="COMMENT"
//! ```

use dbmeta_config::{ConfigElement, attrs};
use hashbrown::HashMap;
use indexmap::IndexMap;

/// Child record kind for column mappings inside an `object` record.
pub const COLUMN_ELEMENT: &str = "column";

/// Overrides for a single object kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaObject {
    kind: String,
    columns: IndexMap<String, String>,
    properties: IndexMap<String, String>,
}

impl MetaObject {
    /// Creates an empty override for `kind`.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// Builds an override from an `object` record.
    ///
    /// The `type` attribute becomes the key (empty if absent). Every other
    /// attribute is kept as a property. `column` children without an `id` are
    /// ignored; a column without a `name` maps to its own id.
    #[must_use]
    pub fn from_element<E: ConfigElement>(element: &E) -> Self {
        let kind = element.attribute(attrs::TYPE).unwrap_or_default().to_string();

        let properties = element
            .attribute_names()
            .into_iter()
            .filter(|name| *name != attrs::TYPE)
            .filter_map(|name| {
                element
                    .attribute(name)
                    .map(|value| (name.to_string(), value.to_string()))
            })
            .collect();

        let columns = element
            .children(COLUMN_ELEMENT)
            .into_iter()
            .filter_map(|column| {
                let id = column.attribute(attrs::ID)?;
                let name = column.attribute(attrs::NAME).unwrap_or(id);
                Some((id.to_string(), name.to_string()))
            })
            .collect();

        Self {
            kind,
            columns,
            properties,
        }
    }

    /// Sets a column mapping.
    #[must_use]
    pub fn with_column(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.columns.insert(id.into(), name.into());
        self
    }

    /// Sets a property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Returns the object kind this override is keyed by.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.kind
    }

    /// Returns the driver-specific name for a standard metadata column, or
    /// `id` itself when it is not overridden.
    #[must_use]
    pub fn column_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.columns.get(id).map_or(id, String::as_str)
    }

    /// Returns the overridden column mappings as `(id, name)` pairs.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }

    /// Returns a free-form property value.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

/// Table of [`MetaObject`]s keyed by object kind.
///
/// Built once; a later record with the same key replaces an earlier one.
#[derive(Debug, Clone, Default)]
pub struct ObjectOverrides {
    objects: HashMap<String, MetaObject>,
}

impl ObjectOverrides {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }

    /// Builds the table from `records`, last record winning on duplicate keys.
    #[must_use]
    pub fn from_elements<'a, E, I>(records: I) -> Self
    where
        E: ConfigElement + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        records
            .into_iter()
            .map(MetaObject::from_element)
            .collect()
    }

    /// Returns the override for `kind`.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&MetaObject> {
        self.objects.get(kind)
    }

    /// Returns the number of distinct object kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if there are no overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns the overridden object kinds, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.objects.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl FromIterator<MetaObject> for ObjectOverrides {
    fn from_iter<T: IntoIterator<Item = MetaObject>>(iter: T) -> Self {
        let mut objects = HashMap::new();
        for object in iter {
            if let Some(previous) = objects.insert(object.key().to_string(), object) {
                tracing::debug!(kind = previous.key(), "object override replaced");
            }
        }
        Self { objects }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbmeta_config::Element;

    fn table_record() -> Element {
        Element::new("object")
            .with_attribute("type", "TABLE")
            .with_attribute("catalogSupported", "false")
            .with_child(
                Element::new("column")
                    .with_attribute("id", "TABLE_NAME")
                    .with_attribute("name", "NAME"),
            )
            .with_child(Element::new("column").with_attribute("id", "REMARKS"))
            .with_child(Element::new("column").with_attribute("name", "orphan"))
    }

    #[test]
    fn from_element_reads_key_columns_and_properties() {
        let object = MetaObject::from_element(&table_record());

        assert_eq!(object.key(), "TABLE");
        assert_eq!(object.column_name("TABLE_NAME"), "NAME");
        assert_eq!(object.column_name("REMARKS"), "REMARKS");
        assert_eq!(object.column_name("TABLE_SCHEM"), "TABLE_SCHEM");
        assert_eq!(object.columns().count(), 2);
        assert_eq!(object.property("catalogSupported"), Some("false"));
        assert_eq!(object.property("type"), None);
    }

    /// Attribute-only record backed by a slice, without column children.
    struct FlatRecord(&'static [(&'static str, &'static str)]);

    impl ConfigElement for FlatRecord {
        fn name(&self) -> &str {
            "object"
        }

        fn attribute(&self, name: &str) -> Option<&str> {
            self.0
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
        }

        fn attribute_names(&self) -> Vec<&str> {
            self.0.iter().map(|(key, _)| *key).collect()
        }

        fn children(&self, _kind: &str) -> Vec<&Self> {
            Vec::new()
        }
    }

    #[test]
    fn custom_record_reader_keeps_properties() {
        let record = FlatRecord(&[("type", "SEQUENCE"), ("supported", "false")]);
        let object = MetaObject::from_element(&record);

        assert_eq!(object.key(), "SEQUENCE");
        assert_eq!(object.property("supported"), Some("false"));
        assert_eq!(object.property("type"), None);
        assert_eq!(object.columns().count(), 0);
    }

    #[test]
    fn missing_type_keys_by_empty_string() {
        let object = MetaObject::from_element(&Element::new("object"));
        assert_eq!(object.key(), "");
    }

    #[test]
    fn duplicate_kinds_keep_last() {
        let overrides: ObjectOverrides = [
            MetaObject::new("TABLE").with_property("source", "first"),
            MetaObject::new("COLUMN"),
            MetaObject::new("TABLE").with_property("source", "second"),
        ]
        .into_iter()
        .collect();

        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.kinds(), vec!["COLUMN", "TABLE"]);
        assert_eq!(
            overrides.get("TABLE").unwrap().property("source"),
            Some("second")
        );
    }

    #[test]
    fn lookup_is_exact_match() {
        let overrides: ObjectOverrides = [MetaObject::new("TABLE")].into_iter().collect();
        assert!(overrides.get("TABLE").is_some());
        assert!(overrides.get("table").is_none());
        assert!(overrides.get("VIEW").is_none());
    }
}
