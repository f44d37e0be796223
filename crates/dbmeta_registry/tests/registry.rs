//! Integration tests for the `dbmeta_registry` crate.

use dbmeta_config::Element;
use dbmeta_model::{
    BoxError, GenericMetaModel, MetaModel, MetaModelBinding, register_factory,
    register_meta_model,
};
use dbmeta_registry::{MetaModelRegistry, RegistryError};
use dbmeta_types::TypeCatalog;
use std::sync::Arc;

// ─────────────────────────────────────────────────────────────────────
// Registered meta models
// ─────────────────────────────────────────────────────────────────────

struct H2MetaModel {
    binding: MetaModelBinding,
}

impl MetaModel for H2MetaModel {
    fn binding(&self) -> &MetaModelBinding {
        &self.binding
    }

    fn column_name<'a>(&'a self, kind: &str, column: &'a str) -> &'a str {
        match (kind, column) {
            ("PROCEDURE", "PROCEDURE_NAME") => "ALIAS_NAME",
            _ => match self.binding().object(kind) {
                Some(object) => object.column_name(column),
                None => column,
            },
        }
    }
}

fn create_h2(binding: MetaModelBinding) -> Result<Box<dyn MetaModel>, BoxError> {
    Ok(Box::new(H2MetaModel { binding }))
}

register_meta_model!("test.h2.H2MetaModel", "H2 test meta model", create_h2);

fn manifest() -> serde_json::Value {
    serde_json::json!({
        "name": "meta-models",
        "contributor": "test.bundle",
        "children": [
            {
                "name": "meta",
                "attributes": {
                    "id": "h2",
                    "class": "test.h2.H2MetaModel",
                    "driverClass": "org.h2.Driver"
                },
                "children": [
                    {
                        "name": "object",
                        "attributes": { "type": "TABLE" },
                        "children": [
                            { "name": "column", "attributes": { "id": "REMARKS", "name": "COMMENT" } }
                        ]
                    }
                ]
            },
            {
                "name": "meta",
                "attributes": {
                    "id": "missing",
                    "class": "test.NotRegistered",
                    "driverClass": "com.example.Missing"
                }
            },
            {
                "name": "meta",
                "attributes": { "class": "test.NoId" }
            },
            {
                "name": "meta",
                "attributes": { "id": "blank-class", "class": "" }
            },
            {
                "name": "unrelated",
                "attributes": { "id": "ignored" }
            }
        ]
    })
}

fn load() -> MetaModelRegistry {
    let root = Element::from_value(manifest()).unwrap();
    MetaModelRegistry::load(&root, dbmeta_model::global_catalog())
}

// ─────────────────────────────────────────────────────────────────────
// Loading
// ─────────────────────────────────────────────────────────────────────

#[test]
fn load_skips_malformed_records() {
    let registry = load();

    assert_eq!(registry.ids(), vec!["h2", "missing"]);
    assert!(registry.descriptor("blank-class").is_none());
    assert!(registry.descriptor("ignored").is_none());
}

#[test]
fn from_json_reports_parse_errors() {
    let err = MetaModelRegistry::from_json("{ not json", Arc::new(TypeCatalog::new()))
        .unwrap_err();
    assert!(matches!(err, RegistryError::Config(_)));
}

// ─────────────────────────────────────────────────────────────────────
// Dispatch
// ─────────────────────────────────────────────────────────────────────

#[test]
fn driver_dispatch_uses_registered_meta_model() {
    let registry = load();

    let model = registry.meta_model_for_driver("org.h2.Driver").unwrap();
    assert!(model.is::<H2MetaModel>());
    assert_eq!(model.binding().id(), "h2");
    assert_eq!(model.column_name("TABLE", "REMARKS"), "COMMENT");
    assert_eq!(model.column_name("PROCEDURE", "PROCEDURE_NAME"), "ALIAS_NAME");

    let again = registry.meta_model("h2").unwrap();
    assert!(Arc::ptr_eq(&model, &again));
}

#[test]
fn unknown_driver_falls_back_to_generic() {
    let registry = load();

    let descriptor = registry.descriptor_for_driver("com.example.Other");
    assert!(Arc::ptr_eq(&descriptor, &registry.default_descriptor()));

    let model = registry.meta_model_for_driver("com.example.Other").unwrap();
    assert!(model.is::<GenericMetaModel>());
}

#[test]
fn unresolvable_descriptor_fails_per_call() {
    let registry = load();

    let err = registry
        .meta_model_for_driver("com.example.Missing")
        .unwrap_err();
    match err {
        RegistryError::Instantiation(err) => assert_eq!(err.type_name(), "test.NotRegistered"),
        other => panic!("expected instantiation error, got {other:?}"),
    }

    // Other descriptors are unaffected.
    assert!(registry.meta_model_for_driver("org.h2.Driver").is_ok());
}

#[test]
fn unknown_id_is_reported() {
    let registry = load();
    let err = registry.meta_model("nope").unwrap_err();
    assert!(matches!(err, RegistryError::UnknownMetaModel(id) if id == "nope"));
}

#[test]
fn deferred_registration_makes_descriptor_usable() {
    let catalog = Arc::new(TypeCatalog::new());
    let root = Element::new("meta-models").with_child(
        Element::new("meta")
            .with_attribute("id", "deferred")
            .with_attribute("class", "test.Deferred")
            .with_attribute("driverClass", "com.example.Deferred"),
    );
    let registry = MetaModelRegistry::load(&root, Arc::clone(&catalog));

    assert!(registry.meta_model("deferred").is_err());

    register_factory(&catalog, "test.Deferred", create_h2);
    let model = registry.meta_model_for_driver("com.example.Deferred").unwrap();
    assert_eq!(model.binding().id(), "deferred");
}
