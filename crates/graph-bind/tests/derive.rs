// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::net::Ipv4Addr;

use graph_bind::{
    BindError, Bindable, GraphBind, ScalarKind, ScalarValue, SchemaObject, build_fields, resolve,
};
use serde_json::json;

#[derive(GraphBind, Default)]
struct Example {
    #[graph(name = "ID")]
    id: i64,
    #[graph(name = "int_type")]
    int_type: isize,
    #[graph(name = "int8_type")]
    int8_type: i8,
    #[graph(name = "int16_type")]
    int16_type: i16,
    #[graph(name = "int32_type")]
    int32_type: i32,
    #[graph(name = "int64_type")]
    int64_type: i64,
    #[graph(name = "float32_type")]
    float32_type: f32,
    #[graph(name = "float64_type")]
    float64_type: f64,
    #[graph(name = "bool_type")]
    bool_type: bool,
    #[graph(name = "string_type")]
    string_type: String,
}

fn example() -> Example {
    Example {
        id: 1,
        int_type: 1,
        int8_type: 8,
        int16_type: 16,
        int32_type: 32,
        int64_type: 64,
        float32_type: 32.0,
        float64_type: 64.0,
        bool_type: true,
        string_type: "string".to_string(),
    }
}

#[test_log::test]
fn every_primitive_kind() {
    let object = SchemaObject::new("Example", &example()).unwrap();

    let kinds: Vec<_> = object
        .fields()
        .iter()
        .map(|(name, binding)| (name, binding.kind()))
        .collect();

    assert_eq!(
        kinds,
        vec![
            ("ID", ScalarKind::Id),
            ("int_type", ScalarKind::Int),
            ("int8_type", ScalarKind::Int),
            ("int16_type", ScalarKind::Int),
            ("int32_type", ScalarKind::Int),
            ("int64_type", ScalarKind::Int),
            ("float32_type", ScalarKind::Float),
            ("float64_type", ScalarKind::Float),
            ("bool_type", ScalarKind::Boolean),
            ("string_type", ScalarKind::String),
        ]
    );

    assert_eq!(
        object.resolve_json(&example()),
        json!({
            "ID": 1,
            "int_type": 1,
            "int8_type": 8,
            "int16_type": 16,
            "int32_type": 32,
            "int64_type": 64,
            "float32_type": 32.0,
            "float64_type": 64.0,
            "bool_type": true,
            "string_type": "string",
        })
    );
}

#[derive(GraphBind, Default)]
struct Audit {
    #[serde(rename = "created_by")]
    created_by: String,
    #[graph(name = "revision")]
    revision: u32,
}

#[derive(GraphBind)]
struct Document {
    #[graph(name = "ID")]
    id: String,
    #[serde(rename = "title")]
    title: String,
    #[serde(skip)]
    #[allow(dead_code)]
    cache: Vec<u8>,
    #[graph(name = "summary")]
    summary: Option<String>,
    #[graph(name = "origin", display)]
    origin: Ipv4Addr,
    untagged_count: i32,
    audit: Audit,
}

fn document() -> Document {
    Document {
        id: "doc-1".to_string(),
        title: "Binding".to_string(),
        cache: vec![1, 2, 3],
        summary: None,
        origin: Ipv4Addr::new(10, 0, 0, 1),
        untagged_count: 3,
        audit: Audit {
            created_by: "alice".to_string(),
            revision: 7,
        },
    }
}

#[test_log::test]
fn serde_names_options_and_flattening() {
    let fields = build_fields(&document()).unwrap();

    let kinds: Vec<_> = fields
        .iter()
        .map(|(name, binding)| (name, binding.kind()))
        .collect();

    assert_eq!(
        kinds,
        vec![
            ("ID", ScalarKind::Id),
            ("title", ScalarKind::String),
            ("summary", ScalarKind::String),
            ("origin", ScalarKind::String),
            ("created_by", ScalarKind::String),
            ("revision", ScalarKind::String),
        ]
    );

    let value = document();
    assert_eq!(resolve("summary", &value), None);
    assert_eq!(
        resolve("origin", &value),
        Some(ScalarValue::String("10.0.0.1".into()))
    );
    assert_eq!(
        resolve("revision", &value),
        Some(ScalarValue::String("7".into()))
    );
    assert_eq!(
        resolve("created_by", &value),
        Some(ScalarValue::String("alice".into()))
    );
    assert_eq!(resolve("untagged_count", &value), None);
}

#[test_log::test]
fn schema_lists_fields_in_declaration_order() {
    let object = SchemaObject::new("Document", &document()).unwrap();

    insta::assert_snapshot!(object.to_string(), @r###"
    type Document {
      ID: ID
      title: String
      summary: String
      origin: String
      created_by: String
      revision: String
    }
    "###);

    // The accessors are not tied to the instance the schema was built from.
    let other = Document {
        title: "Resolution".into(),
        ..document()
    };
    assert_eq!(
        object.resolve_field("title", &other),
        Some(ScalarValue::String("Resolution".into()))
    );
}

#[derive(GraphBind, Default)]
struct Price {
    #[graph(name = "amount")]
    amount: f64,
}

#[derive(GraphBind, Default)]
struct Discount {
    #[serde(rename = "amount")]
    amount: f64,
}

#[derive(GraphBind, Default)]
struct Order {
    price: Price,
    discount: Discount,
}

#[test_log::test]
fn collision_between_siblings_fails() {
    assert_eq!(
        SchemaObject::for_type::<Order>("Order").unwrap_err(),
        BindError::DuplicateFieldName {
            name: "amount".to_string(),
            field: "discount".to_string(),
        }
    );
}

#[derive(GraphBind)]
struct Point(#[graph(name = "x")] i32, #[graph(name = "y")] i32);

#[derive(GraphBind)]
struct Marker;

#[test_log::test]
fn tuple_and_unit_structs() {
    let point = Point(3, -4);
    let fields = build_fields(&point).unwrap();

    assert_eq!(fields.names().collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(resolve("y", &point), Some(ScalarValue::Int(-4)));

    assert!(Marker.bound_fields().is_empty());
    assert!(build_fields(&Marker).unwrap().is_empty());
}

#[derive(GraphBind)]
struct Tagged<T: graph_bind::GraphField> {
    #[graph(name = "value")]
    value: T,
}

#[test_log::test]
fn generic_structs() {
    let tagged = Tagged { value: 2.5f32 };
    let object = SchemaObject::new("Tagged", &tagged).unwrap();

    assert_eq!(object.fields().get("value").unwrap().kind(), ScalarKind::Float);
    assert_eq!(
        object.resolve_field("value", &tagged),
        Some(ScalarValue::Float(2.5))
    );
}

#[test_log::test]
fn accessors_can_be_shared_across_threads() {
    let object = std::sync::Arc::new(SchemaObject::new("Example", &example()).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let object = object.clone();
            std::thread::spawn(move || {
                let mut value = example();
                value.int_type = i;
                object.resolve_field("int_type", &value)
            })
        })
        .collect();

    let resolved: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(
        resolved,
        (0..4).map(|i| Some(ScalarValue::Int(i))).collect::<Vec<_>>()
    );
}
