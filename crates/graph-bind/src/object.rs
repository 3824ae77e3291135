// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use async_graphql_parser::{
    Pos, Positioned,
    types::{BaseType, FieldDefinition, ObjectType, Type, TypeDefinition, TypeKind},
};
use async_graphql_value::Name;
use serde_json::{Map, Value as JsonValue};
use tracing::instrument;

use crate::{
    binding::Bindable,
    error::BindError,
    field_map::{build_fields_with_options, FieldMap},
    options::BindOptions,
    scalar::ScalarValue,
};

/// A named object type whose fields were bound from a structure.
#[derive(Debug, Clone)]
pub struct SchemaObject {
    name: String,
    fields: FieldMap,
}

impl SchemaObject {
    pub fn new(name: impl Into<String>, value: &dyn Bindable) -> Result<Self, BindError> {
        Self::with_options(name, value, &BindOptions::default())
    }

    pub fn with_options(
        name: impl Into<String>,
        value: &dyn Bindable,
        options: &BindOptions,
    ) -> Result<Self, BindError> {
        Self::build(name.into(), value, options)
    }

    /// Bind from the field layout of `T::default()`.
    pub fn for_type<T: Bindable + Default>(name: impl Into<String>) -> Result<Self, BindError> {
        Self::new(name, &T::default())
    }

    #[instrument(skip(value, options), err)]
    fn build(name: String, value: &dyn Bindable, options: &BindOptions) -> Result<Self, BindError> {
        let fields = build_fields_with_options(value, options)?;
        Ok(Self { name, fields })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn resolve_field(&self, name: &str, root: &dyn Bindable) -> Option<ScalarValue> {
        self.fields.get(name)?.resolve(root)
    }

    pub fn resolve_all(&self, root: &dyn Bindable) -> Vec<(&str, Option<ScalarValue>)> {
        self.fields
            .iter()
            .map(|(name, binding)| (name, binding.resolve(root)))
            .collect()
    }

    /// All fields of `root` as a JSON object, absent values as null.
    pub fn resolve_json(&self, root: &dyn Bindable) -> JsonValue {
        let object: Map<String, JsonValue> = self
            .resolve_all(root)
            .into_iter()
            .map(|(name, value)| {
                let value = value.map(JsonValue::from).unwrap_or(JsonValue::Null);
                (name.to_string(), value)
            })
            .collect();

        JsonValue::Object(object)
    }

    /// The object as a GraphQL type definition. Every field is a nullable named scalar.
    pub fn type_definition(&self) -> TypeDefinition {
        let fields = self
            .fields
            .iter()
            .map(|(name, binding)| {
                default_positioned(FieldDefinition {
                    description: None,
                    name: default_positioned_name(name),
                    arguments: vec![],
                    ty: default_positioned(Type {
                        base: BaseType::Named(Name::new(binding.kind().name())),
                        nullable: true,
                    }),
                    directives: vec![],
                })
            })
            .collect();

        TypeDefinition {
            extend: false,
            description: None,
            name: default_positioned_name(&self.name),
            directives: vec![],
            kind: TypeKind::Object(ObjectType {
                implements: vec![],
                fields,
            }),
        }
    }
}

/// Renders the object in GraphQL SDL.
impl Display for SchemaObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "type {} {{", self.name)?;
        for (name, binding) in self.fields.iter() {
            writeln!(f, "  {}: {}", name, binding.kind())?;
        }
        write!(f, "}}")
    }
}

fn default_positioned<T>(value: T) -> Positioned<T> {
    Positioned::new(value, Pos::default())
}

fn default_positioned_name(value: &str) -> Positioned<Name> {
    default_positioned(Name::new(value))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::dynamic::{DynamicField, DynamicStruct};
    use crate::scalar::ScalarKind;

    fn example() -> DynamicStruct {
        DynamicStruct::new()
            .with_field(DynamicField::new("Skip", "skip").graph("-"))
            .with_field(DynamicField::new("ID", 1).graph("ID"))
            .with_field(DynamicField::new("IntType", 100).graph("int_type"))
            .with_field(DynamicField::new(
                "Child",
                DynamicStruct::new()
                    .with_field(DynamicField::new("StringType", "child").graph("string_type")),
            ))
    }

    #[test_log::test]
    fn wraps_field_map_with_name() {
        let object = SchemaObject::new("obj1", &example()).unwrap();

        assert_eq!(object.name(), "obj1");
        assert_eq!(
            object.fields().names().collect::<Vec<_>>(),
            vec!["ID", "int_type", "string_type"]
        );
        assert_eq!(object.fields().get("ID").unwrap().kind(), ScalarKind::Id);
    }

    #[test_log::test]
    fn propagates_builder_errors() {
        let value = DynamicStruct::new()
            .with_field(DynamicField::new("IntType", 100).graph("int_type"))
            .with_field(DynamicField::new(
                "Child2",
                DynamicStruct::new()
                    .with_field(DynamicField::new("IntType", 200).graph("int_type"))
                    .with_field(DynamicField::new("Int32Type", 300).graph("int_type")),
            ));

        assert!(matches!(
            SchemaObject::new("obj2", &value),
            Err(BindError::DuplicateFieldName { name, .. }) if name == "int_type"
        ));
    }

    #[test_log::test]
    fn resolves_fields_of_a_root_instance() {
        let object = SchemaObject::new("obj1", &example()).unwrap();

        assert_eq!(
            object.resolve_field("int_type", &example()),
            Some(ScalarValue::Int(100))
        );
        assert_eq!(object.resolve_field("missing", &example()), None);
        assert_eq!(
            object.resolve_json(&example()),
            json!({ "ID": 1, "int_type": 100, "string_type": "child" })
        );
    }

    #[test_log::test]
    fn renders_sdl() {
        let object = SchemaObject::new("Example", &example()).unwrap();

        insta::assert_snapshot!(object.to_string(), @r###"
        type Example {
          ID: ID
          int_type: Int
          string_type: String
        }
        "###);
    }

    #[test_log::test]
    fn builds_type_definition() {
        let object = SchemaObject::new("Example", &example()).unwrap();
        let definition = object.type_definition();

        assert_eq!(definition.name.node.as_str(), "Example");

        let TypeKind::Object(object_type) = definition.kind else {
            panic!("expected an object type");
        };

        let fields: Vec<_> = object_type
            .fields
            .iter()
            .map(|field| (field.node.name.node.to_string(), field.node.ty.node.to_string()))
            .collect();

        assert_eq!(
            fields,
            vec![
                ("ID".to_string(), "ID".to_string()),
                ("int_type".to_string(), "Int".to_string()),
                ("string_type".to_string(), "String".to_string()),
            ]
        );
    }
}
