// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Structures whose shape is only known at runtime.

use crate::binding::{Bindable, BoundField, FieldTags, FieldValue, GraphField};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicStruct {
    fields: Vec<DynamicField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DynamicField {
    ident: String,
    graph: Option<String>,
    json: Option<String>,
    value: DynamicValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    Int(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    Struct(DynamicStruct),
}

impl DynamicStruct {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: DynamicField) -> Self {
        self.fields.push(field);
        self
    }
}

impl FromIterator<DynamicField> for DynamicStruct {
    fn from_iter<I: IntoIterator<Item = DynamicField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl DynamicField {
    pub fn new(ident: impl Into<String>, value: impl Into<DynamicValue>) -> Self {
        Self {
            ident: ident.into(),
            graph: None,
            json: None,
            value: value.into(),
        }
    }

    pub fn graph(mut self, tag: impl Into<String>) -> Self {
        self.graph = Some(tag.into());
        self
    }

    pub fn json(mut self, tag: impl Into<String>) -> Self {
        self.json = Some(tag.into());
        self
    }
}

impl Bindable for DynamicStruct {
    fn bound_fields(&self) -> Vec<BoundField<'_>> {
        self.fields
            .iter()
            .map(|field| {
                BoundField::new(
                    &field.ident,
                    FieldTags::new(field.graph.as_deref(), field.json.as_deref()),
                    field.value.field_value(),
                )
            })
            .collect()
    }
}

impl GraphField for DynamicStruct {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Struct(self)
    }
}

impl GraphField for DynamicValue {
    fn field_value(&self) -> FieldValue<'_> {
        match self {
            DynamicValue::Int(v) => v.field_value(),
            DynamicValue::Float(v) => v.field_value(),
            DynamicValue::Boolean(v) => v.field_value(),
            DynamicValue::String(v) => v.field_value(),
            DynamicValue::Struct(v) => v.field_value(),
        }
    }
}

impl From<i64> for DynamicValue {
    fn from(value: i64) -> Self {
        DynamicValue::Int(value)
    }
}

impl From<i32> for DynamicValue {
    fn from(value: i32) -> Self {
        DynamicValue::Int(value as i64)
    }
}

impl From<f64> for DynamicValue {
    fn from(value: f64) -> Self {
        DynamicValue::Float(value)
    }
}

impl From<bool> for DynamicValue {
    fn from(value: bool) -> Self {
        DynamicValue::Boolean(value)
    }
}

impl From<String> for DynamicValue {
    fn from(value: String) -> Self {
        DynamicValue::String(value)
    }
}

impl From<&str> for DynamicValue {
    fn from(value: &str) -> Self {
        DynamicValue::String(value.to_string())
    }
}

impl From<DynamicStruct> for DynamicValue {
    fn from(value: DynamicStruct) -> Self {
        DynamicValue::Struct(value)
    }
}
