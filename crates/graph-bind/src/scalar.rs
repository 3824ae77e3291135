// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// External name that forces the `ID` scalar kind regardless of the field's own type.
pub const ID_FIELD_NAME: &str = "ID";

/// The five scalar kinds a bound field can be exposed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    Int,
    Float,
    Boolean,
    String,
    #[serde(rename = "ID")]
    Id,
}

impl ScalarKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::Int => "Int",
            ScalarKind::Float => "Float",
            ScalarKind::Boolean => "Boolean",
            ScalarKind::String => "String",
            ScalarKind::Id => "ID",
        }
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Underlying primitive category of a field, before the external name is taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveCategory {
    SignedInt,
    UnsignedInt,
    Float,
    Bool,
    Str,
    Other,
    Struct,
}

/// Scalar inference: the `ID` name wins over everything, otherwise the primitive category
/// decides and anything unrecognized is exposed as a `String`.
pub fn infer_scalar_kind(external_name: &str, category: PrimitiveCategory) -> ScalarKind {
    if external_name == ID_FIELD_NAME {
        return ScalarKind::Id;
    }

    match category {
        PrimitiveCategory::SignedInt => ScalarKind::Int,
        PrimitiveCategory::Float => ScalarKind::Float,
        PrimitiveCategory::Bool => ScalarKind::Boolean,
        PrimitiveCategory::UnsignedInt
        | PrimitiveCategory::Str
        | PrimitiveCategory::Other
        | PrimitiveCategory::Struct => ScalarKind::String,
    }
}

/// A resolved leaf value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Int(i64),
    Float(f64),
    Boolean(bool),
    String(String),
}

impl Display for ScalarValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalarValue::Int(n) => write!(f, "{n}"),
            ScalarValue::Float(n) => write!(f, "{n}"),
            ScalarValue::Boolean(b) => write!(f, "{b}"),
            ScalarValue::String(s) => write!(f, "\"{s}\""),
        }
    }
}

impl From<ScalarValue> for JsonValue {
    fn from(value: ScalarValue) -> Self {
        match value {
            ScalarValue::Int(n) => JsonValue::from(n),
            ScalarValue::Float(n) => serde_json::Number::from_f64(n)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            ScalarValue::Boolean(b) => JsonValue::Bool(b),
            ScalarValue::String(s) => JsonValue::String(s),
        }
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Float(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Boolean(value)
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::String(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.to_string())
    }
}
