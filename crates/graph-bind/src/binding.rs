// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The field-descriptor table that stands in for runtime reflection.
//!
//! A structure participates in binding by implementing [`Bindable`], which lists its fields in
//! declaration order together with their annotations and a borrowed view of their current values.
//! `#[derive(GraphBind)]` generates this table, [`crate::DynamicStruct`] provides one at runtime,
//! and it may also be written by hand.

use std::fmt::{Debug, Display, Formatter};

use crate::scalar::{PrimitiveCategory, ScalarValue};

/// Annotation value that hides a field from both building and resolution.
pub const SKIP_SENTINEL: &str = "-";

pub trait Bindable {
    /// Fields of this value, in declaration order.
    fn bound_fields(&self) -> Vec<BoundField<'_>>;
}

pub struct BoundField<'a> {
    /// The structure's own identifier for the field (used only for diagnostics).
    pub ident: &'a str,
    pub tags: FieldTags<'a>,
    pub value: FieldValue<'a>,
}

impl<'a> BoundField<'a> {
    pub fn new(ident: &'a str, tags: FieldTags<'a>, value: FieldValue<'a>) -> Self {
        Self { ident, tags, value }
    }
}

impl Debug for BoundField<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundField")
            .field("ident", &self.ident)
            .field("tags", &self.tags)
            .field("value", &self.value)
            .finish()
    }
}

/// The primary (`graph`) and fallback (`json`) annotations of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldTags<'a> {
    pub graph: Option<&'a str>,
    pub json: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalName<'a> {
    Skip,
    Unnamed,
    Named(&'a str),
}

impl<'a> FieldTags<'a> {
    pub fn new(graph: Option<&'a str>, json: Option<&'a str>) -> Self {
        Self { graph, json }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn graph(tag: &'a str) -> Self {
        Self::new(Some(tag), None)
    }

    pub fn json(tag: &'a str) -> Self {
        Self::new(None, Some(tag))
    }

    /// An empty `graph` tag counts as absent and defers to `json`.
    pub fn external_name(&self) -> ExternalName<'a> {
        let tag = self
            .graph
            .filter(|tag| !tag.is_empty())
            .or_else(|| self.json.filter(|tag| !tag.is_empty()));

        match tag {
            None => ExternalName::Unnamed,
            Some(SKIP_SENTINEL) => ExternalName::Skip,
            Some(name) => ExternalName::Named(name),
        }
    }
}

/// Borrowed view of a field's current value.
pub enum FieldValue<'a> {
    Leaf {
        category: PrimitiveCategory,
        value: &'a dyn Leaf,
    },
    /// A value of an arbitrary `Display` type, exposed as its text.
    Text(&'a dyn Display),
    /// A nested structure.
    Struct(&'a dyn Bindable),
}

impl FieldValue<'_> {
    pub fn category(&self) -> PrimitiveCategory {
        match self {
            FieldValue::Leaf { category, .. } => *category,
            FieldValue::Text(_) => PrimitiveCategory::Other,
            FieldValue::Struct(_) => PrimitiveCategory::Struct,
        }
    }

    /// The scalar held by this field, if any. Nested structures never produce a scalar.
    pub fn scalar(&self) -> Option<ScalarValue> {
        match self {
            FieldValue::Leaf { value, .. } => value.to_scalar(),
            FieldValue::Text(value) => Some(ScalarValue::String(value.to_string())),
            FieldValue::Struct(_) => None,
        }
    }
}

impl Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Struct(_) => f.write_str("Struct(..)"),
            _ => write!(f, "{:?}({:?})", self.category(), self.scalar()),
        }
    }
}

/// A Rust type that maps onto a single scalar.
pub trait Leaf {
    fn category() -> PrimitiveCategory
    where
        Self: Sized;

    /// `None` resolves to an absent (null) value.
    fn to_scalar(&self) -> Option<ScalarValue>;
}

/// Anything that can appear as a field of a derived [`Bindable`].
///
/// Every [`Leaf`] is a `GraphField`; `#[derive(GraphBind)]` also implements it for the deriving
/// type so that nested structures are descended into.
pub trait GraphField {
    fn field_value(&self) -> FieldValue<'_>;
}

impl<T: Leaf> GraphField for T {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Leaf {
            category: T::category(),
            value: self,
        }
    }
}

macro_rules! leaf_impl {
    ($category:ident, |$v:ident| $to_scalar:expr, $($t:ty),+) => {
        $(
            impl Leaf for $t {
                fn category() -> PrimitiveCategory {
                    PrimitiveCategory::$category
                }

                fn to_scalar(&self) -> Option<ScalarValue> {
                    let $v = self;
                    Some($to_scalar)
                }
            }
        )+
    };
}

leaf_impl!(SignedInt, |v| ScalarValue::Int(*v as i64), i8, i16, i32, i64, isize);
leaf_impl!(
    UnsignedInt,
    |v| ScalarValue::String(v.to_string()),
    u8,
    u16,
    u32,
    u64,
    usize
);
leaf_impl!(Float, |v| ScalarValue::Float(*v as f64), f32, f64);
leaf_impl!(Bool, |v| ScalarValue::Boolean(*v), bool);
leaf_impl!(Str, |v| ScalarValue::String(v.to_string()), String, char);

impl Leaf for &str {
    fn category() -> PrimitiveCategory {
        PrimitiveCategory::Str
    }

    fn to_scalar(&self) -> Option<ScalarValue> {
        Some(ScalarValue::String(self.to_string()))
    }
}

impl<T: Leaf> Leaf for Option<T> {
    fn category() -> PrimitiveCategory {
        T::category()
    }

    fn to_scalar(&self) -> Option<ScalarValue> {
        self.as_ref().and_then(Leaf::to_scalar)
    }
}
