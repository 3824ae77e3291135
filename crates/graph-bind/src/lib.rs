// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Derive GraphQL object fields from annotated Rust structures.
//!
//! ```ignore
//! #[derive(GraphBind)]
//! struct Example {
//!     #[graph(name = "ID")]
//!     id: i64,
//!     #[serde(rename = "int_type")]
//!     int_type: i32,
//!     #[graph(skip)]
//!     secret: String,
//!     inner: Inner, // unnamed structures are flattened into `Example`
//! }
//!
//! let object = SchemaObject::new("Example", &example)?;
//! let id = object.resolve_field("ID", &example);
//! ```
//!
//! Building produces a [`FieldMap`] from external name to scalar kind and value accessor; the
//! accessor resolves the field out of any root instance handed to it at query time.

// Lets code generated by `#[derive(GraphBind)]` refer to `::graph_bind` from within this crate.
extern crate self as graph_bind;

mod binding;
mod dynamic;
mod error;
mod field_map;
mod object;
mod options;
mod resolve;
mod scalar;

pub use binding::{
    Bindable, BoundField, ExternalName, FieldTags, FieldValue, GraphField, Leaf, SKIP_SENTINEL,
};
pub use dynamic::{DynamicField, DynamicStruct, DynamicValue};
pub use error::BindError;
pub use field_map::{
    FieldAccessor, FieldBinding, FieldMap, build_fields, build_fields_with_options,
};
pub use object::SchemaObject;
pub use options::{BindOptions, OptionsError, STRICT_ID_ENV_KEY};
pub use resolve::{find_field, resolve};
pub use scalar::{ID_FIELD_NAME, PrimitiveCategory, ScalarKind, ScalarValue, infer_scalar_kind};

#[cfg(feature = "derive")]
pub use graph_bind_derive::GraphBind;
