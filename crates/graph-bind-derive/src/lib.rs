// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attributes;
mod bindable;

/// Derive `graph_bind::Bindable` (and `graph_bind::GraphField`) for a struct.
///
/// Each field's external name comes from `#[graph(name = "...")]`, falling back to
/// `#[serde(rename = "...")]`. `#[graph(skip)]` (or `#[serde(skip)]` when no graph name is given)
/// hides the field. Fields without any name are exposed only if they hold a nested structure, in
/// which case the nested fields are flattened into this one.
///
/// `#[graph(display)]` exposes a field of any `Display` type as a `String`.
#[proc_macro_derive(GraphBind, attributes(graph, serde))]
pub fn derive_graph_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    bindable::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
