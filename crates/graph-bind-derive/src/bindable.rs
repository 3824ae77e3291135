// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, Member};

use crate::attributes::FieldAttributes;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "GraphBind can only be derived for structs",
            ));
        }
    };

    let bound_fields = bound_fields(fields)?;

    Ok(quote! {
        impl #impl_generics ::graph_bind::Bindable for #name #ty_generics #where_clause {
            fn bound_fields(&self) -> ::std::vec::Vec<::graph_bind::BoundField<'_>> {
                ::std::vec![#(#bound_fields),*]
            }
        }

        impl #impl_generics ::graph_bind::GraphField for #name #ty_generics #where_clause {
            fn field_value(&self) -> ::graph_bind::FieldValue<'_> {
                ::graph_bind::FieldValue::Struct(self)
            }
        }
    })
}

fn bound_fields(fields: &Fields) -> syn::Result<Vec<TokenStream>> {
    let mut bound = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let attributes = FieldAttributes::parse(&field.attrs)?;

        // Skipped fields are left out entirely, so their type doesn't need to be a `GraphField`.
        if attributes.is_skipped() {
            continue;
        }

        let (member, ident) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), ident.to_string()),
            None => (Member::Unnamed(Index::from(index)), index.to_string()),
        };

        let graph = optional_str(attributes.graph.as_deref());
        let json = optional_str(attributes.json.as_deref());

        let value = if attributes.display {
            quote! { ::graph_bind::FieldValue::Text(&self.#member) }
        } else {
            quote! { ::graph_bind::GraphField::field_value(&self.#member) }
        };

        bound.push(quote! {
            ::graph_bind::BoundField::new(
                #ident,
                ::graph_bind::FieldTags::new(#graph, #json),
                #value,
            )
        });
    }

    Ok(bound)
}

fn optional_str(value: Option<&str>) -> TokenStream {
    match value {
        Some(value) => quote! { ::std::option::Option::Some(#value) },
        None => quote! { ::std::option::Option::None },
    }
}
