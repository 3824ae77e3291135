// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use syn::{Attribute, Expr, ExprLit, Lit, LitStr, Meta, Token, punctuated::Punctuated};

const SKIP_SENTINEL: &str = "-";

/// Binding-related annotations found on one field.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct FieldAttributes {
    pub graph: Option<String>,
    pub json: Option<String>,
    pub display: bool,
}

impl FieldAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in attrs {
            if attr.path().is_ident("graph") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("name") {
                        let name: LitStr = meta.value()?.parse()?;
                        parsed.graph = Some(name.value());
                        Ok(())
                    } else if meta.path.is_ident("skip") {
                        parsed.graph = Some(SKIP_SENTINEL.to_string());
                        Ok(())
                    } else if meta.path.is_ident("display") {
                        parsed.display = true;
                        Ok(())
                    } else {
                        Err(meta.error("expected `name = \"...\"`, `skip`, or `display`"))
                    }
                })?;
            } else if attr.path().is_ident("serde") {
                // Other derives own the serde attribute, so anything we don't understand is ignored.
                let Ok(metas) =
                    attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
                else {
                    continue;
                };

                for meta in metas {
                    match meta {
                        Meta::NameValue(name_value) if name_value.path.is_ident("rename") => {
                            if let Expr::Lit(ExprLit {
                                lit: Lit::Str(name),
                                ..
                            }) = &name_value.value
                            {
                                parsed.json = Some(name.value());
                            }
                        }
                        Meta::Path(path) if path.is_ident("skip") => {
                            parsed.json = Some(SKIP_SENTINEL.to_string());
                        }
                        _ => {}
                    }
                }
            }
        }

        Ok(parsed)
    }

    /// Mirrors the runtime rule: a non-empty graph name wins, then a non-empty json name.
    pub fn is_skipped(&self) -> bool {
        let tag = self
            .graph
            .as_deref()
            .filter(|tag| !tag.is_empty())
            .or_else(|| self.json.as_deref().filter(|tag| !tag.is_empty()));

        tag == Some(SKIP_SENTINEL)
    }
}
