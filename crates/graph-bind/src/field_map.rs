// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Building the map of exposed fields from a structure's field-descriptor table.
//!
//! Fields are visited in declaration order. Named fields become entries; unnamed fields holding a
//! nested structure are built recursively and flattened into the parent; everything else (skipped
//! fields, unnamed leaves) contributes nothing. Every exposed name must be unique across the
//! flattened tree, except that a repeated `ID` replaces the earlier entry unless
//! [`BindOptions::strict_id`] is set.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, instrument, warn};

use crate::{
    binding::{Bindable, ExternalName, FieldValue},
    error::BindError,
    options::BindOptions,
    resolve::resolve,
    scalar::{ScalarKind, ScalarValue, infer_scalar_kind},
};

/// Resolves a field's value out of whatever root instance it is handed.
pub type FieldAccessor = Arc<dyn Fn(&dyn Bindable) -> Option<ScalarValue> + Send + Sync>;

#[derive(Clone)]
pub struct FieldBinding {
    kind: ScalarKind,
    accessor: FieldAccessor,
}

impl FieldBinding {
    fn for_name(external_name: &str, kind: ScalarKind) -> Self {
        let external_name = external_name.to_string();

        Self {
            kind,
            accessor: Arc::new(move |root| resolve(&external_name, root)),
        }
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub fn resolve(&self, root: &dyn Bindable) -> Option<ScalarValue> {
        (self.accessor)(root)
    }
}

impl Debug for FieldBinding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBinding")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Exposed fields keyed by external name, in flattening order.
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    fields: IndexMap<String, FieldBinding>,
}

impl FieldMap {
    pub fn get(&self, name: &str) -> Option<&FieldBinding> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldBinding)> {
        self.fields.iter().map(|(name, binding)| (name.as_str(), binding))
    }

    /// `ident` names the field that contributed `name`, for error reporting.
    fn insert(
        &mut self,
        name: &str,
        binding: FieldBinding,
        ident: &str,
        options: &BindOptions,
    ) -> Result<(), BindError> {
        if self.fields.contains_key(name) {
            if !options.allows_overwrite(name) {
                return Err(BindError::DuplicateFieldName {
                    name: name.to_string(),
                    field: ident.to_string(),
                });
            }

            warn!(field = ident, "Field '{name}' replaces an earlier field of the same name");
        }

        self.fields.insert(name.to_string(), binding);
        Ok(())
    }

    fn merge(
        &mut self,
        other: FieldMap,
        ident: &str,
        options: &BindOptions,
    ) -> Result<(), BindError> {
        for (name, binding) in other.fields {
            self.insert(&name, binding, ident, options)?;
        }

        Ok(())
    }
}

pub fn build_fields(value: &dyn Bindable) -> Result<FieldMap, BindError> {
    build_fields_with_options(value, &BindOptions::default())
}

#[instrument(skip_all, fields(strict_id = options.strict_id))]
pub fn build_fields_with_options(
    value: &dyn Bindable,
    options: &BindOptions,
) -> Result<FieldMap, BindError> {
    collect_fields(value, options)
}

fn collect_fields(value: &dyn Bindable, options: &BindOptions) -> Result<FieldMap, BindError> {
    let mut fields = FieldMap::default();

    for field in value.bound_fields() {
        match field.tags.external_name() {
            ExternalName::Skip => {
                debug!(field = field.ident, "Skipping field");
            }
            ExternalName::Unnamed => match field.value {
                FieldValue::Struct(nested) => {
                    let nested_fields = collect_fields(nested, options)?;
                    debug!(
                        field = field.ident,
                        count = nested_fields.len(),
                        "Flattening nested structure"
                    );
                    fields.merge(nested_fields, field.ident, options)?;
                }
                _ => {
                    debug!(field = field.ident, "Field has no external name");
                }
            },
            ExternalName::Named(name) => {
                let kind = infer_scalar_kind(name, field.value.category());
                fields.insert(name, FieldBinding::for_name(name, kind), field.ident, options)?;
            }
        }
    }

    Ok(fields)
}
