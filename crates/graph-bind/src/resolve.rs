// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{
    binding::{Bindable, ExternalName, FieldValue},
    scalar::ScalarValue,
};

/// Resolve the value of the field exposed as `external_name` from `root`.
///
/// Returns `None` when no field carries the name, or when the matching field holds no scalar (an
/// empty `Option`, or a named nested structure). Either way the value is rendered as null.
pub fn resolve(external_name: &str, root: &dyn Bindable) -> Option<ScalarValue> {
    find_field(external_name, root).and_then(|value| value.scalar())
}

/// Locate the field exposed as `external_name`, visiting fields in the same order the field map is
/// built in: each field is checked before descending into it, and an earlier field (including
/// anything nested under it) wins over a later one.
///
/// Nested structures are searched whether or not the field holding them is named; skipped fields
/// are never searched.
pub fn find_field<'a>(external_name: &str, root: &'a dyn Bindable) -> Option<FieldValue<'a>> {
    for field in root.bound_fields() {
        match field.tags.external_name() {
            ExternalName::Skip => continue,
            ExternalName::Named(name) if name == external_name => return Some(field.value),
            _ => {}
        }

        if let FieldValue::Struct(nested) = field.value {
            if let Some(found) = find_field(external_name, nested) {
                return Some(found);
            }
        }
    }

    None
}
