// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// Two exposed fields share an external name. `field` is the identifier of the field whose
    /// contribution collided (the nested structure's field when the collision came from
    /// flattening).
    #[error("Duplicate field name '{name}' (from field '{field}')")]
    DuplicateFieldName { name: String, field: String },
}
