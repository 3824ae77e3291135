// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use crate::scalar::ID_FIELD_NAME;

pub const STRICT_ID_ENV_KEY: &str = "GRAPH_BIND_STRICT_ID";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindOptions {
    /// When set, a repeated `ID` name is rejected like any other duplicate. By default the later
    /// `ID` field silently replaces the earlier one.
    pub strict_id: bool,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error(
        "Invalid value for {key}: {value}. Expected true, 1, yes, on, enabled OR false, 0, no, off, disabled"
    )]
    InvalidFlag { key: &'static str, value: String },
}

impl BindOptions {
    /// Options from the process environment.
    pub fn from_env() -> Result<Self, OptionsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Options from an arbitrary key lookup (a config map, a test fixture).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, OptionsError> {
        let strict_id = match lookup(STRICT_ID_ENV_KEY) {
            Some(value) => parse_flag(STRICT_ID_ENV_KEY, value)?,
            None => false,
        };

        Ok(Self { strict_id })
    }

    /// Whether `name` may replace an existing entry of the same name.
    pub(crate) fn allows_overwrite(&self, name: &str) -> bool {
        !self.strict_id && name == ID_FIELD_NAME
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, OptionsError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "enabled" | "enable" => Ok(true),
        "false" | "0" | "no" | "off" | "disabled" | "disable" => Ok(false),
        _ => Err(OptionsError::InvalidFlag { key, value }),
    }
}
