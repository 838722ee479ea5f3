// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Converts a parsed `serde_json::Value` into the encoder's own [`Value`]
//! tree, giving the CLI something concrete to encode from a document on
//! disk.
//!
//! JSON objects have no counterpart here: keyed/compound containers are a
//! stated non-goal of the core encoder, so a JSON object fails the
//! conversion rather than being silently flattened or dropped.

use serde_json::Value as Json;

use super::error::{EncodeError, EncodeResult};
use super::value::Value;

pub fn json_to_value(json: &Json) -> EncodeResult<Value> {
    match json {
        Json::Null => Err(EncodeError::UnsupportedType("null".to_string())),
        Json::Bool(b) => Ok(Value::bool(*b)),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::float(f))
            } else {
                Err(EncodeError::UnsupportedType(format!("number {n}")))
            }
        }
        Json::String(s) => Ok(Value::str(s.clone())),
        Json::Array(items) => {
            let converted = items
                .iter()
                .map(json_to_value)
                .collect::<EncodeResult<Vec<_>>>()?;
            Ok(Value::list(converted))
        }
        Json::Object(_) => Err(EncodeError::UnsupportedType(
            "object (keyed containers are not supported)".to_string(),
        )),
    }
}
