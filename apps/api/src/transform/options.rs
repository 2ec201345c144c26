//! Caller-supplied slot overrides and the coercion policy applied to them.
//!
//! List slots accept a scalar (wrapped into a one-element list); string slots
//! accept numbers and booleans (stringified). Objects, and lists in a string
//! slot, are rejected with `InvalidOptions`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::transform::transformer::TransformError;

/// Free-form override map (`context`, `constraints`, `requirements`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransformOptions(pub Map<String, Value>);

impl TransformOptions {
    #[cfg(test)]
    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.0.insert(key.to_string(), value);
        self
    }

    /// String-valued override; `""` when absent or null.
    pub fn text(&self, key: &str) -> Result<Value, TransformError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(Value::String(String::new())),
            Some(Value::String(s)) => Ok(Value::String(s.clone())),
            Some(Value::Number(n)) => Ok(Value::String(n.to_string())),
            Some(Value::Bool(b)) => Ok(Value::String(b.to_string())),
            Some(Value::Array(_)) | Some(Value::Object(_)) => Err(TransformError::InvalidOptions {
                key: key.to_string(),
                expected: "string",
            }),
        }
    }

    /// List-valued override; `[]` when absent or null.
    pub fn list(&self, key: &str) -> Result<Value, TransformError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(Value::Array(vec![])),
            Some(Value::Array(items)) => Ok(Value::Array(items.clone())),
            Some(scalar @ (Value::String(_) | Value::Number(_) | Value::Bool(_))) => {
                Ok(Value::Array(vec![scalar.clone()]))
            }
            Some(Value::Object(_)) => Err(TransformError::InvalidOptions {
                key: key.to_string(),
                expected: "list",
            }),
        }
    }
}
