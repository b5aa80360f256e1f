//! JSON -> sieve Value conversion utilities

use std::collections::HashMap;

use super::CliError;
use crate::Value;

/// Convert a scalar serde_json::Value to a sieve Value.
///
/// Arrays and objects have no counterpart in the language and are rejected.
pub fn json_to_value(v: serde_json::Value) -> Result<Value, CliError> {
    match v {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Boolean(b)),
        serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok(Value::Integer(i)),
            (None, Some(f)) => Ok(Value::Float(f)),
            (None, None) => Err(CliError::InvalidBindings(format!(
                "number {} is out of range",
                n
            ))),
        },
        serde_json::Value::String(s) => Ok(Value::String(s)),
        other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => Err(
            CliError::InvalidBindings(format!("{} is not a scalar value", other)),
        ),
    }
}

/// Parse a JSON object of variable bindings, e.g. `{"age": 30, "name": "Ann"}`.
pub fn bindings_from_json(json: &str) -> Result<HashMap<String, Value>, CliError> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;

    let serde_json::Value::Object(obj) = parsed else {
        return Err(CliError::InvalidBindings(
            "bindings must be a JSON object".to_string(),
        ));
    };

    obj.into_iter()
        .map(|(k, v)| Ok((k, json_to_value(v)?)))
        .collect()
}
