use crate::domain::types::*;
use serde_json::{Map, Value};

/// Fallible, path-aware accessors for descending a `serde_json::Value` tree.
///
/// Each accessor takes the dotted path of the value being inspected so a
/// failure reports exactly where the document diverged from the expected shape.
pub trait JsonNavigate {
    /// Borrow the value as a JSON object
    fn expect_object(&self, path: &str) -> ExtractResult<&Map<String, Value>>;

    /// Borrow the value as a JSON array
    fn expect_array(&self, path: &str) -> ExtractResult<&Vec<Value>>;

    /// Render a scalar value as a string.
    ///
    /// Strings are returned verbatim, booleans as `true`/`false` and null as an
    /// empty string. Numbers keep their digits, sign and decimal point exactly as
    /// written (`92.50` stays `92.50`); an exponent is written as lowercase `e`
    /// with an explicit sign, so `1E3` becomes `1e+3`. Arrays and objects are
    /// rejected.
    fn expect_scalar_string(&self, path: &str) -> ExtractResult<String>;
}

impl JsonNavigate for Value {
    fn expect_object(&self, path: &str) -> ExtractResult<&Map<String, Value>> {
        self.as_object()
            .ok_or_else(|| ExtractError::mismatch(path, "object", kind_name(self)))
    }

    fn expect_array(&self, path: &str) -> ExtractResult<&Vec<Value>> {
        self.as_array()
            .ok_or_else(|| ExtractError::mismatch(path, "array", kind_name(self)))
    }

    fn expect_scalar_string(&self, path: &str) -> ExtractResult<String> {
        match self {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null => Ok(String::new()),
            Value::Array(_) | Value::Object(_) => {
                Err(ExtractError::mismatch(path, "scalar", kind_name(self)))
            }
        }
    }
}

/// Parse raw response text into a JSON tree
pub fn parse_document(json_str: &str) -> ExtractResult<Value> {
    serde_json::from_str(json_str).map_err(ExtractError::MalformedInput)
}

/// Look up a named property of an object
pub fn field<'a>(object: &'a Map<String, Value>, parent: &str, name: &str) -> ExtractResult<&'a Value> {
    object
        .get(name)
        .ok_or_else(|| ExtractError::missing(join_path(parent, name)))
}

/// First element of an array, failing on an empty one
pub fn first_element<'a>(array: &'a [Value], path: &str) -> ExtractResult<&'a Value> {
    array
        .first()
        .ok_or_else(|| ExtractError::mismatch(path, "non-empty array", "empty array"))
}

/// Render every element of an array as a string
pub fn scalar_strings(array: &[Value], path: &str) -> ExtractResult<Vec<String>> {
    array
        .iter()
        .enumerate()
        .map(|(i, value)| value.expect_scalar_string(&format!("{}[{}]", path, i)))
        .collect()
}

/// Extend a dotted path with a property name
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

/// JSON kind of a value, as reported in shape mismatches
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
