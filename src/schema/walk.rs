use serde_json::{Map, Value};

use super::error::{ImportError, JsonPath};

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Integer value of a JSON number, accepting floats only when integral.
pub(crate) fn integral(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    if value.is_u64() {
        // Larger than i64::MAX; no caller accepts such values.
        return None;
    }
    let f = value.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Borrowed view of a JSON object that reports failures against its path.
pub(crate) struct ObjectView<'a> {
    map: &'a Map<String, Value>,
    path: JsonPath,
    context: &'static str,
}

impl<'a> ObjectView<'a> {
    pub(crate) fn new(
        value: &'a Value,
        path: JsonPath,
        context: &'static str,
    ) -> Result<Self, ImportError> {
        let Value::Object(map) = value else {
            let actual = type_name(value);
            return Err(ImportError {
                message: format!("JSON body for {context} should be a dict, not {actual}"),
                ..ImportError::wrong_type(path, "dict", actual)
            });
        };
        Ok(Self { map, path, context })
    }

    pub(crate) fn path(&self) -> &JsonPath {
        &self.path
    }

    pub(crate) fn context(&self) -> &'static str {
        self.context
    }

    pub(crate) fn optional(&self, key: &'static str) -> Option<&'a Value> {
        self.map.get(key)
    }

    pub(crate) fn required(&self, key: &'static str) -> Result<&'a Value, ImportError> {
        self.map.get(key).ok_or_else(|| {
            ImportError::missing(
                self.path.field(key),
                format!("{} requires a \"{key}\"", self.context),
            )
        })
    }

    pub(crate) fn required_str(&self, key: &'static str) -> Result<&'a str, ImportError> {
        let value = self.required(key)?;
        self.as_str(key, value)
    }

    pub(crate) fn optional_str(&self, key: &'static str) -> Result<Option<&'a str>, ImportError> {
        self.optional(key).map(|v| self.as_str(key, v)).transpose()
    }

    pub(crate) fn optional_list(
        &self,
        key: &'static str,
    ) -> Result<Option<&'a [Value]>, ImportError> {
        match self.optional(key) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items.as_slice())),
            Some(other) => Err(ImportError::wrong_type(
                self.path.field(key),
                "list",
                type_name(other),
            )),
        }
    }

    /// Required integer within `min..=max`.
    pub(crate) fn required_int(
        &self,
        key: &'static str,
        min: i64,
        max: i64,
    ) -> Result<i64, ImportError> {
        let value = self.required(key)?;
        let path = self.path.field(key);
        if !value.is_number() {
            return Err(ImportError::wrong_type(path, "number", type_name(value)));
        }
        match integral(value) {
            Some(i) if (min..=max).contains(&i) => Ok(i),
            _ => Err(ImportError::invalid(
                path,
                format!("an integer in {min}..={max}"),
                value.to_string(),
                format!("\"{key}\" must be an integer in {min}..={max} (got {value})"),
            )),
        }
    }

    fn as_str(&self, key: &'static str, value: &'a Value) -> Result<&'a str, ImportError> {
        value.as_str().ok_or_else(|| {
            ImportError::wrong_type(self.path.field(key), "string", type_name(value))
        })
    }
}

/// Check `value` against a closed allow-list, returning the list's own `'static` entry.
pub(crate) fn check_member(
    value: &str,
    allowed: &[&'static str],
    path: JsonPath,
    what: &str,
) -> Result<&'static str, ImportError> {
    if let Some(found) = allowed.iter().find(|a| **a == value) {
        return Ok(*found);
    }
    let mut message =
        format!("{what} should be one of the valid kinds, not \"{value}\".\nValid kinds are:");
    for a in allowed {
        message.push_str("\n  ");
        message.push_str(a);
    }
    Err(ImportError::invalid(path, allowed.join(", "), value, message))
}
