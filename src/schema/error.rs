use std::fmt;

/// One step of a JSON path: an object field or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonPathElem {
    /// Object member.
    Field(&'static str),
    /// Array element.
    Index(usize),
}

/// Location of a value inside an imported JSON document, rendered as `$.a.b[2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath(Vec<JsonPathElem>);

impl JsonPath {
    /// The document root (`$`).
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Child path for object member `name`.
    pub fn field(&self, name: &'static str) -> Self {
        let mut elems = self.0.clone();
        elems.push(JsonPathElem::Field(name));
        Self(elems)
    }

    /// Child path for array element `i`.
    pub fn index(&self, i: usize) -> Self {
        let mut elems = self.0.clone();
        elems.push(JsonPathElem::Index(i));
        Self(elems)
    }

    /// Path elements from the root.
    pub fn elems(&self) -> &[JsonPathElem] {
        &self.0
    }

    /// Name of the last field on the path, if the path ends in a field.
    pub fn last_field(&self) -> Option<&'static str> {
        match self.0.last() {
            Some(JsonPathElem::Field(name)) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for p in &self.0 {
            match *p {
                JsonPathElem::Field(name) => write!(f, ".{name}")?,
                JsonPathElem::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

/// The fixed import error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportErrorCode {
    /// A required key is absent.
    MissingValue,
    /// A value has the wrong JSON type.
    WrongType,
    /// A value has the right type but violates a constraint.
    InvalidValue,
}

impl ImportErrorCode {
    /// Stable upper-case name, e.g. `MISSING_VALUE`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingValue => "MISSING_VALUE",
            Self::WrongType => "WRONG_TYPE",
            Self::InvalidValue => "INVALID_VALUE",
        }
    }
}

impl fmt::Display for ImportErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Details attached to an [`ImportError`], one variant per taxonomy code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportErrorKind {
    /// Required key missing.
    MissingValue,
    /// Expected JSON type vs. the type found.
    WrongType {
        /// JSON type that was required.
        expected: &'static str,
        /// JSON type that was found.
        actual: &'static str,
    },
    /// Expected constraint vs. the offending value.
    InvalidValue {
        /// Human readable constraint.
        expected: String,
        /// Offending value, rendered.
        actual: String,
    },
}

/// A failed JSON import: where it failed, which code, and a message.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("[{}] {path}: {message}", self.code())]
pub struct ImportError {
    /// Location of the offending value.
    pub path: JsonPath,
    /// Taxonomy details.
    pub kind: ImportErrorKind,
    /// Human readable description.
    pub message: String,
}

impl ImportError {
    /// `MISSING_VALUE` at `path`.
    pub fn missing(path: JsonPath, message: impl Into<String>) -> Self {
        Self {
            path,
            kind: ImportErrorKind::MissingValue,
            message: message.into(),
        }
    }

    /// `WRONG_TYPE` at `path`.
    pub fn wrong_type(path: JsonPath, expected: &'static str, actual: &'static str) -> Self {
        let what = match path.last_field() {
            Some(name) => format!("\"{name}\""),
            None => "value".to_string(),
        };
        Self {
            message: format!("{what} should be {expected}, not {actual}"),
            path,
            kind: ImportErrorKind::WrongType { expected, actual },
        }
    }

    /// `INVALID_VALUE` at `path`.
    pub fn invalid(
        path: JsonPath,
        expected: impl Into<String>,
        actual: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path,
            kind: ImportErrorKind::InvalidValue {
                expected: expected.into(),
                actual: actual.into(),
            },
            message: message.into(),
        }
    }

    /// Taxonomy code of this error.
    pub fn code(&self) -> ImportErrorCode {
        match self.kind {
            ImportErrorKind::MissingValue => ImportErrorCode::MissingValue,
            ImportErrorKind::WrongType { .. } => ImportErrorCode::WrongType,
            ImportErrorKind::InvalidValue { .. } => ImportErrorCode::InvalidValue,
        }
    }
}
