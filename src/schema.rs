//! JSON import layer: a small walker over `serde_json::Value` that turns theme JSON into
//! validated records, reporting failures with the `MISSING_VALUE`/`WRONG_TYPE`/`INVALID_VALUE`
//! taxonomy and the JSON path of the offending value.

pub(crate) mod error;
pub(crate) mod spec;
pub(crate) mod walk;

pub use error::{ImportError, ImportErrorCode, ImportErrorKind, JsonPath, JsonPathElem};
pub use spec::{
    Feature1DSpec, Feature2DSpec, FeatureSpec, Override1DSpec, Override2DSpec, SourcedSpec,
};
