use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{
    assets::{cache::AssetCache, resource::Crop},
    feature::{feature1d::Feature1D, feature2d::Feature2D, fixed::Feature},
    foundation::error::ArgumentError,
    justify::{
        justify1d::{Direction, Justify1D},
        justify2d::Justify2D,
    },
    schema::{
        error::{ImportError, JsonPath},
        walk::{ObjectView, check_member, integral, type_name},
    },
};

/// Validated `#/definitions/sourced` object: an image path plus an optional crop.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SourcedSpec {
    /// Canonical absolute path of the source image.
    pub source: PathBuf,
    /// Crop box; `None` means the full image.
    pub crop: Option<Crop>,
}

impl SourcedSpec {
    /// Validate a sourced JSON object, resolving `source` against `theme_directory`.
    pub fn from_json(json: &Value, theme_directory: Option<&Path>) -> Result<Self, ImportError> {
        let view = ObjectView::new(json, JsonPath::root(), "AssetResource")?;
        Self::from_view(&view, theme_directory)
    }

    pub(crate) fn from_view(
        view: &ObjectView<'_>,
        theme_directory: Option<&Path>,
    ) -> Result<Self, ImportError> {
        let source = view.required_str("source")?;
        let crop = match view.optional("crop") {
            None => None,
            Some(value) => Some(parse_crop(value, view.path().field("crop"))?),
        };
        Ok(Self {
            source: AssetCache::canonical_path(source, theme_directory),
            crop,
        })
    }
}

fn parse_crop(value: &Value, path: JsonPath) -> Result<Crop, ImportError> {
    let Value::Array(items) = value else {
        return Err(ImportError::wrong_type(path, "list", type_name(value)));
    };
    if items.len() != 4 {
        return Err(ImportError::invalid(
            path,
            "exactly 4 integers",
            format!("{} values", items.len()),
            format!(
                "\"crop\" must be exactly 4 integers or omitted, got {} instead",
                items.len()
            ),
        ));
    }

    let mut edges = [0u32; 4];
    for (i, (item, edge)) in items.iter().zip(edges.iter_mut()).enumerate() {
        *edge = integral(item)
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| {
                ImportError::invalid(
                    path.index(i),
                    "an integer >= 0",
                    item.to_string(),
                    format!("cropping values must be integers that are at least 0 (got {item})"),
                )
            })?;
    }
    let [x0, y0, x1, y1] = edges;
    Crop::new(x0, y0, x1, y1).map_err(|e| {
        ImportError::invalid(
            path,
            "x0 <= x1 and y0 <= y1",
            format!("[{x0}, {y0}, {x1}, {y1}]"),
            e.to_string(),
        )
    })
}

fn parse_kind(
    view: &ObjectView<'_>,
    allowed: &[&'static str],
) -> Result<&'static str, ImportError> {
    let kind = view.required_str("feature")?;
    check_member(
        kind,
        allowed,
        view.path().field("feature"),
        &format!("{} feature", view.context()),
    )
}

fn parse_justify<T>(
    view: &ObjectView<'_>,
    default: T,
    parse: impl Fn(&str) -> Result<T, ArgumentError>,
) -> Result<T, ImportError> {
    match view.optional_str("justify")? {
        None => Ok(default),
        Some(code) => parse(code).map_err(|e| {
            ImportError::invalid(
                view.path().field("justify"),
                "a justification code",
                format!("\"{code}\""),
                e.to_string(),
            )
        }),
    }
}

fn parse_override_list<T>(
    view: &ObjectView<'_>,
    mut parse: impl FnMut(&Value, JsonPath) -> Result<T, ImportError>,
) -> Result<Vec<T>, ImportError> {
    let Some(items) = view.optional_list("overrides")? else {
        return Ok(Vec::new());
    };
    let base = view.path().field("overrides");
    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse(item, base.index(i)))
        .collect()
}

/// Validated fixed-feature record.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FeatureSpec {
    /// Base asset.
    pub sourced: SourcedSpec,
    /// Member of [`Feature::KINDS`].
    pub kind: &'static str,
}

impl FeatureSpec {
    /// Validate feature JSON.
    pub fn from_json(json: &Value, theme_directory: Option<&Path>) -> Result<Self, ImportError> {
        let view = ObjectView::new(json, JsonPath::root(), "Feature")?;
        let sourced = SourcedSpec::from_view(&view, theme_directory)?;
        let kind = parse_kind(&view, Feature::KINDS)?;
        Ok(Self { sourced, kind })
    }
}

/// Validated 1-D override: a sourced asset at tile offset `x`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Override1DSpec {
    /// Replacement asset.
    pub sourced: SourcedSpec,
    /// Tile offset from the origin.
    pub x: i32,
}

impl Override1DSpec {
    fn from_json(
        json: &Value,
        path: JsonPath,
        theme_directory: Option<&Path>,
    ) -> Result<Self, ImportError> {
        let view = ObjectView::new(json, path, "FeatureOverride")?;
        let sourced = SourcedSpec::from_view(&view, theme_directory)?;
        let x = offset(&view, "x")?;
        Ok(Self { sourced, x })
    }
}

/// Validated 2-D override: a sourced asset at tile offset `(x, y)`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Override2DSpec {
    /// Replacement asset.
    pub sourced: SourcedSpec,
    /// Horizontal tile offset from the origin.
    pub x: i32,
    /// Vertical tile offset from the origin.
    pub y: i32,
}

impl Override2DSpec {
    fn from_json(
        json: &Value,
        path: JsonPath,
        theme_directory: Option<&Path>,
    ) -> Result<Self, ImportError> {
        let view = ObjectView::new(json, path, "FeatureOverride")?;
        let sourced = SourcedSpec::from_view(&view, theme_directory)?;
        let x = offset(&view, "x")?;
        let y = offset(&view, "y")?;
        Ok(Self { sourced, x, y })
    }
}

fn offset(view: &ObjectView<'_>, key: &'static str) -> Result<i32, ImportError> {
    let v = view.required_int(key, i64::from(i32::MIN), i64::from(i32::MAX))?;
    // Range checked above.
    Ok(v as i32)
}

/// Validated 1-D feature record.
///
/// Defaults: `justify` = [`Feature1D::DEFAULT_JUSTIFY`] (center), `direction` = horizontal,
/// `overrides` = empty.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Feature1DSpec {
    /// Base asset.
    pub sourced: SourcedSpec,
    /// Member of [`Feature1D::KINDS`].
    pub kind: &'static str,
    /// Origin tile justification.
    pub justify: Justify1D,
    /// Tiling axis.
    pub direction: Direction,
    /// Per-offset overrides.
    pub overrides: Vec<Override1DSpec>,
}

impl Feature1DSpec {
    /// Validate 1-D feature JSON.
    pub fn from_json(json: &Value, theme_directory: Option<&Path>) -> Result<Self, ImportError> {
        let view = ObjectView::new(json, JsonPath::root(), "Feature1D")?;
        let sourced = SourcedSpec::from_view(&view, theme_directory)?;
        let justify = parse_justify(&view, Feature1D::DEFAULT_JUSTIFY, Justify1D::from_name)?;
        let direction = match view.optional_str("direction")? {
            None => Direction::default(),
            Some(name) => Direction::from_name(name).map_err(|e| {
                ImportError::invalid(
                    view.path().field("direction"),
                    "horizontal or vertical",
                    format!("\"{name}\""),
                    e.to_string(),
                )
            })?,
        };
        // Overrides are type-checked before the kind.
        view.optional_list("overrides")?;
        let kind = parse_kind(&view, Feature1D::KINDS)?;
        let overrides = parse_override_list(&view, |item, path| {
            Override1DSpec::from_json(item, path, theme_directory)
        })?;
        Ok(Self {
            sourced,
            kind,
            justify,
            direction,
            overrides,
        })
    }
}

/// Validated 2-D feature record.
///
/// Defaults: `justify` = [`Feature2D::DEFAULT_IMPORT_JUSTIFY`] (top left), `overrides` = empty.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Feature2DSpec {
    /// Base asset.
    pub sourced: SourcedSpec,
    /// Member of [`Feature2D::KINDS`].
    pub kind: &'static str,
    /// Origin tile justification.
    pub justify: Justify2D,
    /// Per-offset overrides.
    pub overrides: Vec<Override2DSpec>,
}

impl Feature2DSpec {
    /// Validate 2-D feature JSON.
    pub fn from_json(json: &Value, theme_directory: Option<&Path>) -> Result<Self, ImportError> {
        let view = ObjectView::new(json, JsonPath::root(), "Feature2D")?;
        let sourced = SourcedSpec::from_view(&view, theme_directory)?;
        let justify = parse_justify(&view, Feature2D::DEFAULT_IMPORT_JUSTIFY, Justify2D::parse)?;
        view.optional_list("overrides")?;
        let kind = parse_kind(&view, Feature2D::KINDS)?;
        let overrides = parse_override_list(&view, |item, path| {
            Override2DSpec::from_json(item, path, theme_directory)
        })?;
        Ok(Self {
            sourced,
            kind,
            justify,
            overrides,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/spec.rs"]
mod tests;
