pub(crate) mod axis;
pub(crate) mod feature1d;
pub(crate) mod feature2d;
pub(crate) mod fixed;
pub(crate) mod overrides;

use std::path::Path;

use image::RgbaImage;

use crate::{
    assets::{cache::AssetCache, resource::AssetResource},
    foundation::error::WrittenBookResult,
    justify::justify1d::Direction,
    schema::{JsonPath, walk},
};

use self::{feature1d::Feature1D, feature2d::Feature2D, fixed::Feature};

/// Any theme feature, dispatched on its JSON `feature` kind.
#[derive(Clone, Debug)]
pub enum ThemeFeature {
    /// Corner, cap or bullet drawn at natural size.
    Fixed(Feature),
    /// Rule or edge stretched along one axis.
    Line(Feature1D),
    /// Background tiled over an area.
    Area(Feature2D),
}

impl ThemeFeature {
    /// Every kind accepted by [`ThemeFeature::import`].
    pub fn all_kinds() -> Vec<&'static str> {
        Feature::KINDS
            .iter()
            .chain(Feature1D::KINDS)
            .chain(Feature2D::KINDS)
            .copied()
            .collect()
    }

    /// Import feature JSON, choosing the feature shape from the `feature` kind.
    #[tracing::instrument(skip(json, cache))]
    pub fn import(
        json: &serde_json::Value,
        theme_directory: Option<&Path>,
        cache: &AssetCache,
    ) -> WrittenBookResult<Self> {
        let view = walk::ObjectView::new(json, JsonPath::root(), "Feature")?;
        let kind = view.required_str("feature")?;
        let kind = walk::check_member(
            kind,
            &Self::all_kinds(),
            view.path().field("feature"),
            "feature",
        )?;

        if Feature::KINDS.contains(&kind) {
            Feature::import(json, theme_directory, cache).map(Self::Fixed)
        } else if Feature1D::KINDS.contains(&kind) {
            Feature1D::import(json, theme_directory, cache).map(Self::Line)
        } else {
            Feature2D::import(json, theme_directory, cache).map(Self::Area)
        }
    }

    /// Kind name the feature was imported with.
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            Self::Fixed(f) => f.kind(),
            Self::Line(f) => f.kind(),
            Self::Area(f) => f.kind(),
        }
    }

    /// Base asset of the feature.
    pub fn asset(&self) -> &AssetResource {
        match self {
            Self::Fixed(f) => f.asset(),
            Self::Line(f) => f.asset(),
            Self::Area(f) => f.asset(),
        }
    }

    /// Render for a `width × height` panel slot.
    ///
    /// Fixed features ignore the size. Lines use the extent along their direction.
    pub fn render(&self, width: u32, height: u32) -> WrittenBookResult<RgbaImage> {
        match self {
            Self::Fixed(f) => Ok(f.asset().get()),
            Self::Line(f) => match f.direction() {
                Direction::Horizontal => f.tile(width),
                Direction::Vertical => f.tile(height),
            },
            Self::Area(f) => f.tile(width, height),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/feature/theme_feature.rs"]
mod tests;
