use std::{collections::BTreeMap, path::Path};

use image::{RgbaImage, imageops};

use crate::{
    assets::{cache::AssetCache, resource::AssetResource},
    feature::{
        axis::AxisLayout,
        overrides::{FeatureOverride2D, index_overrides, tile_size},
    },
    foundation::error::{ArgumentError, WrittenBookResult},
    justify::justify2d::{Justify2D, JustifyX, JustifyY},
    schema::Feature2DSpec,
};

/// A tile repeated over an area, with optional per-offset overrides.
#[derive(Clone, Debug)]
pub struct Feature2D {
    asset: AssetResource,
    justify: Justify2D,
    overrides: BTreeMap<(i32, i32), FeatureOverride2D>,
    kind: Option<&'static str>,
}

impl Feature2D {
    /// Feature kinds accepted by [`Feature2D::import`].
    pub const KINDS: &'static [&'static str] = &["background", "code_background"];

    /// Justification used by [`Feature2D::import`] when the JSON has none.
    pub const DEFAULT_IMPORT_JUSTIFY: Justify2D = Justify2D::TOP_LEFT;

    /// Parse a justification code into `(x, y)`; see [`Justify2D::parse`].
    pub fn get_justify(code: &str) -> Result<(JustifyX, JustifyY), ArgumentError> {
        Justify2D::parse(code).map(Justify2D::pair)
    }

    /// Build a feature. Every override must have the base asset's cropped size.
    pub fn new(
        asset: AssetResource,
        justify: Justify2D,
        overrides: impl IntoIterator<Item = FeatureOverride2D>,
    ) -> WrittenBookResult<Self> {
        let size = tile_size(&asset)?;
        let overrides = index_overrides(
            size,
            overrides,
            |o: &FeatureOverride2D| o.offset,
            |o: &FeatureOverride2D| &o.asset,
        )?;
        Ok(Self {
            asset,
            justify,
            overrides,
            kind: None,
        })
    }

    /// Like [`Feature2D::new`], taking a justification code such as `"top left"`.
    pub fn with_code(
        asset: AssetResource,
        justify: &str,
        overrides: impl IntoIterator<Item = FeatureOverride2D>,
    ) -> WrittenBookResult<Self> {
        Self::new(asset, Justify2D::parse(justify)?, overrides)
    }

    /// Import from feature JSON.
    #[tracing::instrument(skip(json, cache))]
    pub fn import(
        json: &serde_json::Value,
        theme_directory: Option<&Path>,
        cache: &AssetCache,
    ) -> WrittenBookResult<Self> {
        let spec = Feature2DSpec::from_json(json, theme_directory)?;
        Self::from_spec(&spec, cache)
    }

    /// Load a validated feature record.
    pub fn from_spec(spec: &Feature2DSpec, cache: &AssetCache) -> WrittenBookResult<Self> {
        let asset = AssetResource::from_spec(&spec.sourced, cache)?;
        let overrides = spec
            .overrides
            .iter()
            .map(|o| FeatureOverride2D::from_spec(o, cache))
            .collect::<WrittenBookResult<Vec<_>>>()?;
        let mut feature = Self::new(asset, spec.justify, overrides)?;
        feature.kind = Some(spec.kind);
        Ok(feature)
    }

    /// Base tile.
    pub fn asset(&self) -> &AssetResource {
        &self.asset
    }

    /// Justification of the origin tile.
    pub fn justify(&self) -> Justify2D {
        self.justify
    }

    /// Overrides keyed by `(x, y)` offset.
    pub fn overrides(&self) -> &BTreeMap<(i32, i32), FeatureOverride2D> {
        &self.overrides
    }

    /// Kind name when imported.
    pub fn kind(&self) -> Option<&'static str> {
        self.kind
    }

    /// Tile to exactly `width × height` pixels.
    pub fn tile(&self, width: u32, height: u32) -> WrittenBookResult<RgbaImage> {
        let base = self.asset.view();
        let (tw, th) = self.asset.size();
        let lx = AxisLayout::new(width, tw, self.justify.x.into())?;
        let ly = AxisLayout::new(height, th, self.justify.y.into())?;
        tracing::trace!(?lx, ?ly, width, height, "tiling area");

        let mut canvas = RgbaImage::new(lx.canvas, ly.canvas);
        for ix in 0..lx.tile_count {
            for iy in 0..ly.tile_count {
                let offset = lx.offset_of(ix).zip(ly.offset_of(iy));
                let px = i64::from(ix * tw);
                let py = i64::from(iy * th);
                match offset.and_then(|o| self.overrides.get(&o)) {
                    Some(o) => imageops::replace(&mut canvas, &*o.asset.view(), px, py),
                    None => imageops::replace(&mut canvas, &*base, px, py),
                }
            }
        }
        Ok(imageops::crop_imm(&canvas, lx.crop_from, ly.crop_from, width, height).to_image())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/feature/feature2d.rs"]
mod tests;
