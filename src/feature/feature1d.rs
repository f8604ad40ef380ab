use std::{collections::BTreeMap, path::Path};

use image::{GenericImageView, Rgba, RgbaImage, imageops};

use crate::{
    assets::{cache::AssetCache, resource::AssetResource},
    feature::{
        axis::AxisLayout,
        overrides::{FeatureOverride1D, index_overrides, tile_size},
    },
    foundation::error::{ArgumentError, WrittenBookResult},
    justify::justify1d::{Direction, Justify1D},
    schema::Feature1DSpec,
};

/// A tile stretched along one axis, with optional per-offset overrides.
#[derive(Clone, Debug)]
pub struct Feature1D {
    asset: AssetResource,
    justify: Justify1D,
    direction: Direction,
    overrides: BTreeMap<i32, FeatureOverride1D>,
    kind: Option<&'static str>,
}

impl Feature1D {
    /// Feature kinds accepted by [`Feature1D::import`].
    pub const KINDS: &'static [&'static str] = &[
        "horizontal_rule",
        "block_quote_edge",
        "top_edge",
        "bottom_edge",
        "left_edge",
        "right_edge",
        "code_top_edge",
        "code_bottom_edge",
        "code_left_edge",
        "code_right_edge",
    ];

    /// Justification used when none is given.
    pub const DEFAULT_JUSTIFY: Justify1D = Justify1D::Center;

    /// Build a feature, validating every override against the base asset.
    pub fn new(
        asset: AssetResource,
        justify: Justify1D,
        direction: Direction,
        overrides: impl IntoIterator<Item = FeatureOverride1D>,
    ) -> WrittenBookResult<Self> {
        let size = tile_size(&asset)?;
        let overrides = index_overrides(
            size,
            overrides,
            |o: &FeatureOverride1D| o.offset,
            |o: &FeatureOverride1D| &o.asset,
        )?;
        Ok(Self {
            asset,
            justify,
            direction,
            overrides,
            kind: None,
        })
    }

    /// Like [`Feature1D::new`], taking a justification name such as `"left"` or `"end"`.
    pub fn with_code(
        asset: AssetResource,
        justify: &str,
        direction: Direction,
        overrides: impl IntoIterator<Item = FeatureOverride1D>,
    ) -> WrittenBookResult<Self> {
        Self::new(asset, Self::get_justify(justify)?, direction, overrides)
    }

    /// Parse a 1-D justification name.
    pub fn get_justify(code: &str) -> Result<Justify1D, ArgumentError> {
        Justify1D::from_name(code)
    }

    /// Import from feature JSON.
    #[tracing::instrument(skip(json, cache))]
    pub fn import(
        json: &serde_json::Value,
        theme_directory: Option<&Path>,
        cache: &AssetCache,
    ) -> WrittenBookResult<Self> {
        let spec = Feature1DSpec::from_json(json, theme_directory)?;
        Self::from_spec(&spec, cache)
    }

    /// Load a validated feature record.
    pub fn from_spec(spec: &Feature1DSpec, cache: &AssetCache) -> WrittenBookResult<Self> {
        let asset = AssetResource::from_spec(&spec.sourced, cache)?;
        let overrides = spec
            .overrides
            .iter()
            .map(|o| FeatureOverride1D::from_spec(o, cache))
            .collect::<WrittenBookResult<Vec<_>>>()?;
        let mut feature = Self::new(asset, spec.justify, spec.direction, overrides)?;
        feature.kind = Some(spec.kind);
        Ok(feature)
    }

    /// Base tile.
    pub fn asset(&self) -> &AssetResource {
        &self.asset
    }

    /// Justification of the origin tile.
    pub fn justify(&self) -> Justify1D {
        self.justify
    }

    /// Tiling axis.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Overrides keyed by offset.
    pub fn overrides(&self) -> &BTreeMap<i32, FeatureOverride1D> {
        &self.overrides
    }

    /// Kind name when imported.
    pub fn kind(&self) -> Option<&'static str> {
        self.kind
    }

    /// Tile to `length` pixels along the feature's direction.
    ///
    /// Horizontal features return `length × tile height`; vertical ones `tile width × length`.
    pub fn tile(&self, length: u32) -> WrittenBookResult<RgbaImage> {
        match self.direction {
            Direction::Horizontal => {
                let base = self.asset.view();
                let views: BTreeMap<i32, _> = self
                    .overrides
                    .iter()
                    .map(|(k, o)| (*k, o.asset.view()))
                    .collect();
                let overrides: BTreeMap<i32, _> = views.iter().map(|(k, v)| (*k, &**v)).collect();
                paint_strip(&*base, &overrides, length, self.justify)
            }
            Direction::Vertical => {
                // Lay the strip out horizontally with the top of each tile on the left.
                let base = imageops::rotate270(&*self.asset.view());
                let rotated: BTreeMap<i32, _> = self
                    .overrides
                    .iter()
                    .map(|(k, o)| (*k, imageops::rotate270(&*o.asset.view())))
                    .collect();
                let overrides: BTreeMap<i32, _> = rotated.iter().map(|(k, v)| (*k, v)).collect();
                let strip = paint_strip(&base, &overrides, length, self.justify)?;
                Ok(imageops::rotate90(&strip))
            }
        }
    }
}

fn paint_strip<I>(
    base: &I,
    overrides: &BTreeMap<i32, &I>,
    length: u32,
    justify: Justify1D,
) -> WrittenBookResult<RgbaImage>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (tw, th) = base.dimensions();
    let layout = AxisLayout::new(length, tw, justify)?;
    tracing::trace!(?layout, length, tw, th, "tiling strip");

    let mut canvas = RgbaImage::new(layout.canvas, th);
    for i in 0..layout.tile_count {
        let x = i64::from(i * tw);
        match layout.offset_of(i).and_then(|offset| overrides.get(&offset)) {
            Some(tile) => imageops::replace(&mut canvas, *tile, x, 0),
            None => imageops::replace(&mut canvas, base, x, 0),
        }
    }
    Ok(imageops::crop_imm(&canvas, layout.crop_from, 0, length, th).to_image())
}

#[cfg(test)]
#[path = "../../tests/unit/feature/feature1d.rs"]
mod tests;
