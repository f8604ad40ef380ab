use std::{collections::BTreeMap, fmt::Debug};

use crate::{
    assets::{cache::AssetCache, resource::AssetResource},
    foundation::error::{ArgumentError, WrittenBookResult},
    schema::{Override1DSpec, Override2DSpec},
};

/// Substitute asset painted at one tile offset of a [`crate::Feature1D`].
#[derive(Clone, Debug)]
pub struct FeatureOverride1D {
    /// Replacement tile; must match the base asset's cropped size.
    pub asset: AssetResource,
    /// Signed tile offset from the origin tile.
    pub offset: i32,
}

impl FeatureOverride1D {
    /// Override `asset` at tile offset `x`.
    pub fn new(asset: AssetResource, x: i32) -> Self {
        Self { asset, offset: x }
    }

    /// Load a validated override record.
    pub fn from_spec(spec: &Override1DSpec, cache: &AssetCache) -> WrittenBookResult<Self> {
        Ok(Self::new(AssetResource::from_spec(&spec.sourced, cache)?, spec.x))
    }
}

/// Substitute asset painted at one tile offset of a [`crate::Feature2D`].
#[derive(Clone, Debug)]
pub struct FeatureOverride2D {
    /// Replacement tile; must match the base asset's cropped size.
    pub asset: AssetResource,
    /// Signed `(x, y)` tile offset from the origin tile.
    pub offset: (i32, i32),
}

impl FeatureOverride2D {
    /// Override `asset` at tile offset `(x, y)`.
    pub fn new(asset: AssetResource, x: i32, y: i32) -> Self {
        Self {
            asset,
            offset: (x, y),
        }
    }

    /// Load a validated override record.
    pub fn from_spec(spec: &Override2DSpec, cache: &AssetCache) -> WrittenBookResult<Self> {
        Ok(Self::new(
            AssetResource::from_spec(&spec.sourced, cache)?,
            spec.x,
            spec.y,
        ))
    }
}

/// Cropped size of a base asset, rejecting assets that cannot tile.
pub(crate) fn tile_size(asset: &AssetResource) -> Result<(u32, u32), ArgumentError> {
    let (width, height) = asset.size();
    if width == 0 || height == 0 {
        return Err(ArgumentError::EmptyTile { width, height });
    }
    Ok((width, height))
}

/// Key overrides by offset, checking sizes against `expected` and rejecting duplicate offsets.
pub(crate) fn index_overrides<K, O>(
    expected: (u32, u32),
    overrides: impl IntoIterator<Item = O>,
    offset: impl Fn(&O) -> K,
    asset: impl Fn(&O) -> &AssetResource,
) -> Result<BTreeMap<K, O>, ArgumentError>
where
    K: Ord + Copy + Debug,
{
    let mut out = BTreeMap::new();
    for o in overrides {
        let key = offset(&o);
        let actual = asset(&o).size();
        if actual != expected {
            return Err(ArgumentError::OverrideSizeMismatch {
                offset: format!("{key:?}"),
                actual,
                expected,
            });
        }
        if out.insert(key, o).is_some() {
            return Err(ArgumentError::DuplicateOverride {
                offset: format!("{key:?}"),
            });
        }
    }
    Ok(out)
}
