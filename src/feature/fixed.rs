use std::path::Path;

use crate::{
    assets::{cache::AssetCache, resource::AssetResource},
    foundation::error::WrittenBookResult,
    schema::FeatureSpec,
};

/// A non-tiling feature: corners, caps and bullets drawn at their natural size.
#[derive(Clone, Debug)]
pub struct Feature {
    asset: AssetResource,
    kind: Option<&'static str>,
}

impl Feature {
    /// Feature kinds accepted by [`Feature::import`].
    pub const KINDS: &'static [&'static str] = &[
        "top_left_corner",
        "top_right_corner",
        "bottom_left_corner",
        "bottom_right_corner",
        "block_quote_top_cap",
        "block_quote_bottom_cap",
        "code_top_left_corner",
        "code_top_right_corner",
        "code_bottom_left_corner",
        "code_bottom_right_corner",
        "horizontal_rule_left_cap",
        "horizontal_rule_right_cap",
        "bullet",
    ];

    /// Wrap `asset` with no kind attached.
    pub fn new(asset: AssetResource) -> Self {
        Self { asset, kind: None }
    }

    /// Import from feature JSON.
    #[tracing::instrument(skip(json, cache))]
    pub fn import(
        json: &serde_json::Value,
        theme_directory: Option<&Path>,
        cache: &AssetCache,
    ) -> WrittenBookResult<Self> {
        let spec = FeatureSpec::from_json(json, theme_directory)?;
        Self::from_spec(&spec, cache)
    }

    /// Load a validated feature record.
    pub fn from_spec(spec: &FeatureSpec, cache: &AssetCache) -> WrittenBookResult<Self> {
        Ok(Self {
            asset: AssetResource::from_spec(&spec.sourced, cache)?,
            kind: Some(spec.kind),
        })
    }

    /// The feature's asset.
    pub fn asset(&self) -> &AssetResource {
        &self.asset
    }

    /// Kind name when imported.
    pub fn kind(&self) -> Option<&'static str> {
        self.kind
    }
}
