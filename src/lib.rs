//! Written Book composites seamless tile bitmaps into the chrome of book-style pages:
//! borders, rules, block-quote edges and backgrounds.
//!
//! A theme describes each piece of chrome as a *feature* in JSON. Importing a feature
//! validates the JSON, loads its bitmaps through a shared [`AssetCache`], and yields a
//! value that can render itself for any requested size.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: theme JSON -> `*Spec` records ([`Feature1DSpec`], [`Feature2DSpec`], ...).
//!    Failures carry an [`ImportErrorCode`] and the JSON path of the offending value.
//! 2. **Load**: spec records -> [`AssetResource`]s, decoding each source file at most once per
//!    [`AssetCache`].
//! 3. **Tile**: [`Feature1D::tile`] / [`Feature2D::tile`] -> an owned RGBA8 bitmap of exactly the
//!    requested size.
//!
//! Pixels stay straight-alpha RGBA8 throughout. Overrides replace tile pixels outright; nothing
//! is blended.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod feature;
mod foundation;
mod justify;
mod schema;

pub use assets::cache::AssetCache;
pub use assets::decode::decode_image;
pub use assets::resource::{AssetOrigin, AssetResource, Crop};
pub use feature::ThemeFeature;
pub use feature::feature1d::Feature1D;
pub use feature::feature2d::Feature2D;
pub use feature::fixed::Feature;
pub use feature::overrides::{FeatureOverride1D, FeatureOverride2D};
pub use foundation::error::{ArgumentError, WrittenBookError, WrittenBookResult};
pub use justify::anchor::{Anchor2D, AnchorMode, AnchorX, AnchorY, IntoAnchor};
pub use justify::justify1d::{Direction, Justify1D};
pub use justify::justify2d::{Justify2D, JustifyX, JustifyY};
pub use schema::{
    Feature1DSpec, Feature2DSpec, FeatureSpec, ImportError, ImportErrorCode, ImportErrorKind,
    JsonPath, JsonPathElem, Override1DSpec, Override2DSpec, SourcedSpec,
};
