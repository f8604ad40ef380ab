use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use image::{RgbaImage, SubImage, imageops};

use crate::{
    assets::cache::AssetCache,
    foundation::error::{ArgumentError, WrittenBookResult},
    schema::SourcedSpec,
};

/// Crop rectangle in pixels. `x1`/`y1` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Crop {
    /// Left edge.
    pub x0: u32,
    /// Top edge.
    pub y0: u32,
    /// Right edge (exclusive).
    pub x1: u32,
    /// Bottom edge (exclusive).
    pub y1: u32,
}

impl Crop {
    /// Construct a crop box; fails when inverted.
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Result<Self, ArgumentError> {
        if x0 > x1 || y0 > y1 {
            return Err(ArgumentError::InvertedCrop { x0, y0, x1, y1 });
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Crop covering a whole `width`×`height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: width,
            y1: height,
        }
    }

    /// Cropped width.
    pub fn width(self) -> u32 {
        self.x1 - self.x0
    }

    /// Cropped height.
    pub fn height(self) -> u32 {
        self.y1 - self.y0
    }

    fn check_within(self, width: u32, height: u32) -> Result<(), ArgumentError> {
        if self.x0 > self.x1 || self.y0 > self.y1 {
            return Err(ArgumentError::InvertedCrop {
                x0: self.x0,
                y0: self.y0,
                x1: self.x1,
                y1: self.y1,
            });
        }
        if self.x1 > width || self.y1 > height {
            return Err(ArgumentError::CropOutOfBounds {
                x0: self.x0,
                y0: self.y0,
                x1: self.x1,
                y1: self.y1,
                width,
                height,
            });
        }
        Ok(())
    }
}

/// Where an [`AssetResource`]'s bitmap came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetOrigin {
    /// Loaded through an [`AssetCache`] under this canonical path.
    File(PathBuf),
    /// Wrapped in-memory bitmap owned by this resource alone.
    InMemory,
}

/// A cropped view onto a bitmap that is used while compositing.
#[derive(Clone, Debug)]
pub struct AssetResource {
    origin: AssetOrigin,
    image: Arc<RgbaImage>,
    crop: Crop,
}

impl AssetResource {
    /// Load `source` through `cache`, cropped to `crop` (whole image when `None`).
    pub fn open(
        cache: &AssetCache,
        source: impl AsRef<Path>,
        crop: Option<Crop>,
    ) -> WrittenBookResult<Self> {
        let (path, image) = cache.load(source)?;
        Self::with_bitmap(AssetOrigin::File(path), image, crop)
    }

    /// Wrap an in-memory bitmap. Never touches a cache.
    pub fn from_image(image: RgbaImage) -> Self {
        let crop = Crop::full(image.width(), image.height());
        Self {
            origin: AssetOrigin::InMemory,
            image: Arc::new(image),
            crop,
        }
    }

    /// Wrap an in-memory bitmap with a crop.
    pub fn from_image_cropped(image: RgbaImage, crop: Crop) -> WrittenBookResult<Self> {
        Self::with_bitmap(AssetOrigin::InMemory, Arc::new(image), Some(crop))
    }

    /// Import from a JSON "sourced" object, resolving `source` against `theme_directory`.
    #[tracing::instrument(skip(json, cache))]
    pub fn import(
        json: &serde_json::Value,
        theme_directory: Option<&Path>,
        cache: &AssetCache,
    ) -> WrittenBookResult<Self> {
        let spec = SourcedSpec::from_json(json, theme_directory)?;
        Self::from_spec(&spec, cache)
    }

    /// Load an already validated sourced record.
    pub fn from_spec(spec: &SourcedSpec, cache: &AssetCache) -> WrittenBookResult<Self> {
        Self::open(cache, &spec.source, spec.crop)
    }

    fn with_bitmap(
        origin: AssetOrigin,
        image: Arc<RgbaImage>,
        crop: Option<Crop>,
    ) -> WrittenBookResult<Self> {
        let crop = match crop {
            Some(crop) => {
                crop.check_within(image.width(), image.height())?;
                crop
            }
            None => Crop::full(image.width(), image.height()),
        };
        Ok(Self {
            origin,
            image,
            crop,
        })
    }

    /// Origin of the underlying bitmap.
    pub fn origin(&self) -> &AssetOrigin {
        &self.origin
    }

    /// Canonical source path, `None` for in-memory assets.
    pub fn canonical_path(&self) -> Option<&Path> {
        match &self.origin {
            AssetOrigin::File(p) => Some(p),
            AssetOrigin::InMemory => None,
        }
    }

    /// Whether this asset wraps an in-memory bitmap.
    pub fn is_in_memory(&self) -> bool {
        matches!(self.origin, AssetOrigin::InMemory)
    }

    /// Crop applied to the underlying bitmap.
    pub fn crop(&self) -> Crop {
        self.crop
    }

    /// Post-crop `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.crop.width(), self.crop.height())
    }

    /// Dimensions of the whole underlying bitmap.
    pub fn source_dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Non-owning cropped view of the bitmap.
    pub fn view(&self) -> SubImage<&RgbaImage> {
        imageops::crop_imm(
            &*self.image,
            self.crop.x0,
            self.crop.y0,
            self.crop.width(),
            self.crop.height(),
        )
    }

    /// Cropped pixels as an owned bitmap.
    pub fn get(&self) -> RgbaImage {
        self.view().to_image()
    }

    /// Whether both resources reference the identical decoded bitmap.
    pub fn shares_bitmap_with(&self, other: &AssetResource) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/resource.rs"]
mod tests;
