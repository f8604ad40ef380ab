use crate::schema::ImportError;

/// Convenience result type used across the crate.
pub type WrittenBookResult<T> = Result<T, WrittenBookError>;

/// Top-level error taxonomy returned by asset, feature and import APIs.
#[derive(thiserror::Error, Debug)]
pub enum WrittenBookError {
    /// Malformed JSON theme data.
    #[error("validation failed: {0}")]
    Import(#[from] ImportError),

    /// Geometry or argument errors reachable without any JSON involved.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// Wrapped lower-level error from IO or image decoding.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WrittenBookError {
    /// Import error payload, if this is an import failure.
    pub fn as_import(&self) -> Option<&ImportError> {
        match self {
            Self::Import(e) => Some(e),
            _ => None,
        }
    }

    /// Argument error payload, if this is an invalid-argument failure.
    pub fn as_argument(&self) -> Option<&ArgumentError> {
        match self {
            Self::InvalidArgument(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors raised by direct API use: justification codes, crops, override geometry.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    /// `Justify1D::from_name` lookup failure.
    #[error(
        "unknown justification '{name}'; \
         expected one of start, center, end, left, right, top, bottom"
    )]
    UnknownJustifyName {
        /// Word that failed the lookup.
        name: String,
    },

    /// Justify code with zero or more than two words.
    #[error("invalid justify code: {code}; must be 1 or 2 words, got {count}")]
    JustifyWordCount {
        /// Full code as given.
        code: String,
        /// Number of words found.
        count: usize,
    },

    /// Single-word justify code outside the alias table.
    #[error("invalid justify code: {code}; the 1-word code '{word}' is not supported")]
    UnsupportedJustifyAlias {
        /// Full code as given.
        code: String,
        /// The single word.
        word: String,
    },

    /// Second word of a two-word code is not an x justification.
    #[error(
        "invalid justify code: {code}; \
         the second word '{word}' is not a supported x justification"
    )]
    UnsupportedJustifyX {
        /// Full code as given.
        code: String,
        /// Offending word.
        word: String,
    },

    /// First word of a two-word code is not a y justification.
    #[error(
        "invalid justify code: {code}; \
         the first word '{word}' is not a supported y justification"
    )]
    UnsupportedJustifyY {
        /// Full code as given.
        code: String,
        /// Offending word.
        word: String,
    },

    /// Unknown tiling direction name.
    #[error("unknown direction '{name}'; expected horizontal or vertical")]
    UnknownDirection {
        /// Name that failed the lookup.
        name: String,
    },

    /// Unknown anchor value for one of the anchor enums.
    #[error("unknown {axis} anchor '{value}'")]
    UnknownAnchor {
        /// Which enum was being parsed (`x`, `y` or `mode`).
        axis: &'static str,
        /// Value that failed to parse.
        value: String,
    },

    /// Crop rectangle with `x0 > x1` or `y0 > y1`.
    #[error("crop ({x0}, {y0}, {x1}, {y1}) is inverted; expected x0 <= x1 and y0 <= y1")]
    InvertedCrop {
        /// Left edge.
        x0: u32,
        /// Top edge.
        y0: u32,
        /// Right edge (exclusive).
        x1: u32,
        /// Bottom edge (exclusive).
        y1: u32,
    },

    /// Crop rectangle reaching past the bitmap bounds.
    #[error("crop ({x0}, {y0}, {x1}, {y1}) exceeds image bounds {width}x{height}")]
    CropOutOfBounds {
        /// Left edge.
        x0: u32,
        /// Top edge.
        y0: u32,
        /// Right edge (exclusive).
        x1: u32,
        /// Bottom edge (exclusive).
        y1: u32,
        /// Bitmap width.
        width: u32,
        /// Bitmap height.
        height: u32,
    },

    /// Tiling base asset with zero width or height.
    #[error("cannot tile an empty asset ({width}x{height})")]
    EmptyTile {
        /// Cropped width.
        width: u32,
        /// Cropped height.
        height: u32,
    },

    /// Requested tiling length whose canvas does not fit in `u32`.
    #[error("cannot tile {length}px with {tile}px tiles; the canvas would overflow")]
    TileLengthOverflow {
        /// Requested output length.
        length: u32,
        /// Tile extent along the same axis.
        tile: u32,
    },

    /// Override whose cropped size differs from the base asset.
    #[error(
        "override asset size must match the base asset size.\n    \
         got {actual:?}, expected {expected:?} (override at offset {offset})\n    \
         (hint: try resizing the override with the 'crop' option)\n    \
         (hint: if you don't want to do that, use an overlay instead)"
    )]
    OverrideSizeMismatch {
        /// Offset the override is registered at, formatted.
        offset: String,
        /// Cropped size of the override.
        actual: (u32, u32),
        /// Cropped size of the base asset.
        expected: (u32, u32),
    },

    /// Two overrides registered at the same offset.
    #[error("duplicate override at offset {offset}")]
    DuplicateOverride {
        /// Offending offset, formatted.
        offset: String,
    },
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
