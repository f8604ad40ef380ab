use crate::{foundation::error::ArgumentError, justify::justify1d::Justify1D};

/// `value` rounded up to the next multiple of `multiple`, always strictly greater than `value`.
///
/// `None` when the result does not fit in `u32`.
pub(crate) fn next_multiple(value: u32, multiple: u32) -> Option<u32> {
    value.checked_add(multiple - value % multiple)
}

/// Placement of tiles along one axis for a requested output length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AxisLayout {
    /// Number of whole tiles painted; always odd.
    pub(crate) tile_count: u32,
    /// Index of the tile at offset zero.
    pub(crate) origin: u32,
    /// Canvas length, `tile_count * tile`.
    pub(crate) canvas: u32,
    /// Where the output window starts inside the canvas.
    pub(crate) crop_from: u32,
}

impl AxisLayout {
    /// `tile` must be non-zero.
    pub(crate) fn new(length: u32, tile: u32, justify: Justify1D) -> Result<Self, ArgumentError> {
        let overflow = || ArgumentError::TileLengthOverflow { length, tile };
        let mut tile_count = next_multiple(length, tile).ok_or_else(overflow)? / tile;
        if tile_count % 2 == 0 {
            tile_count = tile_count.checked_add(1).ok_or_else(overflow)?;
        }
        let canvas = tile_count.checked_mul(tile).ok_or_else(overflow)?;
        Ok(Self {
            tile_count,
            origin: justify.origin_index(tile_count),
            canvas,
            crop_from: justify.crop_offset(canvas, length),
        })
    }

    /// Signed offset of tile `index` from the origin tile.
    pub(crate) fn offset_of(&self, index: u32) -> Option<i32> {
        i32::try_from(i64::from(index) - i64::from(self.origin)).ok()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/feature/axis.rs"]
mod tests;
