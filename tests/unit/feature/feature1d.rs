use super::*;
use crate::{assets::resource::Crop, foundation::error::WrittenBookError};

// Pixel (x, y) encodes its own coordinates.
fn coord_tile(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| Rgba([x as u8, y as u8, 0, 255]))
}

fn solid(w: u32, h: u32, px: [u8; 4]) -> AssetResource {
    AssetResource::from_image(RgbaImage::from_pixel(w, h, Rgba(px)))
}

#[test]
fn right_justified_strip_ends_on_the_origin_tile() {
    let feature = Feature1D::new(
        AssetResource::from_image(coord_tile(4, 16)),
        Justify1D::End,
        Direction::Horizontal,
        [],
    )
    .unwrap();

    let out = feature.tile(19).unwrap();
    assert_eq!(out.dimensions(), (19, 16));
    for y in 0..16 {
        for x in 0..19 {
            assert_eq!(
                out.get_pixel(x, y).0,
                [((x + 1) % 4) as u8, y as u8, 0, 255],
                "({x}, {y})"
            );
        }
    }
}

#[test]
fn output_length_matches_request() {
    let tile = AssetResource::from_image(coord_tile(5, 3));
    for justify in [Justify1D::Start, Justify1D::Center, Justify1D::End] {
        let feature = Feature1D::new(tile.clone(), justify, Direction::Horizontal, []).unwrap();
        for length in [0, 1, 4, 5, 6, 17, 40] {
            assert_eq!(feature.tile(length).unwrap().dimensions(), (length, 3));
        }
    }
}

#[test]
fn override_replaces_pixels_without_blending() {
    let base = solid(4, 2, [0, 0, 255, 255]);
    let mut px = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
    px.put_pixel(1, 0, Rgba([10, 20, 30, 0]));
    let over = AssetResource::from_image(px);

    let feature = Feature1D::new(
        base,
        Justify1D::End,
        Direction::Horizontal,
        [FeatureOverride1D::new(over, -1)],
    )
    .unwrap();
    let out = feature.tile(19).unwrap();

    // Offset -1 is canvas tile 3, i.e. output columns 11..15.
    assert_eq!(out.get_pixel(10, 0).0, [0, 0, 255, 255]);
    assert_eq!(out.get_pixel(11, 1).0, [255, 0, 0, 255]);
    assert_eq!(out.get_pixel(12, 0).0, [10, 20, 30, 0]);
    assert_eq!(out.get_pixel(14, 1).0, [255, 0, 0, 255]);
    assert_eq!(out.get_pixel(15, 0).0, [0, 0, 255, 255]);
}

#[test]
fn overrides_outside_the_window_are_ignored() {
    let base = solid(4, 1, [1, 1, 1, 255]);
    let feature = Feature1D::new(
        base,
        Justify1D::Start,
        Direction::Horizontal,
        [FeatureOverride1D::new(solid(4, 1, [9, 9, 9, 255]), 40)],
    )
    .unwrap();
    let out = feature.tile(8).unwrap();
    assert!(out.pixels().all(|p| p.0 == [1, 1, 1, 255]));
}

#[test]
fn vertical_strip_runs_top_to_bottom() {
    let feature = Feature1D::new(
        AssetResource::from_image(coord_tile(3, 4)),
        Justify1D::Start,
        Direction::Vertical,
        [FeatureOverride1D::new(solid(3, 4, [200, 0, 0, 255]), 1)],
    )
    .unwrap();

    let out = feature.tile(10).unwrap();
    assert_eq!(out.dimensions(), (3, 10));
    for y in 0..10 {
        for x in 0..3 {
            let want = if (4..8).contains(&y) {
                [200, 0, 0, 255]
            } else {
                [x as u8, (y % 4) as u8, 0, 255]
            };
            assert_eq!(out.get_pixel(x, y).0, want, "({x}, {y})");
        }
    }
}

#[test]
fn mismatched_override_is_rejected() {
    let err = Feature1D::new(
        solid(4, 16, [0, 0, 0, 255]),
        Justify1D::Center,
        Direction::Horizontal,
        [FeatureOverride1D::new(solid(5, 16, [0, 0, 0, 255]), 0)],
    )
    .unwrap_err();
    match err {
        WrittenBookError::InvalidArgument(ArgumentError::OverrideSizeMismatch {
            actual,
            expected,
            ..
        }) => {
            assert_eq!(actual, (5, 16));
            assert_eq!(expected, (4, 16));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn cropped_override_of_the_right_size_is_painted() {
    let mut sheet = RgbaImage::from_pixel(8, 16, Rgba([3, 3, 3, 255]));
    sheet.put_pixel(0, 0, Rgba([77, 0, 0, 255]));
    let base =
        AssetResource::from_image_cropped(sheet.clone(), Crop::new(0, 0, 4, 16).unwrap()).unwrap();
    let over = AssetResource::from_image_cropped(sheet, Crop::new(4, 0, 8, 16).unwrap()).unwrap();
    let feature = Feature1D::new(
        base,
        Justify1D::Center,
        Direction::Horizontal,
        [FeatureOverride1D::new(over, 1)],
    )
    .unwrap();
    assert!(feature.overrides().contains_key(&1));

    // 12px centered over 5 tiles: offset 0 covers columns 4..8, offset 1 covers 8..12.
    let out = feature.tile(12).unwrap();
    assert_eq!(out.get_pixel(4, 0).0, [77, 0, 0, 255]);
    assert_eq!(out.get_pixel(8, 0).0, [3, 3, 3, 255]);
    assert_eq!(out.get_pixel(0, 0).0, [77, 0, 0, 255]);
    assert_eq!(out.get_pixel(5, 15).0, [3, 3, 3, 255]);
}

#[test]
fn duplicate_offsets_are_rejected() {
    let err = Feature1D::new(
        solid(2, 2, [0, 0, 0, 255]),
        Justify1D::Center,
        Direction::Horizontal,
        [
            FeatureOverride1D::new(solid(2, 2, [1, 0, 0, 255]), 3),
            FeatureOverride1D::new(solid(2, 2, [2, 0, 0, 255]), 3),
        ],
    )
    .unwrap_err();
    assert!(matches!(
        err.as_argument(),
        Some(ArgumentError::DuplicateOverride { .. })
    ));
}

#[test]
fn empty_tile_cannot_be_tiled() {
    let err = Feature1D::new(
        AssetResource::from_image(RgbaImage::new(0, 4)),
        Justify1D::Center,
        Direction::Horizontal,
        [],
    )
    .unwrap_err();
    assert!(matches!(
        err.as_argument(),
        Some(ArgumentError::EmptyTile { width: 0, height: 4 })
    ));
}

#[test]
fn with_code_parses_justification_names() {
    let feature =
        Feature1D::with_code(solid(2, 2, [0, 0, 0, 255]), "Right", Direction::Horizontal, [])
            .unwrap();
    assert_eq!(feature.justify(), Justify1D::End);
    assert_eq!(feature.kind(), None);

    let err = Feature1D::with_code(solid(2, 2, [0, 0, 0, 255]), "middle", Direction::Vertical, [])
        .unwrap_err();
    assert!(matches!(
        err.as_argument(),
        Some(ArgumentError::UnknownJustifyName { .. })
    ));
    assert_eq!(Feature1D::get_justify("top").unwrap(), Justify1D::Start);
}

#[test]
fn overflowing_length_is_an_error() {
    let feature = Feature1D::new(
        solid(4, 1, [0, 0, 0, 255]),
        Justify1D::Start,
        Direction::Horizontal,
        [],
    )
    .unwrap();
    let err = feature.tile(u32::MAX - 2).unwrap_err();
    assert!(matches!(
        err.as_argument(),
        Some(ArgumentError::TileLengthOverflow { tile: 4, .. })
    ));

    let vertical = Feature1D::new(
        solid(1, 4, [0, 0, 0, 255]),
        Justify1D::End,
        Direction::Vertical,
        [],
    )
    .unwrap();
    assert!(vertical.tile(u32::MAX).is_err());
}
