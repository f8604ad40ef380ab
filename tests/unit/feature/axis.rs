use super::*;

#[test]
fn next_multiple_is_strictly_greater() {
    assert_eq!(next_multiple(19, 4), Some(20));
    assert_eq!(next_multiple(16, 4), Some(20));
    assert_eq!(next_multiple(0, 4), Some(4));
    assert_eq!(next_multiple(3, 16), Some(16));
    assert_eq!(next_multiple(u32::MAX - 2, 4), None);
}

#[test]
fn tile_count_is_always_odd() {
    for tile in 1..=7 {
        for length in 0..64 {
            let layout = AxisLayout::new(length, tile, Justify1D::Center).unwrap();
            assert_eq!(layout.tile_count % 2, 1, "length={length} tile={tile}");
            assert!(layout.canvas > length);
            assert_eq!(layout.canvas, layout.tile_count * tile);
        }
    }
}

#[test]
fn right_justified_layout_matches_reference_case() {
    let layout = AxisLayout::new(19, 4, Justify1D::End).unwrap();
    assert_eq!(
        layout,
        AxisLayout {
            tile_count: 5,
            origin: 4,
            canvas: 20,
            crop_from: 1,
        }
    );
    assert_eq!(layout.offset_of(4), Some(0));
    assert_eq!(layout.offset_of(0), Some(-4));
}

#[test]
fn centered_exact_fit_adds_a_tile() {
    let layout = AxisLayout::new(16, 16, Justify1D::Center).unwrap();
    assert_eq!(layout.tile_count, 3);
    assert_eq!(layout.origin, 1);
    assert_eq!(layout.crop_from, 16);
}

#[test]
fn start_justified_window_starts_at_origin() {
    let layout = AxisLayout::new(10, 4, Justify1D::Start).unwrap();
    assert_eq!(layout.tile_count, 3);
    assert_eq!(layout.origin, 0);
    assert_eq!(layout.crop_from, 0);
    assert_eq!(layout.offset_of(2), Some(2));
}

#[test]
fn lengths_whose_canvas_overflows_are_rejected() {
    assert_eq!(
        AxisLayout::new(u32::MAX - 2, 4, Justify1D::Start),
        Err(ArgumentError::TileLengthOverflow {
            length: u32::MAX - 2,
            tile: 4,
        })
    );
    // Rounding up fits, but the extra tile for an odd count does not.
    let tile = (1u32 << 31) - 1;
    assert!(matches!(
        AxisLayout::new(tile, tile, Justify1D::Center),
        Err(ArgumentError::TileLengthOverflow { .. })
    ));
}

#[test]
fn largest_fitting_length_keeps_the_canvas_past_the_window() {
    let length = u32::MAX - 4;
    let layout = AxisLayout::new(length, 4, Justify1D::End).unwrap();
    assert_eq!(layout.tile_count % 2, 1);
    assert!(layout.canvas > length);
    assert_eq!(layout.crop_from, layout.canvas - length);
}
