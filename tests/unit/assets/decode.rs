use std::io::Cursor;

use super::*;

#[test]
fn decode_image_png_keeps_straight_alpha() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8, 1, 2, 3, 0];
    let img = image::RgbaImage::from_raw(2, 1, src_rgba.clone()).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_image(&buf).unwrap();
    assert_eq!(decoded.dimensions(), (2, 1));
    assert_eq!(decoded.as_raw().as_slice(), src_rgba.as_slice());
}

#[test]
fn decode_image_widens_rgb_to_opaque_rgba() {
    let img = image::RgbImage::from_raw(1, 1, vec![9, 8, 7]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_image(&buf).unwrap();
    assert_eq!(decoded.get_pixel(0, 0).0, [9, 8, 7, 255]);
}

#[test]
fn decode_image_rejects_garbage() {
    let err = decode_image(b"definitely not a png").unwrap_err();
    assert!(err.to_string().contains("decode image"));
}
