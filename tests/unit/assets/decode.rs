use std::io::Cursor;

use super::*;

fn png_bytes(w: u32, h: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(w, h, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_photo_png_dimensions_and_premul() {
    let buf = png_bytes(1, 1, vec![100u8, 50, 200, 128]);

    let prepared = decode_photo(&buf).unwrap();
    assert_eq!(prepared.width, 1);
    assert_eq!(prepared.height, 1);
    assert_eq!(
        prepared.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_photo_rejects_garbage() {
    assert!(matches!(
        decode_photo(b"not an image"),
        Err(BoothError::Decode(_))
    ));
}

#[test]
fn from_rgba8_validates_shape() {
    assert!(PreparedPhoto::from_rgba8(0, 1, vec![]).is_err());
    assert!(PreparedPhoto::from_rgba8(1, 1, vec![0u8; 3]).is_err());
    let p = PreparedPhoto::from_rgba8(1, 1, vec![255, 255, 255, 255]).unwrap();
    assert_eq!(p.rgba8_premul.len(), 4);
}

#[test]
fn decode_photo_set_preserves_capture_order() {
    let red = png_bytes(1, 1, vec![255, 0, 0, 255]);
    let blue = png_bytes(1, 1, vec![0, 0, 255, 255]);
    let batches = vec![red, b"broken".to_vec(), blue];

    let out = decode_photo_set(&batches);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].as_ref().unwrap().rgba8_premul[0], 255);
    assert!(out[1].is_err());
    assert_eq!(out[2].as_ref().unwrap().rgba8_premul[2], 255);
}

#[test]
fn parse_svg_ok_and_err() {
    let ok = br#"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="2"></svg>"#;
    parse_svg(ok).unwrap();

    assert!(parse_svg(br#"<svg"#).is_err());
}
