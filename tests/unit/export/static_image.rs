use super::*;

fn red_buffer(w: u32, h: u32) -> RasterBuffer {
    let mut buf = RasterBuffer::new(w, h);
    for px in buf.data.chunks_exact_mut(4) {
        px.copy_from_slice(&[255, 0, 0, 255]);
    }
    buf
}

#[test]
fn png_roundtrips_pixels() {
    let buf = red_buffer(4, 3);
    let png = encode_png(&buf).unwrap();
    assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));

    let img = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 3));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(3, 2).0, [255, 0, 0, 255]);
}

#[test]
fn png_export_unpremultiplies() {
    let mut buf = RasterBuffer::new(1, 1);
    // 50% gray premultiplied at 50% alpha.
    buf.data.copy_from_slice(&[64, 64, 64, 128]);

    let png = encode_png(&buf).unwrap();
    let img = image::load_from_memory(&png).unwrap().to_rgba8();
    let p = img.get_pixel(0, 0).0;
    assert_eq!(p[3], 128);
    assert!((p[0] as i32 - 127).abs() <= 1);
}

#[test]
fn malformed_buffer_is_an_encode_error() {
    let mut buf = red_buffer(2, 2);
    buf.data.pop();
    assert!(matches!(encode_png(&buf), Err(BoothError::Encode(_))));
}

#[test]
fn blob_handles_are_content_addressed() {
    let a = export_png(&red_buffer(2, 2)).unwrap();
    let b = export_png(&red_buffer(2, 2)).unwrap();
    let c = export_png(&red_buffer(3, 2)).unwrap();

    assert_eq!(a.mime, PNG_MIME);
    assert_eq!(a.content_id, b.content_id);
    assert_eq!(a.bytes, b.bytes);
    assert_ne!(a.content_id, c.content_id);
}
