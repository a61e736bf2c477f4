use super::*;
use crate::strip::model::{FrameTheme, StickerGlyph, StickerObject, builtin_layouts};

const SQUARE: &str = "M0,0 L10,0 L10,10 L0,10 Z";

fn layout(id: &str) -> LayoutDescriptor {
    builtin_layouts().into_iter().find(|l| l.id == id).unwrap()
}

fn solid_photo(rgba: [u8; 4], w: u32, h: u32) -> PreparedPhoto {
    let mut bytes = Vec::with_capacity((w * h * 4) as usize);
    for _ in 0..(w * h) {
        bytes.extend_from_slice(&rgba);
    }
    PreparedPhoto::from_rgba8(w, h, bytes).unwrap()
}

fn px(buf: &RasterBuffer, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * buf.width + x) * 4) as usize;
    [buf.data[i], buf.data[i + 1], buf.data[i + 2], buf.data[i + 3]]
}

fn render_c(
    engine: &mut CompositeEngine,
    frame: &FrameConfig,
    stickers: &StickerLayer,
) -> RasterBuffer {
    let photos = vec![solid_photo([255, 0, 0, 255], 64, 64); 2];
    engine
        .render(&layout("C"), &photos, frame, stickers)
        .unwrap()
}

#[test]
fn output_matches_resolved_canvas() {
    let mut engine = CompositeEngine::new(EngineOptions::default());
    let buf = render_c(&mut engine, &FrameConfig::default(), &StickerLayer::new());
    assert_eq!((buf.width, buf.height), (600, 1200));
    // Strips are fully opaque.
    assert!(buf.data.chunks_exact(4).all(|p| p[3] == 255));
}

#[test]
fn frame_shows_in_padding_and_photos_in_slots() {
    let mut engine = CompositeEngine::new(EngineOptions::default());
    let buf = render_c(&mut engine, &FrameConfig::default(), &StickerLayer::new());

    // Border padding keeps the frame color.
    assert_eq!(px(&buf, 5, 5), [255, 255, 255, 255]);
    // Slot interiors hold the photo.
    assert_eq!(px(&buf, 300, 300), [255, 0, 0, 255]);
    assert_eq!(px(&buf, 300, 900), [255, 0, 0, 255]);
}

#[test]
fn photo_count_mismatch_is_rejected() {
    let mut engine = CompositeEngine::new(EngineOptions::default());
    let photos = vec![solid_photo([0, 255, 0, 255], 16, 16); 3];
    let err = engine
        .render(
            &layout("A"),
            &photos,
            &FrameConfig::default(),
            &StickerLayer::new(),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        BoothError::CountMismatch {
            expected: 4,
            actual: 3
        }
    ));
}

#[test]
fn rendering_is_deterministic() {
    let mut engine = CompositeEngine::new(EngineOptions::default());
    let mut stickers = StickerLayer::new();
    stickers
        .push(
            StickerObject::new(
                "sq",
                StickerGlyph::Path {
                    svg_path_d: SQUARE.to_string(),
                    color: [0, 0, 255, 255],
                },
                50.0,
                50.0,
                100.0,
                30.0,
            )
            .unwrap(),
        )
        .unwrap();
    let frame = FrameConfig {
        theme: FrameTheme::Dots,
        ..FrameConfig::default()
    };

    let a = render_c(&mut engine, &frame, &stickers);
    let b = render_c(&mut engine, &frame, &stickers);
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.data, b.data);
}

#[test]
fn sticker_paints_at_its_anchor() {
    let mut engine = CompositeEngine::new(EngineOptions::default());
    let mut stickers = StickerLayer::new();
    stickers
        .push(
            StickerObject::new(
                "sq",
                StickerGlyph::Path {
                    svg_path_d: SQUARE.to_string(),
                    color: [0, 0, 255, 255],
                },
                50.0,
                50.0,
                100.0,
                0.0,
            )
            .unwrap(),
        )
        .unwrap();

    let buf = render_c(&mut engine, &FrameConfig::default(), &stickers);
    // Anchor (50%, 50%) of a 600x1200 canvas.
    assert_eq!(px(&buf, 300, 600), [0, 0, 255, 255]);
    // Well outside the 100px sticker: untouched photo.
    assert_eq!(px(&buf, 300, 300), [255, 0, 0, 255]);
}

#[test]
fn corner_anchored_sticker_hangs_off_the_canvas_edge() {
    let mut engine = CompositeEngine::new(EngineOptions::default());
    let mut stickers = StickerLayer::new();
    stickers
        .push(
            StickerObject::new(
                "sq",
                StickerGlyph::Path {
                    svg_path_d: SQUARE.to_string(),
                    color: [0, 0, 255, 255],
                },
                100.0,
                100.0,
                100.0,
                0.0,
            )
            .unwrap(),
        )
        .unwrap();

    let buf = render_c(&mut engine, &FrameConfig::default(), &stickers);
    // Anchor (100%, 100%) maps to (600, 1200) with no clamping, so the
    // 100px square covers 550..650 on both axes and only its top-left
    // quadrant lands on canvas.
    assert_eq!(px(&buf, 599, 1199), [0, 0, 255, 255]);
    assert_eq!(px(&buf, 560, 1160), [0, 0, 255, 255]);
    // Just past the square's on-canvas edge: the slot photo survives.
    assert_eq!(px(&buf, 545, 1145), [255, 0, 0, 255]);
}

#[test]
fn dots_theme_lightens_a_dark_border() {
    // White dots only show on a non-white base.
    let black = crate::foundation::core::Rgb8 {
        r: 0x4B,
        g: 0x4B,
        b: 0x4B,
    };
    let mut engine = CompositeEngine::new(EngineOptions::default());
    let solid = render_c(
        &mut engine,
        &FrameConfig {
            color: black,
            theme: FrameTheme::Solid,
        },
        &StickerLayer::new(),
    );
    let dotted = render_c(
        &mut engine,
        &FrameConfig {
            color: black,
            theme: FrameTheme::Dots,
        },
        &StickerLayer::new(),
    );
    assert_ne!(solid.fingerprint(), dotted.fingerprint());

    // The first dot center sits at (15, 15); a 60% white overlay lightens it
    // well above the base gray.
    assert_eq!(px(&solid, 15, 15), [0x4B, 0x4B, 0x4B, 255]);
    assert!(px(&dotted, 15, 15)[0] > 0x4B + 0x40);
    // Between dot centers the base color survives.
    assert_eq!(px(&dotted, 27, 27), [0x4B, 0x4B, 0x4B, 255]);
}

#[test]
fn watermark_without_font_is_an_error() {
    let mut engine = CompositeEngine::new(EngineOptions {
        font_bytes: None,
        watermark: Some(Timestamp {
            year: 2025,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
        }),
    });
    let photos = vec![solid_photo([255, 0, 0, 255], 64, 64); 2];
    let err = engine
        .render(
            &layout("C"),
            &photos,
            &FrameConfig::default(),
            &StickerLayer::new(),
        )
        .unwrap_err();
    assert!(matches!(err, BoothError::Validation(_)));
}

#[test]
fn watermark_paints_with_local_font_if_present() {
    let candidates = [
        "assets/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    ];
    let Some(font_bytes) = candidates.iter().find_map(|p| std::fs::read(p).ok()) else {
        return;
    };

    let mut engine = CompositeEngine::new(EngineOptions {
        font_bytes: Some(std::sync::Arc::new(font_bytes)),
        watermark: Some(Timestamp {
            year: 2025,
            month: 6,
            day: 15,
            hour: 12,
            minute: 30,
        }),
    });
    let marked = render_c(&mut engine, &FrameConfig::default(), &StickerLayer::new());

    let mut plain_engine = CompositeEngine::new(EngineOptions::default());
    let plain = render_c(&mut plain_engine, &FrameConfig::default(), &StickerLayer::new());

    // The watermark darkens pixels near the bottom-right anchor.
    assert_ne!(marked.fingerprint(), plain.fingerprint());
    // Repeat renders reuse the registered font and stay deterministic.
    let again = render_c(&mut engine, &FrameConfig::default(), &StickerLayer::new());
    assert_eq!(marked.fingerprint(), again.fingerprint());
}

#[test]
fn engine_survives_canvas_size_changes() {
    let mut engine = CompositeEngine::new(EngineOptions::default());
    let c = render_c(&mut engine, &FrameConfig::default(), &StickerLayer::new());
    assert_eq!(c.height, 1200);

    let photos = vec![solid_photo([0, 255, 0, 255], 32, 32); 4];
    let a = engine
        .render(
            &layout("A"),
            &photos,
            &FrameConfig::default(),
            &StickerLayer::new(),
        )
        .unwrap();
    assert_eq!((a.width, a.height), (600, 1800));
}
