use super::*;

fn heart_sticker(id: &str) -> StickerObject {
    StickerObject::new(
        id,
        StickerGlyph::Path {
            svg_path_d: "M0,0 L10,0 L10,10 L0,10 Z".to_string(),
            color: [255, 0, 0, 255],
        },
        50.0,
        50.0,
        48.0,
        0.0,
    )
    .unwrap()
}

#[test]
fn builtin_catalog_shape() {
    let layouts = builtin_layouts();
    let ids: Vec<&str> = layouts.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C", "D"]);

    for l in &layouts {
        l.validate().unwrap();
    }

    let d = &layouts[3];
    assert_eq!(d.poses, 6);
    assert_eq!((d.grid.cols, d.grid.rows), (2, 3));
}

#[test]
fn layout_validate_rejects_pose_grid_mismatch() {
    let mut l = builtin_layouts().remove(0);
    l.poses = 5;
    assert!(matches!(l.validate(), Err(BoothError::Validation(_))));

    l.poses = 0;
    l.grid = GridShape { cols: 0, rows: 4 };
    assert!(l.validate().is_err());
}

#[test]
fn frame_theme_parse_and_serde_names_agree() {
    assert_eq!(parse_frame_theme("dots").unwrap(), FrameTheme::Dots);
    assert_eq!(parse_frame_theme(" Stripes ").unwrap(), FrameTheme::Stripes);
    assert!(parse_frame_theme("plaid").is_err());

    let json = serde_json::to_string(&FrameTheme::Dots).unwrap();
    assert_eq!(json, "\"dots\"");
    let back: FrameTheme = serde_json::from_str(&json).unwrap();
    assert_eq!(back, parse_frame_theme("dots").unwrap());
}

#[test]
fn default_frame_is_solid_white() {
    let f = FrameConfig::default();
    assert_eq!(f.color, Rgb8::WHITE);
    assert_eq!(f.theme, FrameTheme::Solid);
}

#[test]
fn frame_color_catalog_hex_values() {
    let catalog = frame_color_catalog();
    assert_eq!(catalog.len(), 7);
    assert_eq!(catalog[0].0, "White");
    assert_eq!(catalog[0].1.to_hex(), "#FFFFFF");
    let (name, black) = catalog.last().unwrap();
    assert_eq!(*name, "Black");
    assert_eq!(black.to_hex(), "#4B4B4B");
}

#[test]
fn sticker_validation_bounds() {
    let glyph = StickerGlyph::Text {
        text: "\u{2764}".to_string(),
        color: [0, 0, 0, 255],
    };

    assert!(StickerObject::new("s", glyph.clone(), 100.0, 0.0, 48.0, 359.9).is_ok());
    assert!(StickerObject::new("s", glyph.clone(), 100.1, 0.0, 48.0, 0.0).is_err());
    assert!(StickerObject::new("s", glyph.clone(), 0.0, -0.1, 48.0, 0.0).is_err());
    assert!(StickerObject::new("s", glyph.clone(), 0.0, 0.0, 0.0, 0.0).is_err());
    assert!(StickerObject::new("s", glyph.clone(), 0.0, 0.0, f64::NAN, 0.0).is_err());
    assert!(StickerObject::new("s", glyph, 0.0, 0.0, 48.0, 360.0).is_err());
}

#[test]
fn sticker_layer_preserves_append_order() {
    let mut layer = StickerLayer::new();
    assert!(layer.is_empty());

    layer.push(heart_sticker("first")).unwrap();
    layer.push(heart_sticker("second")).unwrap();
    assert_eq!(layer.len(), 2);
    let ids: Vec<&str> = layer.as_slice().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second"]);

    layer.clear();
    assert!(layer.is_empty());
}

#[test]
fn sticker_layer_push_rejects_invalid() {
    let mut layer = StickerLayer::new();
    let mut bad = heart_sticker("bad");
    bad.rotation_deg = 720.0;
    assert!(layer.push(bad).is_err());
    assert!(layer.is_empty());
}

#[test]
fn sticker_serde_roundtrip() {
    let s = heart_sticker("rt");
    let json = serde_json::to_string(&s).unwrap();
    let back: StickerObject = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}
