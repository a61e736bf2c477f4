use kurbo::Shape;

use crate::{
    assets::glyphs::{PreparedGlyph, TextLayoutEngine, prepare_glyph, rasterize_svg_to_premul_rgba8},
    foundation::{core::Affine, core::Canvas, error::BoothResult},
    render::paint::{affine_to_cpu, bezpath_to_cpu, rgba_premul_to_image},
    strip::model::StickerLayer,
};

/// Paint every sticker in layer order, each centered on its anchor point
/// and rotated about that point.
pub(crate) fn paint_stickers(
    ctx: &mut vello_cpu::RenderContext,
    canvas: &Canvas,
    stickers: &StickerLayer,
    text_engine: &mut TextLayoutEngine,
    font_bytes: Option<&[u8]>,
) -> BoothResult<()> {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);

    for sticker in stickers.as_slice() {
        let x = sticker.x_pct / 100.0 * w;
        let y = sticker.y_pct / 100.0 * h;
        let placement = Affine::translate((x, y)) * Affine::rotate(sticker.rotation_deg.to_radians());

        let glyph = prepare_glyph(text_engine, &sticker.glyph, sticker.size_px, font_bytes)?;
        match glyph {
            PreparedGlyph::Path { path, color } => {
                let bbox = path.bounding_box();
                let scale = sticker.size_px / bbox.width().max(bbox.height()).max(1.0);
                let center = bbox.center();
                let tr = placement
                    * Affine::scale(scale)
                    * Affine::translate((-center.x, -center.y));
                ctx.set_transform(affine_to_cpu(tr));
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    color[0], color[1], color[2], color[3],
                ));
                ctx.fill_path(&bezpath_to_cpu(&path));
            }
            PreparedGlyph::Svg { tree } => {
                let (iw, ih) = (
                    f64::from(tree.size().width()).max(1.0),
                    f64::from(tree.size().height()).max(1.0),
                );
                let scale = sticker.size_px / iw.max(ih);
                let pw = ((iw * scale).ceil().max(1.0)) as u32;
                let ph = ((ih * scale).ceil().max(1.0)) as u32;
                let pixels = rasterize_svg_to_premul_rgba8(&tree, pw, ph)?;
                let img = rgba_premul_to_image(&pixels, pw, ph)?;
                let tr = placement
                    * Affine::translate((-f64::from(pw) / 2.0, -f64::from(ph) / 2.0));
                ctx.set_transform(affine_to_cpu(tr));
                ctx.set_paint(img);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(pw),
                    f64::from(ph),
                ));
            }
            PreparedGlyph::Text { layout, font } => {
                let (tw, th) = layout_size(&layout);
                let tr = placement * Affine::translate((-tw / 2.0, -th / 2.0));
                ctx.set_transform(affine_to_cpu(tr));
                draw_text_runs(ctx, &layout, &font);
            }
        }
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    Ok(())
}

/// Width and height of a shaped layout from its line metrics.
pub(crate) fn layout_size(layout: &parley::Layout<crate::assets::glyphs::TextBrushRgba8>) -> (f64, f64) {
    let mut w = 0.0f64;
    let mut h = 0.0f64;
    for line in layout.lines() {
        let m = line.metrics();
        w = w.max(f64::from(m.advance));
        h += f64::from(m.ascent + m.descent + m.leading);
    }
    (w.max(1.0), h.max(1.0))
}

/// Draw a shaped layout's glyph runs under the current transform.
pub(crate) fn draw_text_runs(
    ctx: &mut vello_cpu::RenderContext,
    layout: &parley::Layout<crate::assets::glyphs::TextBrushRgba8>,
    font: &vello_cpu::peniko::FontData,
) {
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}
