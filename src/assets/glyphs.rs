use std::sync::Arc;

use kurbo::Shape;

use crate::{
    assets::decode::parse_svg,
    foundation::{
        core::BezPath,
        error::{BoothError, BoothResult},
        math::Fnv1a64,
    },
    strip::model::StickerGlyph,
};

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

struct RegisteredFont {
    fingerprint: u64,
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

/// Stateful helper for building Parley text layouts from raw font bytes.
///
/// The booth renders many strips through one engine, so font bytes are
/// registered with the Parley collection once and looked up by content
/// fingerprint afterwards; re-registering on every render would grow the
/// collection without bound.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    registered: Option<RegisteredFont>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            registered: None,
        }
    }

    /// Family name of the currently registered font, if any.
    pub fn cached_family_name(&self) -> Option<&str> {
        self.registered.as_ref().map(|r| r.family_name.as_str())
    }

    /// Drawable font data for `font_bytes`, registering them on first use.
    pub fn font_data(&mut self, font_bytes: &[u8]) -> BoothResult<vello_cpu::peniko::FontData> {
        self.ensure_registered(font_bytes)?;
        // ensure_registered just populated the cache.
        Ok(self
            .registered
            .as_ref()
            .map(|r| r.font.clone())
            .ok_or_else(|| BoothError::validation("font registration left no cache entry"))?)
    }

    fn ensure_registered(&mut self, font_bytes: &[u8]) -> BoothResult<()> {
        let fingerprint = font_fingerprint(font_bytes);
        if let Some(r) = &self.registered {
            if r.fingerprint == fingerprint {
                return Ok(());
            }
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            BoothError::validation("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BoothError::validation("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
            0,
        );
        self.registered = Some(RegisteredFont {
            fingerprint,
            family_name,
            font,
        });
        Ok(())
    }

    /// Shape and lay out a single run of plain text using provided font bytes.
    pub fn layout_plain(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> BoothResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(BoothError::validation("text size_px must be finite and > 0"));
        }

        self.ensure_registered(font_bytes)?;
        let family_name = self
            .registered
            .as_ref()
            .map(|r| r.family_name.clone())
            .ok_or_else(|| BoothError::validation("font registration left no cache entry"))?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// Sticker content made paintable: parsed, shaped, and ready to place.
#[derive(Clone)]
pub enum PreparedGlyph {
    /// Filled Bezier path.
    Path {
        /// Parsed path in its own coordinate space.
        path: BezPath,
        /// Straight-alpha RGBA fill color.
        color: [u8; 4],
    },
    /// Parsed SVG document.
    Svg {
        /// Parsed SVG tree.
        tree: Arc<usvg::Tree>,
    },
    /// Shaped text run plus the font that shaped it.
    Text {
        /// Fully built text layout.
        layout: Arc<parley::Layout<TextBrushRgba8>>,
        /// Font data for glyph outline resolution.
        font: vello_cpu::peniko::FontData,
    },
}

impl PreparedGlyph {
    /// Natural size of the glyph content before placement scaling.
    pub fn intrinsic_size(&self) -> (f64, f64) {
        match self {
            PreparedGlyph::Path { path, .. } => {
                let bbox = path.bounding_box();
                (bbox.width().max(1.0), bbox.height().max(1.0))
            }
            PreparedGlyph::Svg { tree } => (
                f64::from(tree.size().width()).max(1.0),
                f64::from(tree.size().height()).max(1.0),
            ),
            PreparedGlyph::Text { layout, .. } => {
                let mut w = 0.0f64;
                let mut h = 0.0f64;
                for line in layout.lines() {
                    let m = line.metrics();
                    w = w.max(f64::from(m.advance));
                    h += f64::from(m.ascent + m.descent + m.leading);
                }
                (w.max(1.0), h.max(1.0))
            }
        }
    }
}

impl std::fmt::Debug for PreparedGlyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreparedGlyph::Path { color, .. } => {
                f.debug_struct("Path").field("color", color).finish()
            }
            PreparedGlyph::Svg { .. } => f.debug_struct("Svg").finish(),
            PreparedGlyph::Text { layout, .. } => f
                .debug_struct("Text")
                .field("layout_ptr", &Arc::as_ptr(layout))
                .finish(),
        }
    }
}

/// Turn a sticker's declarative content into a paintable [`PreparedGlyph`].
///
/// Text stickers require `font_bytes`; the booth carries no embedded fonts,
/// so callers must supply one.
pub fn prepare_glyph(
    engine: &mut TextLayoutEngine,
    glyph: &StickerGlyph,
    size_px: f64,
    font_bytes: Option<&[u8]>,
) -> BoothResult<PreparedGlyph> {
    match glyph {
        StickerGlyph::Path { svg_path_d, color } => {
            let path = parse_svg_path(svg_path_d)?;
            Ok(PreparedGlyph::Path { path, color: *color })
        }
        StickerGlyph::Svg { svg } => {
            let tree = parse_svg(svg.as_bytes())?;
            Ok(PreparedGlyph::Svg { tree })
        }
        StickerGlyph::Text { text, color } => {
            let font_bytes = font_bytes.ok_or_else(|| {
                BoothError::validation("text stickers require font bytes to shape")
            })?;
            let brush = TextBrushRgba8 {
                r: color[0],
                g: color[1],
                b: color[2],
                a: color[3],
            };
            let layout = engine.layout_plain(text, font_bytes, size_px as f32, brush)?;
            let font = engine.font_data(font_bytes)?;
            Ok(PreparedGlyph::Text {
                layout: Arc::new(layout),
                font,
            })
        }
    }
}

fn font_fingerprint(bytes: &[u8]) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(bytes);
    h.finish()
}

fn parse_svg_path(d: &str) -> BoothResult<BezPath> {
    let d = d.trim();
    if d.is_empty() {
        return Err(BoothError::validation("sticker svg_path_d must be non-empty"));
    }
    BezPath::from_svg(d).map_err(|e| BoothError::validation(format!("invalid svg_path_d: {e}")))
}

/// Rasterize an SVG tree into premultiplied RGBA8 at the given pixel size.
pub fn rasterize_svg_to_premul_rgba8(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> BoothResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| BoothError::render_target("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/glyphs.rs"]
mod tests;
