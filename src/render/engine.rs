use std::sync::Arc;

use crate::{
    assets::{decode::PreparedPhoto, glyphs::TextLayoutEngine},
    foundation::{
        core::Affine,
        error::{BoothError, BoothResult},
    },
    layout::grid::{ResolvedGrid, resolve_grid},
    render::{
        crop::center_crop,
        frame::paint_frame,
        paint::{affine_to_cpu, rgba_premul_to_image},
        raster::RasterBuffer,
        stickers::paint_stickers,
        watermark::{Timestamp, paint_watermark},
    },
    strip::model::{FrameConfig, LayoutDescriptor, StickerLayer},
};

/// Engine configuration fixed at construction time.
#[derive(Clone, Debug, Default)]
pub struct EngineOptions {
    /// Font bytes used for text stickers and the watermark. Without one,
    /// text stickers and the watermark are errors.
    pub font_bytes: Option<Arc<Vec<u8>>>,
    /// When set, a watermark with this timestamp is stamped on every strip.
    pub watermark: Option<Timestamp>,
}

/// CPU strip compositor.
///
/// Reuses its render context and text contexts across strips, so rendering
/// a session's retakes does not reallocate per frame.
pub struct CompositeEngine {
    ctx: Option<vello_cpu::RenderContext>,
    text_engine: TextLayoutEngine,
    options: EngineOptions,
}

impl CompositeEngine {
    /// Construct an engine with the given options.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            ctx: None,
            text_engine: TextLayoutEngine::new(),
            options,
        }
    }

    /// Compose a full photo strip.
    ///
    /// `photos` must contain exactly `layout.poses` entries, in capture
    /// order; they fill the grid row-major. Paint order is frame, photos,
    /// stickers, then watermark.
    #[tracing::instrument(skip_all, fields(layout = %layout.id, photos = photos.len()))]
    pub fn render(
        &mut self,
        layout: &LayoutDescriptor,
        photos: &[PreparedPhoto],
        frame: &FrameConfig,
        stickers: &StickerLayer,
    ) -> BoothResult<RasterBuffer> {
        let grid = resolve_grid(layout)?;
        if photos.len() != layout.poses {
            return Err(BoothError::CountMismatch {
                expected: layout.poses,
                actual: photos.len(),
            });
        }

        let w: u16 = grid
            .canvas
            .width
            .try_into()
            .map_err(|_| BoothError::render_target("strip width exceeds u16"))?;
        let h: u16 = grid
            .canvas
            .height
            .try_into()
            .map_err(|_| BoothError::render_target("strip height exceeds u16"))?;

        let font_bytes = self.options.font_bytes.clone();
        let watermark = self.options.watermark;

        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(w, h),
            Some(ctx) if ctx.width() == w && ctx.height() == h => ctx,
            Some(_) => vello_cpu::RenderContext::new(w, h),
        };
        ctx.reset();

        let result = (|| -> BoothResult<RasterBuffer> {
            paint_frame(&mut ctx, &grid.canvas, frame);
            paint_photos(&mut ctx, &grid, photos)?;
            paint_stickers(
                &mut ctx,
                &grid.canvas,
                stickers,
                &mut self.text_engine,
                font_bytes.as_deref().map(|v| v.as_slice()),
            )?;
            if let Some(ts) = watermark {
                let font = font_bytes.as_deref().ok_or_else(|| {
                    BoothError::validation("watermark requires font bytes to shape")
                })?;
                paint_watermark(&mut ctx, &grid.canvas, &mut self.text_engine, font, &ts)?;
            }

            let mut pixmap = vello_cpu::Pixmap::new(w, h);
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(RasterBuffer::from_pixmap(&pixmap))
        })();

        self.ctx = Some(ctx);
        result
    }
}

fn paint_photos(
    ctx: &mut vello_cpu::RenderContext,
    grid: &ResolvedGrid,
    photos: &[PreparedPhoto],
) -> BoothResult<()> {
    for (slot, photo) in grid.slots.iter().zip(photos) {
        let crop = center_crop(photo.width, photo.height, slot.width(), slot.height())?;

        // Map the crop window in photo space onto the slot in strip space.
        let tr = Affine::translate((slot.x0, slot.y0))
            * Affine::scale_non_uniform(slot.width() / crop.sw, slot.height() / crop.sh)
            * Affine::translate((-crop.sx, -crop.sy));

        let img = rgba_premul_to_image(&photo.rgba8_premul, photo.width, photo.height)?;
        ctx.set_transform(affine_to_cpu(tr));
        ctx.set_paint(img);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            crop.sx,
            crop.sy,
            crop.sx + crop.sw,
            crop.sy + crop.sh,
        ));
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/engine.rs"]
mod tests;
