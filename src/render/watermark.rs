use chrono::{Datelike, Timelike};

use crate::{
    assets::glyphs::{TextBrushRgba8, TextLayoutEngine},
    foundation::{core::Affine, core::Canvas, error::BoothResult},
    render::{
        paint::affine_to_cpu,
        stickers::{draw_text_runs, layout_size},
    },
};

/// Watermark text size in pixels.
const WATERMARK_SIZE_PX: f32 = 16.0;
/// Black at 40% opacity.
const WATERMARK_ALPHA: u8 = 102;
/// Inset of the watermark anchor from the right and bottom edges.
const WATERMARK_MARGIN: f64 = 20.0;
/// Baseline sits slightly below the anchor so descenders hug the edge.
const WATERMARK_BASELINE_NUDGE: f64 = 5.0;

/// Minute-resolution capture time stamped into the watermark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Timestamp {
    /// Calendar year.
    pub year: i32,
    /// Month, 1..=12.
    pub month: u32,
    /// Day of month, 1..=31.
    pub day: u32,
    /// Hour, 0..=23.
    pub hour: u32,
    /// Minute, 0..=59.
    pub minute: u32,
}

impl Timestamp {
    /// Current local time, truncated to the minute.
    pub fn now() -> Self {
        let t = chrono::Local::now();
        Self {
            year: t.year(),
            month: t.month(),
            day: t.day(),
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

/// Render the watermark line for a timestamp.
pub fn watermark_text(ts: &Timestamp) -> String {
    format!(
        "KiraKira {:04}-{:02}-{:02} {:02}:{:02} \u{00a9} 2025 AW",
        ts.year, ts.month, ts.day, ts.hour, ts.minute
    )
}

/// Stamp the watermark into the bottom-right corner of the canvas.
pub(crate) fn paint_watermark(
    ctx: &mut vello_cpu::RenderContext,
    canvas: &Canvas,
    text_engine: &mut TextLayoutEngine,
    font_bytes: &[u8],
    ts: &Timestamp,
) -> BoothResult<()> {
    let text = watermark_text(ts);
    let brush = TextBrushRgba8 {
        r: 0,
        g: 0,
        b: 0,
        a: WATERMARK_ALPHA,
    };
    let layout = text_engine.layout_plain(&text, font_bytes, WATERMARK_SIZE_PX, brush)?;
    let font = text_engine.font_data(font_bytes)?;

    let (tw, _th) = layout_size(&layout);
    let ascent = layout
        .lines()
        .next()
        .map(|l| f64::from(l.metrics().ascent))
        .unwrap_or(f64::from(WATERMARK_SIZE_PX));

    // Right-aligned: the anchor is the text's right edge at its baseline.
    let anchor_x = f64::from(canvas.width) - WATERMARK_MARGIN;
    let baseline_y = f64::from(canvas.height) - WATERMARK_MARGIN + WATERMARK_BASELINE_NUDGE;
    let tr = Affine::translate((anchor_x - tw, baseline_y - ascent));

    ctx.set_transform(affine_to_cpu(tr));
    draw_text_runs(ctx, &layout, &font);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/watermark.rs"]
mod tests;
