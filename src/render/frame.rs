use std::f64::consts::FRAC_PI_4;

use kurbo::Shape;

use crate::{
    foundation::core::{Affine, Canvas},
    render::paint::{affine_to_cpu, bezpath_to_cpu},
    strip::model::{FrameConfig, FrameTheme},
};

const DOT_START: f64 = 15.0;
const DOT_STEP: f64 = 25.0;
const DOT_RADIUS: f64 = 3.0;
// White at 60% over the base color.
const DOT_ALPHA: u8 = 153;

const STRIPE_WIDTH: f64 = 15.0;
const STRIPE_SPACING: f64 = 35.0;
// White at 50% over the base color.
const STRIPE_ALPHA: u8 = 128;

/// Paint the frame background: solid base color plus the optional pattern
/// overlay for the configured theme.
pub(crate) fn paint_frame(ctx: &mut vello_cpu::RenderContext, canvas: &Canvas, frame: &FrameConfig) {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        frame.color.r,
        frame.color.g,
        frame.color.b,
        255,
    ));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));

    match frame.theme {
        FrameTheme::Solid => {}
        FrameTheme::Dots => paint_dots(ctx, w, h),
        FrameTheme::Stripes => paint_stripes(ctx, w, h),
    }
}

fn paint_dots(ctx: &mut vello_cpu::RenderContext, w: f64, h: f64) {
    // One path for the whole lattice keeps this a single fill.
    let mut dots = kurbo::BezPath::new();
    let mut y = DOT_START;
    while y < h {
        let mut x = DOT_START;
        while x < w {
            let circle = kurbo::Circle::new((x, y), DOT_RADIUS);
            for el in circle.path_elements(0.1) {
                dots.push(el);
            }
            x += DOT_STEP;
        }
        y += DOT_STEP;
    }

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, DOT_ALPHA));
    ctx.fill_path(&bezpath_to_cpu(&dots));
}

fn paint_stripes(ctx: &mut vello_cpu::RenderContext, w: f64, h: f64) {
    // Diagonal bands are vertical strips under a -45 degree rotation. The
    // strips overshoot the canvas on both axes so the rotated bands still
    // cover every corner.
    let diag = w + h;

    ctx.set_transform(affine_to_cpu(Affine::rotate(-FRAC_PI_4)));
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        255,
        255,
        255,
        STRIPE_ALPHA,
    ));

    let mut x = -diag;
    while x < diag {
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(x, -diag, x + STRIPE_WIDTH, diag));
        x += STRIPE_SPACING;
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
}
