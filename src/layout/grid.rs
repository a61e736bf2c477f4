use crate::{
    foundation::core::{Canvas, Rect},
    foundation::error::BoothResult,
    strip::model::LayoutDescriptor,
};

/// Nominal strip width in pixels for every layout.
pub const STRIP_WIDTH: f64 = 600.0;

/// Fixed canvas height for very tall layouts (`rows > cols * 2`).
pub const TALL_STRIP_HEIGHT: f64 = 1800.0;

/// Padding reserved between slots and around the border, in pixels.
pub const SLOT_PADDING: f64 = 20.0;

/// Canvas dimensions and per-slot rectangles derived from a layout.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedGrid {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// One destination rectangle per pose index, row-major.
    pub slots: Vec<Rect>,
}

impl ResolvedGrid {
    /// Width of each slot in pixels.
    pub fn slot_width(&self) -> f64 {
        self.slots.first().map(|r| r.width()).unwrap_or(0.0)
    }

    /// Height of each slot in pixels.
    pub fn slot_height(&self) -> f64 {
        self.slots.first().map(|r| r.height()).unwrap_or(0.0)
    }
}

/// Derive canvas dimensions and slot rectangles for `layout`.
///
/// The strip is a fixed 600 units wide. Height follows the column/row shape
/// (`(600 / cols) * rows`) except for very tall layouts, where
/// `rows > cols * 2` pins the height to 1800 units. The tall-strip rule is
/// preserved verbatim from the shipped catalog behavior; its intent beyond
/// the observed layouts is unclear, so it is not generalized.
///
/// Slots are laid out row-major with equal padding between slots and along
/// all four borders.
pub fn resolve_grid(layout: &LayoutDescriptor) -> BoothResult<ResolvedGrid> {
    layout.validate()?;

    let cols = f64::from(layout.grid.cols);
    let rows = f64::from(layout.grid.rows);

    let strip_height = if layout.grid.rows > layout.grid.cols * 2 {
        TALL_STRIP_HEIGHT
    } else {
        (STRIP_WIDTH / cols) * rows
    };

    let slot_w = (STRIP_WIDTH - SLOT_PADDING * (cols + 1.0)) / cols;
    let slot_h = (strip_height - SLOT_PADDING * (rows + 1.0)) / rows;

    let mut slots = Vec::with_capacity(layout.poses);
    for idx in 0..layout.poses {
        let row = (idx / layout.grid.cols as usize) as f64;
        let col = (idx % layout.grid.cols as usize) as f64;
        let x = SLOT_PADDING + col * (slot_w + SLOT_PADDING);
        let y = SLOT_PADDING + row * (slot_h + SLOT_PADDING);
        slots.push(Rect::new(x, y, x + slot_w, y + slot_h));
    }

    Ok(ResolvedGrid {
        canvas: Canvas {
            width: STRIP_WIDTH as u32,
            height: strip_height as u32,
        },
        slots,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
