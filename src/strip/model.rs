use crate::foundation::{
    core::Rgb8,
    error::{BoothError, BoothResult},
};

/// Grid shape of a strip layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridShape {
    /// Number of photo columns.
    pub cols: u32,
    /// Number of photo rows.
    pub rows: u32,
}

/// One entry of the fixed layout catalog.
///
/// A layout is pure data: selected once per session and held read-only by
/// every downstream component. The invariant `poses == cols * rows` is
/// enforced at construction and on deserialized values via [`validate`].
///
/// [`validate`]: LayoutDescriptor::validate
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayoutDescriptor {
    /// Stable catalog identifier (`"A"`, `"B"`, ...).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Number of photo slots in the strip.
    pub poses: usize,
    /// Row/column arrangement of the slots.
    pub grid: GridShape,
    /// Nominal aspect ratio label shown by the UI (e.g. `"2/6"`).
    pub aspect_ratio: String,
}

impl LayoutDescriptor {
    /// Check the `poses == cols * rows` invariant and non-degenerate grid.
    pub fn validate(&self) -> BoothResult<()> {
        if self.grid.cols == 0 || self.grid.rows == 0 {
            return Err(BoothError::validation(format!(
                "layout '{}' has a degenerate {}x{} grid",
                self.id, self.grid.cols, self.grid.rows
            )));
        }
        let cells = (self.grid.cols as usize) * (self.grid.rows as usize);
        if self.poses != cells {
            return Err(BoothError::validation(format!(
                "layout '{}': poses ({}) != cols*rows ({})",
                self.id, self.poses, cells
            )));
        }
        Ok(())
    }
}

/// The fixed, finite layout catalog offered by the booth.
pub fn builtin_layouts() -> Vec<LayoutDescriptor> {
    fn entry(id: &str, name: &str, poses: usize, cols: u32, rows: u32, ar: &str) -> LayoutDescriptor {
        LayoutDescriptor {
            id: id.to_string(),
            name: name.to_string(),
            poses,
            grid: GridShape { cols, rows },
            aspect_ratio: ar.to_string(),
        }
    }

    vec![
        entry("A", "Layout A", 4, 1, 4, "2/6"),
        entry("B", "Layout B", 3, 1, 3, "2/5"),
        entry("C", "Layout C", 2, 1, 2, "2/4"),
        entry("D", "Layout D", 6, 2, 3, "4/4.5"),
    ]
}

/// Decorative background pattern painted under the photos.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameTheme {
    /// Plain color fill, no pattern.
    #[default]
    Solid,
    /// Regular grid of small semi-transparent dots.
    Dots,
    /// Parallel semi-transparent diagonal stripes.
    Stripes,
}

/// Parse a frame theme from its user-facing string form.
pub fn parse_frame_theme(s: &str) -> BoothResult<FrameTheme> {
    match s.trim().to_ascii_lowercase().as_str() {
        "solid" => Ok(FrameTheme::Solid),
        "dots" => Ok(FrameTheme::Dots),
        "stripes" => Ok(FrameTheme::Stripes),
        other => Err(BoothError::validation(format!(
            "unknown frame theme '{other}'"
        ))),
    }
}

/// User-chosen frame styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameConfig {
    /// Background fill color.
    pub color: Rgb8,
    /// Pattern painted over the fill.
    pub theme: FrameTheme,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            color: Rgb8::WHITE,
            theme: FrameTheme::Solid,
        }
    }
}

/// The named frame colors offered by the booth UI.
pub fn frame_color_catalog() -> Vec<(&'static str, Rgb8)> {
    vec![
        ("White", Rgb8 { r: 0xFF, g: 0xFF, b: 0xFF }),
        ("Pastel Pink", Rgb8 { r: 0xFA, g: 0xD1, b: 0xE6 }),
        ("Pastel Blue", Rgb8 { r: 0xD1, g: 0xE8, b: 0xFA }),
        ("Pastel Green", Rgb8 { r: 0xD4, g: 0xF0, b: 0xE0 }),
        ("Pastel Yellow", Rgb8 { r: 0xFF, g: 0xFA, b: 0xCD }),
        ("Pastel Purple", Rgb8 { r: 0xE6, g: 0xDF, b: 0xF2 }),
        ("Black", Rgb8 { r: 0x4B, g: 0x4B, b: 0x4B }),
    ]
}

/// Renderable symbol of a sticker, as plain data.
///
/// Glyph sources are prepared into drawable form by [`crate::prepare_glyph`];
/// the model stays serializable and free of renderer types, mirroring the
/// split between authored assets and prepared assets.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickerGlyph {
    /// A text symbol (typically an emoji), shaped with the engine's glyph
    /// font and filled with `color` (straight RGBA).
    Text {
        /// Symbol text.
        text: String,
        /// Straight-alpha fill color.
        color: [u8; 4],
    },
    /// A vector shape given as SVG path data, filled with `color`.
    Path {
        /// SVG path data (`d` attribute syntax).
        svg_path_d: String,
        /// Straight-alpha fill color.
        color: [u8; 4],
    },
    /// A full SVG document, rasterized at draw scale.
    Svg {
        /// UTF-8 SVG document text.
        svg: String,
    },
}

/// A user-placed decorative sticker.
///
/// Positions are percentages of the canvas so stickers survive layout
/// changes; no bounds clamping is applied at paint time, so a large sticker
/// near 0/100 may render partially off-canvas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StickerObject {
    /// Unique id within the session.
    pub id: String,
    /// The symbol to render.
    pub glyph: StickerGlyph,
    /// Horizontal center position as a percentage of canvas width, 0..=100.
    pub x_pct: f64,
    /// Vertical center position as a percentage of canvas height, 0..=100.
    pub y_pct: f64,
    /// Render size in pixels, > 0.
    pub size_px: f64,
    /// Clockwise rotation about the sticker center, degrees in [0, 360).
    pub rotation_deg: f64,
}

impl StickerObject {
    /// Build a sticker, validating position/size/rotation invariants.
    pub fn new(
        id: impl Into<String>,
        glyph: StickerGlyph,
        x_pct: f64,
        y_pct: f64,
        size_px: f64,
        rotation_deg: f64,
    ) -> BoothResult<Self> {
        let s = Self {
            id: id.into(),
            glyph,
            x_pct,
            y_pct,
            size_px,
            rotation_deg,
        };
        s.validate()?;
        Ok(s)
    }

    /// Check the data-model invariants on this sticker.
    pub fn validate(&self) -> BoothResult<()> {
        if !(0.0..=100.0).contains(&self.x_pct) || !(0.0..=100.0).contains(&self.y_pct) {
            return Err(BoothError::validation(format!(
                "sticker '{}': position ({}, {}) outside 0..=100",
                self.id, self.x_pct, self.y_pct
            )));
        }
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(BoothError::validation(format!(
                "sticker '{}': size_px must be finite and > 0",
                self.id
            )));
        }
        if !(0.0..360.0).contains(&self.rotation_deg) {
            return Err(BoothError::validation(format!(
                "sticker '{}': rotation_deg must be in [0, 360)",
                self.id
            )));
        }
        Ok(())
    }
}

/// Append-only list of stickers with explicit clear.
///
/// Ordering is append order and determines paint order: later stickers paint
/// over earlier ones. There is no in-place edit or removal of single entries;
/// the reset action clears the whole layer.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StickerLayer {
    stickers: Vec<StickerObject>,
}

impl StickerLayer {
    /// Empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sticker after validating it.
    pub fn push(&mut self, sticker: StickerObject) -> BoothResult<()> {
        sticker.validate()?;
        self.stickers.push(sticker);
        Ok(())
    }

    /// Remove all stickers.
    pub fn clear(&mut self) {
        self.stickers.clear();
    }

    /// Stickers in paint order.
    pub fn as_slice(&self) -> &[StickerObject] {
        &self.stickers
    }

    /// Number of stickers in the layer.
    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    /// Whether the layer is empty.
    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strip/model.rs"]
mod tests;
