//! KiraKira is a deterministic photo-strip compositor for a browser-style
//! photo booth.
//!
//! The booth captures a fixed number of poses, then composes them into a
//! single printable strip: a framed grid of center-cropped photos with an
//! optional pattern overlay, sticker decorations, and a timestamp watermark.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: raw capture bytes -> [`PreparedPhoto`] (premultiplied RGBA8)
//! 2. **Filter** (optional): [`apply_filter`] applies a capture-time preset
//! 3. **Resolve**: [`LayoutDescriptor`] -> [`ResolvedGrid`] (canvas + slots)
//! 4. **Compose**: [`CompositeEngine::render`] paints frame, photos,
//!    stickers, and watermark into a [`RasterBuffer`]
//! 5. **Export**: [`export_png`] encodes the strip; animated export is a
//!    trait seam ([`AnimatedEncoder`]) with no shipped encoder
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the same photos, layout, and decorations
//!   always produce the same pixels.
//! - **No IO in renderers**: decoding is front-loaded; the engine only
//!   touches memory.
//! - **Premultiplied RGBA8** end-to-end: straight alpha appears only at the
//!   PNG export boundary.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod assets;
mod export;
mod foundation;
mod layout;
mod render;
mod strip;

pub use assets::decode::{PreparedPhoto, decode_photo, decode_photo_set, parse_svg};
pub use assets::filter::{ColorMatrix, PhotoFilter, apply_filter};
pub use assets::glyphs::{
    PreparedGlyph, TextBrushRgba8, TextLayoutEngine, prepare_glyph, rasterize_svg_to_premul_rgba8,
};
pub use export::animated::{AnimatedEncoder, AnimatedExportStub, encode_animated, export_animated};
pub use export::static_image::{BlobHandle, PNG_MIME, encode_png, export_png};
pub use foundation::core::{Affine, BezPath, Canvas, Rect, Rgb8};
pub use foundation::error::{BoothError, BoothResult};
pub use layout::grid::{
    ResolvedGrid, SLOT_PADDING, STRIP_WIDTH, TALL_STRIP_HEIGHT, resolve_grid,
};
pub use render::crop::{CropRect, center_crop};
pub use render::engine::{CompositeEngine, EngineOptions};
pub use render::raster::RasterBuffer;
pub use render::watermark::{Timestamp, watermark_text};
pub use strip::model::{
    FrameConfig, FrameTheme, GridShape, LayoutDescriptor, StickerGlyph, StickerLayer,
    StickerObject, builtin_layouts, frame_color_catalog, parse_frame_theme,
};
pub use strip::session::{Session, Step};
