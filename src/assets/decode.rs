use std::sync::Arc;

use anyhow::Context;
use rayon::prelude::*;

use crate::foundation::{
    core::Canvas,
    error::{BoothError, BoothResult},
    math::premultiply_rgba8_in_place,
};

/// Decoded photo bitmap in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct PreparedPhoto {
    /// Width in pixels, > 0.
    pub width: u32,
    /// Height in pixels, > 0.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedPhoto {
    /// Build a photo from straight-alpha RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, mut rgba8: Vec<u8>) -> BoothResult<Self> {
        if width == 0 || height == 0 {
            return Err(BoothError::decode(format!(
                "photo has degenerate dimensions {width}x{height}"
            )));
        }
        let expected = Canvas { width, height }.rgba8_len();
        if rgba8.len() != expected {
            return Err(BoothError::decode(format!(
                "photo byte length {} does not match {width}x{height} rgba8",
                rgba8.len()
            )));
        }
        premultiply_rgba8_in_place(&mut rgba8);
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8),
        })
    }
}

/// Decode encoded image bytes (PNG/JPEG/...) into a [`PreparedPhoto`].
pub fn decode_photo(bytes: &[u8]) -> BoothResult<PreparedPhoto> {
    let dyn_img = image::load_from_memory(bytes)
        .context("decode photo from memory")
        .map_err(|e| BoothError::decode(format!("{e:#}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PreparedPhoto::from_rgba8(width, height, rgba.into_raw())
}

/// Decode a capture batch, one result per input, in input order.
///
/// Decoding runs in parallel but the output is indexed by capture order, so
/// slot assignment never depends on decode-completion order. A failed decode
/// surfaces as an error at its own index and does not corrupt the rest of
/// the batch.
#[tracing::instrument(skip(batches), fields(count = batches.len()))]
pub fn decode_photo_set(batches: &[Vec<u8>]) -> Vec<BoothResult<PreparedPhoto>> {
    batches
        .par_iter()
        .map(|bytes| decode_photo(bytes))
        .collect()
}

/// Parse SVG document bytes into a prepared `usvg` tree.
pub fn parse_svg(bytes: &[u8]) -> BoothResult<Arc<usvg::Tree>> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts)
        .context("parse svg tree")
        .map_err(|e| BoothError::decode(format!("{e:#}")))?;
    Ok(Arc::new(tree))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
