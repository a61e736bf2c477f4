use std::{io::Cursor, sync::Arc};

use crate::{
    foundation::{
        error::{BoothError, BoothResult},
        math::{Fnv1a64, unpremultiply_rgba8_in_place},
    },
    render::raster::RasterBuffer,
};

/// MIME type of PNG exports.
pub const PNG_MIME: &str = "image/png";

/// An encoded export addressed by its content.
///
/// The id is a stable fingerprint of the encoded bytes, so re-exporting an
/// unchanged strip yields the same handle and downloads can be deduplicated.
#[derive(Clone, Debug)]
pub struct BlobHandle {
    /// Fingerprint of the encoded bytes.
    pub content_id: u64,
    /// MIME type of the payload.
    pub mime: &'static str,
    /// Encoded payload.
    pub bytes: Arc<Vec<u8>>,
}

impl BlobHandle {
    /// Wrap encoded bytes, fingerprinting them for addressing.
    pub fn new(bytes: Vec<u8>, mime: &'static str) -> Self {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(&bytes);
        Self {
            content_id: h.finish(),
            mime,
            bytes: Arc::new(bytes),
        }
    }
}

/// Encode a rendered strip as PNG with straight alpha.
#[tracing::instrument(skip(buffer), fields(width = buffer.width, height = buffer.height))]
pub fn encode_png(buffer: &RasterBuffer) -> BoothResult<Vec<u8>> {
    let expected = (buffer.width as usize) * (buffer.height as usize) * 4;
    if buffer.data.len() != expected {
        return Err(BoothError::encode("raster byte length mismatch"));
    }

    let mut straight = buffer.data.clone();
    unpremultiply_rgba8_in_place(&mut straight);

    let img = image::RgbaImage::from_raw(buffer.width, buffer.height, straight)
        .ok_or_else(|| BoothError::encode("raster does not fit an rgba image"))?;

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| BoothError::encode(format!("png encode failed: {e}")))?;
    Ok(out.into_inner())
}

/// Encode a strip as PNG and wrap it in a content-addressed handle.
pub fn export_png(buffer: &RasterBuffer) -> BoothResult<BlobHandle> {
    Ok(BlobHandle::new(encode_png(buffer)?, PNG_MIME))
}

#[cfg(test)]
#[path = "../../tests/unit/export/static_image.rs"]
mod tests;
