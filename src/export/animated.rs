use crate::{
    export::static_image::BlobHandle,
    foundation::error::{BoothError, BoothResult},
    render::raster::RasterBuffer,
};

/// Encoder for multi-frame strip exports.
///
/// The booth renders one strip per captured pose and hands the sequence to
/// an encoder. No encoder ships yet; [`AnimatedExportStub`] holds the seam
/// open for one.
pub trait AnimatedEncoder {
    /// Container MIME type this encoder produces.
    fn mime(&self) -> &'static str;

    /// Encode frames into a container, each shown for `frame_delay_ms`.
    fn encode(&self, frames: &[RasterBuffer], frame_delay_ms: u32) -> BoothResult<Vec<u8>>;
}

/// Placeholder encoder that rejects every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimatedExportStub;

impl AnimatedEncoder for AnimatedExportStub {
    fn mime(&self) -> &'static str {
        "image/gif"
    }

    fn encode(&self, _frames: &[RasterBuffer], _frame_delay_ms: u32) -> BoothResult<Vec<u8>> {
        Err(BoothError::unimplemented_export(
            "animated strip export is not implemented",
        ))
    }
}

/// Validate a frame sequence and delegate to `encoder`.
///
/// Frames must be non-empty and uniformly sized; validation failures are
/// reported before the encoder runs, so the stub's error only surfaces for
/// sequences that would otherwise be encodable.
pub fn encode_animated(
    encoder: &dyn AnimatedEncoder,
    frames: &[RasterBuffer],
    frame_delay_ms: u32,
) -> BoothResult<Vec<u8>> {
    let Some(first) = frames.first() else {
        return Err(BoothError::validation("animated export needs >= 1 frame"));
    };
    if frames
        .iter()
        .any(|f| f.width != first.width || f.height != first.height)
    {
        return Err(BoothError::validation(
            "animated export frames must share dimensions",
        ));
    }
    if frame_delay_ms == 0 {
        return Err(BoothError::validation("frame_delay_ms must be > 0"));
    }
    encoder.encode(frames, frame_delay_ms)
}

/// Encode an animated sequence and wrap it in a content-addressed handle.
pub fn export_animated(
    encoder: &dyn AnimatedEncoder,
    frames: &[RasterBuffer],
    frame_delay_ms: u32,
) -> BoothResult<BlobHandle> {
    let bytes = encode_animated(encoder, frames, frame_delay_ms)?;
    Ok(BlobHandle::new(bytes, encoder.mime()))
}

#[cfg(test)]
#[path = "../../tests/unit/export/animated.rs"]
mod tests;
