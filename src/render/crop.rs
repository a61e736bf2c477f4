use crate::foundation::error::{BoothError, BoothResult};

/// Source-space crop window inside a photo, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRect {
    /// Left edge of the crop window.
    pub sx: f64,
    /// Top edge of the crop window.
    pub sy: f64,
    /// Crop width.
    pub sw: f64,
    /// Crop height.
    pub sh: f64,
}

/// Compute the centered crop window that fills a `slot_w` x `slot_h` slot
/// with a `image_w` x `image_h` photo without distortion.
///
/// Photos wider than the slot lose their left and right edges; taller photos
/// lose their top and bottom edges. The crop always preserves the slot's
/// aspect ratio exactly.
pub fn center_crop(image_w: u32, image_h: u32, slot_w: f64, slot_h: f64) -> BoothResult<CropRect> {
    if image_w == 0 || image_h == 0 {
        return Err(BoothError::validation("crop source has zero dimension"));
    }
    if !slot_w.is_finite() || !slot_h.is_finite() || slot_w <= 0.0 || slot_h <= 0.0 {
        return Err(BoothError::validation("crop slot must be finite and > 0"));
    }

    let iw = f64::from(image_w);
    let ih = f64::from(image_h);
    let img_ratio = iw / ih;
    let slot_ratio = slot_w / slot_h;

    if img_ratio > slot_ratio {
        let sw = ih * slot_ratio;
        Ok(CropRect {
            sx: (iw - sw) / 2.0,
            sy: 0.0,
            sw,
            sh: ih,
        })
    } else {
        let sh = iw / slot_ratio;
        Ok(CropRect {
            sx: 0.0,
            sy: (ih - sh) / 2.0,
            sw: iw,
            sh,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/crop.rs"]
mod tests;
