use std::sync::Arc;

use crate::{
    assets::decode::PreparedPhoto,
    foundation::error::{BoothError, BoothResult},
};

/// Capture-time photo filter, applied before composition.
///
/// A closed enumeration of the booth's filter presets; each maps to a fixed
/// 4x5 color matrix (plus a small blur for [`PhotoFilter::Soft`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoFilter {
    /// No filter.
    #[default]
    None,
    /// Full grayscale.
    Grayscale,
    /// Full sepia.
    Sepia,
    /// Half sepia with lowered contrast and a brightness lift.
    Vintage,
    /// Slight brightness lift plus a gentle blur.
    Soft,
    /// High-contrast darkened grayscale.
    Noir,
    /// Boosted saturation and contrast.
    Vivid,
}

/// Row-major 4x5 color matrix (RGBA rows, RGBA+offset columns) applied to
/// straight-alpha channels in 0..=1 range.
pub type ColorMatrix = [f32; 20];

const IDENTITY: ColorMatrix = [
    1.0, 0.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 0.0, 1.0, 0.0,
];

/// Blur taps used by [`PhotoFilter::Soft`], fixed for reproducibility.
const SOFT_BLUR_RADIUS: u32 = 1;
const SOFT_BLUR_SIGMA: f32 = 0.5;

impl PhotoFilter {
    /// The color matrix for this preset.
    pub fn color_matrix(self) -> ColorMatrix {
        match self {
            PhotoFilter::None => IDENTITY,
            PhotoFilter::Grayscale => grayscale(1.0),
            PhotoFilter::Sepia => sepia(1.0),
            PhotoFilter::Vintage => compose(brightness(1.1), compose(contrast(0.85), sepia(0.5))),
            PhotoFilter::Soft => brightness(1.05),
            PhotoFilter::Noir => compose(brightness(0.7), compose(contrast(1.3), grayscale(1.0))),
            PhotoFilter::Vivid => compose(contrast(1.2), saturate(1.8)),
        }
    }

    /// Whether the preset applies a blur pass after the color matrix.
    pub fn has_blur(self) -> bool {
        matches!(self, PhotoFilter::Soft)
    }
}

/// Apply `filter` to `photo`, producing a new photo with identical
/// dimensions. [`PhotoFilter::None`] is a cheap clone.
pub fn apply_filter(photo: &PreparedPhoto, filter: PhotoFilter) -> BoothResult<PreparedPhoto> {
    if filter == PhotoFilter::None {
        return Ok(photo.clone());
    }

    let src = photo.rgba8_premul.as_slice();
    let mut dst = vec![0u8; src.len()];
    color_matrix_rgba8_premul(src, &mut dst, filter.color_matrix());

    if filter.has_blur() {
        let kernel = gaussian_kernel_q16(SOFT_BLUR_RADIUS, SOFT_BLUR_SIGMA)?;
        let mut tmp = vec![0u8; dst.len()];
        let mut out = vec![0u8; dst.len()];
        blur_rgba8_premul_q16(&dst, &mut out, &mut tmp, photo.width, photo.height, &kernel);
        dst = out;
    }

    Ok(PreparedPhoto {
        width: photo.width,
        height: photo.height,
        rgba8_premul: Arc::new(dst),
    })
}

fn grayscale(t: f32) -> ColorMatrix {
    // Rec. 709 luma weights.
    let (lr, lg, lb) = (0.2126, 0.7152, 0.0722);
    lerp_matrix(
        IDENTITY,
        [
            lr, lg, lb, 0.0, 0.0, //
            lr, lg, lb, 0.0, 0.0, //
            lr, lg, lb, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0,
        ],
        t,
    )
}

fn sepia(t: f32) -> ColorMatrix {
    lerp_matrix(
        IDENTITY,
        [
            0.393, 0.769, 0.189, 0.0, 0.0, //
            0.349, 0.686, 0.168, 0.0, 0.0, //
            0.272, 0.534, 0.131, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0,
        ],
        t,
    )
}

fn brightness(b: f32) -> ColorMatrix {
    [
        b, 0.0, 0.0, 0.0, 0.0, //
        0.0, b, 0.0, 0.0, 0.0, //
        0.0, 0.0, b, 0.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, 0.0,
    ]
}

fn contrast(c: f32) -> ColorMatrix {
    let off = (1.0 - c) * 0.5;
    [
        c, 0.0, 0.0, 0.0, off, //
        0.0, c, 0.0, 0.0, off, //
        0.0, 0.0, c, 0.0, off, //
        0.0, 0.0, 0.0, 1.0, 0.0,
    ]
}

fn saturate(s: f32) -> ColorMatrix {
    let (lr, lg, lb) = (0.2126, 0.7152, 0.0722);
    [
        lr + (1.0 - lr) * s,
        lg - lg * s,
        lb - lb * s,
        0.0,
        0.0, //
        lr - lr * s,
        lg + (1.0 - lg) * s,
        lb - lb * s,
        0.0,
        0.0, //
        lr - lr * s,
        lg - lg * s,
        lb + (1.0 - lb) * s,
        0.0,
        0.0, //
        0.0,
        0.0,
        0.0,
        1.0,
        0.0,
    ]
}

fn lerp_matrix(a: ColorMatrix, b: ColorMatrix, t: f32) -> ColorMatrix {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0.0f32; 20];
    for (i, o) in out.iter_mut().enumerate() {
        *o = a[i] + (b[i] - a[i]) * t;
    }
    out
}

/// Compose matrices so that `a` applies first, then `b` (`b * a` treating
/// each as a 5x5 with an implicit [0,0,0,0,1] bottom row).
fn compose(b: ColorMatrix, a: ColorMatrix) -> ColorMatrix {
    let mut out = [0.0f32; 20];
    for row in 0..4 {
        for col in 0..5 {
            let mut acc = 0.0f32;
            for k in 0..4 {
                acc += b[row * 5 + k] * a[k * 5 + col];
            }
            if col == 4 {
                acc += b[row * 5 + 4];
            }
            out[row * 5 + col] = acc;
        }
    }
    out
}

fn color_matrix_rgba8_premul(src: &[u8], dst: &mut [u8], m: ColorMatrix) {
    debug_assert_eq!(src.len(), dst.len());
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        let pr = s[0] as f32 / 255.0;
        let pg = s[1] as f32 / 255.0;
        let pb = s[2] as f32 / 255.0;
        let pa = s[3] as f32 / 255.0;

        // Convert premul -> straight for matrix application.
        let inv_a = if pa > 0.0 { 1.0 / pa } else { 0.0 };
        let r = pr * inv_a;
        let g = pg * inv_a;
        let b = pb * inv_a;
        let a = pa;

        let out_r = (m[0] * r + m[1] * g + m[2] * b + m[3] * a + m[4]).clamp(0.0, 1.0);
        let out_g = (m[5] * r + m[6] * g + m[7] * b + m[8] * a + m[9]).clamp(0.0, 1.0);
        let out_b = (m[10] * r + m[11] * g + m[12] * b + m[13] * a + m[14]).clamp(0.0, 1.0);
        let out_a = (m[15] * r + m[16] * g + m[17] * b + m[18] * a + m[19]).clamp(0.0, 1.0);

        // Convert straight -> premul.
        let pr = (out_r * out_a).clamp(0.0, 1.0);
        let pg = (out_g * out_a).clamp(0.0, 1.0);
        let pb = (out_b * out_a).clamp(0.0, 1.0);

        d[0] = (pr * 255.0).round().clamp(0.0, 255.0) as u8;
        d[1] = (pg * 255.0).round().clamp(0.0, 255.0) as u8;
        d[2] = (pb * 255.0).round().clamp(0.0, 255.0) as u8;
        d[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> BoothResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(BoothError::validation("blur sigma must be finite and > 0"));
    }

    let r = radius as i32;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = sigma as f64;
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = i as f64;
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    // Re-center rounding drift on the middle tap so taps sum to 1.0 in Q16.
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let mid_val = i64::from(weights[mid]);
        weights[mid] = mid_val.saturating_add(delta).clamp(0, 65536) as u32;
    }

    Ok(weights)
}

fn blur_rgba8_premul_q16(
    src: &[u8],
    dst: &mut [u8],
    tmp: &mut [u8],
    width: u32,
    height: u32,
    kernel_q16: &[u32],
) {
    if kernel_q16.len() == 1 {
        dst.copy_from_slice(src);
        return;
    }
    blur_pass_q16(src, tmp, width, height, kernel_q16, BlurAxis::Horizontal);
    blur_pass_q16(tmp, dst, width, height, kernel_q16, BlurAxis::Vertical);
}

#[derive(Clone, Copy)]
enum BlurAxis {
    Horizontal,
    Vertical,
}

fn blur_pass_q16(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32], axis: BlurAxis) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let delta = ki as i32 - radius;
                let (sx, sy) = match axis {
                    BlurAxis::Horizontal => ((x + delta).clamp(0, w - 1), y),
                    BlurAxis::Vertical => (x, (y + delta).clamp(0, h - 1)),
                };
                let idx = ((sy * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += (kw as u64) * (src[idx + c] as u64);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                let v = (acc[c] + 32768) >> 16;
                dst[out_idx + c] = v.min(255) as u8;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/filter.rs"]
mod tests;
