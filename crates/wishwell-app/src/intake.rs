//! Image intake: decode, downscale, re-encode.
//!
//! Operator-uploaded pictures are stored inline in the content document,
//! so they are capped to a per-section maximum width before embedding.
//! The re-encode keeps the source format; JPEG gets the profile's fixed
//! quality factor. On any failure the caller embeds the raw bytes
//! unmodified — intake never blocks an upload, it only shrinks it.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::ImageFormat;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("image: {0}")]
    Image(#[from] image::ImageError),
}

/// Per-section intake settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeProfile {
    pub max_width: u32,
    /// JPEG quality factor, 0–100. Ignored for other formats.
    pub jpeg_quality: u8,
}

impl IntakeProfile {
    /// Hero background, full viewport width.
    pub const HERO: IntakeProfile = IntakeProfile {
        max_width: 1920,
        jpeg_quality: 70,
    };
    /// Gallery images.
    pub const GALLERY: IntakeProfile = IntakeProfile {
        max_width: 1200,
        jpeg_quality: 80,
    };
    /// News post images.
    pub const POST: IntakeProfile = IntakeProfile {
        max_width: 800,
        jpeg_quality: 80,
    };
}

/// Target dimensions for a downscale to at most `max_width`, preserving
/// aspect ratio. Never upscales.
pub fn scaled_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width {
        return (width, height);
    }
    let scale = max_width as f64 / width as f64;
    let scaled_height = ((height as f64 * scale) as u32).max(1);
    (max_width, scaled_height)
}

/// Re-encodes `bytes` in its own format, no wider than the profile's cap.
///
/// Images already within the cap are still re-encoded, matching the
/// always-redraw behavior the page's upload controls rely on.
pub fn shrink_to_width(bytes: &[u8], profile: IntakeProfile) -> Result<Vec<u8>, IntakeError> {
    let format = image::guess_format(bytes)?;
    let decoded = image::load_from_memory_with_format(bytes, format)?;
    let (width, height) = (decoded.width(), decoded.height());
    let (target_width, target_height) = scaled_dimensions(width, height, profile.max_width);
    let resized = if (target_width, target_height) == (width, height) {
        decoded
    } else {
        decoded.resize_exact(target_width, target_height, FilterType::Triangle)
    };

    let mut out = Cursor::new(Vec::new());
    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut out, profile.jpeg_quality);
            resized.write_with_encoder(encoder)?;
        }
        other => resized.write_to(&mut out, other)?,
    }
    debug!(
        from_width = width,
        to_width = target_width,
        format = ?format,
        "image re-encoded"
    );
    Ok(out.into_inner())
}
