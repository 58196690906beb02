use crate::error::CodecError;
use image::{DynamicImage, GenericImageView};

/// Largest side JPEG and PNG encoders accept.
pub const MAX_OUTPUT_SIDE: u32 = 65_535;

/// Image resize operations
pub struct ImageResize;

impl ImageResize {
    /// Calculate output dimensions for a cover resize.
    ///
    /// The image is scaled by the larger of the two axis ratios, so both output
    /// dimensions are at least the target and the aspect ratio is kept. One
    /// axis may overflow the target; nothing is cropped. Small images are
    /// enlarged.
    pub fn cover_dimensions(
        orig_width: u32,
        orig_height: u32,
        target_width: u32,
        target_height: u32,
    ) -> (u32, u32) {
        let scale_width = target_width as f64 / orig_width as f64;
        let scale_height = target_height as f64 / orig_height as f64;
        let scale = scale_width.max(scale_height);

        let width = (orig_width as f64 * scale).round() as u32;
        let height = (orig_height as f64 * scale).round() as u32;

        // Guard against float error landing one pixel short of the target.
        (width.max(target_width).max(1), height.max(target_height).max(1))
    }

    /// Reject output dimensions that cannot be encoded or exceed `max_pixels`.
    ///
    /// Must run before any buffer of that size is allocated.
    pub fn check_output(width: u32, height: u32, max_pixels: u64) -> Result<(), CodecError> {
        let pixels = u64::from(width) * u64::from(height);
        if width > MAX_OUTPUT_SIDE || height > MAX_OUTPUT_SIDE || pixels > max_pixels {
            return Err(CodecError::OutputTooLarge {
                width,
                height,
                limit: max_pixels,
                max_side: MAX_OUTPUT_SIDE,
            });
        }
        Ok(())
    }

    /// Select appropriate filter type based on resize ratio
    pub fn select_filter(
        orig_width: u32,
        orig_height: u32,
        new_width: u32,
        new_height: u32,
    ) -> image::imageops::FilterType {
        let width_ratio = orig_width as f32 / new_width as f32;
        let height_ratio = orig_height as f32 / new_height as f32;
        let max_ratio = width_ratio.max(height_ratio);

        if max_ratio > 2.0 {
            image::imageops::FilterType::Triangle
        } else if max_ratio > 1.5 {
            image::imageops::FilterType::CatmullRom
        } else {
            image::imageops::FilterType::Lanczos3
        }
    }

    /// Resize image so it covers the target box
    pub fn resize_cover(img: &DynamicImage, target_width: u32, target_height: u32) -> DynamicImage {
        let (orig_width, orig_height) = img.dimensions();
        let (width, height) =
            Self::cover_dimensions(orig_width, orig_height, target_width, target_height);

        if (width, height) == (orig_width, orig_height) {
            return img.clone();
        }

        let filter = Self::select_filter(orig_width, orig_height, width, height);
        img.resize_exact(width, height, filter)
    }
}
