//! Image transformer - decode, cover-resize and re-encode

use crate::compression::{ImageCompressor, OutputFormat};
use crate::error::CodecError;
use crate::image::resize::{ImageResize, MAX_OUTPUT_SIDE};
use crate::traits::{EncodedImage, ImageCodec};
use image::{GenericImageView, Limits};
use resizer_core::constants::{DEFAULT_JPEG_QUALITY, DEFAULT_MAX_OUTPUT_PIXELS};
use std::io::Cursor;

/// Bytes per pixel assumed when bounding decoder allocations (RGBA8).
const DECODE_BYTES_PER_PIXEL: u64 = 4;

/// Codec backed by the `image` crate
#[derive(Debug, Clone, Copy)]
pub struct ImageTransformer {
    jpeg_quality: u8,
    max_output_pixels: u64,
}

impl Default for ImageTransformer {
    fn default() -> Self {
        Self::new(DEFAULT_JPEG_QUALITY, DEFAULT_MAX_OUTPUT_PIXELS)
    }
}

impl ImageTransformer {
    pub fn new(jpeg_quality: u8, max_output_pixels: u64) -> Self {
        Self {
            jpeg_quality,
            max_output_pixels,
        }
    }

    /// Decoder limits: encodable side lengths and an allocation budget
    /// matching the output pixel budget.
    fn decode_limits(&self) -> Limits {
        let mut limits = Limits::default();
        limits.max_image_width = Some(MAX_OUTPUT_SIDE);
        limits.max_image_height = Some(MAX_OUTPUT_SIDE);
        limits.max_alloc = Some(self.max_output_pixels.saturating_mul(DECODE_BYTES_PER_PIXEL));
        limits
    }

    /// Decode an image, detecting its format from the content
    pub fn decode(&self, data: &[u8]) -> Result<image::DynamicImage, CodecError> {
        let mut reader = image::ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| CodecError::Decode(e.to_string()))?;

        if reader.format().is_none() {
            return Err(CodecError::UnknownFormat(format!(
                "{} bytes with no recognizable signature",
                data.len()
            )));
        }

        reader.limits(self.decode_limits());
        reader
            .decode()
            .map_err(|e| CodecError::Decode(e.to_string()))
    }
}

impl ImageCodec for ImageTransformer {
    fn resize_cover(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
        format: OutputFormat,
    ) -> Result<EncodedImage, CodecError> {
        if width == 0 || height == 0 {
            return Err(CodecError::InvalidDimensions { width, height });
        }

        let img = self.decode(data)?;
        let (orig_width, orig_height) = img.dimensions();

        let (out_width, out_height) =
            ImageResize::cover_dimensions(orig_width, orig_height, width, height);
        ImageResize::check_output(out_width, out_height, self.max_output_pixels)?;

        let resized = ImageResize::resize_cover(&img, width, height);

        tracing::debug!(
            orig_width,
            orig_height,
            target_width = width,
            target_height = height,
            out_width,
            out_height,
            format = ?format,
            "Resized image"
        );

        let data = ImageCompressor::encode(&resized, format, self.jpeg_quality)?;

        Ok(EncodedImage {
            data,
            width: out_width,
            height: out_height,
            format,
        })
    }
}
