use crate::error::CodecError;
use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use resizer_core::constants::{CONTENT_TYPE_JPEG, CONTENT_TYPE_PNG};
use std::io::Cursor;

/// Output format for encoded variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    /// Map a derived content type to the encoder producing it.
    ///
    /// Anything other than `image/png` is encoded as JPEG, mirroring the
    /// content-type rule for derived keys.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.eq_ignore_ascii_case(CONTENT_TYPE_PNG) {
            OutputFormat::Png
        } else {
            OutputFormat::Jpeg
        }
    }

    pub fn to_mime_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => CONTENT_TYPE_JPEG,
            OutputFormat::Png => CONTENT_TYPE_PNG,
        }
    }

    fn name(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
        }
    }
}

/// Encoders for the supported output formats
pub struct ImageCompressor;

impl ImageCompressor {
    pub fn encode(
        img: &DynamicImage,
        format: OutputFormat,
        jpeg_quality: u8,
    ) -> Result<Bytes, CodecError> {
        match format {
            OutputFormat::Jpeg => Self::compress_jpeg(img, jpeg_quality),
            OutputFormat::Png => Self::compress_png(img),
        }
    }

    /// Compress to JPEG. Alpha is dropped because JPEG cannot carry it.
    fn compress_jpeg(img: &DynamicImage, quality: u8) -> Result<Bytes, CodecError> {
        let rgb_img = img.to_rgb8();
        let mut buffer = Vec::new();

        let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
        rgb_img
            .write_with_encoder(encoder)
            .map_err(|e| CodecError::Encode {
                format: OutputFormat::Jpeg.name(),
                message: e.to_string(),
            })?;

        Ok(Bytes::from(buffer))
    }

    /// Compress to PNG
    fn compress_png(img: &DynamicImage) -> Result<Bytes, CodecError> {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        img.write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| CodecError::Encode {
                format: OutputFormat::Png.name(),
                message: e.to_string(),
            })?;

        Ok(Bytes::from(buffer))
    }
}
