//! Codec seam used by the resize pipeline.

use crate::compression::OutputFormat;
use crate::error::CodecError;
use bytes::Bytes;

/// An encoded image together with its pixel dimensions.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub data: Bytes,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
}

/// Image codec - decode, cover-resize, re-encode
///
/// Implementations must be pure: the same input always yields the same
/// output and no state is kept between calls.
pub trait ImageCodec: Send + Sync {
    /// Resize `data` so it covers `width` x `height`, preserving aspect ratio,
    /// and encode the result as `format`.
    fn resize_cover(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
        format: OutputFormat,
    ) -> Result<EncodedImage, CodecError>;
}
