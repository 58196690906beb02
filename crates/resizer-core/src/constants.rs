/// Region used when neither the event nor the environment names one.
pub const DEFAULT_REGION: &str = "ap-northeast-1";

/// Namespace all derived objects are written under. Any key containing this
/// substring is never processed, otherwise our own writes would retrigger us.
pub const RESIZED_PREFIX: &str = "resized/";

pub const CONTENT_TYPE_PNG: &str = "image/png";
pub const CONTENT_TYPE_JPEG: &str = "image/jpeg";

/// Upper bound on source object size accepted for decoding.
pub const DEFAULT_MAX_SOURCE_BYTES: usize = 50 * 1024 * 1024;

pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// Upper bound on the pixel count of one resized variant. Cover resizing of a
/// very narrow source can otherwise demand an enormous output buffer.
pub const DEFAULT_MAX_OUTPUT_PIXELS: u64 = 40_000_000;
