//! Resizer Image Processing Library
//!
//! Decoding, cover-resizing and re-encoding of raster images. Everything in
//! this crate is synchronous and CPU bound; callers on an async runtime should
//! run it on the blocking pool.

pub mod compression;
pub mod error;
pub mod image;
pub mod traits;

// Re-export commonly used types
pub use compression::OutputFormat;
pub use error::CodecError;
pub use self::image::{ImageResize, ImageTransformer};
pub use traits::{EncodedImage, ImageCodec};
