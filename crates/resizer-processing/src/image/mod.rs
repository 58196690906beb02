//! Image processing module
//!
//! - Cover-resize geometry and filter selection (resize)
//! - Decode → resize → encode pipeline (transformer)

pub mod resize;
pub mod transformer;

pub use resize::ImageResize;
pub use transformer::ImageTransformer;
