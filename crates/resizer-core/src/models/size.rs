//! Fixed table of size variants.

use serde::Serialize;

/// A named output variant. Images are resized to cover `width` x `height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeSpec {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl SizeSpec {
    pub const fn new(name: &'static str, width: u32, height: u32) -> Self {
        Self {
            name,
            width,
            height,
        }
    }
}

/// Variants produced for every source image, in processing order.
pub const SIZE_SPECS: [SizeSpec; 3] = [
    SizeSpec::new("small", 200, 200),
    SizeSpec::new("medium", 800, 800),
    SizeSpec::new("large", 1200, 1200),
];
