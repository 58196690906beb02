//! Test fixtures: in-memory encoded images.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

/// Solid-colour JPEG of the given dimensions.
pub fn create_test_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([200, 80, 40])));
    encode(&img, ImageFormat::Jpeg)
}

/// Semi-transparent PNG of the given dimensions.
pub fn create_test_png(width: u32, height: u32) -> Vec<u8> {
    let img =
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([20, 160, 90, 180])));
    encode(&img, ImageFormat::Png)
}

fn encode(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), format)
        .expect("Failed to encode fixture image");
    buffer
}

/// Decode `data` and return its format and dimensions.
pub fn inspect(data: &[u8]) -> (ImageFormat, u32, u32) {
    let format = image::guess_format(data).expect("Unrecognized image data");
    let img = image::load_from_memory(data).expect("Failed to decode image");
    (format, img.width(), img.height())
}
