//! Codec double that skips pixel work.

use bytes::Bytes;
use resizer_processing::{CodecError, EncodedImage, ImageCodec, OutputFormat};
use std::sync::Mutex;

/// Returns `"<width>x<height>"` as the encoded bytes and records each call.
#[derive(Default)]
pub struct StubCodec {
    calls: Mutex<Vec<(u32, u32, OutputFormat)>>,
    fail_on: Option<usize>,
}

impl StubCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the nth call (1-based) with a decode error.
    pub fn failing_on(call: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(call),
        }
    }

    pub fn calls(&self) -> Vec<(u32, u32, OutputFormat)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ImageCodec for StubCodec {
    fn resize_cover(
        &self,
        _data: &[u8],
        width: u32,
        height: u32,
        format: OutputFormat,
    ) -> Result<EncodedImage, CodecError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((width, height, format));

        if self.fail_on == Some(calls.len()) {
            return Err(CodecError::Decode("stub decode failure".to_string()));
        }

        Ok(EncodedImage {
            data: Bytes::from(format!("{width}x{height}")),
            width,
            height,
            format,
        })
    }
}
