//! The owned pixel buffer all filters and strokes operate on.
//!
//! A [`PixelBuffer`] is a W×H grid of RGBA8 samples, constructed either
//! by decoding an encoded image (PNG, JPEG, BMP) or as a blank canvas.
//! Filters preserve dimensions; there is no resize operation. The buffer
//! is owned exclusively by an editing session and replaced wholesale
//! (never merged) when a filter completes.
//!
//! Out-of-bounds access through [`get`](PixelBuffer::get) and
//! [`set`](PixelBuffer::set) is a programming error and fails fast.
//! Neighborhood clamping is the caller's (filter's) responsibility.

use image::{Rgba, RgbaImage};

use crate::types::{Dimensions, RasterError};

/// An in-memory 2D raster of RGBA8 color samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixels: RgbaImage,
}

impl PixelBuffer {
    /// Decode raw encoded image bytes into a pixel buffer.
    ///
    /// Supports PNG, JPEG, and BMP (whatever the `image` crate decodes
    /// with the enabled features). All inputs are normalized to RGBA8.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::EmptyInput`] if `bytes` is empty.
    /// Returns [`RasterError::Decode`] if the image format is
    /// unrecognized or the data is corrupt.
    pub fn decode(bytes: &[u8]) -> Result<Self, RasterError> {
        if bytes.is_empty() {
            return Err(RasterError::EmptyInput);
        }

        let img = image::load_from_memory(bytes)?;
        Ok(Self {
            pixels: img.to_rgba8(),
        })
    }

    /// Create a blank (opaque white) canvas of the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::EmptyCanvas`] if either dimension is zero.
    pub fn blank(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyCanvas { width, height });
        }

        Ok(Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])),
        })
    }

    /// Wrap an already-decoded RGBA image.
    #[must_use]
    pub const fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Build a buffer by evaluating a function at every pixel.
    ///
    /// Mainly useful for constructing test fixtures and filter outputs.
    #[must_use]
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgba<u8>,
    {
        Self {
            pixels: RgbaImage::from_fn(width, height, f),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Width and height together.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Read the sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside `[0, width) x [0, height)`.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    /// Write the sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside `[0, width) x [0, height)`.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        self.pixels.put_pixel(x, y, color);
    }

    /// Borrow the underlying RGBA image (for encoding and display).
    #[must_use]
    pub const fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Mutably borrow the underlying RGBA image (for drawing primitives).
    pub const fn as_rgba_mut(&mut self) -> &mut RgbaImage {
        &mut self.pixels
    }

    /// Consume the buffer and return the underlying RGBA image.
    #[must_use]
    pub fn into_rgba(self) -> RgbaImage {
        self.pixels
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Helper: encode an RGBA image as PNG bytes.
    fn encode_png(img: &RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        buf
    }

    #[test]
    fn decode_empty_input_returns_error() {
        let result = PixelBuffer::decode(&[]);
        assert!(matches!(result, Err(RasterError::EmptyInput)));
    }

    #[test]
    fn decode_corrupt_bytes_returns_decode_error() {
        let result = PixelBuffer::decode(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(matches!(result, Err(RasterError::Decode(_))));
    }

    #[test]
    fn decode_valid_png() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        let buffer = PixelBuffer::decode(&encode_png(&img)).unwrap();
        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.get(2, 1), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn blank_is_opaque_white() {
        let buffer = PixelBuffer::blank(4, 3).unwrap();
        assert_eq!(
            buffer.dimensions(),
            Dimensions {
                width: 4,
                height: 3
            }
        );
        assert_eq!(buffer.get(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(buffer.get(3, 2), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn blank_rejects_zero_dimensions() {
        assert!(matches!(
            PixelBuffer::blank(0, 5),
            Err(RasterError::EmptyCanvas {
                width: 0,
                height: 5
            })
        ));
        assert!(matches!(
            PixelBuffer::blank(5, 0),
            Err(RasterError::EmptyCanvas { .. })
        ));
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut buffer = PixelBuffer::blank(2, 2).unwrap();
        buffer.set(1, 0, Rgba([1, 2, 3, 4]));
        assert_eq!(buffer.get(1, 0), Rgba([1, 2, 3, 4]));
        // Neighbors untouched.
        assert_eq!(buffer.get(0, 0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_out_of_bounds_fails_fast() {
        let buffer = PixelBuffer::blank(2, 2).unwrap();
        let _ = buffer.get(2, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_out_of_bounds_fails_fast() {
        let mut buffer = PixelBuffer::blank(2, 2).unwrap();
        buffer.set(0, 2, Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn buffers_compare_bit_for_bit() {
        let a = PixelBuffer::from_fn(2, 2, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let b = a.clone();
        assert_eq!(a, b);

        let mut c = b.clone();
        c.set(0, 0, Rgba([9, 9, 9, 255]));
        assert_ne!(a, c);
    }
}
