//! Channel-wise color inversion.
//!
//! Replaces each color channel with its complement (`255 - c`). Alpha
//! is preserved. The transform is an exact involution: inverting twice
//! reproduces the original buffer bit for bit.

use image::Rgba;

use crate::buffer::PixelBuffer;

/// Invert every pixel's color channels.
#[must_use = "returns the inverted buffer"]
pub fn invert(buffer: &PixelBuffer) -> PixelBuffer {
    PixelBuffer::from_fn(buffer.width(), buffer.height(), |x, y| {
        let Rgba([r, g, b, a]) = buffer.get(x, y);
        Rgba([255 - r, 255 - g, 255 - b, a])
    })
}
