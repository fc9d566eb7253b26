//! Luma-weighted grayscale conversion.
//!
//! The standard ITU-R BT.601 luminance formula is used:
//! `luma = round(0.299*R + 0.587*G + 0.114*B)`. All three color
//! channels are set to the luma value; alpha is preserved unchanged.
//!
//! The conversion is idempotent: grayscaling an already-gray buffer is
//! a no-op, because `0.299 + 0.587 + 0.114 = 1` and rounding a value
//! that is already integral returns it exactly.

use image::Rgba;

use crate::buffer::PixelBuffer;

/// Convert every pixel to its luma value.
#[must_use = "returns the grayscaled buffer"]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn grayscale(buffer: &PixelBuffer) -> PixelBuffer {
    PixelBuffer::from_fn(buffer.width(), buffer.height(), |x, y| {
        let Rgba([r, g, b, a]) = buffer.get(x, y);
        let luma = 0.114f32
            .mul_add(
                f32::from(b),
                0.299f32.mul_add(f32::from(r), 0.587 * f32::from(g)),
            )
            .round() as u8;
        Rgba([luma, luma, luma, a])
    })
}
