//! Channel-wise additive color shift with modular wraparound.
//!
//! Adds a fixed offset to each color channel, wrapping mod 256 rather
//! than saturating: `(250 + 50) mod 256 = 44`, not `255`. The
//! wraparound is a deliberate (if unusual) policy -- bright channels
//! flip dark instead of pinning at white. Alpha is preserved.

use image::Rgba;

use crate::buffer::PixelBuffer;

/// Offset added to the red channel.
pub const RED_SHIFT: u8 = 50;
/// Offset added to the green channel.
pub const GREEN_SHIFT: u8 = 30;
/// Offset added to the blue channel.
pub const BLUE_SHIFT: u8 = 20;

/// Shift every pixel by `(+50, +30, +20)` mod 256.
#[must_use = "returns the shifted buffer"]
pub fn color_shift(buffer: &PixelBuffer) -> PixelBuffer {
    PixelBuffer::from_fn(buffer.width(), buffer.height(), |x, y| {
        let Rgba([r, g, b, a]) = buffer.get(x, y);
        Rgba([
            r.wrapping_add(RED_SHIFT),
            g.wrapping_add(GREEN_SHIFT),
            b.wrapping_add(BLUE_SHIFT),
            a,
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_are_modular_not_saturating() {
        let src = PixelBuffer::from_fn(1, 1, |_, _| Rgba([250, 240, 0, 255]));
        let out = color_shift(&src);
        // (250+50) % 256 = 44, (240+30) % 256 = 14, (0+20) % 256 = 20.
        assert_eq!(out.get(0, 0), Rgba([44, 14, 20, 255]));
    }

    #[test]
    fn shifts_below_wrap_threshold_are_plain_additions() {
        let src = PixelBuffer::from_fn(1, 1, |_, _| Rgba([100, 50, 25, 255]));
        assert_eq!(color_shift(&src).get(0, 0), Rgba([150, 80, 45, 255]));
    }

    #[test]
    fn alpha_preserved() {
        let src = PixelBuffer::from_fn(1, 1, |_, _| Rgba([1, 2, 3, 77]));
        assert_eq!(color_shift(&src).get(0, 0)[3], 77);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn preserves_dimensions() {
        let src = PixelBuffer::blank(6, 2).unwrap();
        assert_eq!(color_shift(&src).dimensions(), src.dimensions());
    }
}
