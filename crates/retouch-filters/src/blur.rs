//! 3x3 box blur with bounds-aware averaging.
//!
//! Every output pixel is the average of the corresponding input pixel
//! and its up-to-8 neighbors, computed per RGB channel. Neighbors that
//! fall outside the image are excluded from both the sum and the
//! divisor -- corner pixels average over 4 samples and edge pixels over
//! 6, with no wraparound and no replicate-edge padding.
//!
//! All blurred values are computed from the original buffer before any
//! are written back, so no pixel ever averages an already-blurred
//! neighbor.
//!
//! The alpha channel is not averaged. The source pixel's alpha passes
//! through unchanged (the historical behavior dropped alpha to opaque;
//! keeping the source alpha preserves the "alpha is not part of the
//! average" policy without destroying transparency).

use image::Rgba;

use crate::buffer::PixelBuffer;

/// Apply a single 3x3 box-blur pass.
///
/// Dimensions are preserved. Channel averages use truncating integer
/// division, matching the historical pixel math exactly.
#[must_use = "returns the blurred buffer"]
#[allow(clippy::cast_possible_truncation)]
pub fn box_blur(buffer: &PixelBuffer) -> PixelBuffer {
    let width = buffer.width();
    let height = buffer.height();

    PixelBuffer::from_fn(width, height, |x, y| {
        let x0 = x.saturating_sub(1);
        let x1 = (x + 1).min(width - 1);
        let y0 = y.saturating_sub(1);
        let y1 = (y + 1).min(height - 1);

        let mut sum = [0u32; 3];
        let mut count = 0u32;
        for ny in y0..=y1 {
            for nx in x0..=x1 {
                let Rgba([r, g, b, _]) = buffer.get(nx, ny);
                sum[0] += u32::from(r);
                sum[1] += u32::from(g);
                sum[2] += u32::from(b);
                count += 1;
            }
        }

        let alpha = buffer.get(x, y)[3];
        Rgba([
            (sum[0] / count) as u8,
            (sum[1] / count) as u8,
            (sum[2] / count) as u8,
            alpha,
        ])
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn checkerboard_3x3() -> PixelBuffer {
        // White at even (x+y), black at odd:
        //   W B W
        //   B W B
        //   W B W
        PixelBuffer::from_fn(3, 3, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        })
    }

    #[test]
    fn preserves_dimensions() {
        let src = PixelBuffer::blank(7, 4).unwrap();
        let out = box_blur(&src);
        assert_eq!(out.dimensions(), src.dimensions());
    }

    #[test]
    fn uniform_image_is_unchanged() {
        let src = PixelBuffer::from_fn(5, 5, |_, _| Rgba([90, 120, 200, 255]));
        assert_eq!(box_blur(&src), src);
    }

    #[test]
    fn checkerboard_corner_edge_center_averages() {
        let out = box_blur(&checkerboard_3x3());

        // Corner (0,0): 4 samples, two white two black -> 510/4 = 127.
        assert_eq!(out.get(0, 0), Rgba([127, 127, 127, 255]));
        // Edge (1,0): 6 samples, three white three black -> 765/6 = 127.
        assert_eq!(out.get(1, 0), Rgba([127, 127, 127, 255]));
        // Center (1,1): 9 samples, five white four black -> 1275/9 = 141.
        assert_eq!(out.get(1, 1), Rgba([141, 141, 141, 255]));
        // All four corners and all four edges see the same mix.
        assert_eq!(out.get(2, 2), Rgba([127, 127, 127, 255]));
        assert_eq!(out.get(0, 1), Rgba([127, 127, 127, 255]));
    }

    #[test]
    fn single_pixel_averages_over_itself() {
        let src = PixelBuffer::from_fn(1, 1, |_, _| Rgba([13, 57, 201, 128]));
        assert_eq!(box_blur(&src), src);
    }

    #[test]
    fn averages_read_the_original_not_partial_output() {
        // A single white pixel in a black row. If the pass wrote in place,
        // the pixel at x=2 would see an already-brightened x=1 neighbor.
        let src = PixelBuffer::from_fn(4, 1, |x, _| {
            if x == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });
        let out = box_blur(&src);

        // x=2 averages original (0, 0, 0) samples only: 0.
        assert_eq!(out.get(2, 0), Rgba([0, 0, 0, 255]));
        // x=1 averages {255, 0, 0} -> 85.
        assert_eq!(out.get(1, 0), Rgba([85, 85, 85, 255]));
    }

    #[test]
    fn alpha_passes_through_unaveraged() {
        let src = PixelBuffer::from_fn(3, 1, |x, _| match x {
            0 => Rgba([255, 255, 255, 10]),
            1 => Rgba([0, 0, 0, 200]),
            _ => Rgba([255, 255, 255, 30]),
        });
        let out = box_blur(&src);
        assert_eq!(out.get(0, 0)[3], 10);
        assert_eq!(out.get(1, 0)[3], 200);
        assert_eq!(out.get(2, 0)[3], 30);
    }
}
