//! Freehand brush-stroke drawing.
//!
//! A stroke is consumed one segment at a time: the session records the
//! previous pointer position and calls [`stroke_segment`] for each drag
//! event, drawing an anti-aliasing-free line of the brush's width
//! directly into the buffer. Segments are not retained -- there is no
//! undo log.
//!
//! Thick segments are produced by stamping a filled circle of the brush
//! radius at every point of the Bresenham line between the endpoints
//! (round caps and joins). Points outside the canvas are clipped, so
//! drags past the edge are safe.

use image::Rgba;
use imageproc::drawing::{BresenhamLineIter, draw_filled_circle_mut};

use crate::buffer::PixelBuffer;
use crate::types::Point;

/// The active drawing tool: a color and a stroke width in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    /// Stroke color, applied as-is (no blending).
    pub color: Rgba<u8>,
    /// Stroke width in pixels; at least 1.
    pub size: u32,
}

impl Default for Brush {
    /// A 5-pixel black brush, the historical default.
    fn default() -> Self {
        Self {
            color: Rgba([0, 0, 0, 255]),
            size: 5,
        }
    }
}

/// Draw one stroke segment from `from` to `to` into the buffer.
///
/// Both endpoints may lie outside the canvas; out-of-range pixels are
/// skipped rather than wrapped or clamped.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn stroke_segment(buffer: &mut PixelBuffer, from: Point, to: Point, brush: &Brush) {
    let radius = (brush.size.max(1) / 2) as i32;
    let line = BresenhamLineIter::new(
        (from.x as f32, from.y as f32),
        (to.x as f32, to.y as f32),
    );

    if radius == 0 {
        let (width, height) = (buffer.width(), buffer.height());
        for (px, py) in line {
            if let (Ok(x), Ok(y)) = (u32::try_from(px), u32::try_from(py)) {
                if x < width && y < height {
                    buffer.set(x, y, brush.color);
                }
            }
        }
    } else {
        for (px, py) in line {
            // draw_filled_circle_mut clips to the canvas internally.
            draw_filled_circle_mut(buffer.as_rgba_mut(), (px, py), radius, brush.color);
        }
    }
}
