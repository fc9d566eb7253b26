//! Shared types for the retouch raster core.

use serde::{Deserialize, Serialize};

/// Re-export the RGBA pixel type so downstream crates can name colors
/// without depending on `image` directly.
pub use image::Rgba;

/// A 2D point in canvas coordinates (pixels, integer grid).
///
/// Pointer events arrive as integer pixel positions; points may lie
/// outside the canvas (drags past the edge), so coordinates are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (pixels from left edge).
    pub x: i32,
    /// Vertical position (pixels from top edge).
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Errors that can occur while constructing a pixel buffer from
/// encoded image data.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// A blank canvas was requested with a zero width or height.
    #[error("canvas dimensions must be non-zero, got {width}x{height}")]
    EmptyCanvas {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn point_new() {
        let p = Point::new(3, -4);
        assert_eq!(p.x, 3);
        assert_eq!(p.y, -4);
    }

    #[test]
    fn point_equality() {
        assert_eq!(Point::new(1, 2), Point::new(1, 2));
        assert_ne!(Point::new(1, 2), Point::new(1, 3));
    }

    #[test]
    fn dimensions_equality() {
        assert_eq!(
            Dimensions {
                width: 100,
                height: 200
            },
            Dimensions {
                width: 100,
                height: 200
            },
        );
        assert_ne!(
            Dimensions {
                width: 100,
                height: 200
            },
            Dimensions {
                width: 100,
                height: 201
            },
        );
    }

    #[test]
    fn error_empty_input_display() {
        let err = RasterError::EmptyInput;
        assert_eq!(err.to_string(), "input image data is empty");
    }

    #[test]
    fn error_empty_canvas_display() {
        let err = RasterError::EmptyCanvas {
            width: 0,
            height: 5,
        };
        assert_eq!(err.to_string(), "canvas dimensions must be non-zero, got 0x5");
    }

    #[test]
    fn point_serde_round_trip() {
        let p = Point::new(17, -31);
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }

    #[test]
    fn dimensions_serde_round_trip() {
        let d = Dimensions {
            width: 640,
            height: 480,
        };
        let json = serde_json::to_string(&d).unwrap();
        let deserialized: Dimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(d, deserialized);
    }
}
