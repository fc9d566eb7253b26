//! retouch-filters: Pure raster editing primitives (sans-IO).
//!
//! An owned RGBA pixel buffer, five independent per-pixel filters
//! (blur, grayscale, saturation, color shift, invert), and freehand
//! brush-stroke drawing.
//!
//! This crate has **no I/O or threading dependencies** -- it operates on
//! in-memory pixel data and returns new buffers. All filesystem
//! interaction and background scheduling live in `retouch-session`.
//!
//! Every filter is a pure transform from one [`PixelBuffer`] to another
//! of identical dimensions; the caller only ever observes the post-state.
//! The [`FilterKind`] enum selects a filter variant at runtime.

pub mod blur;
pub mod buffer;
pub mod color_shift;
pub mod draw;
pub mod filter;
pub mod grayscale;
pub mod invert;
pub mod saturate;
pub mod types;

pub use buffer::PixelBuffer;
pub use draw::Brush;
pub use filter::FilterKind;
pub use types::{Dimensions, Point, RasterError};
