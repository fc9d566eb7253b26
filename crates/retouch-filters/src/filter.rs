//! Filter selection: one editor core parameterized by named variants.
//!
//! [`FilterKind`] is the strategy set the editing session dispatches
//! over. Each variant is an independent, stateless, per-pixel transform
//! implemented in its own module; adding a variant means adding a
//! module and one match arm here, with no changes to the session or
//! runner.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::{blur, color_shift, grayscale, invert, saturate};

/// Selects which pixel filter to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    /// 3x3 bounds-aware box blur.
    Blur,
    /// Luma-weighted grayscale conversion.
    Grayscale,
    /// Saturation scaling in HSB space (default 1.5x).
    Saturate,
    /// Additive channel shift with mod-256 wraparound.
    ColorShift,
    /// Channel-wise color complement.
    Invert,
}

impl FilterKind {
    /// Every filter variant, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Blur,
        Self::Grayscale,
        Self::Saturate,
        Self::ColorShift,
        Self::Invert,
    ];

    /// Human-readable name for menus and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::Grayscale => "grayscale",
            Self::Saturate => "saturate",
            Self::ColorShift => "color shift",
            Self::Invert => "invert",
        }
    }

    /// Run the filter, producing a new buffer of identical dimensions.
    #[must_use = "filters return a new buffer; the input is untouched"]
    pub fn apply(self, buffer: &PixelBuffer) -> PixelBuffer {
        match self {
            Self::Blur => blur::box_blur(buffer),
            Self::Grayscale => grayscale::grayscale(buffer),
            Self::Saturate => saturate::saturate(buffer, saturate::DEFAULT_FACTOR),
            Self::ColorShift => color_shift::color_shift(buffer),
            Self::Invert => invert::invert(buffer),
        }
    }
}
