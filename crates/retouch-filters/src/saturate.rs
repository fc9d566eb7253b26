//! Saturation adjustment in HSB (hue/saturation/brightness) space.
//!
//! Each pixel is converted to HSB, its saturation is multiplied by a
//! factor and clamped to `[0, 1]`, and the pixel is converted back to
//! RGB. Hue, brightness, and alpha are unchanged.
//!
//! The RGB/HSB conversions follow the classic AWT formulation
//! (hexcone model with `+0.5` rounding on the way back to 8-bit), so
//! a factor of `1.0` reproduces the source values to within one count
//! per channel.

use image::Rgba;

use crate::buffer::PixelBuffer;

/// Default saturation multiplier.
pub const DEFAULT_FACTOR: f32 = 1.5;

/// Scale the saturation of every pixel by `factor`.
///
/// Factors above `1.0` intensify color, factors below `1.0` fade
/// toward gray, and `0.0` fully desaturates. The scaled saturation is
/// clamped to `[0, 1]`.
#[must_use = "returns the saturated buffer"]
pub fn saturate(buffer: &PixelBuffer, factor: f32) -> PixelBuffer {
    PixelBuffer::from_fn(buffer.width(), buffer.height(), |x, y| {
        let Rgba([r, g, b, a]) = buffer.get(x, y);
        let (hue, sat, bri) = rgb_to_hsb(r, g, b);
        let scaled = (sat * factor).clamp(0.0, 1.0);
        let (r, g, b) = hsb_to_rgb(hue, scaled, bri);
        Rgba([r, g, b, a])
    })
}

/// Convert 8-bit RGB to hue/saturation/brightness, each in `[0, 1]`.
///
/// A fully desaturated pixel (gray) has hue `0` by convention.
#[must_use]
pub fn rgb_to_hsb(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let (rf, gf, bf) = (f32::from(r), f32::from(g), f32::from(b));
    let cmax = rf.max(gf).max(bf);
    let cmin = rf.min(gf).min(bf);

    let brightness = cmax / 255.0;
    let saturation = if cmax > 0.0 { (cmax - cmin) / cmax } else { 0.0 };

    if saturation == 0.0 {
        return (0.0, 0.0, brightness);
    }

    let span = cmax - cmin;
    let redc = (cmax - rf) / span;
    let greenc = (cmax - gf) / span;
    let bluec = (cmax - bf) / span;

    let sector = if (rf - cmax).abs() < f32::EPSILON {
        bluec - greenc
    } else if (gf - cmax).abs() < f32::EPSILON {
        2.0 + redc - bluec
    } else {
        4.0 + greenc - redc
    };
    let mut hue = sector / 6.0;
    if hue < 0.0 {
        hue += 1.0;
    }

    (hue, saturation, brightness)
}

/// Convert hue/saturation/brightness (each in `[0, 1]`) back to 8-bit RGB.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> (u8, u8, u8) {
    let scale = |v: f32| 255.0f32.mul_add(v, 0.5) as u8;

    if saturation <= 0.0 {
        let v = scale(brightness);
        return (v, v, v);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * saturation.mul_add(-f, 1.0);
    let t = brightness * (saturation.mul_add(-(1.0 - f), 1.0));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };
    (scale(r), scale(g), scale(b))
}
