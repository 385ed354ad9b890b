//! HSV to RGB conversion and hex rendering.
//!
//! Channels are scaled with `floor(channel * 256)`, so a channel of exactly
//! `1.0` becomes `256`. Out-of-range saturation or value inputs are not
//! rejected; they produce out-of-range channels instead.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How an [`Rgb`] is rendered as a `#`-prefixed hex string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HexStyle {
    /// Unpadded, unclamped digits per channel (`#46f3`, `#80a5100`).
    #[default]
    Compat,
    /// Channels clamped to 0..=255, two digits each.
    Padded,
}

impl fmt::Display for HexStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compat => write!(f, "compat"),
            Self::Padded => write!(f, "padded"),
        }
    }
}

/// Integer RGB triple produced by the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn to_array(self) -> [i32; 3] {
        [self.r, self.g, self.b]
    }

    /// Render as `#`-prefixed hex in the requested style.
    #[must_use]
    pub fn to_hex(self, style: HexStyle) -> String {
        let mut out = String::with_capacity(7);
        out.push('#');
        for channel in self.to_array() {
            match style {
                HexStyle::Compat => out.push_str(&compat_digits(channel)),
                HexStyle::Padded => out.push_str(&format!("{:02x}", channel.clamp(0, 255))),
            }
        }
        out
    }

    /// Channels clamped into a displayable byte range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn to_bytes(self) -> [u8; 3] {
        [
            clamp_byte(self.r) as u8,
            clamp_byte(self.g) as u8,
            clamp_byte(self.b) as u8,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<Rgb> for [i32; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

const fn clamp_byte(channel: i32) -> i32 {
    if channel < 0 {
        0
    } else if channel > 255 {
        255
    } else {
        channel
    }
}

// Negative channels keep a leading minus rather than two's complement digits.
fn compat_digits(channel: i32) -> String {
    if channel < 0 {
        format!("-{:x}", channel.unsigned_abs())
    } else {
        format!("{channel:x}")
    }
}

#[allow(clippy::cast_possible_truncation)]
fn scale(channel: f64) -> i32 {
    (channel * 256.0).floor() as i32
}

/// Convert a hue in [0, 1) plus saturation and value to RGB by hue sector.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::many_single_char_names,
    clippy::suboptimal_flops
)]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    // No fused multiply-add: channel floors must match the established sequence.
    let sector = (hue * 6.0).floor();
    let f = hue * 6.0 - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - f * saturation);
    let t = value * (1.0 - (1.0 - f) * saturation);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Rgb::new(scale(r), scale(g), scale(b))
}

#[cfg(test)]
#[path = "hsv_tests.rs"]
mod tests;
