//! Golden-ratio color allocation.
//!
//! Each call advances the hue by the fractional part of the golden ratio,
//! modulo 1, and converts the new hue to RGB. Consecutive hues land far apart
//! on the color wheel, so series added one at a time stay distinguishable.

mod hsv;
mod seed;

pub use hsv::{HexStyle, Rgb, hsv_to_rgb};
pub use seed::{Seed, hue_from_text, normalize_hue};

/// Fractional part of the golden ratio, the per-allocation hue step.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_894_9;

/// Saturation used when the caller does not supply one.
pub const DEFAULT_SATURATION: f64 = 0.5;

/// Value (brightness) used when the caller does not supply one.
pub const DEFAULT_VALUE: f64 = 0.95;

/// A color as returned by [`ColorAllocator::next`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    Rgb(Rgb),
    Hex(String),
}

/// One allocation: the hue it came from and the resulting RGB.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub index: usize,
    pub label: Option<String>,
    pub hue: f64,
    pub rgb: Rgb,
}

impl Swatch {
    #[must_use]
    pub fn hex(&self, style: HexStyle) -> String {
        self.rgb.to_hex(style)
    }
}

/// Hands out an unbounded, deterministic sequence of well-spread colors.
///
/// The hue always stays in [0, 1). An allocator belongs to a single chart
/// session and is not shared.
#[derive(Debug, Clone)]
pub struct ColorAllocator {
    hue: f64,
    issued: usize,
}

impl Default for ColorAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorAllocator {
    /// Start at a uniformly random hue.
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(&Seed::Random)
    }

    /// Start at a fixed hue (wrapped into [0, 1)).
    #[must_use]
    pub fn with_hue(hue: f64) -> Self {
        Self {
            hue: normalize_hue(hue),
            issued: 0,
        }
    }

    #[must_use]
    pub fn from_seed(seed: &Seed) -> Self {
        Self::with_hue(seed.resolve())
    }

    /// Current hue; the hue of the most recent allocation once one was made.
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// Number of colors handed out so far.
    #[must_use]
    pub const fn issued(&self) -> usize {
        self.issued
    }

    fn advance(&mut self) -> f64 {
        self.hue += GOLDEN_RATIO_CONJUGATE;
        self.hue %= 1.0;
        self.issued += 1;
        self.hue
    }

    /// Advance and return the next color, as hex or as an RGB triple.
    ///
    /// `saturation` and `value` default to [`DEFAULT_SATURATION`] and
    /// [`DEFAULT_VALUE`]. Hex output uses [`HexStyle::Compat`].
    pub fn next(&mut self, as_hex: bool, saturation: Option<f64>, value: Option<f64>) -> Color {
        let rgb = self.next_rgb(saturation, value);
        if as_hex {
            Color::Hex(rgb.to_hex(HexStyle::Compat))
        } else {
            Color::Rgb(rgb)
        }
    }

    pub fn next_rgb(&mut self, saturation: Option<f64>, value: Option<f64>) -> Rgb {
        self.next_swatch(saturation, value).rgb
    }

    pub fn next_hex(&mut self, style: HexStyle, saturation: Option<f64>, value: Option<f64>) -> String {
        self.next_rgb(saturation, value).to_hex(style)
    }

    /// Advance and return the full allocation record.
    pub fn next_swatch(&mut self, saturation: Option<f64>, value: Option<f64>) -> Swatch {
        let index = self.issued;
        let hue = self.advance();
        let rgb = hsv_to_rgb(
            hue,
            saturation.unwrap_or(DEFAULT_SATURATION),
            value.unwrap_or(DEFAULT_VALUE),
        );
        Swatch {
            index,
            label: None,
            hue,
            rgb,
        }
    }

    /// Allocate `count` swatches in a row.
    pub fn take(&mut self, count: usize, saturation: Option<f64>, value: Option<f64>) -> Vec<Swatch> {
        (0..count)
            .map(|_| self.next_swatch(saturation, value))
            .collect()
    }
}

#[cfg(test)]
#[path = "allocator_tests.rs"]
mod tests;
