//! Deterministic golden-ratio color allocation for chart series.
//!
//! [`ColorAllocator`] hands out one color per call, each hue a golden-ratio
//! step away from the last, so incrementally added series stay visually
//! distinct. [`SeriesPalette`] keeps the series-to-color mapping for a chart.

pub mod allocator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod palette;

pub use allocator::{Color, ColorAllocator, HexStyle, Rgb, Seed, Swatch};
pub use error::{PaletteError, Result};
pub use palette::SeriesPalette;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RUNTIME_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
