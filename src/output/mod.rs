mod css;
mod error_output;
mod json;
mod text;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use css::CssFormatter;
pub use error_output::{ErrorOutput, print_error_full, print_info, print_warning};
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::allocator::{HexStyle, Swatch};
use crate::error::Result;

/// ANSI escape sequences shared by the terminal formatters.
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// A generated palette plus the parameters that produced it.
#[derive(Debug, Clone)]
pub struct PaletteReport<'a> {
    /// Starting hue the allocator was seeded with.
    pub seed: f64,
    pub saturation: f64,
    pub value: f64,
    pub hex_style: HexStyle,
    pub swatches: &'a [Swatch],
}

/// Trait for rendering a palette into various output formats.
pub trait OutputFormatter {
    /// Format the palette into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &PaletteReport<'_>) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Css,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "css" => Ok(Self::Css),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Css => write!(f, "css"),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Render `report` with the formatter matching `format`.
///
/// # Errors
/// Returns an error if the selected formatter fails.
pub fn render(format: OutputFormat, report: &PaletteReport<'_>, color_mode: ColorMode) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
        OutputFormat::Css => CssFormatter.format(report),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
