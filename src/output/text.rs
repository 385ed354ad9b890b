use std::fmt::Write;

use crate::allocator::Swatch;
use crate::error::Result;

use super::{ColorMode, OutputFormatter, PaletteReport, ansi};

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn write_swatch_block(out: &mut String, swatch: &Swatch) {
        let [r, g, b] = swatch.rgb.to_bytes();
        let _ = write!(out, "\x1b[48;2;{r};{g};{b}m    {} ", ansi::RESET);
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &PaletteReport<'_>) -> Result<String> {
        let label_width = report
            .swatches
            .iter()
            .filter_map(|s| s.label.as_deref())
            .map(|l| l.chars().count())
            .max();

        let mut out = String::new();
        for swatch in report.swatches {
            if self.use_colors {
                Self::write_swatch_block(&mut out, swatch);
            }
            let _ = write!(out, "{:>3}  ", swatch.index);
            if let Some(width) = label_width {
                let label = swatch.label.as_deref().unwrap_or("");
                let _ = write!(out, "{label:<width$}  ");
            }
            let hex = swatch.hex(report.hex_style);
            let _ = writeln!(out, "{hex:<9}  {:<20}  hue={:.6}", swatch.rgb.to_string(), swatch.hue);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
