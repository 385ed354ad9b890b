//! CSS custom properties, one per swatch, for chart stylesheets.

use std::collections::HashSet;
use std::fmt::Write;

use crate::allocator::Swatch;
use crate::error::Result;

use super::{OutputFormatter, PaletteReport};

pub struct CssFormatter;

impl CssFormatter {
    /// Custom property name: `--series-<label slug>` or `--series-<index>`.
    #[must_use]
    pub fn property_name(swatch: &Swatch) -> String {
        let slug = swatch.label.as_deref().map(slugify).unwrap_or_default();
        if slug.is_empty() {
            format!("--series-{}", swatch.index)
        } else {
            format!("--series-{slug}")
        }
    }

    /// Property names for a whole palette, unique within it.
    ///
    /// A name already taken by an earlier swatch gets `-<index>` appended
    /// until it is free.
    #[must_use]
    pub fn property_names(swatches: &[Swatch]) -> Vec<String> {
        let mut taken = HashSet::with_capacity(swatches.len());
        swatches
            .iter()
            .map(|swatch| {
                let mut name = Self::property_name(swatch);
                while taken.contains(&name) {
                    name = format!("{name}-{}", swatch.index);
                }
                taken.insert(name.clone());
                name
            })
            .collect()
    }
}

fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

impl OutputFormatter for CssFormatter {
    fn format(&self, report: &PaletteReport<'_>) -> Result<String> {
        let mut out = String::from(":root {\n");
        let names = Self::property_names(report.swatches);
        for (name, swatch) in names.iter().zip(report.swatches) {
            let _ = writeln!(out, "  {name}: {};", swatch.hex(report.hex_style));
        }
        out.push_str("}\n");
        Ok(out)
    }
}

#[cfg(test)]
#[path = "css_tests.rs"]
mod tests;
