use serde::Serialize;

use crate::allocator::Swatch;
use crate::error::Result;

use super::{OutputFormatter, PaletteReport};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    seed: f64,
    saturation: f64,
    value: f64,
    hex_style: String,
    colors: Vec<JsonColor>,
}

#[derive(Serialize)]
struct JsonColor {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    hue: f64,
    rgb: [i32; 3],
    hex: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &PaletteReport<'_>) -> Result<String> {
        let output = JsonOutput {
            seed: report.seed,
            saturation: report.saturation,
            value: report.value,
            hex_style: report.hex_style.to_string(),
            colors: report
                .swatches
                .iter()
                .map(|s| convert_swatch(s, report))
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_swatch(swatch: &Swatch, report: &PaletteReport<'_>) -> JsonColor {
    JsonColor {
        index: swatch.index,
        label: swatch.label.clone(),
        hue: swatch.hue,
        rgb: swatch.rgb.to_array(),
        hex: swatch.hex(report.hex_style),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
