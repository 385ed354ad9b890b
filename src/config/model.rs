use serde::{Deserialize, Serialize};

use crate::allocator::{DEFAULT_SATURATION, DEFAULT_VALUE, HexStyle, Seed};
use crate::output::OutputFormat;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Default number of colors printed by `generate`.
pub const DEFAULT_COUNT: usize = 8;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Config format version; absent means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub allocator: AllocatorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Color generation parameters [allocator].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocatorConfig {
    /// HSV saturation.
    #[serde(default = "default_saturation")]
    pub saturation: f64,

    /// HSV value (brightness).
    #[serde(default = "default_value")]
    pub value: f64,

    /// Fixed starting hue. Unset means random.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<f64>,

    /// Label hashed into a starting hue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_text: Option<String>,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            saturation: DEFAULT_SATURATION,
            value: DEFAULT_VALUE,
            seed: None,
            seed_text: None,
        }
    }
}

impl AllocatorConfig {
    #[must_use]
    pub fn seed(&self) -> Seed {
        Seed::from_parts(self.seed, self.seed_text.as_deref())
    }
}

/// Rendering parameters [output].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub hex_style: HexStyle,

    #[serde(default = "default_count")]
    pub count: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            hex_style: HexStyle::default(),
            count: DEFAULT_COUNT,
        }
    }
}

const fn default_saturation() -> f64 {
    DEFAULT_SATURATION
}

const fn default_value() -> f64 {
    DEFAULT_VALUE
}

const fn default_count() -> usize {
    DEFAULT_COUNT
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
