use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::allocator::HexStyle;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ConfigOutputFormat {
    /// TOML, as it would appear in a config file
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "series-palette")]
#[command(author, version, about = "Golden-ratio color sequences for chart series")]
#[command(long_about = "Generate deterministic, well-spread colors for chart series.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Runtime or I/O error\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the next N colors of a sequence
    Generate(GenerateArgs),

    /// Assign a color to each named series
    Assign(AssignArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Options shared by every command that allocates colors.
#[derive(Args, Debug, Clone, Default)]
pub struct PaletteOptions {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// HSV saturation (default: 0.5)
    #[arg(long)]
    pub saturation: Option<f64>,

    /// HSV value / brightness (default: 0.95)
    #[arg(long)]
    pub value: Option<f64>,

    /// Fixed starting hue instead of a random one
    #[arg(long, conflicts_with = "seed_text")]
    pub seed: Option<f64>,

    /// Derive the starting hue from a label
    #[arg(long)]
    pub seed_text: Option<String>,

    /// Output format [possible values: text, json, css]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Hex rendering: compat (unpadded) or padded (#rrggbb)
    #[arg(long, value_enum)]
    pub hex_style: Option<HexStyle>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Number of colors to generate (default: from config, else 8)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    #[command(flatten)]
    pub palette: PaletteOptions,
}

#[derive(Parser, Debug)]
pub struct AssignArgs {
    /// Series identifiers, in the order they are added to the chart
    #[arg(required = true)]
    pub series: Vec<String>,

    #[command(flatten)]
    pub palette: PaletteOptions,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".series-palette.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".series-palette.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
