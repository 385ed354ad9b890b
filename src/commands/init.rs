use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_SUCCESS, PaletteError, Result};

use super::context::report_error;

#[must_use]
pub fn run_init(args: &InitArgs, quiet: bool) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// Writes the default configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(PaletteError::ConfigExists {
            path: output_path.clone(),
        });
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        PaletteError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# series-palette configuration file
version = "1"

[allocator]
# HSV saturation of every generated color (default: 0.5)
saturation = 0.5

# HSV value / brightness (default: 0.95)
value = 0.95

# Starting hue in 0.0..1.0. Leave unset for a random start.
# seed = 0.0

# Alternatively derive the starting hue from a label, e.g. a chart name.
# seed_text = "my-chart"

[output]
# Output format: "text", "json" or "css"
format = "text"

# "compat" writes channel digits unpadded; "padded" always writes #rrggbb
hex_style = "compat"

# Number of colors printed by `series-palette generate`
count = 8
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
