//! Shared plumbing for the palette commands: config resolution, logging, output.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::allocator::{ColorAllocator, Swatch};
use crate::cli::{Cli, PaletteOptions};
use crate::config::{
    Config, ConfigLoader, FileConfigLoader, LoadResult, config_warnings, validate_config_semantics,
};
use crate::error::{PaletteError, Result};
use crate::output::{self, ColorMode, OutputFormat, PaletteReport};

/// Load configuration, honoring `--config` and `--no-config`.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_cli_overrides(config: &mut Config, options: &PaletteOptions, count: Option<usize>) {
    if let Some(saturation) = options.saturation {
        config.allocator.saturation = saturation;
    }
    if let Some(value) = options.value {
        config.allocator.value = value;
    }

    // A seed on the command line replaces whichever seed the file chose.
    if let Some(seed) = options.seed {
        config.allocator.seed = Some(seed);
        config.allocator.seed_text = None;
    } else if let Some(text) = &options.seed_text {
        config.allocator.seed = None;
        config.allocator.seed_text = Some(text.clone());
    }

    if let Some(format) = options.format {
        config.output.format = format;
    }
    if let Some(hex_style) = options.hex_style {
        config.output.hex_style = hex_style;
    }
    if let Some(count) = count {
        config.output.count = count;
    }
}

/// Effective configuration for a palette command.
///
/// # Errors
/// Returns an error if loading fails or the merged configuration is invalid.
pub fn resolve_config(cli: &Cli, options: &PaletteOptions, count: Option<usize>) -> Result<Config> {
    let LoadResult { mut config, source } = load_config(options.config.as_deref(), cli.no_config)?;
    match &source {
        Some(path) => log_verbose(cli, &format!("Loaded configuration from {}", path.display())),
        None => log_verbose(cli, "Using built-in defaults"),
    }

    apply_cli_overrides(&mut config, options, count);
    validate_config_semantics(&config)?;

    if !cli.quiet {
        for warning in config_warnings(&config) {
            output::print_warning(&warning);
        }
    }
    Ok(config)
}

/// Seed an allocator from the configuration and report the starting hue.
pub fn build_allocator(cli: &Cli, config: &Config) -> (ColorAllocator, f64) {
    let seed = config.allocator.seed();
    let allocator = ColorAllocator::from_seed(&seed);
    let hue = allocator.hue();
    log_verbose(cli, &format!("Seed {seed} resolved to starting hue {hue}"));
    (allocator, hue)
}

/// Render swatches according to the configuration.
///
/// # Errors
/// Returns an error if the formatter fails.
pub fn render_swatches(
    cli: &Cli,
    config: &Config,
    seed: f64,
    swatches: &[Swatch],
    to_file: bool,
) -> Result<String> {
    let report = PaletteReport {
        seed,
        saturation: config.allocator.saturation,
        value: config.allocator.value,
        hex_style: config.output.hex_style,
        swatches,
    };
    // Escape sequences never go into files.
    let color_mode = if to_file || config.output.format != OutputFormat::Text {
        ColorMode::Never
    } else {
        ColorMode::from(cli.color)
    };
    output::render(config.output.format, &report, color_mode)
}

/// Write rendered output to a file or stdout.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    match output_path {
        Some(path) => {
            fs::write(path, content).map_err(|source| PaletteError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
            if !quiet {
                output::print_info(&format!("Wrote {}", path.display()));
            }
        }
        None => print_stdout(content)?,
    }
    Ok(())
}

/// Write `content` to stdout, surfacing failures such as a closed pipe.
///
/// # Errors
/// Returns an error if stdout cannot be written.
pub fn print_stdout(content: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Informational stderr line, shown with `-v` unless `--quiet` is set.
pub fn log_verbose(cli: &Cli, message: &str) {
    if cli.verbose > 0 && !cli.quiet {
        output::print_info(message);
    }
}

/// Report an error on stderr and return the matching exit code.
#[must_use]
pub fn report_error(error: &PaletteError) -> i32 {
    output::print_error_full(
        error.error_type(),
        &error.message(),
        error.detail().as_deref(),
        error.suggestion(),
    );
    error.exit_code()
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
