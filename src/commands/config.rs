use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigOutputFormat};
use crate::config::{
    Config, ConfigLoader, FileConfigLoader, config_warnings, validate_config_semantics,
};
use crate::{EXIT_SUCCESS, Result};

use super::context::{load_config, log_verbose, print_stdout, report_error};

#[must_use]
pub fn run_config(args: &crate::cli::ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config, cli),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path, cli: &Cli) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(warnings) => {
            if !cli.quiet {
                for warning in &warnings {
                    crate::output::print_warning(warning);
                }
                println!("Configuration is valid: {}", config_path.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// Validates a configuration file, returning non-fatal warnings.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<Vec<String>> {
    let config = FileConfigLoader::new().load_from_path(config_path)?.config;
    validate_config_semantics(&config)?;

    Ok(config_warnings(&config))
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli).and_then(|output| print_stdout(&output)) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    cli: &Cli,
) -> Result<String> {
    let result = load_config(config_path, cli.no_config)?;
    if let Some(path) = &result.source {
        log_verbose(cli, &format!("Loaded configuration from {}", path.display()));
    }
    format_config(&result.config, format)
}

/// Serialize a configuration as TOML or JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_config(config: &Config, format: ConfigOutputFormat) -> Result<String> {
    match format {
        ConfigOutputFormat::Text => Ok(toml::to_string_pretty(config)?),
        ConfigOutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(config)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
