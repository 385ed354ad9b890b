use crate::cli::{Cli, GenerateArgs};
use crate::{EXIT_SUCCESS, Result};

use super::context::{build_allocator, render_swatches, report_error, resolve_config, write_output};

#[must_use]
pub fn run_generate(args: &GenerateArgs, cli: &Cli) -> i32 {
    match run_generate_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Generates the next `count` colors of a fresh sequence and writes them out.
///
/// # Errors
/// Returns an error if the configuration is invalid or the output cannot be written.
pub fn run_generate_impl(args: &GenerateArgs, cli: &Cli) -> Result<()> {
    let output = generate_output(args, cli)?;
    write_output(args.palette.output.as_deref(), &output, cli.quiet)
}

/// Renders the generated palette without writing it anywhere.
///
/// # Errors
/// Returns an error if the configuration is invalid or rendering fails.
pub fn generate_output(args: &GenerateArgs, cli: &Cli) -> Result<String> {
    let config = resolve_config(cli, &args.palette, args.count)?;
    let (mut allocator, seed) = build_allocator(cli, &config);

    let swatches = allocator.take(
        config.output.count,
        Some(config.allocator.saturation),
        Some(config.allocator.value),
    );

    render_swatches(cli, &config, seed, &swatches, args.palette.output.is_some())
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
