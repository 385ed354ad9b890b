use crate::cli::{AssignArgs, Cli};
use crate::palette::SeriesPalette;
use crate::{EXIT_SUCCESS, Result};

use super::context::{build_allocator, render_swatches, report_error, resolve_config, write_output};

#[must_use]
pub fn run_assign(args: &AssignArgs, cli: &Cli) -> i32 {
    match run_assign_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Assigns one color per distinct series and writes the mapping out.
///
/// # Errors
/// Returns an error if the configuration is invalid or the output cannot be written.
pub fn run_assign_impl(args: &AssignArgs, cli: &Cli) -> Result<()> {
    let output = assign_output(args, cli)?;
    write_output(args.palette.output.as_deref(), &output, cli.quiet)
}

/// Renders the series-to-color mapping without writing it anywhere.
///
/// # Errors
/// Returns an error if the configuration is invalid or rendering fails.
pub fn assign_output(args: &AssignArgs, cli: &Cli) -> Result<String> {
    let config = resolve_config(cli, &args.palette, None)?;
    let (allocator, seed) = build_allocator(cli, &config);

    let mut palette = SeriesPalette::with_hsv(
        allocator,
        Some(config.allocator.saturation),
        Some(config.allocator.value),
    );
    for series in &args.series {
        palette.color_for(series);
    }

    render_swatches(
        cli,
        &config,
        seed,
        &palette.swatches(),
        args.palette.output.is_some(),
    )
}

#[cfg(test)]
#[path = "assign_tests.rs"]
mod tests;
