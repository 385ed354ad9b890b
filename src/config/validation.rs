//! Semantic checks that TOML parsing alone cannot express.

use crate::error::{PaletteError, Result};

use super::Config;

/// Validates semantic correctness of a configuration.
///
/// Runs after command-line overrides are merged, so messages name both the
/// config key and the flag that sets it.
///
/// # Errors
/// Returns an error if `seed` and `seed_text` are both set, a numeric field is
/// not finite, or `output.count` is zero.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    let allocator = &config.allocator;

    if allocator.seed.is_some() && allocator.seed_text.is_some() {
        return Err(PaletteError::Config(
            "allocator.seed and allocator.seed_text cannot both be set".to_string(),
        ));
    }

    let numeric = [
        ("allocator.saturation", "--saturation", Some(allocator.saturation)),
        ("allocator.value", "--value", Some(allocator.value)),
        ("allocator.seed", "--seed", allocator.seed),
    ];
    for (key, flag, value) in numeric {
        if let Some(v) = value
            && !v.is_finite()
        {
            return Err(PaletteError::Config(format!(
                "{key} / {flag} must be a finite number, got {v}"
            )));
        }
    }

    if config.output.count == 0 {
        return Err(PaletteError::Config(
            "output.count / --count must be at least 1".to_string(),
        ));
    }

    Ok(())
}

/// Non-fatal findings: values the allocator accepts but that leave the usual range.
#[must_use]
pub fn config_warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();
    for (key, flag, v) in [
        ("allocator.saturation", "--saturation", config.allocator.saturation),
        ("allocator.value", "--value", config.allocator.value),
    ] {
        if !(0.0..=1.0).contains(&v) {
            warnings.push(format!(
                "{key} / {flag} = {v} is outside 0.0..=1.0; channels will leave the 0..=256 range"
            ));
        }
    }
    if let Some(seed) = config.allocator.seed
        && !(0.0..1.0).contains(&seed)
    {
        warnings.push(format!(
            "allocator.seed / --seed = {seed} will be wrapped into 0.0..1.0"
        ));
    }
    warnings
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
