//! Starting-hue selection.

use std::fmt;

use sha2::{Digest, Sha256};

/// Where an allocator's starting hue comes from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Seed {
    /// Uniformly random hue in [0, 1).
    #[default]
    Random,
    /// Explicit hue, wrapped into [0, 1).
    Hue(f64),
    /// Hue derived from the SHA-256 digest of a label.
    Text(String),
}

impl Seed {
    /// Build a seed from the optional hue / label pair used by the CLI and config.
    ///
    /// A hue wins over a label when both are present; callers that must reject
    /// that combination validate before getting here.
    #[must_use]
    pub fn from_parts(hue: Option<f64>, text: Option<&str>) -> Self {
        match (hue, text) {
            (Some(h), _) => Self::Hue(h),
            (None, Some(t)) => Self::Text(t.to_string()),
            (None, None) => Self::Random,
        }
    }

    /// Resolve to a concrete hue in [0, 1).
    #[must_use]
    pub fn resolve(&self) -> f64 {
        match self {
            Self::Random => rand::random::<f64>(),
            Self::Hue(h) => normalize_hue(*h),
            Self::Text(text) => hue_from_text(text),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Hue(h) => write!(f, "hue {h}"),
            Self::Text(t) => write!(f, "text \"{t}\""),
        }
    }
}

/// Wrap any hue into [0, 1). Non-finite input maps to 0.0.
#[must_use]
pub fn normalize_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(1.0);
    // rem_euclid rounds tiny negatives up to exactly 1.0
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Map a label onto [0, 1) using the top 53 bits of its SHA-256 digest.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hue_from_text(text: &str) -> f64 {
    let digest = Sha256::digest(text.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    let bits = u64::from_be_bytes(head) >> 11;
    bits as f64 / (1u64 << 53) as f64
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
