use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration file already exists: {}", path.display())]
    ConfigExists { path: PathBuf },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl PaletteError {
    /// Short category label used by the stderr reporter.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_)
            | Self::ConfigNotFound { .. }
            | Self::ConfigExists { .. }
            | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::Io(_) => "IO",
            Self::TomlSerialize(_) | Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// Main message, without the category prefix of `Display`.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::ConfigNotFound { path } => {
                format!("configuration file not found: {}", path.display())
            }
            Self::ConfigExists { path } => {
                format!("configuration file already exists: {}", path.display())
            }
            Self::FileRead { path, .. } => format!("cannot read {}", path.display()),
            Self::FileWrite { path, .. } => format!("cannot write {}", path.display()),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(_) => "invalid TOML".to_string(),
            Self::TomlSerialize(_) => "cannot render configuration as TOML".to_string(),
            Self::JsonSerialize(_) => "cannot render JSON".to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => {
                Some(source.to_string())
            }
            Self::TomlParse(e) => Some(e.message().to_string()),
            Self::TomlSerialize(e) => Some(e.to_string()),
            Self::JsonSerialize(e) => Some(e.to_string()),
            Self::Config(_)
            | Self::ConfigNotFound { .. }
            | Self::ConfigExists { .. }
            | Self::Io(_) => None,
        }
    }

    /// Next step for the user, when one is obvious from the error.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound { .. } => {
                Some("run `series-palette init` to create one, or pass --no-config")
            }
            Self::ConfigExists { .. } => Some("use --force to overwrite it"),
            _ => None,
        }
    }

    /// Exit code the binary reports for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_)
            | Self::ConfigNotFound { .. }
            | Self::ConfigExists { .. }
            | Self::TomlParse(_) => crate::EXIT_CONFIG_ERROR,
            _ => crate::EXIT_RUNTIME_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, PaletteError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
