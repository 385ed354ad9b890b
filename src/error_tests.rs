use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = PaletteError::Config("seed and seed_text are exclusive".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: seed and seed_text are exclusive"
    );
}

#[test]
fn error_display_file_read() {
    let err = PaletteError::FileRead {
        path: PathBuf::from("palette.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("palette.toml"));
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(PaletteError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(
        PaletteError::FileWrite {
            path: PathBuf::from("out.css"),
            source: std::io::Error::other("disk full"),
        }
        .error_type(),
        "FileWrite"
    );
    assert_eq!(
        PaletteError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn toml_parse_error_is_config_category() {
    let parse_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
    let err = PaletteError::from(parse_err);
    assert_eq!(err.error_type(), "Config");
    assert_eq!(err.message(), "invalid TOML");
    assert!(err.detail().is_some());
}

#[test]
fn file_read_detail_carries_source() {
    let err = PaletteError::FileRead {
        path: PathBuf::from("a.toml"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.message(), "cannot read a.toml");
    assert_eq!(err.detail().as_deref(), Some("denied"));
}

#[test]
fn config_error_has_no_detail() {
    assert!(PaletteError::Config("x".to_string()).detail().is_none());
}

#[test]
fn exit_codes_by_category() {
    assert_eq!(
        PaletteError::Config("x".to_string()).exit_code(),
        crate::EXIT_CONFIG_ERROR
    );
    assert_eq!(
        PaletteError::Io(std::io::Error::other("x")).exit_code(),
        crate::EXIT_RUNTIME_ERROR
    );
}

#[test]
fn missing_config_suggests_init() {
    let err = PaletteError::ConfigNotFound {
        path: PathBuf::from("palette.toml"),
    };
    assert_eq!(err.error_type(), "Config");
    assert_eq!(err.exit_code(), crate::EXIT_CONFIG_ERROR);
    assert_eq!(
        err.to_string(),
        "Configuration file not found: palette.toml"
    );
    assert!(err.suggestion().unwrap().contains("series-palette init"));
}

#[test]
fn existing_config_suggests_force() {
    let err = PaletteError::ConfigExists {
        path: PathBuf::from(".series-palette.toml"),
    };
    assert_eq!(err.exit_code(), crate::EXIT_CONFIG_ERROR);
    assert_eq!(err.suggestion(), Some("use --force to overwrite it"));
}

#[test]
fn stdout_failure_is_io_without_suggestion() {
    let err = PaletteError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
    assert_eq!(err.error_type(), "IO");
    assert_eq!(err.exit_code(), crate::EXIT_RUNTIME_ERROR);
    assert!(err.suggestion().is_none());
}
