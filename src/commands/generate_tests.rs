use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;

fn parse(args: &[&str]) -> (GenerateArgs, Cli) {
    let mut argv = vec!["series-palette", "generate", "--no-config", "--color", "never"];
    argv.extend_from_slice(args);
    let cli = Cli::parse_from(argv.clone());
    let Commands::Generate(args) = Cli::parse_from(argv).command else {
        panic!("Expected Generate command");
    };
    (args, cli)
}

#[test]
fn default_count_is_eight() {
    let (args, cli) = parse(&["--seed", "0"]);
    let output = generate_output(&args, &cli).unwrap();
    assert_eq!(output.lines().count(), 8);
}

#[test]
fn seeded_output_matches_reference_sequence() {
    let (args, cli) = parse(&["--seed", "0", "-n", "2"]);
    let output = generate_output(&args, &cli).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].contains("#799df3"));
    assert!(lines[0].contains("rgb(121, 157, 243)"));
    assert!(lines[1].contains("#c0f379"));
}

#[test]
fn same_seed_text_is_reproducible() {
    let (args, cli) = parse(&["--seed-text", "LUGANO", "-n", "5", "-f", "json"]);
    let first = generate_output(&args, &cli).unwrap();
    let second = generate_output(&args, &cli).unwrap();
    assert_eq!(first, second);
}

#[test]
fn json_output_reports_parameters() {
    let (args, cli) = parse(&["--seed", "0", "-n", "1", "-f", "json", "--value", "1.0"]);
    let output = generate_output(&args, &cli).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["value"], 1.0);
    assert_eq!(parsed["colors"][0]["rgb"], serde_json::json!([128, 165, 256]));
    assert_eq!(parsed["colors"][0]["hex"], "#80a5100");
}

#[test]
fn padded_hex_style_applies() {
    let (args, cli) = parse(&[
        "--seed", "0", "-n", "1", "-f", "css", "--value", "1.0", "--hex-style", "padded",
    ]);
    let output = generate_output(&args, &cli).unwrap();
    assert!(output.contains("--series-0: #80a5ff;"));
}

#[test]
fn zero_count_is_config_error() {
    let (args, cli) = parse(&["-n", "0"]);
    let err = generate_output(&args, &cli).unwrap_err();
    assert_eq!(err.exit_code(), crate::EXIT_CONFIG_ERROR);
}

#[test]
fn run_generate_writes_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("colors.css");
    let path_str = path.to_string_lossy().to_string();
    let (args, cli) = parse(&["--seed", "0", "-n", "3", "-f", "css", "-o", &path_str, "-q"]);
    assert_eq!(run_generate(&args, &cli), crate::EXIT_SUCCESS);
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("--series-2:"));
}
