use clap::Parser;

use super::*;
use crate::cli::Commands;

fn parse(args: &[&str]) -> (AssignArgs, Cli) {
    let mut argv = vec!["series-palette", "assign", "--no-config", "--color", "never"];
    argv.extend_from_slice(args);
    let cli = Cli::parse_from(argv.clone());
    let Commands::Assign(args) = Cli::parse_from(argv).command else {
        panic!("Expected Assign command");
    };
    (args, cli)
}

#[test]
fn each_series_gets_a_line() {
    let (args, cli) = parse(&["--seed", "0", "rain", "temperature"]);
    let output = assign_output(&args, &cli).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("rain"));
    assert!(lines[0].contains("#799df3"));
    assert!(lines[1].contains("temperature"));
    assert!(lines[1].contains("#c0f379"));
}

#[test]
fn duplicate_series_share_one_color() {
    let (args, cli) = parse(&["--seed", "0", "-f", "json", "rain", "wind", "rain"]);
    let output = assign_output(&args, &cli).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let colors = parsed["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 2);
    assert_eq!(colors[0]["label"], "rain");
    assert_eq!(colors[1]["label"], "wind");
    assert_eq!(colors[1]["index"], 1);
}

#[test]
fn css_uses_series_names() {
    let (args, cli) = parse(&["--seed", "0", "-f", "css", "Water Level"]);
    let output = assign_output(&args, &cli).unwrap();
    assert!(output.contains("--series-water-level: #799df3;"));
}
