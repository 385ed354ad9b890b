mod common;

use predicates::prelude::*;

// ============================================================================
// Generate Command Integration Tests
// ============================================================================

#[test]
fn generate_seeded_sequence_prints_reference_colors() {
    series_palette!()
        .args(["generate", "--no-config", "--seed", "0", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#799df3"))
        .stdout(predicate::str::contains("rgb(121, 157, 243)"))
        .stdout(predicate::str::contains("#c0f379"));
}

#[test]
fn generate_default_count_without_config() {
    let output = series_palette!()
        .args(["generate", "--no-config"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 8);
}

#[test]
fn generate_piped_output_has_no_escape_codes() {
    series_palette!()
        .args(["generate", "--no-config", "-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn generate_color_always_adds_swatches() {
    series_palette!()
        .args(["generate", "--no-config", "--seed", "0", "-n", "1", "--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[48;2;121;157;243m"));
}

#[test]
fn generate_json_output() {
    let output = series_palette!()
        .args(["generate", "--no-config", "--seed", "0", "-n", "2", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["colors"][1]["rgb"], serde_json::json!([192, 243, 121]));
}

#[test]
fn generate_compat_hex_keeps_short_digits() {
    series_palette!()
        .args([
            "generate", "--no-config", "--seed", "0", "-n", "1", "--saturation", "1", "-f", "css",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("--series-0: #046f3;"));
}

#[test]
fn generate_padded_hex_is_always_six_digits() {
    series_palette!()
        .args([
            "generate",
            "--no-config",
            "--seed",
            "0",
            "-n",
            "1",
            "--saturation",
            "1",
            "-f",
            "css",
            "--hex-style",
            "padded",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("--series-0: #0046f3;"));
}

#[test]
fn generate_seed_text_is_reproducible() {
    let run = || {
        series_palette!()
            .args(["generate", "--no-config", "--seed-text", "station-7", "-f", "json"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn generate_writes_output_file() {
    let fixture = common::TestFixture::new();
    let out = fixture.path().join("palette.css");
    series_palette!()
        .args(["generate", "--no-config", "--seed", "0", "-n", "2", "-f", "css", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote"));
    assert!(fixture.read("palette.css").contains("--series-1: #c0f379;"));
}

#[test]
fn generate_quiet_suppresses_info() {
    let fixture = common::TestFixture::new();
    let out = fixture.path().join("palette.txt");
    series_palette!()
        .args(["generate", "--no-config", "-q", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn generate_verbose_reports_seed() {
    series_palette!()
        .args(["generate", "--no-config", "-v", "--seed", "0.25", "-n", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Using built-in defaults"))
        .stderr(predicate::str::contains("starting hue 0.25"));
}

#[test]
fn generate_zero_count_exits_with_config_error() {
    series_palette!()
        .args(["generate", "--no-config", "-n", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("output.count / --count"));
}

#[test]
fn generate_nan_saturation_names_the_flag() {
    series_palette!()
        .args(["generate", "--no-config", "--saturation", "nan"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--saturation must be a finite number"));
}

#[test]
fn generate_out_of_range_value_warns_but_succeeds() {
    series_palette!()
        .args(["generate", "--no-config", "--seed", "0", "-n", "1", "--value", "1.5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning"));
}

#[test]
fn generate_unwritable_output_exits_with_runtime_error() {
    let fixture = common::TestFixture::new();
    let out = fixture.path().join("missing-dir").join("palette.txt");
    series_palette!()
        .args(["generate", "--no-config", "-o"])
        .arg(&out)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("FileWrite"));
}

#[test]
fn seed_and_seed_text_conflict() {
    series_palette!()
        .args(["generate", "--seed", "0.1", "--seed-text", "x"])
        .assert()
        .failure();
}

// ============================================================================
// Assign Command Integration Tests
// ============================================================================

#[test]
fn assign_prints_one_line_per_distinct_series() {
    let output = series_palette!()
        .args(["assign", "--no-config", "--seed", "0", "rain", "wind", "rain"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("rain") && lines[0].contains("#799df3"));
    assert!(lines[1].contains("wind") && lines[1].contains("#c0f379"));
}

#[test]
fn assign_css_uses_series_names() {
    series_palette!()
        .args(["assign", "--no-config", "--seed", "0", "-f", "css", "T_LUGANO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--series-t-lugano: #799df3;"));
}

#[test]
fn assign_css_names_stay_unique_for_similar_labels() {
    series_palette!()
        .args(["assign", "--no-config", "--seed", "0", "-f", "css", "a b", "a-b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--series-a-b: #799df3;"))
        .stdout(predicate::str::contains("--series-a-b-1: #c0f379;"));
}

#[test]
fn assign_requires_series() {
    series_palette!().args(["assign", "--no-config"]).assert().failure();
}
