//! End-to-end smoke tests for the CLI pipeline.
//!
//! These run `run()` with DOT output so no Graphviz installation is needed:
//! the DOT text is the exact description handed to the engine, which makes
//! it the right artifact for structural assertions.

use std::fs;

use tempfile::tempdir;

use topograph_cli::{Args, run};

fn args_into(output: &std::path::Path) -> Args {
    Args {
        title: "mailer".to_string(),
        output: Some(output.to_string_lossy().to_string()),
        format: "dot".to_string(),
        orientation: None,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_renders_exactly_one_output_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("mailer.dot");

    run(&args_into(&output_path)).expect("run should succeed");

    assert!(output_path.exists(), "Output file should exist");
    let entries = fs::read_dir(temp_dir.path())
        .expect("read temp dir")
        .count();
    assert_eq!(entries, 1, "Exactly one output file should be written");
}

#[test]
fn e2e_output_describes_the_mailer_topology() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("mailer.dot");

    run(&args_into(&output_path)).expect("run should succeed");

    let dot = fs::read_to_string(&output_path).expect("read output");
    assert!(dot.starts_with("digraph"));
    assert!(dot.contains("rankdir=TB"), "default orientation is TB");
    assert_eq!(dot.matches("subgraph cluster_").count(), 1);
    for label in ["mailer", "mjml-api", "HTTP", "AMQP", "SMTP"] {
        assert!(dot.contains(label), "missing node {label}");
    }
    assert_eq!(dot.matches("->").count(), 4, "fixed topology has 4 edges");
}

#[test]
fn e2e_reruns_are_byte_identical() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let first_path = temp_dir.path().join("first.dot");
    let second_path = temp_dir.path().join("second.dot");

    run(&args_into(&first_path)).expect("first run");
    run(&args_into(&second_path)).expect("second run");

    let first = fs::read(&first_path).expect("read first");
    let second = fs::read(&second_path).expect("read second");
    assert_eq!(first, second);
}

#[test]
fn e2e_orientation_flag_overrides_default() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("mailer.dot");

    let mut args = args_into(&output_path);
    args.orientation = Some("lr".to_string());
    run(&args).expect("run should succeed");

    let dot = fs::read_to_string(&output_path).expect("read output");
    assert!(dot.contains("rankdir=LR"));
}

#[test]
fn e2e_invalid_format_fails_without_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("mailer.bmp");

    let mut args = args_into(&output_path);
    args.format = "bmp".to_string();

    assert!(run(&args).is_err());
    assert!(!output_path.exists(), "No output file on failure");
}

#[test]
fn e2e_config_file_sets_styling() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    let output_path = temp_dir.path().join("mailer.dot");

    fs::write(
        &config_path,
        "[layout]\norientation = \"bottom-to-top\"\n\n[style]\nbackground_color = \"#ffffff\"\n",
    )
    .expect("write config");

    let mut args = args_into(&output_path);
    args.config = Some(config_path.to_string_lossy().to_string());
    run(&args).expect("run should succeed");

    let dot = fs::read_to_string(&output_path).expect("read output");
    assert!(dot.contains("rankdir=BT"));
    assert!(dot.contains("bgcolor=\"#ffffff\""));
}
