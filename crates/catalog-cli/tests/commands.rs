//! Integration tests for the subcommands and their exit codes.

use std::fs;
use std::path::PathBuf;

use catalog_cli::cli::{Cli, Command, DocumentArgs, JsonArgs, SimpleArgs, StatsArgs};
use catalog_cli::commands::{
    OutputKind, run_catalog, run_inventory, run_json, run_simple, run_stats,
};
use catalog_cli::error::CliError;
use catalog_cli::logging::{LogConfig, init_logging};
use clap::Parser;
use tempfile::TempDir;

const SETS_CSV: &str = "\
Set Number,Name,IP,Pieces,Age min,State,Missing Pieces,Notes
001,X-Wing,Star Wars,732,9,Ready to go,,
002,Café Corner,,2056,16,Partially complete,3 & a door,
,,,,,,,
003,Tom & Jerry 100% #1,,abc,,In the aether,,
";

fn fixture(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("lego-sets.csv");
    fs::write(&path, SETS_CSV).unwrap();
    path
}

fn document_args(input: PathBuf, output: PathBuf) -> DocumentArgs {
    DocumentArgs {
        input,
        output,
        title: "My Sets".to_string(),
    }
}

#[test]
fn test_json_converts_csv() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir);
    let output = dir.path().join("data").join("catalog.json");

    let result = run_json(&JsonArgs {
        input,
        output: output.clone(),
    })
    .unwrap();

    assert_eq!(result.kind, OutputKind::Json);
    assert_eq!(result.entries, 3);
    let text = fs::read_to_string(&output).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed[0]["Pieces"], serde_json::json!(732));
    assert_eq!(parsed[1]["Name"], serde_json::json!("Café Corner"));
    assert_eq!(parsed[2]["Pieces"], serde_json::json!("abc"));
    assert!(parsed[0].get("Notes").is_none());
    assert!(text.contains("Café Corner"));
    assert_eq!(
        result.summary_line(),
        format!("Converted 3 rows to {}", output.display())
    );
}

#[test]
fn test_json_missing_input_exits_1() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("catalog.json");

    let error = run_json(&JsonArgs {
        input: dir.path().join("missing.csv"),
        output: output.clone(),
    })
    .unwrap_err();

    assert!(matches!(error, CliError::InputNotFound { .. }));
    assert_eq!(error.exit_code(), 1);
    assert!(!output.exists());
}

#[test]
fn test_unopenable_log_file_exits_4() {
    let dir = TempDir::new().unwrap();
    let config = LogConfig {
        log_file: Some(dir.path().join("no-such-dir").join("run.log")),
        ..LogConfig::default()
    };

    let source = init_logging(&config).unwrap_err();
    let error = CliError::LogInit { source };

    assert_eq!(error.exit_code(), 4);
    assert!(error.to_string().starts_with("failed to initialize logging: "));
}

#[test]
fn test_catalog_missing_input_exits_2() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("catalog.tex");

    let error = run_catalog(&document_args(dir.path().join("missing.csv"), output.clone()))
        .unwrap_err();

    assert_eq!(error.exit_code(), 2);
    assert!(!output.exists());
}

#[test]
fn test_malformed_json_exits_2() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("catalog.json");
    fs::write(&input, "[{\"Name\": ").unwrap();

    let error = run_inventory(&document_args(input, dir.path().join("catalog.tex")))
        .unwrap_err();

    assert!(matches!(error, CliError::InputRead(_)));
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn test_unwritable_output_exits_3() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir);
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let error = run_catalog(&document_args(input, blocker.join("catalog.tex"))).unwrap_err();

    assert!(matches!(error, CliError::OutputWrite(_)));
    assert_eq!(error.exit_code(), 3);
}

#[test]
fn test_catalog_writes_ready_sets_only() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir);
    let output = dir.path().join("catalog.tex");

    let result = run_catalog(&document_args(input, output.clone())).unwrap();

    assert_eq!(result.entries, 1);
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains(r"\title{My Sets}"));
    assert!(text.contains(r"{\Huge \textbf{X-Wing}}"));
    assert!(!text.contains("Café Corner"));
    let line = result
        .summary_line()
        .replace(&output.display().to_string(), "[OUTPUT]");
    insta::assert_snapshot!(line, @"Wrote [OUTPUT] (1 catalog entries)");
}

#[test]
fn test_inventory_counts_whole_catalog() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir);
    let output = dir.path().join("inventory.tex");

    let result = run_inventory(&document_args(input, output.clone())).unwrap();

    assert_eq!(result.entries, 3);
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("Total sets & 3 \\\\\n"));
    assert!(text.contains("Ready to go & 1 \\\\\n"));
    assert!(text.contains("Partially complete & 1 \\\\\n"));
    assert!(text.contains("In the aether & 1 \\\\\n"));
    assert!(text.contains(r"003 & Tom \& Jerry 100\% \#1 & "));
}

#[test]
fn test_simple_from_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("catalog.json");
    fs::write(
        &input,
        r#"[{"name": "Bricks", "description": "2x4 & 1x2"}, {"name": "Plates"}]"#,
    )
    .unwrap();
    let output = dir.path().join("catalog.tex");

    let result = run_simple(&SimpleArgs {
        input,
        output: output.clone(),
        title: "Parts".to_string(),
    })
    .unwrap();

    assert_eq!(result.entries, 2);
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("Bricks & 2x4 \\& 1x2 \\\\\n\\hline\n"));
}

#[test]
fn test_stats_counts_states() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir);

    let result = run_stats(&StatsArgs { input }).unwrap();

    assert_eq!(result.summary.total, 3);
    assert_eq!(result.counts.get(&Some("Ready to go".to_string())), Some(&1));
}

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["lego-catalog", "catalog"]).unwrap();
    let Command::Catalog(args) = cli.command else {
        panic!("expected catalog command");
    };
    assert_eq!(args.input, PathBuf::from("lego-sets.csv"));
    assert_eq!(args.output, PathBuf::from("catalog.tex"));
    assert_eq!(args.title, "LEGO Catalog");

    let cli = Cli::try_parse_from(["lego-catalog", "json"]).unwrap();
    let Command::Json(args) = cli.command else {
        panic!("expected json command");
    };
    assert_eq!(args.output, PathBuf::from("data/catalog.json"));

    let cli = Cli::try_parse_from(["lego-catalog", "simple", "-t", "Parts", "-o", "parts.tex"])
        .unwrap();
    let Command::Simple(args) = cli.command else {
        panic!("expected simple command");
    };
    assert_eq!(args.input, PathBuf::from("data/catalog.json"));
    assert_eq!(args.output, PathBuf::from("parts.tex"));
    assert_eq!(args.title, "Parts");
}
