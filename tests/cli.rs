use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

const BINARY_NAME: &str = "corenet";

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".corenet").join("config.json")
}

/// A command isolated from the caller's environment.
fn corenet(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path())
        .env_remove("CORENET_TASKS_FILE")
        .env_remove("RUST_LOG");
    cmd
}

const FIXTURE: &str = r#"[
  {
    "id": "a",
    "name": "Tiny Trainer",
    "model": "m1",
    "type": "AI Training",
    "status": "running",
    "progress": 10,
    "details": { "computeUnits": 10, "cost": 5, "epochs": 5 }
  },
  {
    "id": "b",
    "name": "Tiny Predictor",
    "model": "m2",
    "type": "AI Predict",
    "status": "completed",
    "progress": 100,
    "details": { "computeUnits": 20, "cost": 2.5, "datasetSize": 4096 }
  }
]"#;

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let home = temp_home_dir();
    corenet(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("CoreNet workspace dashboard"));
}

#[test]
fn summary_reports_totals_over_all_tasks() {
    let home = temp_home_dir();
    corenet(&home)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Total Tasks    7"))
        .stdout(contains("940 CU"))
        .stdout(contains("89.25 SOL"))
        .stdout(contains("Total Models   5"));
}

#[test]
fn summary_from_fixture_file() {
    let home = temp_home_dir();
    let fixture = home.path().join("tasks.json");
    fs::write(&fixture, FIXTURE).unwrap();

    corenet(&home)
        .args(["summary", "--json", "--tasks-file"])
        .arg(&fixture)
        .assert()
        .success()
        .stdout(contains("\"totalComputeUnits\": 30"))
        .stdout(contains("\"totalCost\": 7.5"));
}

#[test]
fn tasks_file_from_environment() {
    let home = temp_home_dir();
    let fixture = home.path().join("tasks.json");
    fs::write(&fixture, FIXTURE).unwrap();

    corenet(&home)
        .args(["tasks", "--tab", "predict"])
        .env("CORENET_TASKS_FILE", &fixture)
        .assert()
        .success()
        .stdout(contains("Prediction Tasks (1)"))
        .stdout(contains("4,096 samples"))
        .stdout(contains("Tiny Trainer").not());
}

#[test]
fn training_tab_lists_only_training_tasks() {
    let home = temp_home_dir();
    corenet(&home)
        .args(["tasks", "--tab", "training"])
        .assert()
        .success()
        .stdout(contains("Training Tasks (4)"))
        .stdout(contains("LLM Instruction Tuning"))
        .stdout(contains("Fraud Scoring").not());
}

#[test]
fn task_detail_by_id() {
    let home = temp_home_dir();
    corenet(&home)
        .args(["task", "task-002"])
        .assert()
        .success()
        .stdout(contains("Sentiment Batch Inference"))
        .stdout(contains("250,000 samples"));
}

#[test]
fn unknown_task_id_fails() {
    let home = temp_home_dir();
    corenet(&home)
        .args(["task", "task-404"])
        .assert()
        .failure()
        .stderr(contains("No task with id task-404"));
}

#[test]
fn invalid_fixture_fails() {
    let home = temp_home_dir();
    let fixture = home.path().join("tasks.json");
    fs::write(&fixture, "not json").unwrap();

    corenet(&home)
        .args(["summary", "--tasks-file"])
        .arg(&fixture)
        .assert()
        .failure()
        .stderr(contains("Invalid task file"));
}

#[test]
fn start_reports_invalid_fixture_before_drawing() {
    let home = temp_home_dir();
    let fixture = home.path().join("tasks.json");
    fs::write(&fixture, "not json").unwrap();

    corenet(&home)
        .args(["start", "--tasks-file"])
        .arg(&fixture)
        .assert()
        .failure()
        .stderr(contains("Failed to load tasks"))
        .stderr(contains("Invalid task file"));
}

#[test]
fn mismatched_kind_detail_fails() {
    let home = temp_home_dir();
    let fixture = home.path().join("tasks.json");
    let mismatched = FIXTURE.replace("\"epochs\": 5", "\"epochs\": 5, \"datasetSize\": 9");
    fs::write(&fixture, mismatched).unwrap();

    corenet(&home)
        .args(["summary", "--tasks-file"])
        .arg(&fixture)
        .assert()
        .failure()
        .stderr(contains("must not have details.datasetSize"));
}

#[test]
fn config_command_writes_and_resets_preferences() {
    let home = temp_home_dir();
    let config_path = config_file_path(&home);
    assert!(!config_path.exists());

    corenet(&home)
        .args(["config", "--default-tab", "training", "--with-background", "true"])
        .assert()
        .success()
        .stdout(contains("Preferences saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"default_tab\": \"training\""));
    assert!(saved.contains("\"with_background_color\": true"));

    corenet(&home)
        .args(["config", "--reset"])
        .assert()
        .success()
        .stdout(contains("Preferences reset"));
    assert!(!config_path.exists());
}
