use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn geoscriber_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("geoscriber").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("RUST_LOG", "warn");
    cmd
}

fn write_script(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("session.txt");
    std::fs::write(&path, body).unwrap();
    path
}

const TWO_RECTANGLES: &str = "\
mode rectangle
click 0 0
click 1 1
click 0.5 0.5
move 1.5 1.5
click 1.5 1.5
";

#[test]
fn geoscriber_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    geoscriber_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Map shape drawing with overlap trimming and GeoJSON export",
        ));
}

#[test]
fn no_script_prints_script_commands() {
    let temp = TempDir::new().unwrap();
    geoscriber_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("click <lat> <lng>"));
}

#[test]
fn script_to_stdout_prints_feature_collection() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, TWO_RECTANGLES);

    let output = geoscriber_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .arg("--stdout")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["type"], "FeatureCollection");
    let features = value["features"].as_array().unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[1]["properties"]["type"], "rectangle");
}

#[test]
fn script_export_writes_geojson_file() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, TWO_RECTANGLES);
    let out_dir = temp.path().join("exports");

    geoscriber_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("map-features-"));

    let written: Vec<_> = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(written.len(), 1);
    assert!(written[0].ends_with(".geojson"));
}

#[test]
fn invalid_script_reports_line() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "mode circle\nspin 1 2\n");

    geoscriber_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown command 'spin'"));
}

#[test]
fn config_limits_apply_to_replay() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "[limits]\ncircle = 1\n").unwrap();
    let script = write_script(
        &temp,
        "mode circle\nclick 0 0\nclick 0 0.5\nclick 0 10\nclick 0 10.5\n",
    );

    let output = geoscriber_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--stdout")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["features"].as_array().unwrap().len(), 1);
}

#[test]
fn init_config_writes_default_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("geoscriber").join("config.toml");

    geoscriber_cmd(&temp)
        .arg("--init-config")
        .arg("--config")
        .arg(&target)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&target).unwrap();
    assert!(contents.contains("[limits]"));
}

#[test]
fn replay_logs_rendered_feature_layers() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, TWO_RECTANGLES);

    geoscriber_cmd(&temp)
        .env("RUST_LOG", "info")
        .arg("--script")
        .arg(&script)
        .arg("--stdout")
        .assert()
        .success()
        .stderr(predicate::str::contains("Rendered 2 feature layers"));
}
