use std::{env, fs, path::PathBuf, process::Command};

fn test_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("failed to create test directory");
    dir
}

fn run_bin(args: &[&str]) -> std::process::Output {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_lamprey"));
    Command::new(bin)
        .args(args)
        .output()
        .expect("failed to execute command")
}

fn assert_success(args: &[&str]) {
    let output = run_bin(args);
    let stdout_str = String::from_utf8_lossy(&output.stdout);
    let stderr_str = String::from_utf8_lossy(&output.stderr);
    assert!(
        output.status.success(),
        "failed to run binary with {args:?}\nstdout:\n{stdout_str}\nstderr:\n{stderr_str}\n"
    );
}

#[test]
fn reference_workflow() {
    let dir = test_dir("reference_workflow");
    let config = dir.join("scenario.toml");
    let report = dir.join("report.json");
    let config_str = config.to_str().expect("non-UTF-8 path");
    let report_str = report.to_str().expect("non-UTF-8 path");

    assert_success(&["init", "--config", config_str]);

    // An existing scenario is kept unless forced.
    assert!(!run_bin(&["init", "--config", config_str]).status.success());
    assert_success(&["init", "--config", config_str, "--force"]);

    assert_success(&["run", "--config", config_str, "--output", report_str]);

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).expect("failed to read report"))
            .expect("report is not valid JSON");

    let records = report["records"].as_array().expect("records is not an array");
    assert_eq!(records.len(), 199);

    let first = &records[0];
    assert_eq!(first["regime"], "scarce");
    assert_eq!(first["level"], 0.0);
    let total = first["total"].as_f64().unwrap();
    let males = first["males"].as_f64().unwrap();
    assert!((first["male_fraction"].as_f64().unwrap() - males / total).abs() < 1e-12);

    assert_eq!(records[99]["regime"], "abundant");
    assert_eq!(records[198]["time"], 50.0);

    assert!(report["peak_population"].as_f64().unwrap() > 1e14);
    assert_eq!(report["scenario"]["grid"]["points"], 200);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn parasite_free_scenario_reports_null_fractions() {
    let dir = test_dir("parasite_free");
    let config = dir.join("scenario.toml");
    let report = dir.join("report.json");

    fs::write(
        &config,
        r#"
[initial]
males = 0.0
females = 0.0
host = 1000.0
predator = 50.0

[grid]
start = 0.0
end = 10.0
points = 41

[forcing]
switch_time = 5.0
before = "scarce"
after = "abundant"
"#,
    )
    .expect("failed to write scenario");

    assert_success(&[
        "run",
        "--config",
        config.to_str().unwrap(),
        "--output",
        report.to_str().unwrap(),
    ]);

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    let records = report["records"].as_array().unwrap();

    assert_eq!(records.len(), 40);
    assert!(records.iter().all(|record| record["male_fraction"].is_null()));
    assert!(records.iter().all(|record| record["total"] == 0.0));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn invalid_scenario_fails() {
    let dir = test_dir("invalid_scenario");
    let config = dir.join("scenario.toml");
    let report = dir.join("report.json");

    assert_success(&["init", "--config", config.to_str().unwrap()]);
    let contents = fs::read_to_string(&config)
        .unwrap()
        .replace("points = 200", "points = 1");
    fs::write(&config, contents).unwrap();

    let output = run_bin(&[
        "run",
        "--config",
        config.to_str().unwrap(),
        "--output",
        report.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(!report.exists());

    fs::remove_dir_all(&dir).ok();
}
