use assert_cmd::Command;
use std::time::Duration;

use predicates::prelude::*;

fn cli(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tube_fiv_toolbox_cli").unwrap();
    cmd.current_dir(dir.path())
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .env_remove("TUBE_FIV_ACCESS_KEY");
    cmd
}

#[test]
fn evaluate_default_case() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .arg("evaluate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Max Displacement: 0.0080 m"))
        .stdout(predicate::str::contains("Mid-span Collision Risk: NO"));
}

#[test]
fn evaluate_json_output() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args(["evaluate", "--velocity", "5", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"collision_risk\""))
        .stdout(predicate::str::contains("\"wear_events\": 176"));
}

#[test]
fn case_file_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let case = dir.path().join("case.json");
    std::fs::write(&case, r#"{ "fluid_velocity_m_s": 2.5 }"#).unwrap();
    cli(&dir)
        .arg("evaluate")
        .arg("--input")
        .arg(&case)
        .assert()
        .success()
        .stdout(predicate::str::contains("Noise Level: 90 dB"));
}

#[test]
fn thick_wall_fails() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args(["evaluate", "--thickness", "0.0125"])
        .assert()
        .failure();
}

#[test]
fn report_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.txt");
    cli(&dir)
        .args(["report", "--pitch-type", "triangular", "--output"])
        .arg(&out)
        .assert()
        .success();
    let body = std::fs::read_to_string(&out).unwrap();
    assert_eq!(body.lines().count(), 17);
    assert!(body.contains("Stress Corrosion Cracking Risk: Low"));
}

#[test]
fn series_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args(["series", "--output", "series.xlsx"])
        .assert()
        .failure();
}

#[test]
fn interactive_exits_when_stdin_closes() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args(["--lang", "en"])
        .write_stdin("")
        .timeout(Duration::from_secs(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting application."));
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn interactive_rejects_thick_wall_and_keeps_going() {
    let dir = tempfile::tempdir().unwrap();
    // 9) 공통 입력: 외경 유지, 두께 12.5 mm, 나머지 6개 유지 → 0) 종료
    cli(&dir)
        .args(["--lang", "en"])
        .write_stdin("9\n\n12.5\n\n\n\n\n\n\n0\n")
        .timeout(Duration::from_secs(10))
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: invalid geometry"))
        .stdout(predicate::str::contains("Exiting application."));
    let saved = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(!saved.contains("0.0125"));
}

#[test]
fn interactive_rejects_low_gamma_then_runs_damage_tab() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args(["--lang", "en"])
        .write_stdin("5\n0.9\n\n\n\n\n\n\n\n7\n\n0\n")
        .timeout(Duration::from_secs(10))
        .assert()
        .success()
        .stderr(predicate::str::contains("heat_capacity_ratio"))
        .stdout(predicate::str::contains("Mass 1.134 kg"))
        .stdout(predicate::str::contains("Exiting application."));
}

#[test]
fn subcommand_errors_use_selected_language() {
    let dir = tempfile::tempdir().unwrap();
    cli(&dir)
        .args(["--lang", "en", "evaluate", "--thickness", "0.0125"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: invalid geometry"));
}
