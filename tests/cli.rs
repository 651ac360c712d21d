use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_point-plot"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn workspace(csv: Option<&str>, with_output_dir: bool) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(csv) = csv {
        fs::create_dir_all(dir.path().join("input")).unwrap();
        fs::write(dir.path().join("input/points.csv"), csv).unwrap();
    }
    if with_output_dir {
        fs::create_dir_all(dir.path().join("output")).unwrap();
    }
    dir
}

#[test]
fn success_exits_zero_with_one_report_line() {
    let dir = workspace(Some("x,y\n0,0\n1,1\n2,4\n"), true);
    let out = run_in(dir.path());
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "Data size 3\n");
    assert!(dir.path().join("output/points.png").is_file());
}

#[test]
fn missing_input_exits_non_zero() {
    let dir = workspace(None, true);
    let out = run_in(dir.path());
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Error:"), "{stderr}");
    assert!(stderr.contains("points.csv"), "{stderr}");
}

#[test]
fn missing_output_dir_exits_non_zero() {
    let dir = workspace(Some("x,y\n0,0\n"), false);
    let out = run_in(dir.path());
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Error:"), "{stderr}");
    assert!(!dir.path().join("output").exists());
}

#[test]
fn missing_column_exits_non_zero() {
    let dir = workspace(Some("x,value\n0,0\n"), true);
    let out = run_in(dir.path());
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("'y'"), "{stderr}");
    assert!(!dir.path().join("output/points.png").exists());
}
