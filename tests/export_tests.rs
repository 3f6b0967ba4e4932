mod common;
use common::{data_rows, day_file, init_dir_with_data, rat_in, setup_test_dir};
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

fn out_path(dir: &str, name: &str) -> String {
    PathBuf::from(dir)
        .join("out")
        .join(name)
        .to_string_lossy()
        .to_string()
}

#[test]
fn test_export_rewrites_day_file() {
    let dir = setup_test_dir("export_day");
    init_dir_with_data(&dir);

    // garbage appended by hand disappears after the rewrite
    let mut content = fs::read_to_string(day_file(&dir)).unwrap();
    content.push_str("broken,row\n");
    fs::write(day_file(&dir), content).unwrap();

    rat_in(&dir, &["export"])
        .assert()
        .success()
        .stdout(contains("successfully exported"));

    assert_eq!(data_rows(&dir).len(), 3);
}

#[test]
fn test_export_empty_day_fails() {
    let dir = setup_test_dir("export_empty");

    rat_in(&dir, &["export"])
        .assert()
        .failure()
        .stderr(contains("No attendance records for 2025-09-01"));
}

#[test]
fn test_export_csv_file() {
    let dir = setup_test_dir("export_csv");
    init_dir_with_data(&dir);
    let out = out_path(&dir, "day.csv");

    rat_in(&dir, &["export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let exported = fs::read_to_string(&out).unwrap();
    assert_eq!(exported, fs::read_to_string(day_file(&dir)).unwrap());
}

#[test]
fn test_export_json_file() {
    let dir = setup_test_dir("export_json");
    init_dir_with_data(&dir);
    let out = out_path(&dir, "day.json");

    rat_in(&dir, &["export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("\"date\": \"2025-09-01\""));
    assert!(content.contains("\"Name\": \"Carla\""));
    assert!(content.contains("\"Status\": \"Absent\""));
}

#[test]
fn test_export_xlsx_file() {
    let dir = setup_test_dir("export_xlsx");
    init_dir_with_data(&dir);
    let out = out_path(&dir, "day.xlsx");

    rat_in(&dir, &["export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    assert!(fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let dir = setup_test_dir("export_overwrite");
    init_dir_with_data(&dir);
    let out = out_path(&dir, "day.csv");
    fs::create_dir_all(PathBuf::from(&out).parent().unwrap()).unwrap();
    fs::write(&out, "keep me").unwrap();

    rat_in(&dir, &["export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rat_in(&dir, &["export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("Student ID"));
}

#[test]
fn test_backup_compressed() {
    let dir = setup_test_dir("backup");
    init_dir_with_data(&dir);
    let out = out_path(&dir, "backup.csv");

    rat_in(&dir, &["backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(PathBuf::from(&out).with_extension("zip").exists());
    assert!(!PathBuf::from(&out).exists());
}

#[test]
fn test_log_lists_operations() {
    let dir = setup_test_dir("log");
    init_dir_with_data(&dir);

    rat_in(&dir, &["del", "--rows", "1", "--yes"])
        .assert()
        .success();

    rat_in(&dir, &["log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("(S3)"))
        .stdout(contains("1 record(s) deleted"));
}
