#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DAY: &str = "2025-09-01";

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique, empty data dir inside the system temp dir
pub fn setup_test_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance", name));
    fs::remove_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Path of the day file for `DAY` inside `dir`
pub fn day_file(dir: &str) -> PathBuf {
    PathBuf::from(dir).join(format!("attendance_{}.csv", DAY))
}

/// Run a command against `dir` on `DAY`
pub fn rat_in(dir: &str, args: &[&str]) -> Command {
    let mut cmd = rat();
    cmd.args(["--dir", dir, "--date", DAY]).args(args);
    cmd
}

/// Add one record through the CLI
pub fn add(dir: &str, id: &str, name: &str, extra: &[&str]) {
    let mut args = vec!["add", id, name];
    args.extend_from_slice(extra);
    rat_in(dir, &args).assert().success();
}

/// Data rows of the day file (header excluded)
pub fn data_rows(dir: &str) -> Vec<String> {
    fs::read_to_string(day_file(dir))
        .unwrap_or_default()
        .lines()
        .skip(1)
        .map(str::to_string)
        .collect()
}

/// Initialize an empty data dir and add a small dataset
pub fn init_dir_with_data(dir: &str) {
    rat_in(dir, &["--test", "init"]).assert().success();

    add(dir, "S1", "Alice", &["--dept", "CS"]);
    add(dir, "S2", "Bob", &["--dept", "Math", "--status", "absent"]);
    add(dir, "S3", "Carla", &["--dept", "Physics", "-s", "L"]);
}
