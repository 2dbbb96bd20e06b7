use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

// 'a' = {(0,0),(2,0),(0,1)}, 'b' = {(0,0)}
const AB: &str = "ab\n-\n*.*\n*\n.\n.\n.\n.\n*\n.\n.\n.\n.\n.\n";

fn table_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(AB.as_bytes()).unwrap();
    file
}

#[test]
fn render_preview_with_builtin_table() {
    Command::cargo_bin("bigtext")
        .unwrap()
        .args(["render", "--text", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*"));
}

#[test]
fn render_with_custom_symbol() {
    Command::cargo_bin("bigtext")
        .unwrap()
        .args(["render", "--text", "o", "--symbol", "#"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#"))
        .stdout(predicate::str::contains("*").not());
}

#[test]
fn render_with_table_file() {
    let file = table_file();
    Command::cargo_bin("bigtext")
        .unwrap()
        .args(["render", "--text", "ab"])
        .arg("--table")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("*"));
}

#[test]
fn render_with_missing_table_degrades_to_blank() {
    Command::cargo_bin("bigtext")
        .unwrap()
        .args(["render", "--text", "ab", "--table", "/no/such/table.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*").not());
}

#[test]
fn inspect_reports_glyphs() {
    let file = table_file();
    Command::cargo_bin("bigtext")
        .unwrap()
        .arg("inspect")
        .arg("--table")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("characters: 2"))
        .stdout(predicate::str::contains("'a': 3 points, width 3"));
}

#[test]
fn inspect_missing_table_fails() {
    Command::cargo_bin("bigtext")
        .unwrap()
        .args(["inspect", "--table", "/no/such/table.txt"])
        .assert()
        .failure();
}
