use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// tempfile's default prefix is ".tmp", which would make the directory itself hidden.
fn workspace() -> TempDir {
    tempfile::Builder::new().prefix("typofix").tempdir().unwrap()
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn typofix(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("typofix").unwrap();
    cmd.current_dir(dir).arg("--no-config").arg("-d");
    cmd
}

#[test]
fn reports_misspelling_with_line_and_suggestion() {
    let dir = workspace();
    let dict = write(dir.path(), "dict.txt", "abandonned->abandoned\n");
    let file = write(dir.path(), "story.txt", "He abandonned it.\n");

    typofix(dir.path())
        .arg(&dict)
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "story.txt:1: abandonned  ==> abandoned",
        ));

    assert_eq!(fs::read_to_string(&file).unwrap(), "He abandonned it.\n");
}

#[test]
fn write_mode_fixes_file_in_place() {
    let dir = workspace();
    let dict = write(dir.path(), "dict.txt", "abandonned->abandoned\nteh->the\n");
    let file = write(dir.path(), "story.txt", "Teh quick\nHe abandonned it.\n");

    typofix(dir.path())
        .arg("-w")
        .arg(&dict)
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("FIXED:").and(predicate::str::contains("story.txt")));

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "The quick\nHe abandoned it.\n"
    );
}

#[test]
fn write_mode_only_reports_entries_with_reason() {
    let dir = workspace();
    let dict = write(dir.path(), "dict.txt", "teh->the,reason\n");
    let file = write(dir.path(), "story.txt", "Teh quick\n");

    typofix(dir.path())
        .arg("--write-changes")
        .arg(&dict)
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Teh  ==> The  | reason"))
        .stderr(predicate::str::contains("FIXED").not());

    assert_eq!(fs::read_to_string(&file).unwrap(), "Teh quick\n");
}

#[test]
fn stdin_is_scanned_when_no_files_given() {
    let dir = workspace();
    let dict = write(dir.path(), "dict.txt", "teh->the\n");

    typofix(dir.path())
        .arg(&dict)
        .write_stdin("Teh quick\n")
        .assert()
        .success()
        .stdout("1: Teh quick\n\tTeh ==> The\n");
}

#[test]
fn stdin_write_mode_prints_fixed_text() {
    let dir = workspace();
    let dict = write(dir.path(), "dict.txt", "teh->the\n");

    typofix(dir.path())
        .arg("-w")
        .arg(&dict)
        .arg("-")
        .write_stdin("Teh quick\nTEH end\n")
        .assert()
        .success()
        .stdout("---\nThe quick\nTHE end\n");
}

#[test]
fn dictionary_can_come_from_stdin() {
    let dir = workspace();
    let file = write(dir.path(), "story.txt", "recieve\n");

    typofix(dir.path())
        .arg("-")
        .arg(&file)
        .write_stdin("recieve->receive\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("recieve  ==> receive"));
}

#[test]
fn directories_need_recursion_flag() {
    let dir = workspace();
    let dict = write(dir.path(), "dict.txt", "teh->the\n");
    write(dir.path(), "tree/a.txt", "teh\n");
    write(dir.path(), "tree/sub/b.txt", "teh\n");
    write(dir.path(), "tree/.git/c.txt", "teh\n");
    write(dir.path(), "tree/.hidden.txt", "teh\n");
    let tree = dir.path().join("tree");

    typofix(dir.path())
        .arg(&dict)
        .arg(&tree)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let output = typofix(dir.path())
        .arg("-R")
        .arg(&dict)
        .arg(&tree)
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("a.txt:1: teh  ==> the"));
    assert!(lines[1].contains("b.txt:1: teh  ==> the"));
}

#[test]
fn hidden_file_argument_is_ignored() {
    let dir = workspace();
    let dict = write(dir.path(), "dict.txt", "teh->the\n");
    let hidden = write(dir.path(), ".notes", "teh\n");

    typofix(dir.path())
        .arg("-w")
        .arg(&dict)
        .arg(&hidden)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&hidden).unwrap(), "teh\n");
}

#[test]
fn binary_files_are_skipped_with_warning() {
    let dir = workspace();
    let dict = write(dir.path(), "dict.txt", "teh->the\n");
    let blob = dir.path().join("blob.bin");
    fs::write(&blob, b"teh\x00teh\n").unwrap();

    typofix(dir.path())
        .arg("-w")
        .arg(&dict)
        .arg(&blob)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("WARNING: Binary file:"));

    assert_eq!(fs::read(&blob).unwrap(), b"teh\x00teh\n");
}

#[test]
fn latin1_file_falls_back_with_warnings() {
    let dir = workspace();
    let dict = write(dir.path(), "dict.txt", "teh->the\n");
    let file = dir.path().join("latin1.txt");
    fs::write(&file, b"caf\xe9 teh\n").unwrap();

    typofix(dir.path())
        .arg(&dict)
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("teh  ==> the"))
        .stderr(
            predicate::str::contains("WARNING: using encoding=utf-8 failed.")
                .and(predicate::str::contains("Trying next encoding: iso-8859-1")),
        );
}

#[test]
fn json_output() {
    let dir = workspace();
    let dict = write(dir.path(), "dict.txt", "teh->the, definite article\n");
    let file = write(dir.path(), "story.txt", "x\nteh\n");

    let output = typofix(dir.path())
        .args(["--format", "json"])
        .arg(&dict)
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["line"], 2);
    assert_eq!(value["word"], "teh");
    assert_eq!(value["suggestion"], "the");
    assert_eq!(value["reason"], "definite article");
}

#[test]
fn malformed_dictionary_aborts_before_scanning() {
    let dir = workspace();
    let dict = write(dir.path(), "dict.txt", "teh->the\nnot an entry\n");
    let file = write(dir.path(), "story.txt", "teh\n");

    typofix(dir.path())
        .arg("-w")
        .arg(&dict)
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing '->'"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "teh\n");
}

#[test]
fn missing_dictionary_prints_usage() {
    let dir = workspace();

    typofix(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("you need to specify a dictionary"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn local_config_enables_write_mode() {
    let dir = workspace();
    let dict = write(dir.path(), "dict.txt", "teh->the\n");
    let file = write(dir.path(), "story.txt", "teh\n");
    write(dir.path(), ".typofix.toml", "write_changes = true\ncolors = false\n");

    Command::cargo_bin("typofix")
        .unwrap()
        .current_dir(dir.path())
        .arg(&dict)
        .arg(&file)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "the\n");
}
