use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn neko() -> Command {
    Command::new(env!("CARGO_BIN_EXE_neko"))
}

fn temp_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file
}

#[test]
fn shows_help() {
    neko()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--number-nonblank"))
        .stdout(predicate::str::contains("--show-tabs"));
}

#[test]
fn stdin_passthrough() {
    neko()
        .write_stdin("hello\nworld")
        .assert()
        .success()
        .stdout("hello\nworld\n");
}

#[test]
fn tabs_and_ends() {
    neko()
        .args(["-T", "-E"])
        .write_stdin("a\tb\nc\n")
        .assert()
        .success()
        .stdout("a^Ib$\nc$\n");
}

#[test]
fn number_nonblank() {
    neko()
        .arg("-b")
        .write_stdin("a\n\nb\n")
        .assert()
        .success()
        .stdout("     1\ta\n\n     2\tb\n");
}

#[test]
fn center_and_number() {
    neko()
        .args(["-c", "-n"])
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout("             1\tx\n");
}

#[test]
fn color_output() {
    neko()
        .arg("-C")
        .write_stdin("a1.\n")
        .assert()
        .success()
        .stdout("\x1B[1;32ma\x1B[0m\x1B[1;34m1\x1B[0m.\n");
}

#[test]
fn numbering_modes_are_mutually_exclusive() {
    neko()
        .args(["-n", "-b"])
        .write_stdin("never shown\n")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn files_in_order_with_dash_for_stdin() {
    let first = temp_file(b"first\n");
    let last = temp_file(b"last");

    neko()
        .arg("-n")
        .arg(first.path())
        .arg("-")
        .arg(last.path())
        .write_stdin("middle\n")
        .assert()
        .success()
        .stdout("     1\tfirst\n     1\tmiddle\n     1\tlast\n");
}

#[test]
fn missing_file_is_reported_and_skipped() {
    let good = temp_file(b"ok\n");

    neko()
        .arg("/no/such/neko/file")
        .arg(good.path())
        .assert()
        .failure()
        .code(1)
        .stdout("ok\n")
        .stderr(predicate::str::contains("/no/such/neko/file"));
}

#[test]
fn long_line_is_truncated() {
    let mut input = vec![b'z'; 5000];
    input.push(b'\n');
    let file = temp_file(&input);

    let mut expected = vec![b'z'; 4095];
    expected.push(b'\n');

    neko().arg(file.path()).assert().success().stdout(expected);
}

#[test]
fn binary_bytes_pass_through() {
    neko()
        .write_stdin(&b"\x00\xff\xfe\n"[..])
        .assert()
        .success()
        .stdout(&b"\x00\xff\xfe\n"[..]);
}

#[test]
fn unreadable_directory_between_files() {
    let first = temp_file(b"first\n");
    let dir = tempfile::tempdir().unwrap();
    let last = temp_file(b"last\n");

    neko()
        .arg(first.path())
        .arg(dir.path())
        .arg(last.path())
        .assert()
        .failure()
        .code(1)
        .stdout("first\nlast\n")
        .stderr(predicate::str::contains(dir.path().display().to_string()));
}

#[test]
fn one_diagnostic_per_failed_source() {
    let dir = tempfile::tempdir().unwrap();
    let good = temp_file(b"ok\n");

    let output = neko()
        .env_remove("RUST_LOG")
        .arg("/no/such/neko/file")
        .arg(dir.path())
        .arg(good.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(output.stdout, b"ok\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 2, "stderr: {stderr}");
    assert!(lines[0].starts_with("neko: Failed to open '/no/such/neko/file'"));
    assert!(lines[1].starts_with("neko: Failed to read"));
    assert!(lines[1].contains(&dir.path().display().to_string()));
}
