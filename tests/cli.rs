use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("pascal").unwrap()
}

#[test]
fn raw_depth_4() {
    cmd()
        .args(["-f", "raw", "4"])
        .assert()
        .success()
        .stdout("[1]\n[1 1]\n[1 2 1]\n[1 3 3 1]\n[1 4 6 4 1]\n");
}

#[test]
fn raw_only_with_headers() {
    cmd()
        .args(["--format", "raw", "--only", "--headers", "6"])
        .assert()
        .success()
        .stdout("6: [1 6 15 20 15 6 1]\n");
}

#[test]
fn biggest() {
    cmd().args(["-b", "5"]).assert().success().stdout("10\n");
}

#[test]
fn factorial_of_zero() {
    cmd().args(["--factorial", "0"]).assert().success().stdout("1\n");
}

#[test]
fn factorial_past_u64() {
    cmd()
        .args(["-y", "30"])
        .assert()
        .success()
        .stdout("265252859812191058636308480000000\n");
}

#[test]
fn choose() {
    cmd().args(["-c", "6", "2"]).assert().success().stdout("15\n");
}

#[test]
fn choose_k_past_n() {
    cmd().args(["-c", "3", "9"]).assert().success().stdout("1\n");
}

#[test]
fn factorial_wins_over_other_modes() {
    cmd()
        .args(["-c", "-b", "-y", "4", "2"])
        .assert()
        .success()
        .stdout("24\n");
}

#[test]
fn text_default() {
    cmd()
        .arg("2")
        .assert()
        .success()
        .stdout(contains(" 1   2   1").and(contains("   1   1")));
}

#[test]
fn html_anchors() {
    let output = cmd().args(["-f", "html", "2"]).output().unwrap();
    assert!(output.status.success());

    let html = String::from_utf8(output.stdout).unwrap();
    assert_eq!(html.matches(r#"id="central-column""#).count(), 1);
    assert!(html.contains(r#"<td id="central-column">1</td>"#));
    assert!(html.contains(r#"<td id="biggest-number" style="color: red;">2</td>"#));
}

#[test]
fn missing_depth() {
    cmd().assert().failure().stdout(predicate::str::is_empty());
}

#[test]
fn non_numeric_depth() {
    cmd()
        .arg("ten")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn choose_without_k() {
    cmd()
        .args(["-c", "6"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("second argument k"));
}

#[test]
fn unknown_format() {
    cmd()
        .args(["-f", "json", "3"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn debug_logs_go_to_stderr() {
    cmd()
        .env("RUST_LOG", "debug")
        .args(["-f", "raw", "3"])
        .assert()
        .success()
        .stdout("[1]\n[1 1]\n[1 2 1]\n[1 3 3 1]\n")
        .stderr(contains("built triangle"));
}

#[test]
fn quiet_by_default() {
    cmd()
        .env_remove("RUST_LOG")
        .args(["-f", "raw", "3"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn html_only_row_has_central_column() {
    let output = cmd().args(["-o", "-f", "html", "3"]).output().unwrap();
    assert!(output.status.success());

    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.contains(r#"<td id="central-column">1</td>"#));
    assert!(html.contains(r#"<td id="central-column">3</td>"#));
}
