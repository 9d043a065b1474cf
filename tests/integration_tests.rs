use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> Command {
    cargo_bin_cmd!("roleprev")
}

#[test]
fn test_cli_generates_decoration() {
    cmd()
        .args(["--color-one", "#000000", "--color-two", "#ffffff"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "linear-gradient(135deg, #000000, #ffffff)",
        ))
        .stdout(predicate::str::contains("background-clip: text;"))
        .stdout(predicate::str::contains("color: transparent;"));
}

#[test]
fn test_cli_named_rule_gets_slug_class() {
    cmd()
        .args([
            "--color-one",
            "#4cadd0",
            "--color-two",
            "#b2f9ff",
            "--name",
            "My Cool Role",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(".role-my-cool-role {"));
}

#[test]
fn test_cli_second_stop_defaults_to_first() {
    cmd()
        .args(["--color-one", "#9e6bff"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "linear-gradient(135deg, #9e6bff, #9e6bff)",
        ));
}

#[test]
fn test_cli_requires_a_color() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--color-one"));
}

#[test]
fn test_cli_invalid_color_warns_but_emits() {
    // Garbage in, garbage out: a warning on stderr, the value in the output
    cmd()
        .args(["--color-one", "nonsense", "--color-two", "#ffffff"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: --color-one"))
        .stdout(predicate::str::contains(
            "linear-gradient(135deg, nonsense, #ffffff)",
        ));
}

#[test]
fn test_cli_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("role.css");

    cmd()
        .args([
            "--color-one",
            "#000000",
            "--name",
            "Shadow",
            "--output",
            path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote stylesheet to"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains(".role-shadow {"));
    assert!(written.contains("linear-gradient(135deg, #000000, #000000)"));
}

#[test]
fn test_cli_loads_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[preview]\ntheme = \"light\"\n").unwrap();

    cmd()
        .args([
            "--color-one",
            "#123456",
            "--config",
            path.to_str().unwrap(),
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_bad_settings_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[preview]\ntheme = 7\n").unwrap();

    cmd()
        .args([
            "--color-one",
            "#123456",
            "--config",
            path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}

#[test]
fn test_cli_missing_settings_file_fails() {
    cmd()
        .args(["--color-one", "#123456", "--config", "/no/such/file.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}
