use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_dirsubmit_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("dirsubmit")
}

#[test]
fn test_completion_command_help() {
    let mut cmd = Command::new(get_dirsubmit_bin());
    cmd.arg("completion").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Generate shell completion scripts"))
        .stdout(predicate::str::contains("SUPPORTED SHELLS"))
        .stdout(predicate::str::contains("INSTALLATION"))
        .stdout(predicate::str::contains("_dirsubmit"));
}

#[test]
fn test_completion_bash_generates_script() {
    let mut cmd = Command::new(get_dirsubmit_bin());
    cmd.arg("completion").arg("--shell").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_dirsubmit()"))
        .stdout(predicate::str::contains("--project"));
}

#[test]
fn test_completion_zsh_generates_script() {
    let mut cmd = Command::new(get_dirsubmit_bin());
    cmd.arg("completion").arg("--shell").arg("zsh");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#compdef dirsubmit"));
}

#[test]
fn test_completion_fish_generates_script() {
    let mut cmd = Command::new(get_dirsubmit_bin());
    cmd.arg("completion").arg("--shell").arg("fish");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("complete -c dirsubmit"));
}

#[test]
fn test_completion_invalid_shell() {
    let mut cmd = Command::new(get_dirsubmit_bin());
    cmd.arg("completion").arg("--shell").arg("tcsh");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_completion_requires_shell_flag() {
    let mut cmd = Command::new(get_dirsubmit_bin());
    cmd.arg("completion");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
