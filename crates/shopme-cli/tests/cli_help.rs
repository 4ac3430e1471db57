use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("shopme")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("logout"))
        .stdout(predicate::str::contains("products"))
        .stdout(predicate::str::contains("cart"))
        .stdout(predicate::str::contains("--api-url"))
        .stdout(predicate::str::contains("SHOPME_API_URL"));
}

#[test]
fn test_login_requires_credentials() {
    cargo_bin_cmd!("shopme")
        .arg("login")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--email"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("shopme")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
