//! Smoke tests for command wiring and startup failure

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("cash-money").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("CASH_MONEY_ENV_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("schema"));
}

#[test]
fn test_serve_help() {
    cli()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--env-file"))
        .stdout(predicate::str::contains("--max-connections"));
}

#[test]
fn test_schema_prints_ddl() {
    cli()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE TABLE IF NOT EXISTS note"))
        .stdout(predicate::str::contains("created_at TIMESTAMP NOT NULL DEFAULT now()"));
}

#[test]
fn test_serve_without_database_url_fails() {
    let dir = tempfile::tempdir().unwrap();

    cli()
        .args(["serve", "--bind", "127.0.0.1:0", "--env-file"])
        .arg(dir.path().join(".env"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL"));
}

#[test]
fn test_serve_with_empty_database_url_fails() {
    let dir = tempfile::tempdir().unwrap();
    let env_file = dir.path().join(".env");
    std::fs::write(&env_file, "DATABASE_URL=\n").unwrap();

    cli()
        .args(["serve", "--bind", "127.0.0.1:0", "--env-file"])
        .arg(&env_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL"))
        .stderr(predicate::str::contains(env_file.display().to_string()));
}

#[test]
fn test_schema_apply_without_database_url_fails() {
    let dir = tempfile::tempdir().unwrap();

    cli()
        .args(["schema", "--apply", "--env-file"])
        .arg(dir.path().join(".env"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL"));
}

#[test]
fn test_completions_bash() {
    cli()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cash-money"));
}
