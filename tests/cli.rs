use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp home
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".kyc-console").join("config.json")
}

const BINARY_NAME: &str = "kyc-console";

/// The binary with a private $HOME and no inherited backend settings.
fn command(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path())
        .env_remove("KYC_API_URL")
        .env_remove("KYC_API_TOKEN");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let home = temp_home();
    command(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("employee KYC review"))
        .stdout(contains("dashboard"))
        .stdout(contains("delete-employee"));
}

#[test]
/// Login should write the token and backend URL to the config file.
fn login_writes_config_file() {
    let home = temp_home();
    let config_path = config_file_path(&home);
    assert!(!config_path.exists());

    command(&home)
        .args(["login", "--token", "secret-token", "--api-url", "http://backend:9000"])
        .assert()
        .success()
        .stdout(contains("Credentials saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("secret-token"));
    assert!(saved.contains("http://backend:9000"));
}

#[test]
/// Login without a token should fail and write nothing.
fn login_requires_token() {
    let home = temp_home();
    command(&home).arg("login").assert().failure();
    assert!(!config_file_path(&home).exists());
}

#[test]
/// Logout command should delete an existing config file.
fn logout_deletes_config_file() {
    let home = temp_home();
    let config_path = config_file_path(&home);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    command(&home)
        .arg("logout")
        .assert()
        .success()
        .stdout(contains("Logging out"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
/// A refer-back without a reason is refused before any request is made.
fn kyc_refer_back_requires_reason() {
    let home = temp_home();
    command(&home)
        .args(["kyc", "refer-back", "1", "--reason", "   "])
        .args(["--api-url", "http://127.0.0.1:9"])
        .assert()
        .failure();
}

#[test]
/// Unknown KYC actions are rejected by argument parsing.
fn kyc_rejects_unknown_action() {
    let home = temp_home();
    command(&home)
        .args(["kyc", "escalate", "1"])
        .assert()
        .failure()
        .stderr(contains("unknown KYC action"));
}

#[test]
/// Without a token, reads fail with a hint to log in.
fn stats_without_token_fails() {
    let home = temp_home();
    command(&home)
        .args(["stats", "--api-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(contains("kyc-console login"));
}

#[test]
/// The UNKNOWN placeholder status cannot be used as a filter.
fn farmers_rejects_unknown_status_filter() {
    let home = temp_home();
    command(&home)
        .args(["farmers", "--status", "unknown"])
        .assert()
        .failure()
        .stderr(contains("unknown KYC status"));
}
