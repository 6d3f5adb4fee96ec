// Failure paths: bad arguments, missing configuration, unreachable servers.
mod common;

#[test]
fn no_subcommand_prints_help_and_fails() {
    let output = common::listings_cmd().output().expect("run listings");
    assert!(!output.status.success());
    assert!(common::stderr(&output).contains("Usage:"));
}

#[test]
fn missing_credentials_fail_before_connecting() {
    let output = common::listings_cmd()
        .arg("databases")
        .output()
        .expect("run listings");
    assert!(!output.status.success());
    assert!(common::stdout(&output).is_empty());
    assert!(common::stderr(&output).contains("missing credential: set DB_USER or pass --uri"));
}

#[test]
fn missing_password_is_named() {
    let output = common::listings_cmd()
        .env("DB_USER", "dev")
        .arg("databases")
        .output()
        .expect("run listings");
    assert!(!output.status.success());
    assert!(common::stderr(&output).contains("DB_PASS"));
}

#[test]
fn log_file_receives_error_lines() {
    let dir = tempfile::tempdir().expect("temp dir");
    let log_path = dir.path().join("logs").join("listings.log");

    let output = common::listings_cmd()
        .arg("--log-file")
        .arg(&log_path)
        .arg("databases")
        .output()
        .expect("run listings");
    assert!(!output.status.success());

    let logged = std::fs::read_to_string(&log_path).expect("log file written");
    assert!(logged.contains("missing credential"));
}

#[test]
fn unreachable_server_is_reported_and_client_closed() {
    // Port 1 is never a MongoDB server; the short timeout keeps the ping quick.
    let output = common::listings_cmd()
        .arg("--uri")
        .arg("mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=500&directConnection=true")
        .arg("databases")
        .output()
        .expect("run listings");
    assert!(!output.status.success());
    assert!(common::stdout(&output).is_empty());

    let stderr = common::stderr(&output);
    assert!(stderr.contains("connecting to custom connection string"), "{stderr}");
    assert!(stderr.contains("Connection closed"), "{stderr}");
}
