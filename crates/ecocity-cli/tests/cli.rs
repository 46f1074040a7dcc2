use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn ecocity(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ecocity"));
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_help() {
    let dir = tempfile::tempdir().unwrap();
    ecocity(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--log-file"))
        .stdout(predicate::str::contains("--load-log"));
}

#[test]
fn test_exit_immediately() {
    let dir = tempfile::tempdir().unwrap();
    ecocity(&dir)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Smart Eco City ---"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_save_and_show_log() {
    let dir = tempfile::tempdir().unwrap();
    ecocity(&dir)
        .write_stdin("7\nTaxi1\n10\n4\nSun\n1\n9\n10\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Log saved to file."))
        .stdout(predicate::str::contains("-- City Log --"))
        .stdout(predicate::str::contains("Power Source added: Sun"));

    let text = fs::read_to_string(dir.path().join("city_log.txt")).unwrap();
    assert_eq!(text, "Added Car: Taxi1\nPower Source added: Sun\n");
}

#[test]
fn test_show_log_without_file() {
    let dir = tempfile::tempdir().unwrap();
    ecocity(&dir)
        .write_stdin("10\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No log file found."));
}

#[test]
fn test_show_log_with_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("city_log.txt"), b"Added Bus: B\xff1\n").unwrap();
    ecocity(&dir)
        .write_stdin("10\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Bus: B"))
        .stdout(predicate::str::contains("No log file found.").not());
}

#[test]
fn test_show_reads_fixed_file_not_log_file_flag() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("city_log.txt"), "from the fixed file\n").unwrap();

    ecocity(&dir)
        .args(["--log-file", "elsewhere.txt"])
        .write_stdin("3\nAda\nn\n9\n10\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("from the fixed file"))
        .stdout(predicate::str::contains("Citizen added: Ada").not());

    let saved = fs::read_to_string(dir.path().join("elsewhere.txt")).unwrap();
    assert_eq!(saved, "Citizen added: Ada\n");
}

#[test]
fn test_load_log_then_save_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("city_log.txt"), "Added Bus: Old\n").unwrap();

    ecocity(&dir)
        .arg("--load-log")
        .write_stdin("9\n0\n")
        .assert()
        .success();

    let text = fs::read_to_string(dir.path().join("city_log.txt")).unwrap();
    assert_eq!(text, "Added Bus: Old\nAdded Bus: Old\n");
}

#[test]
fn test_huge_distance_returns_to_menu() {
    let dir = tempfile::tempdir().unwrap();
    ecocity(&dir)
        .write_stdin("7\nFar\n100000000000000000\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Far is driving through the city."))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_diesel_bus_emissions() {
    let dir = tempfile::tempdir().unwrap();
    ecocity(&dir)
        .write_stdin("2\nBus1\n2\n20\n8\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bus1 is belching fumes while moving."))
        .stdout(predicate::str::contains("COX: 3200 g"))
        .stdout(predicate::str::contains("SOX: 10.00 g"))
        .stdout(predicate::str::contains("NOX: 20.00 g"));
}
