mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn test_cli_dry_run_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    common::write_roster_csv(&dir.path().join("employees.csv"), &common::alice_and_bob())?;

    common::payslip_cmd(dir.path())
        .arg("employees.csv")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("employee_id,name,email,status,detail"))
        .stdout(predicate::str::contains("A001,Alice,a@x.com,sent,"))
        .stdout(predicate::str::contains("B002,Bob,b@x.com,sent,"))
        .stderr(predicate::str::contains("dry run"));

    let payslips = dir.path().join("payslips");
    assert!(payslips.join("A001_payslip.pdf").is_file());
    assert!(payslips.join("B002_payslip.pdf").is_file());
    Ok(())
}

#[test]
fn test_cli_custom_output_dir_and_rerun_overwrites() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    common::write_roster_csv(&dir.path().join("employees.csv"), &common::alice_and_bob())?;

    for _ in 0..2 {
        common::payslip_cmd(dir.path())
            .arg("employees.csv")
            .args(["--dry-run", "--output-dir", "out/may"])
            .assert()
            .success();
    }

    let files: Vec<_> = std::fs::read_dir(dir.path().join("out/may"))?.collect::<Result<_, _>>()?;
    assert_eq!(files.len(), 2);
    Ok(())
}

#[test]
fn test_cli_reads_settings_from_dotenv() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    common::write_roster_csv(&dir.path().join("employees.csv"), &common::alice_and_bob())?;
    let mut dotenv = std::fs::File::create(dir.path().join(".env"))?;
    writeln!(dotenv, "SMTP_FROM=payroll@example.com")?;
    writeln!(dotenv, "SMTP_PASSWORD=from-dotenv")?;

    common::payslip_cmd(dir.path())
        .env_remove("SMTP_FROM")
        .env_remove("SMTP_PASSWORD")
        .arg("employees.csv")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("A001,Alice,a@x.com,sent,"));
    Ok(())
}

#[test]
fn test_cli_blank_email_is_reported_and_run_continues() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    common::write_roster_csv(
        &dir.path().join("employees.csv"),
        &[
            ["A001", "Alice", "", "1000", "0", "0"],
            ["B002", "Bob", "b@x.com", "1000", "0", "0"],
        ],
    )?;

    common::payslip_cmd(dir.path())
        .arg("employees.csv")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("A001,Alice,,failed,no email address recorded"))
        .stdout(predicate::str::contains("B002,Bob,b@x.com,sent,"));

    // The payslip is still rendered for the record that could not be sent.
    assert!(dir.path().join("payslips/A001_payslip.pdf").is_file());
    Ok(())
}

#[test]
fn test_cli_pay_out_of_range_does_not_stop_the_run() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    common::write_roster_csv(
        &dir.path().join("employees.csv"),
        &[
            ["A001", "Alice", "a@x.com", "79228162514264337593543950335", "1", "0"],
            ["B002", "Bob", "b@x.com", "2500.50", "0", "120.25"],
        ],
    )?;

    common::payslip_cmd(dir.path())
        .arg("employees.csv")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("A001,Alice,a@x.com,failed,"))
        .stdout(predicate::str::contains("out of range"))
        .stdout(predicate::str::contains("B002,Bob,b@x.com,sent,"));

    assert!(!dir.path().join("payslips/A001_payslip.pdf").exists());
    assert!(dir.path().join("payslips/B002_payslip.pdf").is_file());
    Ok(())
}
