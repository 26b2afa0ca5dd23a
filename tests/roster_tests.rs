mod common;

use assert_cmd::prelude::*;
use payslip_mailer::domain::money::Money;
use payslip_mailer::interfaces::roster::load_roster;
use predicates::prelude::*;
use rust_decimal_macros::dec;

#[test]
fn test_load_xlsx_roster() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("employees.xlsx");
    common::write_roster_xlsx(
        &path,
        &[
            ("A001", "Alice", "a@x.com", 1000.0, 100.0, 50.0),
            ("B002", "Bob", "b@x.com", 2500.5, 0.0, 120.25),
        ],
    )?;

    let roster = load_roster(&path)?;

    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].employee_id, "A001");
    assert_eq!(roster[0].email, "a@x.com");
    assert_eq!(roster[1].basic_pay, Money::new(dec!(2500.5)));
    assert_eq!(roster[1].deductions, Money::new(dec!(120.25)));
    Ok(())
}

#[test]
fn test_load_csv_roster() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("EMPLOYEES.CSV");
    common::write_roster_csv(&path, &common::alice_and_bob())?;

    let roster = load_roster(&path)?;
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[1].name, "Bob");
    Ok(())
}

#[test]
fn test_cli_with_xlsx_roster() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    common::write_roster_xlsx(
        &dir.path().join("employees.xlsx"),
        &[("A001", "Alice", "a@x.com", 1000.0, 100.0, 50.0)],
    )?;

    common::payslip_cmd(dir.path())
        .arg("employees.xlsx")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("A001,Alice,a@x.com,sent,"));

    assert!(dir.path().join("payslips/A001_payslip.pdf").is_file());
    Ok(())
}

#[test]
fn test_not_a_workbook_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("employees.xlsx");
    std::fs::write(&path, "this is not a zip archive")?;

    assert!(load_roster(&path).is_err());
    Ok(())
}
