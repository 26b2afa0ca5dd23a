#![allow(dead_code)]

use assert_cmd::cargo_bin;
use std::error::Error;
use std::path::Path;
use std::process::Command;

pub const HEADER: [&str; 6] = ["EMPLOYEE ID", "NAME", "EMAIL", "BASIC PAY", "ALLOWANCE", "DEDUCTIONS"];

pub fn write_roster_csv(path: &Path, rows: &[[&str; 6]]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes an .xlsx roster with numeric amount cells, the way payroll staff type them.
pub fn write_roster_xlsx(path: &Path, rows: &[(&str, &str, &str, f64, f64, f64)]) -> Result<(), Box<dyn Error>> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Mixed-case, padded labels as they tend to appear in hand-made sheets.
    let labels = [" Employee ID", "Name ", "email", "Basic Pay", "ALLOWANCE", "deductions "];
    for (col, label) in labels.iter().enumerate() {
        worksheet.write_string(0, col as u16, *label)?;
    }
    for (i, (id, name, email, basic, allowance, deductions)) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, *id)?;
        worksheet.write_string(row, 1, *name)?;
        worksheet.write_string(row, 2, *email)?;
        worksheet.write_number(row, 3, *basic)?;
        worksheet.write_number(row, 4, *allowance)?;
        worksheet.write_number(row, 5, *deductions)?;
    }
    workbook.save(path)?;
    Ok(())
}

/// The binary, run inside `workdir` with valid mail settings and no real delay.
pub fn payslip_cmd(workdir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin!("payslip-mailer"));
    cmd.current_dir(workdir)
        .env("SMTP_FROM", "payroll@example.com")
        .env("SMTP_PASSWORD", "app-password")
        .env("PAYSLIP_DELAY_MS", "0")
        .env_remove("PAYSLIP_OUTPUT_DIR")
        .env_remove("PAYSLIP_OVERRIDES")
        .env_remove("RUST_LOG");
    cmd
}

/// True when a rendered PDF draws `text`; printpdf writes builtin-font text as hex strings.
pub fn pdf_shows(pdf: &[u8], text: &str) -> bool {
    let hex: String = text.bytes().map(|b| format!("{b:02X}")).collect();
    let needle = format!("<{hex}>");
    pdf.windows(needle.len()).any(|window| window == needle.as_bytes())
}

pub fn alice_and_bob() -> [[&'static str; 6]; 2] {
    [
        ["A001", "Alice", "a@x.com", "1000.00", "100.00", "50.00"],
        ["B002", "Bob", "b@x.com", "2500.50", "0", "120.25"],
    ]
}
