use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum PayrollError {
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(payroll::config),
        help("set SMTP_FROM and SMTP_PASSWORD in the environment or in a .env file")
    )]
    Config(String),

    #[error("Could not open roster {path}: {source}")]
    #[diagnostic(code(payroll::roster))]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Invalid roster: {0}")]
    #[diagnostic(code(payroll::roster))]
    InvalidRoster(String),

    #[error("Invalid deduction overrides: {0}")]
    #[diagnostic(code(payroll::overrides))]
    InvalidOverrides(String),

    #[error("Invalid amount {value:?}: {reason}")]
    #[diagnostic(code(payroll::amount))]
    InvalidAmount { value: String, reason: String },

    #[error("CSV error: {0}")]
    #[diagnostic(code(payroll::csv))]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(payroll::io))]
    Io(#[from] std::io::Error),

    #[error("Calculation error: {0}")]
    #[diagnostic(code(payroll::calculation))]
    Calculation(String),

    #[error("Render error: {0}")]
    #[diagnostic(code(payroll::render))]
    Render(String),

    #[error("Mail error: {0}")]
    #[diagnostic(code(payroll::mail))]
    Mail(String),
}

impl PayrollError {
    /// Process exit status for an error that aborted the run.
    ///
    /// Follows `sysexits.h`: `EX_CONFIG` for configuration problems and
    /// `EX_DATAERR` for anything wrong with the input files.
    pub fn exit_code(&self) -> u8 {
        match self {
            PayrollError::Config(_) => 78,
            PayrollError::Spreadsheet { .. }
            | PayrollError::InvalidRoster(_)
            | PayrollError::InvalidOverrides(_)
            | PayrollError::InvalidAmount { .. }
            | PayrollError::Csv(_)
            | PayrollError::Io(_) => 65,
            PayrollError::Calculation(_) | PayrollError::Render(_) | PayrollError::Mail(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PayrollError>;
