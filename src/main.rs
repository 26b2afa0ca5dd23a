use clap::Parser;
use payslip_mailer::application::dispatcher::Dispatcher;
use payslip_mailer::application::payroll::PayrollRun;
use payslip_mailer::config::{DEFAULT_DELAY_MS, DEFAULT_OUTPUT_DIR, RunOptions, SmtpSettings};
use payslip_mailer::domain::overrides::DeductionOverrides;
use payslip_mailer::domain::ports::MailerBox;
use payslip_mailer::error::Result;
use payslip_mailer::infrastructure::in_memory::InMemoryMailer;
use payslip_mailer::infrastructure::pdf::PdfPayslipRenderer;
use payslip_mailer::infrastructure::smtp::SmtpMailer;
use payslip_mailer::interfaces::csv::override_reader::load_overrides;
use payslip_mailer::interfaces::csv::report_writer::ReportWriter;
use payslip_mailer::interfaces::roster::load_roster;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Render a PDF payslip for every employee on a roster and email it to them.
///
/// Mail settings are read from the environment or a `.env` file:
/// SMTP_FROM and SMTP_PASSWORD (required), SMTP_USERNAME, SMTP_HOST, SMTP_PORT,
/// SMTP_TIMEOUT_SECS.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Roster spreadsheet (.xlsx, .xlsm, .xlsb, .xls, .ods or .csv)
    roster: PathBuf,

    /// Directory the payslip PDFs are written to
    #[arg(long, env = "PAYSLIP_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// CSV with `employee id` and `deductions` columns that replace roster deductions
    #[arg(long, env = "PAYSLIP_OVERRIDES")]
    overrides: Option<PathBuf>,

    /// Pause between two employees, in milliseconds
    #[arg(long, env = "PAYSLIP_DELAY_MS", default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,

    /// Render payslips but keep the emails in memory instead of sending them
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn into_options(self) -> RunOptions {
        RunOptions {
            roster: self.roster,
            output_dir: self.output_dir,
            overrides: self.overrides,
            delay: Duration::from_millis(self.delay_ms),
            dry_run: self.dry_run,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();

    match run(cli.into_options()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::from(code)
        }
    }
}

async fn run(options: RunOptions) -> Result<()> {
    // Configuration is checked before the roster is opened or anything is rendered.
    let settings = SmtpSettings::from_env()?;
    let mailer: MailerBox = if options.dry_run {
        tracing::warn!("dry run: payslips are rendered but no email is sent");
        Box::new(InMemoryMailer::new())
    } else {
        Box::new(SmtpMailer::new(&settings)?)
    };
    tracing::info!(sender = %settings.from, host = %settings.host, port = settings.port, "mail settings loaded");

    let overrides = match &options.overrides {
        Some(path) => load_overrides(path)?,
        None => DeductionOverrides::new(),
    };
    let roster = load_roster(&options.roster)?;

    let run = PayrollRun::new(
        Box::new(PdfPayslipRenderer::new(&options.output_dir)),
        Dispatcher::new(mailer),
    )
    .with_overrides(overrides)
    .with_delay(options.delay);

    let report = run.run(&roster).await;

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    writer.write_report(&report)?;

    Ok(())
}
