//! Run configuration.
//!
//! Mail settings come from the environment (a `.env` file is loaded first by
//! the binary). Sender identity and password have no defaults: a run without
//! them stops here, before the roster is opened or a connection is made.
//!
//! | Variable | Required | Default |
//! |----------|----------|---------|
//! | `SMTP_FROM` | yes | |
//! | `SMTP_PASSWORD` | yes | |
//! | `SMTP_USERNAME` | no | value of `SMTP_FROM` |
//! | `SMTP_HOST` | no | `smtp.gmail.com` |
//! | `SMTP_PORT` | no | `587` |
//! | `SMTP_TIMEOUT_SECS` | no | `10` |

use crate::error::{PayrollError, Result};
use lettre::message::Mailbox;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_OUTPUT_DIR: &str = "payslips";
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Connection and identity settings for the SMTP submission server.
#[derive(Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: Mailbox,
    pub timeout: Duration,
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from", &self.from.to_string())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SmtpSettings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key/value source. Blank values count as absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |key: &str| {
            get(key).ok_or_else(|| PayrollError::Config(format!("{key} is not set")))
        };

        let from_raw = require("SMTP_FROM")?;
        let password = require("SMTP_PASSWORD")?;

        let from = Mailbox::from_str(&from_raw).map_err(|e| {
            PayrollError::Config(format!("SMTP_FROM {from_raw:?} is not a valid address: {e}"))
        })?;
        let username = get("SMTP_USERNAME").unwrap_or_else(|| from.email.to_string());
        let host = get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());
        let port = parse_or("SMTP_PORT", get("SMTP_PORT"), DEFAULT_SMTP_PORT)?;
        let timeout_secs = parse_or("SMTP_TIMEOUT_SECS", get("SMTP_TIMEOUT_SECS"), DEFAULT_SMTP_TIMEOUT_SECS)?;

        Ok(Self {
            host,
            port,
            username,
            password,
            from,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> Result<T>
where
    T::Err: fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|e| PayrollError::Config(format!("{key} {raw:?} is invalid: {e}"))),
    }
}

/// Everything a run needs besides the mail settings.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub roster: PathBuf,
    pub output_dir: PathBuf,
    pub overrides: Option<PathBuf>,
    pub delay: Duration,
    pub dry_run: bool,
}
