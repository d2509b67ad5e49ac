//! Roster audit command-line tool.
//!
//! Prints one line per violation to stdout. Logs and the skipped-row
//! summary go to stderr. Set `RUST_LOG=roster_audit=debug` for per-violation
//! logging.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use roster_audit::config::{AuditConfig, ConfigLoader, DayRule};
use roster_audit::error::AuditResult;
use roster_audit::run::AuditRun;

#[derive(Parser)]
#[command(name = "roster-audit")]
#[command(about = "Flag short rest, long shifts and long runs of consecutive days in a roster")]
#[command(version)]
struct Cli {
    /// Roster file: header line, then employee_id,employee_name,start_time,end_time
    input: PathBuf,

    /// YAML file with rule thresholds
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Report a run of exactly this many consecutive days
    #[arg(long)]
    consecutive_days: Option<u32>,

    /// Lower bound (exclusive) of the short-rest window, in hours
    #[arg(long)]
    min_rest_hours: Option<i64>,

    /// Upper bound (exclusive) of the short-rest window, in hours
    #[arg(long)]
    max_rest_hours: Option<i64>,

    /// Report shifts longer than this many whole hours
    #[arg(long)]
    max_shift_hours: Option<i64>,

    /// Judge consecutive days by calendar date instead of elapsed time
    #[arg(long)]
    calendar_days: bool,
}

impl Cli {
    /// Builds the effective configuration: file values, then flag overrides.
    fn resolve_config(&self) -> AuditResult<AuditConfig> {
        let mut config = match &self.config {
            Some(path) => *ConfigLoader::load(path)?.config(),
            None => AuditConfig::default(),
        };

        let thresholds = &mut config.thresholds;
        if let Some(days) = self.consecutive_days {
            thresholds.consecutive_days = days;
        }
        if let Some(hours) = self.min_rest_hours {
            thresholds.min_rest_hours = hours;
        }
        if let Some(hours) = self.max_rest_hours {
            thresholds.max_rest_hours = hours;
        }
        if let Some(hours) = self.max_shift_hours {
            thresholds.max_shift_hours = hours;
        }
        if self.calendar_days {
            thresholds.day_rule = DayRule::CalendarDate;
        }

        Ok(*ConfigLoader::from_config(config)?.config())
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "roster_audit=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = cli.resolve_config().and_then(|config| {
        AuditRun::new(config).execute(&cli.input, io::stdout().lock(), io::stderr().lock())
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Roster audit failed");
            ExitCode::FAILURE
        }
    }
}
