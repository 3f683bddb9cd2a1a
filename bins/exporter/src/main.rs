//! Vouchdesk report exporter
//!
//! Loads a voucher snapshot, applies the session user's access scope and the
//! requested selection, and writes the voucher report.
//!
//! Usage: cargo run --bin vouchdesk-export -- --input snapshot.json --sort date

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::Parser;
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use vouchdesk_core::access::User;
use vouchdesk_core::dashboard::VoucherDashboard;
use vouchdesk_core::reports::{ReportError, ReportFormat, ReportService};
use vouchdesk_core::voucher::{FilterSelection, Outlet, OutletSelection, SortKey, Voucher};
use vouchdesk_shared::config::LoggingConfig;
use vouchdesk_shared::{AppConfig, AppError, AppResult};

/// Export the voucher table visible to a user as a CSV report.
#[derive(Debug, Parser)]
#[command(name = "vouchdesk-export", version, about)]
struct Cli {
    /// Snapshot JSON with `user`, `outlets`, and `vouchers`.
    #[arg(short, long)]
    input: PathBuf,

    /// Outlet ID to export, or `all`.
    #[arg(long, default_value = "all")]
    outlet: String,

    /// Row order: outlet, date, or month.
    #[arg(long, default_value_t = SortKey::Month)]
    sort: SortKey,

    /// Directory to write the report to (overrides `report.output_dir`).
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Date stamped into the file name (defaults to today, UTC).
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print a percent-encoded data URI instead of writing a file.
    #[arg(long)]
    data_uri: bool,
}

/// Data supplied by the external data layer.
#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    outlets: Vec<Outlet>,
    #[serde(default)]
    vouchers: Vec<Voucher>,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    let timezone = config.report.timezone()?;
    let format = ReportFormat::new(
        timezone,
        &config.report.date_format,
        &config.report.datetime_format,
    )?;

    let snapshot = load_snapshot(&cli.input)
        .with_context(|| format!("failed to load snapshot {}", cli.input.display()))?;
    info!(
        outlets = snapshot.outlets.len(),
        vouchers = snapshot.vouchers.len(),
        "loaded snapshot"
    );

    let dashboard =
        VoucherDashboard::new(snapshot.user.as_ref(), snapshot.outlets, snapshot.vouchers)
            .with_timezone(timezone);

    let outlet = match OutletSelection::from_param(&cli.outlet) {
        OutletSelection::All => OutletSelection::All,
        requested => dashboard.selector().select(&requested).ok_or_else(|| {
            AppError::NotFound(format!("outlet {} is not available to this user", cli.outlet))
        })?,
    };

    let table = dashboard.view(&FilterSelection::new(outlet, cli.sort));
    info!(tier = %dashboard.scope().tier, rows = table.len(), sort = %cli.sort, "built voucher table");

    let today = cli.today.unwrap_or_else(|| Utc::now().date_naive());
    let report = match table.export(&ReportService::new(format), today) {
        Ok(report) => report,
        Err(ReportError::NoData) => {
            println!("{}", ReportError::NoData);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if cli.data_uri {
        println!("{}", report.data_uri());
        return Ok(());
    }

    let dir = cli
        .out_dir
        .unwrap_or_else(|| PathBuf::from(&config.report.output_dir));
    let path = dir.join(&report.filename);
    std::fs::write(&path, &report.content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "report written");
    println!("{}", path.display());

    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured filter.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn load_snapshot(path: &Path) -> AppResult<Snapshot> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| AppError::InvalidInput(err.to_string()))
}
