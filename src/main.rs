use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use vitalboard::{build_dashboard, DashboardConfig, UploadEvent};

/// Run the dashboard pipeline over one file as if it had just been
/// uploaded, and print the resulting payload as JSON.
#[derive(Parser)]
#[command(author, version, about = "Physiological dashboard ingestion pipeline")]
struct Args {
    /// Tabular file to ingest (.csv, .xls or .xlsx)
    input: PathBuf,

    /// Pretty-print the JSON payload
    #[arg(long)]
    pretty: bool,

    /// Rows to include in the table preview
    #[arg(long, default_value_t = 10)]
    preview_rows: usize,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = Args::parse();

    let bytes = fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let filename = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .context("input path has no filename")?;
    info!(filename, bytes = bytes.len(), "simulating upload");

    let event = UploadEvent::from_bytes(&filename, guess_mime(&args.input), &bytes);

    let config = DashboardConfig {
        preview_rows: args.preview_rows,
        ..DashboardConfig::default()
    };
    let response = build_dashboard(Some(&event), &config);

    // A Failed response is dashboard content, not a process error.
    let json = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{json}");

    Ok(())
}

fn guess_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .as_deref()
    {
        Some("csv") => "text/csv",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("xls") => "application/vnd.ms-excel",
        _ => "application/octet-stream",
    }
}
