//! Output formatting and persistence for dashboards.
//!
//! Supports pretty-printing, a JSON report file, and one CSV file per view.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::Writer;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analyzers::Dashboard;
use crate::analyzers::types::YearlyBrandCount;

/// A dashboard with the ingestion metadata that is not part of the views.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub source: &'a str,
    #[serde(flatten)]
    pub dashboard: &'a Dashboard,
}

impl<'a> Report<'a> {
    pub fn new(source: &'a str, dashboard: &'a Dashboard) -> Self {
        Self {
            generated_at: Utc::now(),
            source,
            dashboard,
        }
    }
}

/// Logs a dashboard using Rust's debug pretty-print format.
pub fn print_pretty(dashboard: &Dashboard) {
    debug!("{:#?}", dashboard);
}

/// Logs a dashboard as pretty-printed JSON.
pub fn print_json(dashboard: &Dashboard) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(dashboard)?);
    Ok(())
}

/// Writes `report` as JSON to `path`, replacing any previous file in one step.
///
/// The JSON goes to a sibling temp file first and is renamed over `path`, so
/// readers never see a half-written report.
pub fn write_report(path: &Path, report: &Report<'_>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, serde_json::to_vec_pretty(report)?)?;
    fs::rename(&tmp, path)?;

    debug!(path = %path.display(), "Report written");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes each view of `dashboard` to its own CSV file inside `dir`.
///
/// Returns the paths written, in view order.
pub fn write_views_csv(dir: &Path, dashboard: &Dashboard) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let paths = vec![
        dir.join("yearly_models.csv"),
        dir.join("average_prices.csv"),
        dir.join("foldable_by_os.csv"),
        dir.join("pixels_vs_price.csv"),
    ];

    write_yearly_csv(&paths[0], &dashboard.yearly_models)?;
    write_rows_csv(&paths[1], &dashboard.average_prices)?;
    write_rows_csv(&paths[2], &dashboard.foldable_by_os)?;
    write_rows_csv(&paths[3], &dashboard.pixels_vs_price)?;

    info!(dir = %dir.display(), files = paths.len(), "View CSVs written");
    Ok(paths)
}

fn write_rows_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// The yearly view is pivoted: `year` then one column per brand.
fn write_yearly_csv(path: &Path, rows: &[YearlyBrandCount]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;

    if let Some(first) = rows.first() {
        let header = std::iter::once("year").chain(first.counts.keys().map(String::as_str));
        writer.write_record(header)?;
    }

    for row in rows {
        let counts = row.counts.values().map(|c| c.to_string());
        writer.write_record(std::iter::once(row.year.clone()).chain(counts))?;
    }

    writer.flush()?;
    Ok(())
}
