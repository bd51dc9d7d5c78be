use tracing::info;

use crate::analyzers::foldable::foldable_by_os;
use crate::analyzers::pixels::pixels_vs_price;
use crate::analyzers::price::average_prices;
use crate::analyzers::types::Dashboard;
use crate::analyzers::yearly::yearly_model_counts;
use crate::config::SourceOptions;
use crate::error::Result;
use crate::normalize::normalize;
use crate::parser::parse_table;
use crate::record::{DeviceRecord, to_records};

impl Dashboard {
    /// Builds all four views from the same records.
    ///
    /// No records gives four empty views, not an error.
    pub fn from_records(records: &[DeviceRecord]) -> Self {
        Dashboard {
            rows: records.len(),
            yearly_models: yearly_model_counts(records),
            average_prices: average_prices(records),
            foldable_by_os: foldable_by_os(records),
            pixels_vs_price: pixels_vs_price(records),
        }
    }
}

/// Parses, normalizes and aggregates a whole device table.
///
/// # Errors
///
/// Fails only when the table itself is missing or unreadable. Bad cells are
/// dropped from the view they would have fed.
#[tracing::instrument(skip_all, fields(bytes = text.len()))]
pub fn build_dashboard(text: &str, options: &SourceOptions) -> Result<Dashboard> {
    let rows = normalize(parse_table(text, options.delimiter)?);
    let records = to_records(&rows, &options.columns);
    let dashboard = Dashboard::from_records(&records);

    info!(
        rows = dashboard.rows,
        years = dashboard.yearly_models.len(),
        brands = dashboard.average_prices.len(),
        "Dashboard built"
    );

    Ok(dashboard)
}

/// Holds the dashboard from the latest successful ingestion.
///
/// Each ingestion rebuilds every view from scratch; a failed one leaves the
/// previous dashboard untouched.
#[derive(Debug, Default)]
pub struct DashboardState {
    current: Dashboard,
    ingestions: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held dashboard with one built from `text`.
    pub fn ingest(&mut self, text: &str, options: &SourceOptions) -> Result<&Dashboard> {
        let dashboard = build_dashboard(text, options)?;
        self.current = dashboard;
        self.ingestions += 1;
        Ok(&self.current)
    }

    pub fn current(&self) -> &Dashboard {
        &self.current
    }

    /// Number of successful ingestions so far.
    pub fn ingestions(&self) -> u64 {
        self.ingestions
    }
}
