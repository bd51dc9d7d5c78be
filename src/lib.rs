//! Aggregation pipeline for mobile-device tables.
//!
//! A table of phones (brand, model, year, price, resolution, foldability)
//! is parsed, trimmed and rolled up into four chart-ready views. See
//! [`analyzers::build_dashboard`] for the one-call entry point.

pub mod analyzers;
pub mod config;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod record;

pub use analyzers::{Dashboard, DashboardState, build_dashboard};
pub use config::{ColumnMap, SourceOptions};
pub use error::IngestError;
