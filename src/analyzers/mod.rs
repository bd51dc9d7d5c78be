//! Device-table aggregation.
//!
//! This module groups device records with a small rollup engine and shapes
//! the results into the four views the charts consume: distinct models per
//! year and brand, average price per brand, foldable counts per OS, and
//! screen pixels against USD price per brand.

pub mod analyzer;
pub mod domain;
pub mod foldable;
pub mod os;
pub mod pixels;
pub mod price;
pub mod rollup;
pub mod types;
pub mod utility;
pub mod yearly;

pub use analyzer::{DashboardState, build_dashboard};
pub use types::Dashboard;
