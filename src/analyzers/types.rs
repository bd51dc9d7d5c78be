//! Output shapes of the aggregation pipeline.

use indexmap::IndexMap;
use serde::Serialize;

use crate::analyzers::os::Os;

/// Distinct model counts for one year, one column per brand.
///
/// Serializes wide: `{"year": "2020", "Apple": 1, "Samsung": 0}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyBrandCount {
    pub year: String,
    #[serde(flatten)]
    pub counts: IndexMap<String, usize>,
}

/// Mean `price` for a brand. `None` when none of its prices were numeric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandAveragePrice {
    pub phone_brand: String,
    pub average_price: Option<f64>,
}

/// Foldable and non-foldable record counts for one OS family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OsFoldableCounts {
    pub os: Os,
    #[serde(rename = "Yes")]
    pub yes: usize,
    #[serde(rename = "No")]
    pub no: usize,
}

/// Mean screen pixels and mean USD price for a brand, each over its own valid values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandPixelPriceAverage {
    pub phone_brand: String,
    pub avg_pixels: Option<f64>,
    pub avg_price_usd: Option<f64>,
}

/// The four views computed from one ingestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dashboard {
    pub rows: usize,
    pub yearly_models: Vec<YearlyBrandCount>,
    pub average_prices: Vec<BrandAveragePrice>,
    pub foldable_by_os: Vec<OsFoldableCounts>,
    pub pixels_vs_price: Vec<BrandPixelPriceAverage>,
}

impl Dashboard {
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}
