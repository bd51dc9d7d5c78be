use std::cmp::Ordering;
use tracing::debug;

use crate::analyzers::rollup::rollup;
use crate::analyzers::types::BrandAveragePrice;
use crate::analyzers::utility::{coerce_number, mean};
use crate::record::DeviceRecord;

/// Mean `price` per brand, highest first.
///
/// Non-numeric prices are left out of both sum and count. A brand with no
/// numeric price keeps its row with `average_price: None` and sorts after
/// every priced brand. Ties keep first-occurrence order.
pub fn average_prices(records: &[DeviceRecord]) -> Vec<BrandAveragePrice> {
    let by_brand = rollup(
        records.iter().filter(|r| r.phone_brand.is_some()),
        |r| r.phone_brand.as_deref().unwrap_or_default(),
        |group| mean(group.iter().filter_map(|r| coerce_number(r.price.as_deref()))),
    );

    let mut averages: Vec<BrandAveragePrice> = by_brand
        .into_iter()
        .map(|(brand, average_price)| BrandAveragePrice {
            phone_brand: brand.to_string(),
            average_price,
        })
        .collect();

    averages.sort_by(|a, b| descending(a.average_price, b.average_price));

    debug!(
        brands = averages.len(),
        unpriced = records
            .iter()
            .filter(|r| coerce_number(r.price.as_deref()).is_none())
            .count(),
        "Average prices built"
    );

    averages
}

fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
