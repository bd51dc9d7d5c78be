use tracing::debug;

use crate::analyzers::rollup::rollup;
use crate::analyzers::types::BrandPixelPriceAverage;
use crate::analyzers::utility::{coerce_number, mean, resolution_pixels};
use crate::record::DeviceRecord;

/// Mean screen pixel count and mean `price_USD` per brand.
///
/// The two means are independent: a record with an unparsable resolution
/// still counts towards the price mean, and the other way round.
pub fn pixels_vs_price(records: &[DeviceRecord]) -> Vec<BrandPixelPriceAverage> {
    let by_brand = rollup(
        records.iter().filter(|r| r.phone_brand.is_some()),
        |r| r.phone_brand.as_deref().unwrap_or_default(),
        |group| {
            let avg_pixels = mean(
                group
                    .iter()
                    .filter_map(|r| resolution_pixels(r.display_resolution.as_deref()))
                    .map(|px| px as f64),
            );
            let avg_price_usd = mean(
                group
                    .iter()
                    .filter_map(|r| coerce_number(r.price_usd.as_deref())),
            );
            (avg_pixels, avg_price_usd)
        },
    );

    debug!(
        brands = by_brand.len(),
        bad_resolutions = records
            .iter()
            .filter(|r| resolution_pixels(r.display_resolution.as_deref()).is_none())
            .count(),
        "Pixel and price averages built"
    );

    by_brand
        .into_iter()
        .map(|(brand, (avg_pixels, avg_price_usd))| BrandPixelPriceAverage {
            phone_brand: brand.to_string(),
            avg_pixels,
            avg_price_usd,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(brand: &str, resolution: &str, usd: &str) -> DeviceRecord {
        DeviceRecord {
            phone_brand: Some(brand.to_string()),
            display_resolution: Some(resolution.to_string()),
            price_usd: Some(usd.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_pixels_single_resolution() {
        let rows = pixels_vs_price(&[screen("OnePlus", "1080x2340", "699")]);
        assert_eq!(
            rows,
            vec![BrandPixelPriceAverage {
                phone_brand: "OnePlus".to_string(),
                avg_pixels: Some(2_527_200.0),
                avg_price_usd: Some(699.0),
            }]
        );
    }

    #[test]
    fn test_pixels_and_price_means_are_independent() {
        let records = vec![
            screen("Xiaomi", "1000x2000", "n/a"),
            screen("Xiaomi", "n/a", "300"),
            screen("Xiaomi", "1000x1000", "500"),
        ];
        let rows = pixels_vs_price(&records);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].avg_pixels, Some(1_500_000.0));
        assert_eq!(rows[0].avg_price_usd, Some(400.0));
    }

    #[test]
    fn test_pixels_brand_without_valid_values() {
        let mut record = screen("Nokia", "unknown", "");
        record.display_resolution = None;
        let rows = pixels_vs_price(&[record]);

        assert_eq!(rows[0].avg_pixels, None);
        assert_eq!(rows[0].avg_price_usd, None);
    }

    #[test]
    fn test_pixels_first_occurrence_order() {
        let records = vec![
            screen("Sony", "1644x3840", "1399"),
            screen("Apple", "1170x2532", "999"),
            screen("Sony", "1080x2520", "899"),
        ];
        let brands: Vec<_> = pixels_vs_price(&records)
            .into_iter()
            .map(|r| r.phone_brand)
            .collect();
        assert_eq!(brands, vec!["Sony", "Apple"]);
    }
}
