use indexmap::IndexMap;
use tracing::debug;

use crate::analyzers::domain::distinct;
use crate::analyzers::rollup::rollup2;
use crate::analyzers::types::YearlyBrandCount;
use crate::record::DeviceRecord;

fn has_year_and_brand(r: &&DeviceRecord) -> bool {
    r.year.is_some() && r.phone_brand.is_some()
}

/// Counts distinct models per year and brand, pivoted to one row per year.
///
/// Years and brands appear in first-occurrence order. Every brand gets a
/// column in every year, `0` where the pair has no records. Rows missing a
/// year or a brand are left out, and so are missing model names.
pub fn yearly_model_counts(records: &[DeviceRecord]) -> Vec<YearlyBrandCount> {
    let keyed = || records.iter().filter(has_year_and_brand);

    let grouped = rollup2(
        keyed(),
        |r| r.year.as_deref().unwrap_or_default(),
        |r| r.phone_brand.as_deref().unwrap_or_default(),
        |group| distinct(group.iter().filter_map(|r| r.phone_model.as_ref()), String::as_str).len(),
    );

    let years = distinct(keyed(), |r| r.year.as_deref().unwrap_or_default());
    let brands = distinct(keyed(), |r| r.phone_brand.as_deref().unwrap_or_default());

    debug!(
        skipped = records.len() - keyed().count(),
        years = years.len(),
        brands = brands.len(),
        "Yearly model counts built"
    );

    years
        .iter()
        .map(|year| {
            let by_brand = grouped.get(year);
            let counts: IndexMap<String, usize> = brands
                .iter()
                .map(|brand| {
                    let count = by_brand
                        .and_then(|m| m.get(brand))
                        .copied()
                        .unwrap_or(0);
                    (brand.to_string(), count)
                })
                .collect();
            YearlyBrandCount {
                year: year.to_string(),
                counts,
            }
        })
        .collect()
}
