//! Typed view over a normalized row.

use crate::config::ColumnMap;
use crate::parser::RawRow;

/// The fields the aggregators read from a device table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    PhoneBrand,
    PhoneModel,
    Price,
    PriceUsd,
    DisplayResolution,
    Foldable,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Year,
        Field::PhoneBrand,
        Field::PhoneModel,
        Field::Price,
        Field::PriceUsd,
        Field::DisplayResolution,
        Field::Foldable,
    ];

    /// Header name used by the canonical table layout.
    pub fn canonical(self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::PhoneBrand => "phone_brand",
            Field::PhoneModel => "phone_model",
            Field::Price => "price",
            Field::PriceUsd => "price_USD",
            Field::DisplayResolution => "display_resolution",
            Field::Foldable => "foldable",
        }
    }

    pub fn from_canonical(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.canonical() == name)
    }
}

/// One device row. Every field is `None` when its column is missing from the row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceRecord {
    pub year: Option<String>,
    pub phone_brand: Option<String>,
    pub phone_model: Option<String>,
    pub price: Option<String>,
    pub price_usd: Option<String>,
    pub display_resolution: Option<String>,
    pub foldable: Option<String>,
}

impl DeviceRecord {
    /// Picks the device fields out of a normalized row using `columns`.
    pub fn from_row(row: &RawRow, columns: &ColumnMap) -> Self {
        let get = |field: Field| {
            columns
                .headers(field)
                .iter()
                .find_map(|header| row.get(header))
                .cloned()
        };

        DeviceRecord {
            year: get(Field::Year),
            phone_brand: get(Field::PhoneBrand),
            phone_model: get(Field::PhoneModel),
            price: get(Field::Price),
            price_usd: get(Field::PriceUsd),
            display_resolution: get(Field::DisplayResolution),
            foldable: get(Field::Foldable),
        }
    }

    /// Returns the raw text of `field`, if present.
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Year => &self.year,
            Field::PhoneBrand => &self.phone_brand,
            Field::PhoneModel => &self.phone_model,
            Field::Price => &self.price,
            Field::PriceUsd => &self.price_usd,
            Field::DisplayResolution => &self.display_resolution,
            Field::Foldable => &self.foldable,
        };
        value.as_deref()
    }
}

/// Converts normalized rows into device records.
pub fn to_records(rows: &[RawRow], columns: &ColumnMap) -> Vec<DeviceRecord> {
    rows.iter()
        .map(|row| DeviceRecord::from_row(row, columns))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_row_canonical_headers() {
        let r = row(&[
            ("year", "2022"),
            ("phone_brand", "Samsung"),
            ("phone_model", "Galaxy Z Fold4"),
            ("price", "150000"),
            ("price_USD", "1799"),
            ("display_resolution", "1812x2176"),
            ("foldable", "1"),
        ]);
        let rec = DeviceRecord::from_row(&r, &ColumnMap::default());

        assert_eq!(rec.year.as_deref(), Some("2022"));
        assert_eq!(rec.phone_brand.as_deref(), Some("Samsung"));
        assert_eq!(rec.price_usd.as_deref(), Some("1799"));
        assert_eq!(rec.foldable.as_deref(), Some("1"));
    }

    #[test]
    fn test_from_row_legacy_headers() {
        let r = row(&[
            ("Year", "2019"),
            ("Display_Resolution", "828x1792"),
            ("Foldable", "0"),
        ]);
        let rec = DeviceRecord::from_row(&r, &ColumnMap::default());

        assert_eq!(rec.year.as_deref(), Some("2019"));
        assert_eq!(rec.display_resolution.as_deref(), Some("828x1792"));
        assert_eq!(rec.foldable.as_deref(), Some("0"));
    }

    #[test]
    fn test_canonical_header_wins_over_legacy() {
        let r = row(&[("Year", "2019"), ("year", "2020")]);
        let rec = DeviceRecord::from_row(&r, &ColumnMap::default());
        assert_eq!(rec.year.as_deref(), Some("2020"));
    }

    #[test]
    fn test_missing_columns_are_none() {
        let rec = DeviceRecord::from_row(&row(&[("phone_brand", "")]), &ColumnMap::default());
        assert_eq!(rec.phone_brand.as_deref(), Some(""));
        assert!(rec.year.is_none());
        assert!(rec.get(Field::Price).is_none());
    }

    #[test]
    fn test_field_canonical_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_canonical(field.canonical()), Some(field));
        }
        assert_eq!(Field::from_canonical("Year"), None);
    }
}
