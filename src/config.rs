//! Source options and header mapping.

use std::collections::HashMap;

use crate::error::{IngestError, Result};
use crate::record::Field;

/// Header names tried for each field, first match wins.
///
/// The default map accepts the canonical names plus the capitalized headers
/// the public phone dataset ships with. An override file is a plain JSON
/// object from canonical field name to header name:
/// ```json
/// {
///   "year": "Release Year",
///   "price_USD": "usd"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ColumnMap {
    entries: HashMap<Field, Vec<String>>,
}

impl Default for ColumnMap {
    fn default() -> Self {
        let entries = Field::ALL
            .into_iter()
            .map(|field| {
                let mut headers = vec![field.canonical().to_string()];
                if let Some(legacy) = legacy_header(field) {
                    headers.push(legacy.to_string());
                }
                (field, headers)
            })
            .collect();
        Self { entries }
    }
}

fn legacy_header(field: Field) -> Option<&'static str> {
    match field {
        Field::Year => Some("Year"),
        Field::DisplayResolution => Some("Display_Resolution"),
        Field::Foldable => Some("Foldable"),
        _ => None,
    }
}

impl ColumnMap {
    /// Loads overrides from a JSON file at `path` on top of the defaults.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses overrides from JSON text on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::ColumnMap`] for malformed JSON or a key that is
    /// not a canonical field name.
    pub fn from_json(content: &str) -> Result<Self> {
        let overrides: HashMap<String, String> =
            serde_json::from_str(content).map_err(|e| IngestError::ColumnMap(e.to_string()))?;

        let mut map = Self::default();
        for (name, header) in overrides {
            let field = Field::from_canonical(&name)
                .ok_or_else(|| IngestError::ColumnMap(format!("unknown field `{name}`")))?;
            map.entries.insert(field, vec![header]);
        }
        Ok(map)
    }

    /// Returns the header candidates for `field`.
    pub fn headers(&self, field: Field) -> &[String] {
        self.entries.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// How a source table is read.
#[derive(Debug, Clone)]
pub struct SourceOptions {
    pub delimiter: u8,
    pub columns: ColumnMap,
    /// Bearer token sent with `http(s)` sources.
    pub api_key: Option<String>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            columns: ColumnMap::default(),
            api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map_has_canonical_first() {
        let map = ColumnMap::default();
        assert_eq!(map.headers(Field::Year), ["year", "Year"]);
        assert_eq!(map.headers(Field::PhoneBrand), ["phone_brand"]);
    }

    #[test]
    fn test_override_replaces_candidates() {
        let map = ColumnMap::from_json(r#"{"price_USD": "usd"}"#).unwrap();
        assert_eq!(map.headers(Field::PriceUsd), ["usd"]);
        assert_eq!(map.headers(Field::Price), ["price"]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = ColumnMap::from_json(r#"{"colour": "Color"}"#);
        assert!(matches!(result, Err(IngestError::ColumnMap(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(ColumnMap::from_json("not json").is_err());
    }

    #[test]
    fn test_default_source_options() {
        let opts = SourceOptions::default();
        assert_eq!(opts.delimiter, b',');
        assert!(opts.api_key.is_none());
    }
}
