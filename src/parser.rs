//! Delimited-text parser for device tables.

use csv::ReaderBuilder;
use indexmap::IndexMap;

use crate::error::{IngestError, Result};

/// One parsed row: header name to cell text, in header order.
///
/// A header with no matching cell (short row) has no entry at all.
pub type RawRow = IndexMap<String, String>;

/// Parses a delimited table with a header row into raw rows.
///
/// Cells are kept verbatim; trimming is left to [`crate::normalize`].
///
/// # Errors
///
/// Returns [`IngestError::MissingHeader`] if the text has no header row, or
/// [`IngestError::Csv`] if the reader cannot make sense of the input.
pub fn parse_table(text: &str, delimiter: u8) -> Result<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.clone();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(IngestError::MissingHeader);
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_text_is_missing_header() {
        let result = parse_table("", b',');
        assert!(matches!(result, Err(IngestError::MissingHeader)));
    }

    #[test]
    fn test_parse_header_only_gives_no_rows() {
        let rows = parse_table("year,phone_brand\n", b',').unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_parse_keeps_whitespace() {
        let rows = parse_table(" year ,phone_brand\n 2020 , Apple\n", b',').unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get(" year ").map(String::as_str), Some(" 2020 "));
        assert_eq!(rows[0].get("phone_brand").map(String::as_str), Some(" Apple"));
    }

    #[test]
    fn test_parse_short_row_leaves_fields_absent() {
        let rows = parse_table("year,phone_brand,price\n2020,Apple\n", b',').unwrap();
        assert_eq!(rows[0].len(), 2);
        assert!(rows[0].get("price").is_none());
    }

    #[test]
    fn test_parse_long_row_ignores_extra_cells() {
        let rows = parse_table("year,phone_brand\n2020,Apple,extra\n", b',').unwrap();
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn test_parse_custom_delimiter() {
        let rows = parse_table("year;price\n2021;999\n", b';').unwrap();
        assert_eq!(rows[0].get("price").map(String::as_str), Some("999"));
    }

    #[test]
    fn test_parse_keeps_header_order() {
        let rows = parse_table("price,year,phone_brand\n1,2,3\n", b',').unwrap();
        let keys: Vec<_> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["price", "year", "phone_brand"]);
    }
}
