//! Whitespace normalization of raw rows.

use tracing::debug;

use crate::parser::RawRow;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Trims leading and trailing whitespace from every key and value.
///
/// Header names also lose a leading byte-order mark. Absent keys stay absent;
/// nothing is validated here, missing fields are dealt with by the aggregators.
pub fn normalize(rows: Vec<RawRow>) -> Vec<RawRow> {
    let normalized: Vec<RawRow> = rows.into_iter().map(normalize_row).collect();
    debug!(rows = normalized.len(), "Rows normalized");
    normalized
}

fn normalize_row(row: RawRow) -> RawRow {
    row.into_iter()
        .map(|(key, value)| {
            let key = key.trim_start_matches(BYTE_ORDER_MARK).trim().to_string();
            (key, value.trim().to_string())
        })
        .collect()
}
